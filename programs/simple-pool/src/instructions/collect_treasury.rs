// Collect Treasury Instruction
//
// Moves accrued protocol fees to the pool admin. Only the admin recorded at
// creation can collect. A zero amount leaves that side untouched.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::*,
    errors::*,
    events::*,
    helpers::transfer_from_pool,
    pool_signer_seeds,
    state::*,
};

#[derive(Accounts)]
pub struct CollectTreasury<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [
            pool.mint_a.as_ref(),
            pool.mint_b.as_ref(),
            pool.admin.as_ref(),
            &pool.fee_rate_bp.to_le_bytes(),
        ],
        bump = pool.bumps.pool,
        has_one = admin @ AmmError::InvalidPoolAccount,
        has_one = mint_a @ AmmError::InvalidPoolAccount,
        has_one = mint_b @ AmmError::InvalidPoolAccount,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [
            mint_a.key().as_ref(),
            pool.key().as_ref(),
            TREASURY_SEED,
            admin.key().as_ref(),
        ],
        bump = pool.bumps.treasury_a,
    )]
    pub treasury_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [
            mint_b.key().as_ref(),
            pool.key().as_ref(),
            TREASURY_SEED,
            admin.key().as_ref(),
        ],
        bump = pool.bumps.treasury_b,
    )]
    pub treasury_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = mint_a,
        associated_token::authority = admin,
    )]
    pub admin_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = mint_b,
        associated_token::authority = admin,
    )]
    pub admin_token_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CollectTreasury<'info> {
    pub fn collect_treasury(&mut self, amount_a: u64, amount_b: u64) -> Result<()> {
        require!(
            amount_a <= self.treasury_a.amount,
            AmmError::InsufficientTreasuryBalance
        );
        require!(
            amount_b <= self.treasury_b.amount,
            AmmError::InsufficientTreasuryBalance
        );

        let token_program = self.token_program.to_account_info();
        let pool = self.pool.to_account_info();
        let fee = self.pool.fee_seed();
        let pool_seeds = pool_signer_seeds!(self.pool, fee);

        if amount_a > 0 {
            transfer_from_pool(
                amount_a,
                &token_program,
                &self.treasury_a.to_account_info(),
                &self.admin_token_a.to_account_info(),
                &pool,
                pool_seeds,
            )?;
        }
        if amount_b > 0 {
            transfer_from_pool(
                amount_b,
                &token_program,
                &self.treasury_b.to_account_info(),
                &self.admin_token_b.to_account_info(),
                &pool,
                pool_seeds,
            )?;
        }

        msg!("Treasury collected: {} A, {} B", amount_a, amount_b);

        emit!(TreasuryCollected {
            pool: self.pool.key(),
            admin: self.admin.key(),
            amount_a,
            amount_b,
        });

        Ok(())
    }
}
