// Withdraw Liquidity Instruction
//
// Burns LP tokens and returns the proportional share of both reserves.
// A full withdrawal drains the vaults but keeps the pool addressable.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::*,
    curve::quote_withdraw,
    errors::*,
    events::*,
    helpers::{burn_lp_tokens, transfer_from_pool},
    pool_signer_seeds,
    state::*,
};

#[derive(Accounts)]
pub struct WithdrawLiquidity<'info> {
    #[account(mut)]
    pub withdrawer: Signer<'info>,

    #[account(
        seeds = [
            pool.mint_a.as_ref(),
            pool.mint_b.as_ref(),
            pool.admin.as_ref(),
            &pool.fee_rate_bp.to_le_bytes(),
        ],
        bump = pool.bumps.pool,
        has_one = mint_a @ AmmError::InvalidPoolAccount,
        has_one = mint_b @ AmmError::InvalidPoolAccount,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [LIQUIDITY_SEED, pool.key().as_ref()],
        bump = pool.bumps.lp_mint,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [mint_a.key().as_ref(), pool.key().as_ref()],
        bump = pool.bumps.vault_a,
    )]
    pub vault_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [mint_b.key().as_ref(), pool.key().as_ref()],
        bump = pool.bumps.vault_b,
    )]
    pub vault_b: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = lp_mint,
        token::authority = withdrawer,
    )]
    pub withdrawer_lp_token: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = withdrawer,
        associated_token::mint = mint_a,
        associated_token::authority = withdrawer,
    )]
    pub withdrawer_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = withdrawer,
        associated_token::mint = mint_b,
        associated_token::authority = withdrawer,
    )]
    pub withdrawer_token_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawLiquidity<'info> {
    pub fn withdraw_liquidity(
        &mut self,
        lp_amount: u64,
        min_amount_a: u64,
        min_amount_b: u64,
    ) -> Result<()> {
        require!(
            self.withdrawer_lp_token.amount >= lp_amount,
            AmmError::InsufficientLiquidityBalance
        );

        let quote = quote_withdraw(
            lp_amount,
            self.vault_a.amount,
            self.vault_b.amount,
            self.lp_mint.supply,
            min_amount_a,
            min_amount_b,
        )?;

        let token_program = self.token_program.to_account_info();
        let pool = self.pool.to_account_info();

        burn_lp_tokens(
            lp_amount,
            &token_program,
            &self.lp_mint.to_account_info(),
            &self.withdrawer_lp_token.to_account_info(),
            &self.withdrawer.to_account_info(),
        )?;

        let fee = self.pool.fee_seed();
        let pool_seeds = pool_signer_seeds!(self.pool, fee);

        if quote.amount_a > 0 {
            transfer_from_pool(
                quote.amount_a,
                &token_program,
                &self.vault_a.to_account_info(),
                &self.withdrawer_token_a.to_account_info(),
                &pool,
                pool_seeds,
            )?;
        }
        if quote.amount_b > 0 {
            transfer_from_pool(
                quote.amount_b,
                &token_program,
                &self.vault_b.to_account_info(),
                &self.withdrawer_token_b.to_account_info(),
                &pool,
                pool_seeds,
            )?;
        }

        msg!(
            "Withdrawn: {} LP -> {} A, {} B",
            lp_amount,
            quote.amount_a,
            quote.amount_b
        );

        emit!(LiquidityWithdrawn {
            pool: self.pool.key(),
            withdrawer: self.withdrawer.key(),
            lp_burned: lp_amount,
            amount_a: quote.amount_a,
            amount_b: quote.amount_b,
        });

        Ok(())
    }
}
