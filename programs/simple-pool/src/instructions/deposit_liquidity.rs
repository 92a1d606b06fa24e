// Deposit Liquidity Instruction
//
// Adds liquidity to the pool and mints LP tokens.
// Seed deposit: LP = sqrt(a * b), amounts taken verbatim
// Subsequent: amounts matched to the pool ratio, LP proportional to supply

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::*,
    curve::quote_deposit,
    errors::*,
    events::*,
    helpers::{mint_lp_tokens, transfer_tokens},
    pool_signer_seeds,
    state::*,
};

#[derive(Accounts)]
pub struct DepositLiquidity<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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
        token::mint = mint_a,
        token::authority = depositor,
    )]
    pub depositor_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_b,
        token::authority = depositor,
    )]
    pub depositor_token_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = lp_mint,
        associated_token::authority = depositor,
    )]
    pub depositor_lp_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> DepositLiquidity<'info> {
    pub fn deposit_liquidity(
        &mut self,
        max_amount_a: u64,
        max_amount_b: u64,
        min_lp_out: u64,
    ) -> Result<()> {
        // Never ask for more than the depositor holds
        let max_amount_a = max_amount_a.min(self.depositor_token_a.amount);
        let max_amount_b = max_amount_b.min(self.depositor_token_b.amount);

        let quote = quote_deposit(
            max_amount_a,
            max_amount_b,
            self.vault_a.amount,
            self.vault_b.amount,
            self.lp_mint.supply,
            min_lp_out,
        )?;

        let token_program = self.token_program.to_account_info();
        let depositor = self.depositor.to_account_info();

        transfer_tokens(
            quote.amount_a,
            &token_program,
            &self.depositor_token_a.to_account_info(),
            &self.vault_a.to_account_info(),
            &depositor,
        )?;
        transfer_tokens(
            quote.amount_b,
            &token_program,
            &self.depositor_token_b.to_account_info(),
            &self.vault_b.to_account_info(),
            &depositor,
        )?;

        let fee = self.pool.fee_seed();
        let pool_seeds = pool_signer_seeds!(self.pool, fee);

        mint_lp_tokens(
            quote.lp_to_mint,
            &token_program,
            &self.lp_mint.to_account_info(),
            &self.depositor_lp_token.to_account_info(),
            &self.pool.to_account_info(),
            pool_seeds,
        )?;

        msg!(
            "Deposited: {} A, {} B -> {} LP",
            quote.amount_a,
            quote.amount_b,
            quote.lp_to_mint
        );

        emit!(LiquidityDeposited {
            pool: self.pool.key(),
            depositor: self.depositor.key(),
            amount_a: quote.amount_a,
            amount_b: quote.amount_b,
            lp_minted: quote.lp_to_mint,
        });

        Ok(())
    }
}
