// Simple Swap Exact In Instruction
//
// Swaps an exact input amount using the constant product formula (x * y = k).
// The fee is taken from the input: the protocol share moves to the input
// side treasury, the LP share stays in the input vault.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::*,
    curve::{ensure_invariant, quote_swap_exact_in},
    errors::*,
    events::*,
    helpers::{transfer_from_pool, transfer_tokens},
    pool_signer_seeds,
    state::*,
};

#[derive(Accounts)]
pub struct SimpleSwapExactIn<'info> {
    #[account(mut)]
    pub trader: Signer<'info>,

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
        seeds = [
            mint_a.key().as_ref(),
            pool.key().as_ref(),
            TREASURY_SEED,
            pool.admin.as_ref(),
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
            pool.admin.as_ref(),
        ],
        bump = pool.bumps.treasury_b,
    )]
    pub treasury_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = trader,
        associated_token::mint = mint_a,
        associated_token::authority = trader,
    )]
    pub trader_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = trader,
        associated_token::mint = mint_b,
        associated_token::authority = trader,
    )]
    pub trader_token_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> SimpleSwapExactIn<'info> {
    pub fn simple_swap_exact_in(
        &mut self,
        a_to_b: bool,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<()> {
        let (reserve_in, reserve_out) = self.reserves(a_to_b);

        let quote = quote_swap_exact_in(
            amount_in,
            reserve_in,
            reserve_out,
            self.pool.fee_rate_bp,
            min_amount_out,
        )?;

        let (trader_in, trader_out, vault_in, vault_out, treasury_in) = if a_to_b {
            (
                self.trader_token_a.to_account_info(),
                self.trader_token_b.to_account_info(),
                self.vault_a.to_account_info(),
                self.vault_b.to_account_info(),
                self.treasury_a.to_account_info(),
            )
        } else {
            (
                self.trader_token_b.to_account_info(),
                self.trader_token_a.to_account_info(),
                self.vault_b.to_account_info(),
                self.vault_a.to_account_info(),
                self.treasury_b.to_account_info(),
            )
        };

        let token_program = self.token_program.to_account_info();
        let pool = self.pool.to_account_info();
        let fee = self.pool.fee_seed();
        let pool_seeds = pool_signer_seeds!(self.pool, fee);

        transfer_tokens(
            quote.amount_in,
            &token_program,
            &trader_in,
            &vault_in,
            &self.trader.to_account_info(),
        )?;

        if quote.protocol_fee > 0 {
            transfer_from_pool(
                quote.protocol_fee,
                &token_program,
                &vault_in,
                &treasury_in,
                &pool,
                pool_seeds,
            )?;
        }

        transfer_from_pool(
            quote.amount_out,
            &token_program,
            &vault_out,
            &trader_out,
            &pool,
            pool_seeds,
        )?;

        // Verify the invariant on the real balances after the CPIs
        self.vault_a.reload()?;
        self.vault_b.reload()?;
        let (reserve_in_after, reserve_out_after) = self.reserves(a_to_b);
        ensure_invariant(reserve_in, reserve_out, reserve_in_after, reserve_out_after)?;

        if a_to_b {
            msg!("Swapped {} A -> {} B", quote.amount_in, quote.amount_out);
        } else {
            msg!("Swapped {} B -> {} A", quote.amount_in, quote.amount_out);
        }
        msg!("Fee: {} to treasury, {} to LPs", quote.protocol_fee, quote.lp_fee);

        emit!(Swapped {
            pool: self.pool.key(),
            trader: self.trader.key(),
            a_to_b,
            amount_in: quote.amount_in,
            amount_out: quote.amount_out,
            protocol_fee: quote.protocol_fee,
            lp_fee: quote.lp_fee,
        });

        Ok(())
    }

    fn reserves(&self, a_to_b: bool) -> (u64, u64) {
        if a_to_b {
            (self.vault_a.amount, self.vault_b.amount)
        } else {
            (self.vault_b.amount, self.vault_a.amount)
        }
    }
}
