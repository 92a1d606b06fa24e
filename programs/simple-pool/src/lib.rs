// Simple Pool Program
//
// Constant product AMM (x * y = k) with a protocol fee treasury.
// A pool is keyed by (mint_a, mint_b, admin, fee_rate_bp); every account it
// owns lives at an address derived from that tuple.
//
// Instructions:
// - create_pool: Create pool, vaults, treasuries and LP mint
// - deposit_liquidity: Add tokens, receive LP tokens
// - withdraw_liquidity: Burn LP tokens, receive tokens
// - simple_swap_exact_in: Exchange an exact input amount
// - collect_treasury: Admin withdraws accrued protocol fees

use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;
use state::PoolBumps;

declare_id!("HstyBfR8GXVUhpMnHSKy71ZUFih2tncfmeDfE7oWqUEw");

#[program]
pub mod simple_pool {
    use super::*;

    pub fn create_pool(
        ctx: Context<CreatePool>,
        fee_rate_bp: u16,
        bump_pool: u8,
        bump_vault_a: u8,
        bump_vault_b: u8,
        bump_treasury_a: u8,
        bump_treasury_b: u8,
    ) -> Result<()> {
        let supplied = PoolBumps {
            pool: bump_pool,
            vault_a: bump_vault_a,
            vault_b: bump_vault_b,
            treasury_a: bump_treasury_a,
            treasury_b: bump_treasury_b,
            lp_mint: ctx.bumps.lp_mint,
        };
        ctx.accounts.create_pool(fee_rate_bp, supplied)
    }

    pub fn deposit_liquidity(
        ctx: Context<DepositLiquidity>,
        max_amount_a: u64,
        max_amount_b: u64,
        min_lp_out: u64,
    ) -> Result<()> {
        ctx.accounts
            .deposit_liquidity(max_amount_a, max_amount_b, min_lp_out)
    }

    pub fn withdraw_liquidity(
        ctx: Context<WithdrawLiquidity>,
        lp_amount: u64,
        min_amount_a: u64,
        min_amount_b: u64,
    ) -> Result<()> {
        ctx.accounts
            .withdraw_liquidity(lp_amount, min_amount_a, min_amount_b)
    }

    pub fn simple_swap_exact_in(
        ctx: Context<SimpleSwapExactIn>,
        a_to_b: bool,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<()> {
        ctx.accounts
            .simple_swap_exact_in(a_to_b, amount_in, min_amount_out)
    }

    pub fn collect_treasury(
        ctx: Context<CollectTreasury>,
        amount_a: u64,
        amount_b: u64,
    ) -> Result<()> {
        ctx.accounts.collect_treasury(amount_a, amount_b)
    }
}
