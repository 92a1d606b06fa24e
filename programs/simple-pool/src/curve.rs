// Constant Product Curve
//
// Pure integer math behind every pool instruction. Handlers read vault
// balances and LP supply, ask for a quote here, and only then move tokens.
//
// Rounding policy: amounts the pool pays out (LP minted, withdrawals, swap
// output) round down; amounts the pool asks for (the matching side of a
// deposit) round up. The pool is never net short after an instruction.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositQuote {
    pub amount_a: u64,
    pub amount_b: u64,
    pub lp_to_mint: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawQuote {
    pub amount_a: u64,
    pub amount_b: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount_in: u64,
    pub fee: u64,
    pub protocol_fee: u64,
    pub lp_fee: u64,
    pub amount_out: u64,
    // Vault balances once the instruction completes
    pub reserve_in_after: u64,
    pub reserve_out_after: u64,
}

fn mul_div_floor(a: u64, b: u64, denominator: u64) -> Result<u64> {
    let value = (a as u128)
        .checked_mul(b as u128)
        .ok_or(AmmError::Overflow)?
        .checked_div(denominator as u128)
        .ok_or(AmmError::Overflow)?;

    u64::try_from(value).map_err(|_| error!(AmmError::Overflow))
}

fn mul_div_ceil(a: u64, b: u64, denominator: u64) -> Result<u64> {
    require!(denominator > 0, AmmError::Overflow);

    let numerator = (a as u128)
        .checked_mul(b as u128)
        .ok_or(AmmError::Overflow)?;
    let value = numerator
        .checked_add(denominator as u128 - 1)
        .ok_or(AmmError::Overflow)?
        / denominator as u128;

    u64::try_from(value).map_err(|_| error!(AmmError::Overflow))
}

// Floor of the square root, Newton iteration from an over-estimate
pub fn isqrt(n: u128) -> u64 {
    if n < 2 {
        return n as u64;
    }

    let shift = (127 - n.leading_zeros()) / 2 + 1;
    let mut x = 1u128 << shift;

    loop {
        let next = (x + n / x) / 2;
        if next >= x {
            return x as u64;
        }
        x = next;
    }
}

pub fn quote_deposit(
    max_amount_a: u64,
    max_amount_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    lp_supply: u64,
    min_lp_out: u64,
) -> Result<DepositQuote> {
    let quote = if lp_supply == 0 {
        quote_seed_deposit(max_amount_a, max_amount_b)?
    } else {
        quote_proportional_deposit(max_amount_a, max_amount_b, reserve_a, reserve_b, lp_supply)?
    };

    require!(quote.lp_to_mint >= min_lp_out, AmmError::SlippageExceeded);

    Ok(quote)
}

// First deposit (or re-seed of a drained pool): amounts are taken verbatim
// and LP = floor(sqrt(a * b)).
fn quote_seed_deposit(amount_a: u64, amount_b: u64) -> Result<DepositQuote> {
    require!(amount_a > 0 && amount_b > 0, AmmError::ZeroDeposit);

    let product = (amount_a as u128)
        .checked_mul(amount_b as u128)
        .ok_or(AmmError::Overflow)?;

    Ok(DepositQuote {
        amount_a,
        amount_b,
        lp_to_mint: isqrt(product),
    })
}

// Anchor on A first; fall back to anchoring on B when the matching B amount
// would exceed the caller's maximum. Either way neither maximum is exceeded.
fn quote_proportional_deposit(
    max_amount_a: u64,
    max_amount_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    lp_supply: u64,
) -> Result<DepositQuote> {
    require!(reserve_a > 0 && reserve_b > 0, AmmError::EmptyPool);

    let required_b = mul_div_ceil(max_amount_a, reserve_b, reserve_a)?;
    let (amount_a, amount_b) = if required_b <= max_amount_b {
        (max_amount_a, required_b)
    } else {
        let required_a = mul_div_ceil(max_amount_b, reserve_a, reserve_b)?;
        (required_a.min(max_amount_a), max_amount_b)
    };
    require!(
        amount_a > 0 && amount_b > 0,
        AmmError::InsufficientMatchingAmount
    );

    let lp_from_a = mul_div_floor(lp_supply, amount_a, reserve_a)?;
    let lp_from_b = mul_div_floor(lp_supply, amount_b, reserve_b)?;
    let lp_to_mint = lp_from_a.min(lp_from_b);
    require!(lp_to_mint > 0, AmmError::InsufficientMatchingAmount);

    // Minted share of supply may never exceed the deposited share of either reserve
    ensure_share_not_above(lp_to_mint, lp_supply, amount_a, reserve_a)?;
    ensure_share_not_above(lp_to_mint, lp_supply, amount_b, reserve_b)?;

    Ok(DepositQuote {
        amount_a,
        amount_b,
        lp_to_mint,
    })
}

pub fn quote_withdraw(
    lp_amount: u64,
    reserve_a: u64,
    reserve_b: u64,
    lp_supply: u64,
    min_amount_a: u64,
    min_amount_b: u64,
) -> Result<WithdrawQuote> {
    require!(lp_amount > 0, AmmError::ZeroLpAmount);
    require!(lp_supply > 0, AmmError::EmptyPool);
    require!(lp_amount <= lp_supply, AmmError::InsufficientLiquidityBalance);

    let amount_a = mul_div_floor(reserve_a, lp_amount, lp_supply)?;
    let amount_b = mul_div_floor(reserve_b, lp_amount, lp_supply)?;

    // Paid-out share of each reserve may never exceed the burned share of supply
    ensure_share_not_above(amount_a, reserve_a, lp_amount, lp_supply)?;
    ensure_share_not_above(amount_b, reserve_b, lp_amount, lp_supply)?;

    require!(amount_a >= min_amount_a, AmmError::SlippageExceeded);
    require!(amount_b >= min_amount_b, AmmError::SlippageExceeded);

    Ok(WithdrawQuote { amount_a, amount_b })
}

// Splits a swap fee into (protocol share, LP share)
pub fn split_fee(fee: u64) -> Result<(u64, u64)> {
    let protocol_fee = mul_div_floor(fee, PROTOCOL_FEE_SHARE_BP, FEE_RATE_DENOMINATOR)?;
    Ok((protocol_fee, fee - protocol_fee))
}

pub fn quote_swap_exact_in(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_rate_bp: u16,
    min_amount_out: u64,
) -> Result<SwapQuote> {
    require!(amount_in > 0, AmmError::ZeroAmountIn);
    require!(reserve_in > 0 && reserve_out > 0, AmmError::EmptyPool);

    let fee = mul_div_floor(amount_in, fee_rate_bp as u64, FEE_RATE_DENOMINATOR)?;
    let (protocol_fee, lp_fee) = split_fee(fee)?;
    let amount_in_after_fee = amount_in.checked_sub(fee).ok_or(AmmError::Overflow)?;

    // The remaining output reserve is rounded up, so the output rounds down.
    // Rounding it down lets a zero or tiny fee swap shrink k; keep the ceil.
    let effective_reserve_in = reserve_in
        .checked_add(amount_in_after_fee)
        .ok_or(AmmError::Overflow)?;
    let new_reserve_out = mul_div_ceil(reserve_in, reserve_out, effective_reserve_in)?;
    let amount_out = reserve_out
        .checked_sub(new_reserve_out)
        .ok_or(AmmError::InvariantViolation)?;

    // A dust input that buys nothing is rejected even with min_amount_out == 0
    require!(amount_out > 0, AmmError::SlippageExceeded);
    require!(amount_out >= min_amount_out, AmmError::SlippageExceeded);

    let reserve_in_after = reserve_in
        .checked_add(amount_in)
        .ok_or(AmmError::Overflow)?
        .checked_sub(protocol_fee)
        .ok_or(AmmError::Overflow)?;
    let reserve_out_after = new_reserve_out;

    ensure_invariant(reserve_in, reserve_out, reserve_in_after, reserve_out_after)?;

    Ok(SwapQuote {
        amount_in,
        fee,
        protocol_fee,
        lp_fee,
        amount_out,
        reserve_in_after,
        reserve_out_after,
    })
}

pub fn ensure_invariant(
    reserve_in_before: u64,
    reserve_out_before: u64,
    reserve_in_after: u64,
    reserve_out_after: u64,
) -> Result<()> {
    let k_before = (reserve_in_before as u128) * (reserve_out_before as u128);
    let k_after = (reserve_in_after as u128) * (reserve_out_after as u128);

    require!(k_after >= k_before, AmmError::InvariantViolation);
    Ok(())
}

// part / whole <= other_part / other_whole, cross-multiplied
fn ensure_share_not_above(part: u64, whole: u64, other_part: u64, other_whole: u64) -> Result<()> {
    let lhs = (part as u128) * (other_whole as u128);
    let rhs = (other_part as u128) * (whole as u128);

    require!(lhs <= rhs, AmmError::InvariantViolation);
    Ok(())
}
