
use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    // Validation

    #[msg("Fee rate must be between 0 and 10000 basis points")]
    InvalidFeeRate,

    #[msg("Token mints must be different - cannot create pool with same token")]
    IdenticalMints,

    #[msg("Supplied derivation bump does not reproduce the expected address")]
    BumpMismatch,

    #[msg("Pool already exists for this mint pair, admin and fee rate")]
    PoolAlreadyExists,

    #[msg("Account does not belong to this pool")]
    InvalidPoolAccount,

    #[msg("Seed deposit requires a non-zero amount of both tokens")]
    ZeroDeposit,

    #[msg("Swap input amount cannot be zero")]
    ZeroAmountIn,

    #[msg("Liquidity amount to withdraw cannot be zero")]
    ZeroLpAmount,

    // Economic guards

    #[msg("Execution is worse than the caller's slippage bound")]
    SlippageExceeded,

    #[msg("Deposit maxima cannot be matched to the pool ratio")]
    InsufficientMatchingAmount,

    #[msg("Not enough liquidity tokens for this withdrawal")]
    InsufficientLiquidityBalance,

    #[msg("Treasury balance is lower than the requested amount")]
    InsufficientTreasuryBalance,

    #[msg("Pool has no reserves")]
    EmptyPool,

    // Defects

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Constant product invariant decreased")]
    InvariantViolation,

    #[msg("No valid bump found for the derivation seeds")]
    AddressSpaceExhausted,
}
