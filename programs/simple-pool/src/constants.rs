// Pool Program Constants

pub const LIQUIDITY_SEED: &[u8] = b"liquidity";
pub const TREASURY_SEED: &[u8] = b"treasury";

// Fee rates are expressed in basis points of FEE_RATE_DENOMINATOR
pub const FEE_RATE_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_RATE_BP: u16 = 10_000; // 100%

// Share of every swap fee routed to the treasury, in basis points of the fee.
// The remainder stays in the input reserve and accrues to LP holders.
pub const PROTOCOL_FEE_SHARE_BP: u64 = 2_000; // 20% of the fee

pub const LP_MINT_DECIMALS: u8 = 6;
pub const ANCHOR_DISCRIMINATOR: usize = 8;
