// Pool State

use anchor_lang::prelude::*;

// Canonical bumps for every address derived from the pool seed tuple.
// Stored so later instructions re-derive in O(1) instead of searching.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct PoolBumps {
    pub pool: u8,
    pub vault_a: u8,
    pub vault_b: u8,
    pub treasury_a: u8,
    pub treasury_b: u8,
    pub lp_mint: u8,
}

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub is_initialized: bool,
    pub admin: Pubkey,            // Creator, collects the treasury
    pub creator: Pubkey,          // Paid for the pool accounts
    pub mint_a: Pubkey,           // First token in pair
    pub mint_b: Pubkey,           // Second token in pair
    pub fee_rate_bp: u16,         // Swap fee (e.g., 10 = 0.10%)
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub treasury_a: Pubkey,
    pub treasury_b: Pubkey,
    pub lp_mint: Pubkey,
    pub bumps: PoolBumps,
}

impl Pool {
    pub fn fee_seed(&self) -> [u8; 2] {
        self.fee_rate_bp.to_le_bytes()
    }
}

// Expands to the Pool PDA signer seeds. The fee seed must outlive the call,
// so the caller binds it first: `let fee = pool.fee_seed();`
#[macro_export]
macro_rules! pool_signer_seeds {
    ($pool:expr, $fee:expr) => {
        &[
            $pool.mint_a.as_ref(),
            $pool.mint_b.as_ref(),
            $pool.admin.as_ref(),
            $fee.as_ref(),
            &[$pool.bumps.pool],
        ]
    };
}
