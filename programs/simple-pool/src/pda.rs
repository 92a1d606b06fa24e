// Address Derivation
//
// Every pool account lives at a program derived address computed from the
// pool seed tuple (mint_a, mint_b, admin, fee_rate_bp) plus a role tag.
// Searching for the canonical bump is only needed once, at creation;
// afterwards the stored bump re-derives the address in O(1).

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

fn find(seeds: &[&[u8]]) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, &crate::ID)
        .ok_or_else(|| error!(AmmError::AddressSpaceExhausted))
}

pub fn find_pool_address(
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    admin: &Pubkey,
    fee_rate_bp: u16,
) -> Result<(Pubkey, u8)> {
    find(&[
        mint_a.as_ref(),
        mint_b.as_ref(),
        admin.as_ref(),
        &fee_rate_bp.to_le_bytes(),
    ])
}

pub fn find_vault_address(mint: &Pubkey, pool: &Pubkey) -> Result<(Pubkey, u8)> {
    find(&[mint.as_ref(), pool.as_ref()])
}

pub fn find_lp_mint_address(pool: &Pubkey) -> Result<(Pubkey, u8)> {
    find(&[LIQUIDITY_SEED, pool.as_ref()])
}

pub fn find_treasury_address(
    mint: &Pubkey,
    pool: &Pubkey,
    admin: &Pubkey,
) -> Result<(Pubkey, u8)> {
    find(&[mint.as_ref(), pool.as_ref(), TREASURY_SEED, admin.as_ref()])
}

// Re-derive with a known bump and compare against the expected address.
pub fn verify_address(seeds: &[&[u8]], bump: u8, expected: &Pubkey) -> Result<()> {
    let bump = [bump];
    let mut with_bump = seeds.to_vec();
    with_bump.push(&bump);

    let derived = Pubkey::create_program_address(&with_bump, &crate::ID)
        .map_err(|_| error!(AmmError::BumpMismatch))?;
    require_keys_eq!(derived, *expected, AmmError::BumpMismatch);

    Ok(())
}
