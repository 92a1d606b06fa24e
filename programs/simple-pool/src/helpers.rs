// Token CPI Helpers
//
// Thin wrappers over the SPL token instructions the pool issues. Anything
// leaving a vault or treasury, and every LP mint, is signed by the Pool PDA.

use anchor_lang::prelude::*;
use anchor_spl::token::{burn, mint_to, transfer, Burn, MintTo, Transfer};

// Transfer signed by the owner of `from` (depositor, trader)
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Transfer out of a pool-owned account (vault or treasury)
pub fn transfer_from_pool<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    pool: &AccountInfo<'info>,
    pool_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[pool_seeds];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: pool.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

pub fn mint_lp_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    lp_mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    pool: &AccountInfo<'info>,
    pool_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[pool_seeds];

    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: lp_mint.clone(),
                to: to.clone(),
                authority: pool.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Holder burns its own LP tokens
pub fn burn_lp_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    lp_mint: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    burn(
        CpiContext::new(
            token_program.clone(),
            Burn {
                mint: lp_mint.clone(),
                from: from.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}
