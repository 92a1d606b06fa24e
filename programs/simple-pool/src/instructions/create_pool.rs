// Create Pool Instruction
//
// Creates a pool for (mint_a, mint_b, admin, fee_rate_bp) together with its
// two reserve vaults, two fee treasuries and the LP mint. The caller passes
// the bumps it derived off-chain; each one must re-derive the address the
// account was created at.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, pda::verify_address, state::*};

#[derive(Accounts)]
#[instruction(fee_rate_bp: u16)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    pub mint_a: Box<Account<'info, Mint>>,
    pub mint_b: Box<Account<'info, Mint>>,

    // init_if_needed so a second create reaches the handler and fails with
    // PoolAlreadyExists instead of a system program error.
    // Distinct mints are checked here, before the vaults and treasuries
    // (which would collide on a single mint) are initialized.
    #[account(
        init_if_needed,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
            admin.key().as_ref(),
            &fee_rate_bp.to_le_bytes(),
        ],
        bump,
        constraint = mint_a.key() != mint_b.key() @ AmmError::IdenticalMints,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [LIQUIDITY_SEED, pool.key().as_ref()],
        bump,
        mint::decimals = LP_MINT_DECIMALS,
        mint::authority = pool,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [mint_a.key().as_ref(), pool.key().as_ref()],
        bump,
        token::mint = mint_a,
        token::authority = pool,
    )]
    pub vault_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [mint_b.key().as_ref(), pool.key().as_ref()],
        bump,
        token::mint = mint_b,
        token::authority = pool,
    )]
    pub vault_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [
            mint_a.key().as_ref(),
            pool.key().as_ref(),
            TREASURY_SEED,
            admin.key().as_ref(),
        ],
        bump,
        token::mint = mint_a,
        token::authority = pool,
    )]
    pub treasury_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [
            mint_b.key().as_ref(),
            pool.key().as_ref(),
            TREASURY_SEED,
            admin.key().as_ref(),
        ],
        bump,
        token::mint = mint_b,
        token::authority = pool,
    )]
    pub treasury_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreatePool<'info> {
    pub fn create_pool(
        &mut self,
        fee_rate_bp: u16,
        supplied: PoolBumps,
    ) -> Result<()> {
        require!(!self.pool.is_initialized, AmmError::PoolAlreadyExists);

        require!(fee_rate_bp <= MAX_FEE_RATE_BP, AmmError::InvalidFeeRate);

        self.verify_bumps(fee_rate_bp, &supplied)?;

        self.pool.set_inner(Pool {
            is_initialized: true,
            admin: self.admin.key(),
            creator: self.admin.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            fee_rate_bp,
            vault_a: self.vault_a.key(),
            vault_b: self.vault_b.key(),
            treasury_a: self.treasury_a.key(),
            treasury_b: self.treasury_b.key(),
            lp_mint: self.lp_mint.key(),
            bumps: supplied,
        });

        msg!(
            "Pool created: {} / {}",
            self.mint_a.key(),
            self.mint_b.key()
        );
        msg!("Fee: {} basis points", fee_rate_bp);

        emit!(PoolCreated {
            pool: self.pool.key(),
            admin: self.admin.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            lp_mint: self.lp_mint.key(),
            fee_rate_bp,
        });

        Ok(())
    }

    fn verify_bumps(&self, fee_rate_bp: u16, supplied: &PoolBumps) -> Result<()> {
        let mint_a = self.mint_a.key();
        let mint_b = self.mint_b.key();
        let admin = self.admin.key();
        let pool = self.pool.key();
        let fee = fee_rate_bp.to_le_bytes();

        verify_address(
            &[mint_a.as_ref(), mint_b.as_ref(), admin.as_ref(), &fee],
            supplied.pool,
            &pool,
        )?;
        verify_address(
            &[mint_a.as_ref(), pool.as_ref()],
            supplied.vault_a,
            &self.vault_a.key(),
        )?;
        verify_address(
            &[mint_b.as_ref(), pool.as_ref()],
            supplied.vault_b,
            &self.vault_b.key(),
        )?;
        verify_address(
            &[mint_a.as_ref(), pool.as_ref(), TREASURY_SEED, admin.as_ref()],
            supplied.treasury_a,
            &self.treasury_a.key(),
        )?;
        verify_address(
            &[mint_b.as_ref(), pool.as_ref(), TREASURY_SEED, admin.as_ref()],
            supplied.treasury_b,
            &self.treasury_b.key(),
        )?;

        Ok(())
    }
}
