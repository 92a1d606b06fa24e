// Test utilities for the pool program

#![allow(dead_code)]

use litesvm::{types::TransactionResult, LiteSVM};
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const POOL_PROGRAM_ID: Pubkey = Pubkey::new_from_array(simple_pool::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds
pub const LIQUIDITY_SEED: &[u8] = b"liquidity";
pub const TREASURY_SEED: &[u8] = b"treasury";

// Token decimals
pub const DECIMALS: u8 = 6;

// Custom error codes (6000 + variant index of AmmError)
pub const ERR_INVALID_FEE_RATE: u32 = 6000;
pub const ERR_IDENTICAL_MINTS: u32 = 6001;
pub const ERR_BUMP_MISMATCH: u32 = 6002;
pub const ERR_POOL_ALREADY_EXISTS: u32 = 6003;
pub const ERR_INVALID_POOL_ACCOUNT: u32 = 6004;
pub const ERR_SLIPPAGE_EXCEEDED: u32 = 6008;
pub const ERR_INSUFFICIENT_LIQUIDITY_BALANCE: u32 = 6010;
pub const ERR_INSUFFICIENT_TREASURY_BALANCE: u32 = 6011;
pub const ERR_EMPTY_POOL: u32 = 6012;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the pool program (workspace target, built with `anchor build`)
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../target/deploy/simple_pool.so"
    ));
    let _ = svm.add_program(POOL_PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn create_mint(svm: &mut LiteSVM, authority: &Keypair) -> Pubkey {
    CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint")
}

// Create the owner's ATA for `mint` and mint `amount` into it
pub fn fund_token_account(
    svm: &mut LiteSVM,
    mint_authority: &Keypair,
    mint: &Pubkey,
    owner: &Keypair,
    amount: u64,
) -> Pubkey {
    let ata = CreateAssociatedTokenAccount::new(svm, owner, mint)
        .owner(&owner.pubkey())
        .send()
        .expect("Failed to create ATA");

    if amount > 0 {
        MintTo::new(svm, mint_authority, mint, &ata, amount)
            .owner(mint_authority)
            .send()
            .expect("Failed to mint tokens");
    }

    ata
}

pub fn token_balance(svm: &LiteSVM, address: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, address).expect("Token account should exist");
    account.amount
}

pub fn mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let mint: spl_token::state::Mint = get_spl_account(svm, mint).expect("Mint should exist");
    mint.supply
}

pub fn send(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair) -> TransactionResult {
    // Identical transactions in one blockhash would be rejected as duplicates
    svm.expire_blockhash();

    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
}

pub fn assert_custom_error(result: &TransactionResult, code: u32) {
    match result {
        Ok(_) => panic!("Expected custom error {} but transaction succeeded", code),
        Err(failed) => {
            let rendered = format!("{:?}", failed.err);
            assert!(
                rendered.contains(&format!("Custom({})", code)),
                "Expected custom error {}, got {}",
                code,
                rendered
            );
        }
    }
}

// Every address a pool owns, derived the way the program derives them
#[derive(Clone, Copy, Debug)]
pub struct PoolKeys {
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub admin: Pubkey,
    pub fee_rate_bp: u16,
    pub pool: Pubkey,
    pub lp_mint: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub treasury_a: Pubkey,
    pub treasury_b: Pubkey,
    // pool, vault_a, vault_b, treasury_a, treasury_b
    pub bumps: [u8; 5],
}

impl PoolKeys {
    pub fn derive(mint_a: &Pubkey, mint_b: &Pubkey, admin: &Pubkey, fee_rate_bp: u16) -> Self {
        let (pool, pool_bump) = derive_pool_pda(mint_a, mint_b, admin, fee_rate_bp);
        let (lp_mint, _) = derive_lp_mint_pda(&pool);
        let (vault_a, vault_a_bump) = derive_vault_pda(mint_a, &pool);
        let (vault_b, vault_b_bump) = derive_vault_pda(mint_b, &pool);
        let (treasury_a, treasury_a_bump) = derive_treasury_pda(mint_a, &pool, admin);
        let (treasury_b, treasury_b_bump) = derive_treasury_pda(mint_b, &pool, admin);

        Self {
            mint_a: *mint_a,
            mint_b: *mint_b,
            admin: *admin,
            fee_rate_bp,
            pool,
            lp_mint,
            vault_a,
            vault_b,
            treasury_a,
            treasury_b,
            bumps: [
                pool_bump,
                vault_a_bump,
                vault_b_bump,
                treasury_a_bump,
                treasury_b_bump,
            ],
        }
    }

    pub fn lp_account(&self, owner: &Pubkey) -> Pubkey {
        get_associated_token_address(owner, &self.lp_mint)
    }
}

// Derive pool PDA
pub fn derive_pool_pda(
    mint_a: &Pubkey,
    mint_b: &Pubkey,
    admin: &Pubkey,
    fee_rate_bp: u16,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            mint_a.as_ref(),
            mint_b.as_ref(),
            admin.as_ref(),
            &fee_rate_bp.to_le_bytes(),
        ],
        &POOL_PROGRAM_ID,
    )
}

// Derive LP mint PDA
pub fn derive_lp_mint_pda(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LIQUIDITY_SEED, pool.as_ref()], &POOL_PROGRAM_ID)
}

// Derive reserve vault PDA
pub fn derive_vault_pda(mint: &Pubkey, pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[mint.as_ref(), pool.as_ref()], &POOL_PROGRAM_ID)
}

// Derive treasury PDA
pub fn derive_treasury_pda(mint: &Pubkey, pool: &Pubkey, admin: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[mint.as_ref(), pool.as_ref(), TREASURY_SEED, admin.as_ref()],
        &POOL_PROGRAM_ID,
    )
}

// Build create_pool instruction
pub fn build_create_pool_ix(keys: &PoolKeys, bumps: [u8; 5]) -> Instruction {
    let mut data = anchor_discriminator("create_pool").to_vec();
    data.extend_from_slice(&keys.fee_rate_bp.to_le_bytes());
    data.extend_from_slice(&bumps);

    Instruction {
        program_id: POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(keys.admin, true),
            AccountMeta::new_readonly(keys.mint_a, false),
            AccountMeta::new_readonly(keys.mint_b, false),
            AccountMeta::new(keys.pool, false),
            AccountMeta::new(keys.lp_mint, false),
            AccountMeta::new(keys.vault_a, false),
            AccountMeta::new(keys.vault_b, false),
            AccountMeta::new(keys.treasury_a, false),
            AccountMeta::new(keys.treasury_b, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build deposit_liquidity instruction
pub fn build_deposit_liquidity_ix(
    keys: &PoolKeys,
    depositor: &Pubkey,
    max_amount_a: u64,
    max_amount_b: u64,
    min_lp_out: u64,
) -> Instruction {
    let mut data = anchor_discriminator("deposit_liquidity").to_vec();
    data.extend_from_slice(&max_amount_a.to_le_bytes());
    data.extend_from_slice(&max_amount_b.to_le_bytes());
    data.extend_from_slice(&min_lp_out.to_le_bytes());

    Instruction {
        program_id: POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*depositor, true),
            AccountMeta::new_readonly(keys.pool, false),
            AccountMeta::new(keys.lp_mint, false),
            AccountMeta::new_readonly(keys.mint_a, false),
            AccountMeta::new_readonly(keys.mint_b, false),
            AccountMeta::new(keys.vault_a, false),
            AccountMeta::new(keys.vault_b, false),
            AccountMeta::new(get_associated_token_address(depositor, &keys.mint_a), false),
            AccountMeta::new(get_associated_token_address(depositor, &keys.mint_b), false),
            AccountMeta::new(keys.lp_account(depositor), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build withdraw_liquidity instruction
pub fn build_withdraw_liquidity_ix(
    keys: &PoolKeys,
    withdrawer: &Pubkey,
    lp_amount: u64,
    min_amount_a: u64,
    min_amount_b: u64,
) -> Instruction {
    let mut data = anchor_discriminator("withdraw_liquidity").to_vec();
    data.extend_from_slice(&lp_amount.to_le_bytes());
    data.extend_from_slice(&min_amount_a.to_le_bytes());
    data.extend_from_slice(&min_amount_b.to_le_bytes());

    Instruction {
        program_id: POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*withdrawer, true),
            AccountMeta::new_readonly(keys.pool, false),
            AccountMeta::new(keys.lp_mint, false),
            AccountMeta::new_readonly(keys.mint_a, false),
            AccountMeta::new_readonly(keys.mint_b, false),
            AccountMeta::new(keys.vault_a, false),
            AccountMeta::new(keys.vault_b, false),
            AccountMeta::new(keys.lp_account(withdrawer), false),
            AccountMeta::new(get_associated_token_address(withdrawer, &keys.mint_a), false),
            AccountMeta::new(get_associated_token_address(withdrawer, &keys.mint_b), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build simple_swap_exact_in instruction
pub fn build_swap_ix(
    keys: &PoolKeys,
    trader: &Pubkey,
    a_to_b: bool,
    amount_in: u64,
    min_amount_out: u64,
) -> Instruction {
    let mut data = anchor_discriminator("simple_swap_exact_in").to_vec();
    data.push(if a_to_b { 1 } else { 0 });
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&min_amount_out.to_le_bytes());

    Instruction {
        program_id: POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*trader, true),
            AccountMeta::new_readonly(keys.pool, false),
            AccountMeta::new_readonly(keys.mint_a, false),
            AccountMeta::new_readonly(keys.mint_b, false),
            AccountMeta::new(keys.vault_a, false),
            AccountMeta::new(keys.vault_b, false),
            AccountMeta::new(keys.treasury_a, false),
            AccountMeta::new(keys.treasury_b, false),
            AccountMeta::new(get_associated_token_address(trader, &keys.mint_a), false),
            AccountMeta::new(get_associated_token_address(trader, &keys.mint_b), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build collect_treasury instruction
pub fn build_collect_treasury_ix(
    keys: &PoolKeys,
    admin: &Pubkey,
    amount_a: u64,
    amount_b: u64,
) -> Instruction {
    let mut data = anchor_discriminator("collect_treasury").to_vec();
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());

    Instruction {
        program_id: POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(keys.pool, false),
            AccountMeta::new_readonly(keys.mint_a, false),
            AccountMeta::new_readonly(keys.mint_b, false),
            AccountMeta::new(keys.treasury_a, false),
            AccountMeta::new(keys.treasury_b, false),
            AccountMeta::new(get_associated_token_address(admin, &keys.mint_a), false),
            AccountMeta::new(get_associated_token_address(admin, &keys.mint_b), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Mints A and B plus a created pool at `fee_rate_bp`. The admin is also the
// mint authority for both tokens.
pub struct PoolFixture {
    pub admin: Keypair,
    pub keys: PoolKeys,
}

pub fn setup_pool(svm: &mut LiteSVM, fee_rate_bp: u16) -> PoolFixture {
    let admin = create_funded_account(svm, 10 * LAMPORTS_PER_SOL);
    let mint_a = create_mint(svm, &admin);
    let mint_b = create_mint(svm, &admin);

    let keys = PoolKeys::derive(&mint_a, &mint_b, &admin.pubkey(), fee_rate_bp);
    let result = send(svm, build_create_pool_ix(&keys, keys.bumps), &admin);
    assert!(result.is_ok(), "Pool creation failed: {:?}", result.err());

    PoolFixture { admin, keys }
}

// A funded user holding `amount_a` of A and `amount_b` of B
pub fn create_trader(svm: &mut LiteSVM, fixture: &PoolFixture, amount_a: u64, amount_b: u64) -> Keypair {
    let user = create_funded_account(svm, 10 * LAMPORTS_PER_SOL);
    fund_token_account(svm, &fixture.admin, &fixture.keys.mint_a, &user, amount_a);
    fund_token_account(svm, &fixture.admin, &fixture.keys.mint_b, &user, amount_b);
    user
}
