// Test utilities for the charity registry program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use borsh::BorshSerialize;
use litesvm::LiteSVM;
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const REGISTRY_PROGRAM_ID: Pubkey = Pubkey::new_from_array(charity_registry::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

// PDA Seeds (must match constants.rs)
pub const REGISTRY: &[u8] = b"registry";
pub const CHARITY_ENTRY: &[u8] = b"charity_entry";
pub const VAULT: &[u8] = b"vault";
pub const TOKEN_POOL: &[u8] = b"token_pool";

// Token decimals
pub const DECIMALS: u8 = 6;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the registry program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../target/deploy/charity_registry.so"
    ));
    svm.add_program(REGISTRY_PROGRAM_ID, program_bytes)
        .expect("Failed to add registry program");
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Send a transaction that must succeed
pub fn send_tx_expect_success(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_ok(), "Transaction failed: {:?}", result.err());
    svm.expire_blockhash();
}

// Send a transaction that must fail, returning the debug-formatted error (incl. logs)
pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    svm.expire_blockhash();
    format!("{:?}", result.err().unwrap())
}

// Derive registry config PDA
pub fn derive_registry_pda(admin: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY, admin.as_ref()], &REGISTRY_PROGRAM_ID)
}

// Derive charity entry PDA
pub fn derive_charity_entry_pda(registry: &Pubkey, charity_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CHARITY_ENTRY, registry.as_ref(), &charity_id.to_le_bytes()],
        &REGISTRY_PROGRAM_ID,
    )
}

// Derive vault PDA
pub fn derive_vault_pda(charity_entry: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT, charity_entry.as_ref()], &REGISTRY_PROGRAM_ID)
}

// Derive token pool PDA
pub fn derive_token_pool_pda(charity_entry: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TOKEN_POOL, charity_entry.as_ref(), mint.as_ref()],
        &REGISTRY_PROGRAM_ID,
    )
}

// Read and deserialize the charity entry account
pub fn fetch_charity_entry(svm: &LiteSVM, charity_entry: &Pubkey) -> charity_registry::CharityEntry {
    let account = svm
        .get_account(charity_entry)
        .expect("Charity entry should exist");
    charity_registry::CharityEntry::try_deserialize(&mut account.data.as_slice())
        .expect("Charity entry should deserialize")
}

// Read and deserialize the registry config account
pub fn fetch_registry_config(svm: &LiteSVM, registry: &Pubkey) -> charity_registry::RegistryConfig {
    let account = svm.get_account(registry).expect("Registry should exist");
    charity_registry::RegistryConfig::try_deserialize(&mut account.data.as_slice())
        .expect("Registry should deserialize")
}

// Read and deserialize a token pool account
pub fn fetch_token_pool(svm: &LiteSVM, token_pool: &Pubkey) -> charity_registry::TokenPool {
    let account = svm.get_account(token_pool).expect("Token pool should exist");
    charity_registry::TokenPool::try_deserialize(&mut account.data.as_slice())
        .expect("Token pool should deserialize")
}

pub fn lamports(svm: &LiteSVM, address: &Pubkey) -> u64 {
    svm.get_account(address).map(|a| a.lamports).unwrap_or(0)
}

// Build initialize_registry instruction
pub fn build_initialize_registry_ix(admin: &Pubkey, voting_authority: &Pubkey) -> Instruction {
    let (registry, _) = derive_registry_pda(admin);

    let mut data = anchor_discriminator("initialize_registry").to_vec();
    data.extend_from_slice(voting_authority.as_ref());

    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(registry, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build admit_charity instruction
pub fn build_admit_charity_ix(
    voting_authority: &Pubkey,
    payer: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
    name: &str,
    wallet: &Pubkey,
) -> Instruction {
    let (charity_entry, _) = derive_charity_entry_pda(registry, charity_id);
    let (vault, _) = derive_vault_pda(&charity_entry);

    let mut data = anchor_discriminator("admit_charity").to_vec();
    data.extend_from_slice(&charity_id.to_le_bytes());
    name.to_string()
        .serialize(&mut data)
        .expect("Name should serialize");
    data.extend_from_slice(wallet.as_ref());

    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*voting_authority, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new(*registry, false),
            AccountMeta::new(charity_entry, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build make_donation instruction
pub fn build_make_donation_ix(
    donor: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
    amount: u64,
) -> Instruction {
    let (charity_entry, _) = derive_charity_entry_pda(registry, charity_id);
    let (vault, _) = derive_vault_pda(&charity_entry);

    let mut data = anchor_discriminator("make_donation").to_vec();
    data.extend_from_slice(&charity_id.to_le_bytes());
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*donor, true),
            AccountMeta::new_readonly(*registry, false),
            AccountMeta::new(charity_entry, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build make_token_donation instruction
pub fn build_make_token_donation_ix(
    donor: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
    mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (charity_entry, _) = derive_charity_entry_pda(registry, charity_id);
    let (vault, _) = derive_vault_pda(&charity_entry);
    let (token_pool, _) = derive_token_pool_pda(&charity_entry, mint);
    let donor_token_account = get_associated_token_address(donor, mint);
    let vault_token_account = get_associated_token_address(&vault, mint);

    let mut data = anchor_discriminator("make_token_donation").to_vec();
    data.extend_from_slice(&charity_id.to_le_bytes());
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*donor, true),
            AccountMeta::new_readonly(*registry, false),
            AccountMeta::new(charity_entry, false),
            AccountMeta::new_readonly(vault, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(token_pool, false),
            AccountMeta::new(donor_token_account, false),
            AccountMeta::new(vault_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build release_donation instruction
pub fn build_release_donation_ix(
    admin: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
    wallet: &Pubkey,
    amount: u64,
) -> Instruction {
    let (charity_entry, _) = derive_charity_entry_pda(registry, charity_id);
    let (vault, _) = derive_vault_pda(&charity_entry);

    let mut data = anchor_discriminator("release_donation").to_vec();
    data.extend_from_slice(&charity_id.to_le_bytes());
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(*registry, false),
            AccountMeta::new(charity_entry, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(*wallet, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build release_token_donation instruction
pub fn build_release_token_donation_ix(
    admin: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
    mint: &Pubkey,
    wallet_token_account: &Pubkey,
    amount: u64,
) -> Instruction {
    let (charity_entry, _) = derive_charity_entry_pda(registry, charity_id);
    let (vault, _) = derive_vault_pda(&charity_entry);
    let (token_pool, _) = derive_token_pool_pda(&charity_entry, mint);
    let vault_token_account = get_associated_token_address(&vault, mint);

    let mut data = anchor_discriminator("release_token_donation").to_vec();
    data.extend_from_slice(&charity_id.to_le_bytes());
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(*registry, false),
            AccountMeta::new_readonly(charity_entry, false),
            AccountMeta::new_readonly(vault, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(token_pool, false),
            AccountMeta::new(vault_token_account, false),
            AccountMeta::new(*wallet_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Build one of the ManageCharity instructions
// `args` is the borsh-encoded tail after charity_id
fn build_manage_charity_ix(
    method: &str,
    admin: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
    args: &[u8],
) -> Instruction {
    let (charity_entry, _) = derive_charity_entry_pda(registry, charity_id);

    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&charity_id.to_le_bytes());
    data.extend_from_slice(args);

    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(*registry, false),
            AccountMeta::new(charity_entry, false),
        ],
        data,
    }
}

pub fn build_limit_donation_ix(
    admin: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
    limit: u64,
) -> Instruction {
    build_manage_charity_ix("limit_donation", admin, registry, charity_id, &limit.to_le_bytes())
}

// limit_donation with the entry's token pools as remaining accounts
pub fn build_limit_donation_with_pools_ix(
    admin: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
    limit: u64,
    token_pools: &[Pubkey],
) -> Instruction {
    let mut ix = build_limit_donation_ix(admin, registry, charity_id, limit);
    ix.accounts.extend(
        token_pools
            .iter()
            .map(|pool| AccountMeta::new_readonly(*pool, false)),
    );
    ix
}

pub fn build_disable_donation_limit_ix(
    admin: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
) -> Instruction {
    build_manage_charity_ix("disable_donation_limit", admin, registry, charity_id, &[])
}

pub fn build_remove_charity_ix(admin: &Pubkey, registry: &Pubkey, charity_id: u64) -> Instruction {
    build_manage_charity_ix("remove_charity", admin, registry, charity_id, &[])
}

pub fn build_set_emergency_stop_ix(
    admin: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
    enabled: bool,
) -> Instruction {
    build_manage_charity_ix("set_emergency_stop", admin, registry, charity_id, &[enabled as u8])
}

pub fn build_set_donation_release_pause_ix(
    admin: &Pubkey,
    registry: &Pubkey,
    charity_id: u64,
    paused: bool,
) -> Instruction {
    build_manage_charity_ix(
        "set_donation_release_pause",
        admin,
        registry,
        charity_id,
        &[paused as u8],
    )
}

// Build add_token_to_whitelist instruction
pub fn build_add_token_to_whitelist_ix(
    admin: &Pubkey,
    registry: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: REGISTRY_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(*registry, false),
            AccountMeta::new_readonly(*mint, false),
        ],
        data: anchor_discriminator("add_token_to_whitelist").to_vec(),
    }
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);
}
