//! VM-level tests driving the `basket` program through its real entrypoint with Mollusk.
//!
//! These need the SBF artifact from `cargo build-sbf` under `target/deploy/`, so they are
//! ignored by default; the same state-machine coverage runs natively in the program crate's
//! `registry_operations` tests.

use basket::shared::registry_operations;
use basket_interface::{
    error::BasketError,
    state::registry::RegistryRefMut,
};
use client::{
    context::registry::RegistryContext,
    mollusk_helpers::{
        new_basket_mollusk,
        registry_account_with_data,
        system_account,
    },
    views::{
        try_registry_view_from_owner_and_data,
        RegistryView,
    },
};
use mollusk_svm::{
    program::keyed_account_for_system_program,
    result::{
        Check,
        InstructionResult,
    },
    Mollusk,
};
use solana_sdk::{
    account::Account,
    instruction::Instruction,
    program_error::ProgramError,
    pubkey::Pubkey,
};

const AUTHORITY_LAMPORTS: u64 = 10_000_000_000;

fn custom_err(error: BasketError) -> ProgramError {
    ProgramError::Custom(error as u32)
}

fn decode(result: &InstructionResult, registry: &Pubkey) -> RegistryView {
    let account = result
        .get_account(registry)
        .expect("Registry account not found");
    try_registry_view_from_owner_and_data(&account.owner, &account.data)
        .expect("Should decode registry account")
}

/// Runs `instruction` against the accounts from the previous step and hands back the updated
/// authority/registry pair for the next one.
fn step(
    mollusk: &Mollusk,
    instruction: &Instruction,
    accounts: Vec<(Pubkey, Account)>,
) -> (InstructionResult, Vec<(Pubkey, Account)>) {
    let result = mollusk.process_instruction(instruction, &accounts);
    assert!(
        result.program_result.is_ok(),
        "Instruction failed: {:?}",
        result.program_result,
    );

    let next = accounts
        .iter()
        .map(|(address, before)| {
            let after = result.get_account(address).cloned().unwrap_or(before.clone());
            (*address, after)
        })
        .collect();

    (result, next)
}

fn add_entry_natively(account: &mut Account, authority: &Pubkey, mint: &Pubkey, weight: u8) {
    // Safety: The fixture account data was initialized by `registry_account_with_data`.
    let mut registry = unsafe { RegistryRefMut::from_bytes_mut(&mut account.data) };
    registry_operations::add_token(&mut registry, &authority.to_bytes(), &mint.to_bytes(), weight)
        .expect("Should add entry");
}

#[test]
#[ignore = "requires the SBF artifact from `cargo build-sbf`"]
fn initialize_creates_empty_registry() {
    let mollusk = new_basket_mollusk();
    let authority = Pubkey::new_unique();
    let ctx = RegistryContext::new(authority);

    let accounts = vec![
        (authority, system_account(AUTHORITY_LAMPORTS)),
        (ctx.registry, system_account(0)),
        keyed_account_for_system_program(),
    ];

    let result = mollusk.process_instruction(&ctx.initialize(5), &accounts);
    assert!(
        result.program_result.is_ok(),
        "Initialize failed: {:?}",
        result.program_result,
    );

    let view = decode(&result, &ctx.registry);
    assert_eq!(view.authority(), authority);
    assert_eq!(view.max_tokens(), 5);
    assert!(!view.is_paused());
    assert!(view.entries().is_empty());
}

#[test]
#[ignore = "requires the SBF artifact from `cargo build-sbf`"]
fn initialize_rejects_invalid_capacity() {
    let mollusk = new_basket_mollusk();
    let authority = Pubkey::new_unique();
    let ctx = RegistryContext::new(authority);

    for bad_capacity in [0, 11] {
        let accounts = vec![
            (authority, system_account(AUTHORITY_LAMPORTS)),
            (ctx.registry, system_account(0)),
            keyed_account_for_system_program(),
        ];
        mollusk.process_and_validate_instruction(
            &ctx.initialize(bad_capacity),
            &accounts,
            &[Check::err(custom_err(BasketError::InvalidCapacity))],
        );
    }
}

#[test]
#[ignore = "requires the SBF artifact from `cargo build-sbf`"]
fn initialize_twice_fails_already_initialized() {
    let mollusk = new_basket_mollusk();
    let authority = Pubkey::new_unique();
    let ctx = RegistryContext::new(authority);
    let (registry, registry_account) = registry_account_with_data(&authority, 5);

    let accounts = vec![
        (authority, system_account(AUTHORITY_LAMPORTS)),
        (registry, registry_account),
        keyed_account_for_system_program(),
    ];
    mollusk.process_and_validate_instruction(
        &ctx.initialize(5),
        &accounts,
        &[Check::err(custom_err(BasketError::AlreadyInitialized))],
    );
}

#[test]
#[ignore = "requires the SBF artifact from `cargo build-sbf`"]
fn mutations_require_the_authority_signature() {
    let mollusk = new_basket_mollusk();
    let authority = Pubkey::new_unique();
    let ctx = RegistryContext::new(authority);
    let (registry, registry_account) = registry_account_with_data(&authority, 5);

    // The authority's signer flag is stripped from an otherwise valid instruction.
    let mut instruction = ctx.add_token(&Pubkey::new_unique(), 10);
    instruction.accounts[0].is_signer = false;

    let accounts = vec![
        (authority, system_account(AUTHORITY_LAMPORTS)),
        (registry, registry_account),
    ];
    mollusk.process_and_validate_instruction(
        &instruction,
        &accounts,
        &[Check::err(ProgramError::MissingRequiredSignature)],
    );
}

#[test]
#[ignore = "requires the SBF artifact from `cargo build-sbf`"]
fn non_authority_signer_is_unauthorized() {
    let mollusk = new_basket_mollusk();
    let authority = Pubkey::new_unique();
    let stranger = Pubkey::new_unique();
    let (registry, registry_account) = registry_account_with_data(&authority, 5);

    // The stranger signs a mutation aimed at the authority's registry.
    let instruction = client::instructions::add_token(&stranger, &registry, &Pubkey::new_unique(), 10);
    let accounts = vec![
        (stranger, system_account(AUTHORITY_LAMPORTS)),
        (registry, registry_account),
    ];
    mollusk.process_and_validate_instruction(
        &instruction,
        &accounts,
        &[Check::err(custom_err(BasketError::Unauthorized))],
    );
}

#[test]
#[ignore = "requires the SBF artifact from `cargo build-sbf`"]
fn duplicate_and_overweight_adds_are_rejected() {
    let mollusk = new_basket_mollusk();
    let authority = Pubkey::new_unique();
    let ctx = RegistryContext::new(authority);
    let (registry, mut registry_account) = registry_account_with_data(&authority, 5);
    let mint = Pubkey::new_unique();
    add_entry_natively(&mut registry_account, &authority, &mint, 60);

    let accounts = vec![
        (authority, system_account(AUTHORITY_LAMPORTS)),
        (registry, registry_account),
    ];

    mollusk.process_and_validate_instruction(
        &ctx.add_token(&mint, 10),
        &accounts,
        &[Check::err(custom_err(BasketError::DuplicateToken))],
    );
    mollusk.process_and_validate_instruction(
        &ctx.add_token(&Pubkey::new_unique(), 50),
        &accounts,
        &[Check::err(custom_err(BasketError::WeightOverflow))],
    );
}

#[test]
#[ignore = "requires the SBF artifact from `cargo build-sbf`"]
fn full_registry_lifecycle() {
    let mollusk = new_basket_mollusk();
    let authority = Pubkey::new_unique();
    let ctx = RegistryContext::new(authority);
    let x = Pubkey::new_unique();
    let y = Pubkey::new_unique();

    let accounts = vec![
        (authority, system_account(AUTHORITY_LAMPORTS)),
        (ctx.registry, system_account(0)),
        keyed_account_for_system_program(),
    ];
    let (_, accounts) = step(&mollusk, &ctx.initialize(5), accounts);

    let (result, accounts) = step(&mollusk, &ctx.add_token(&x, 10), accounts);
    assert_eq!(decode(&result, &ctx.registry).entries().len(), 1);

    mollusk.process_and_validate_instruction(
        &ctx.add_token(&x, 15),
        &accounts,
        &[Check::err(custom_err(BasketError::DuplicateToken))],
    );

    let (result, accounts) = step(&mollusk, &ctx.remove_token(&x), accounts);
    assert!(decode(&result, &ctx.registry).entries().is_empty());

    mollusk.process_and_validate_instruction(
        &ctx.remove_token(&x),
        &accounts,
        &[Check::err(custom_err(BasketError::TokenNotFound))],
    );

    let (result, accounts) = step(&mollusk, &ctx.set_paused(true), accounts);
    assert!(decode(&result, &ctx.registry).is_paused());

    mollusk.process_and_validate_instruction(
        &ctx.add_token(&y, 10),
        &accounts,
        &[Check::err(custom_err(BasketError::ProgramPaused))],
    );

    let (_, accounts) = step(&mollusk, &ctx.set_paused(false), accounts);
    let (result, _) = step(&mollusk, &ctx.add_token(&y, 10), accounts);

    let view = decode(&result, &ctx.registry);
    assert!(!view.is_paused());
    assert_eq!(view.entries().len(), 1);
    assert_eq!(view.entries()[0].mint, y);
    assert_eq!(view.entries()[0].weight, 10);
}
