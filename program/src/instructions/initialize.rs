//! See [`process_initialize`].

use basket_interface::{
    error::BasketError,
    instructions::InitializeInstructionData,
    seeds::REGISTRY_SEED,
    state::registry::required_space,
};
use pinocchio::{
    account_info::AccountInfo,
    instruction::{
        Seed,
        Signer,
    },
    pubkey::try_find_program_address,
    sysvars::{
        rent::Rent,
        Sysvar,
    },
    ProgramResult,
};

use crate::{
    context::initialize_context::InitializeContext,
    shared::registry_operations::initialize_registry_account_data,
};

/// Instruction handler logic for creating a new registry account and initializing its data.
///
/// The registry PDA is derived from the authority, so each authority owns at most one registry
/// and the account address doubles as the registry's handle.
#[inline(never)]
pub fn process_initialize(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let max_tokens = InitializeInstructionData::unpack(instruction_data)?.max_tokens();
    let ctx = InitializeContext::load(accounts)?;

    // It's not necessary to check the returned PDA here because `CreateAccount` will fail if the
    // registry account info's address doesn't match.
    let (_pda, registry_bump) = try_find_program_address(
        &[REGISTRY_SEED, ctx.authority.key().as_ref()],
        &crate::ID,
    )
    .ok_or(BasketError::AddressDerivationFailed)?;

    // Calculate the lamports required to create the registry account with all entry slots
    // preallocated.
    let account_space = required_space(max_tokens);
    let lamports_required = Rent::get()?.minimum_balance(account_space);

    let bump_seed = [registry_bump];
    let signer_seeds = [
        Seed::from(REGISTRY_SEED),
        Seed::from(ctx.authority.key().as_ref()),
        Seed::from(&bump_seed[..]),
    ];

    // Create the registry account PDA.
    pinocchio_system::instructions::CreateAccount {
        from: ctx.authority,                    // WRITE
        to: ctx.registry_account.account,       // WRITE
        lamports: lamports_required,
        space: account_space as u64,
        owner: &crate::ID,
    }
    .invoke_signed(&[Signer::from(&signer_seeds[..])])?;

    initialize_registry_account_data(
        // Safety: Scoped mutable borrow of the registry account data to initialize it.
        unsafe { ctx.registry_account.account.borrow_mut_data_unchecked() },
        ctx.authority.key(),
        max_tokens,
        registry_bump,
    )?;

    crate::debug!("registry initialized with {} entry slots", max_tokens);

    Ok(())
}
