//! See [`process_add_token`].

use basket_interface::instructions::AddTokenInstructionData;
use pinocchio::{
    account_info::AccountInfo,
    ProgramResult,
};

use crate::{
    context::mutate_registry_context::MutateRegistryContext,
    shared::registry_operations,
};

/// Instruction handler logic for appending a token entry to a registry.
#[inline(never)]
pub fn process_add_token(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let instruction_data = AddTokenInstructionData::unpack(instruction_data)?;

    // Safety: No account data is currently borrowed.
    let mut ctx = unsafe { MutateRegistryContext::load(accounts) }?;

    // Safety: Scoped mutable borrow of the registry account data for the mutation.
    let mut registry = unsafe { ctx.registry_account.load_unchecked_mut() };

    registry_operations::add_token(
        &mut registry,
        ctx.authority.key(),
        instruction_data.mint(),
        instruction_data.weight(),
    )?;

    Ok(())
}
