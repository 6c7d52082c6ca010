//! See [`process_remove_token`].

use basket_interface::instructions::RemoveTokenInstructionData;
use pinocchio::{
    account_info::AccountInfo,
    ProgramResult,
};

use crate::{
    context::mutate_registry_context::MutateRegistryContext,
    shared::registry_operations,
};

/// Instruction handler logic for removing a token entry from a registry.
#[inline(never)]
pub fn process_remove_token(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let instruction_data = RemoveTokenInstructionData::unpack(instruction_data)?;

    // Safety: No account data is currently borrowed.
    let mut ctx = unsafe { MutateRegistryContext::load(accounts) }?;

    // Safety: Scoped mutable borrow of the registry account data for the mutation.
    let mut registry = unsafe { ctx.registry_account.load_unchecked_mut() };

    registry_operations::remove_token(&mut registry, ctx.authority.key(), instruction_data.mint())?;

    Ok(())
}
