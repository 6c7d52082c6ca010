//! See [`process_set_paused`].

use basket_interface::instructions::SetPausedInstructionData;
use pinocchio::{
    account_info::AccountInfo,
    ProgramResult,
};

use crate::{
    context::mutate_registry_context::MutateRegistryContext,
    shared::registry_operations,
};

/// Instruction handler logic for toggling a registry's pause gate.
///
/// Setting the flag to its current value is a successful no-op, so replayed pause transactions
/// are harmless.
#[inline(never)]
pub fn process_set_paused(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let instruction_data = SetPausedInstructionData::unpack(instruction_data)?;

    // Safety: No account data is currently borrowed.
    let mut ctx = unsafe { MutateRegistryContext::load(accounts) }?;

    // Safety: Scoped mutable borrow of the registry account data for the mutation.
    let mut registry = unsafe { ctx.registry_account.load_unchecked_mut() };

    registry_operations::set_paused(&mut registry, ctx.authority.key(), instruction_data.paused())?;

    Ok(())
}
