//! Solana program entrypoint.
//!
//! Forwards incoming instructions from the runtime into the program's core instruction processing
//! logic.

use basket_interface::{
    error::BasketError,
    instructions::BasketInstruction,
};
use pinocchio::{
    account_info::AccountInfo,
    no_allocator,
    nostd_panic_handler,
    program_entrypoint,
    pubkey::Pubkey,
    ProgramResult,
};

use crate::instructions::*;

program_entrypoint!(process_instruction);
no_allocator!();
nostd_panic_handler!();

pub fn process_instruction(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data_with_tag: &[u8],
) -> ProgramResult {
    let [tag, instruction_data @ ..] = instruction_data_with_tag else {
        return Err(BasketError::InvalidInstructionTag.into());
    };

    match BasketInstruction::try_from(*tag)? {
        BasketInstruction::Initialize => process_initialize(accounts, instruction_data),
        BasketInstruction::AddToken => process_add_token(accounts, instruction_data),
        BasketInstruction::RemoveToken => process_remove_token(accounts, instruction_data),
        BasketInstruction::SetPaused => process_set_paused(accounts, instruction_data),
    }
}
