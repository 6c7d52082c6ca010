//! Instruction builders for the `basket` program.
//!
//! Each builder produces a ready-to-send [`Instruction`]: the tag byte followed by the
//! fixed-size payload, with the account metas the program's contexts expect.

use basket_interface::instructions::{
    AddTokenInstructionData,
    BasketInstruction,
    InitializeInstructionData,
    RemoveTokenInstructionData,
    SetPausedInstructionData,
};
use solana_sdk::{
    instruction::{
        AccountMeta,
        Instruction,
    },
    pubkey::Pubkey,
    system_program,
};

use crate::pda::program_id;

fn instruction_data(tag: BasketInstruction, data: &[u8]) -> Vec<u8> {
    [&[tag as u8], data].concat()
}

pub fn initialize(authority: &Pubkey, registry: &Pubkey, max_tokens: u8) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(*registry, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: instruction_data(
            BasketInstruction::Initialize,
            InitializeInstructionData::new(max_tokens).as_bytes(),
        ),
    }
}

pub fn add_token(authority: &Pubkey, registry: &Pubkey, mint: &Pubkey, weight: u8) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: mutate_registry_metas(authority, registry),
        data: instruction_data(
            BasketInstruction::AddToken,
            AddTokenInstructionData::new(mint.to_bytes(), weight).as_bytes(),
        ),
    }
}

pub fn remove_token(authority: &Pubkey, registry: &Pubkey, mint: &Pubkey) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: mutate_registry_metas(authority, registry),
        data: instruction_data(
            BasketInstruction::RemoveToken,
            RemoveTokenInstructionData::new(mint.to_bytes()).as_bytes(),
        ),
    }
}

pub fn set_paused(authority: &Pubkey, registry: &Pubkey, paused: bool) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: mutate_registry_metas(authority, registry),
        data: instruction_data(
            BasketInstruction::SetPaused,
            SetPausedInstructionData::new(paused).as_bytes(),
        ),
    }
}

/// The shared account metas for `AddToken`/`RemoveToken`/`SetPaused`.
fn mutate_registry_metas(authority: &Pubkey, registry: &Pubkey) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*registry, false),
    ]
}
