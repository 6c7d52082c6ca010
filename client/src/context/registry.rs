//! Registry-level context for building `basket` instructions from contextual address data.

use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
};

use crate::{
    instructions,
    pda::find_registry_address,
};

/// A struct containing contextual fields for a registry.
///
/// Implements helper methods for building all program instructions using those values.
pub struct RegistryContext {
    pub authority: Pubkey,
    pub registry: Pubkey,
    pub registry_bump: u8,
}

impl RegistryContext {
    /// Creates a new [`RegistryContext`] by deriving the registry PDA from the authority.
    pub fn new(authority: Pubkey) -> Self {
        let (registry, registry_bump) = find_registry_address(&authority);

        Self {
            authority,
            registry,
            registry_bump,
        }
    }

    pub fn initialize(&self, max_tokens: u8) -> Instruction {
        instructions::initialize(&self.authority, &self.registry, max_tokens)
    }

    pub fn add_token(&self, mint: &Pubkey, weight: u8) -> Instruction {
        instructions::add_token(&self.authority, &self.registry, mint, weight)
    }

    pub fn remove_token(&self, mint: &Pubkey) -> Instruction {
        instructions::remove_token(&self.authority, &self.registry, mint)
    }

    pub fn set_paused(&self, paused: bool) -> Instruction {
        instructions::set_paused(&self.authority, &self.registry, paused)
    }
}
