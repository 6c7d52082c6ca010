//! Account context definitions for each `basket` instruction.
//!
//! Each context groups and validates the accounts required by its corresponding instruction before
//! execution.

pub mod initialize_context;
pub mod mutate_registry_context;
