//! Client-side utilities for interacting with the `basket` registry program.
//!
//! Includes context helpers, instruction builders, account views, and PDA derivations.

pub mod context;
pub mod e2e_helpers;
pub mod instructions;
pub mod logs;
pub mod mollusk_helpers;
pub mod pda;
pub mod transactions;
pub mod views;

pub use logs::LogColor;
