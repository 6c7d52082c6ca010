//! On-chain program managing capacity-bounded baskets of token entries.
//!
//! Each registry account holds an authority, a pause gate, and an ordered, bounded set of
//! `(mint, weight)` entries. Only the authority may mutate a registry, and add/remove are blocked
//! while the registry is paused.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod context;
pub mod debug;
#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;
pub mod instructions;
pub mod shared;
pub mod validation;

pub use basket_interface::program::ID;
