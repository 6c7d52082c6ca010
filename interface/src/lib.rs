//! Public interface layer defining instruction schemas, registry account state, and shared
//! constants for on-chain and client integration.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod instructions;
pub mod seeds;
pub mod state;

pub mod program {
    pinocchio_pubkey::declare_id!("Bask2eURuyg6qFvxECL8JvYNvBBZgqi5TcbrUSsYEPNh");
}
