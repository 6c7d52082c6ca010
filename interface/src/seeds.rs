//! Seed constants for the program's derived addresses.
//!
//! Each registry account is a PDA derived from the authority that owns it, so a single
//! deployment can host any number of registries and callers always address one explicitly.

/// The static seed prefix for registry account PDAs.
///
/// The full derivation is `[REGISTRY_SEED, authority]`.
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Returns the two non-bump seeds for the registry PDA owned by `authority`.
#[inline(always)]
pub fn registry_seeds(authority: &pinocchio::pubkey::Pubkey) -> [&[u8]; 2] {
    [REGISTRY_SEED, authority.as_ref()]
}
