//! Definitions and re-exports of all program instructions, organized for both client-side and
//! on-chain usage.
//!
//! Every instruction is encoded as a single tag byte followed by a fixed-size, little-endian
//! data payload defined in [`crate::instructions`]'s submodules.

pub mod add_token;
pub mod initialize;
pub mod remove_token;
pub mod set_paused;

pub use add_token::AddTokenInstructionData;
pub use initialize::InitializeInstructionData;
pub use remove_token::RemoveTokenInstructionData;
pub use set_paused::SetPausedInstructionData;

use crate::error::BasketError;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    any(test, feature = "client"),
    derive(strum_macros::FromRepr, strum_macros::EnumIter)
)]
#[cfg_attr(feature = "client", derive(strum_macros::Display))]
pub enum BasketInstruction {
    /// Create and initialize a registry account for the authority.
    ///
    /// ### Accounts
    ///   0. `[WRITE, SIGNER]` The authority creating (and paying for) the registry.
    ///   1. `[WRITE]` The registry account PDA.
    ///   2. `[]` The system program.
    Initialize,

    /// Append a token entry to the registry.
    ///
    /// ### Accounts
    ///   0. `[SIGNER]` The registry authority.
    ///   1. `[WRITE]` The registry account PDA.
    AddToken,

    /// Remove a token entry from the registry, preserving the order of the rest.
    ///
    /// ### Accounts
    ///   0. `[SIGNER]` The registry authority.
    ///   1. `[WRITE]` The registry account PDA.
    RemoveToken,

    /// Set the pause gate that blocks `AddToken` and `RemoveToken`.
    ///
    /// ### Accounts
    ///   0. `[SIGNER]` The registry authority.
    ///   1. `[WRITE]` The registry account PDA.
    SetPaused,
}

impl TryFrom<u8> for BasketInstruction {
    type Error = BasketError;

    #[inline(always)]
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(BasketInstruction::Initialize),
            1 => Ok(BasketInstruction::AddToken),
            2 => Ok(BasketInstruction::RemoveToken),
            3 => Ok(BasketInstruction::SetPaused),
            _ => Err(BasketError::InvalidInstructionTag),
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    extern crate std;
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ixn_tag_try_from_u8_happy_path() {
        for variant in BasketInstruction::iter() {
            let variant_u8 = variant as u8;
            assert_eq!(
                BasketInstruction::from_repr(variant_u8).unwrap(),
                BasketInstruction::try_from(variant_u8).unwrap(),
            );
            assert_eq!(BasketInstruction::try_from(variant_u8).unwrap(), variant);
        }
    }

    #[test]
    fn test_ixn_tag_try_from_u8_exhaustive() {
        let valids = BasketInstruction::iter()
            .map(|v| v as u8)
            .collect::<HashSet<_>>();

        for v in 0..=u8::MAX {
            if valids.contains(&v) {
                assert_eq!(
                    BasketInstruction::from_repr(v).unwrap(),
                    BasketInstruction::try_from(v).unwrap(),
                );
                assert_eq!(BasketInstruction::try_from(v).unwrap() as u8, v);
            } else {
                assert_eq!(
                    BasketInstruction::from_repr(v).is_none(),
                    BasketInstruction::try_from(v).is_err(),
                );
            }
        }
    }
}
