//! See [`RegistryHeader`].

use pinocchio::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    error::{
        BasketError,
        BasketResult,
    },
    state::{
        transmutable::Transmutable,
        LeU64,
    },
};

pub const REGISTRY_ACCOUNT_DISCRIMINANT: u64 = 0xba5ce77eba5ce77e;

/// The most entries a registry can be created to hold. Capacities passed to `Initialize` must be
/// in `1..=MAX_TOKEN_ENTRIES`.
pub const MAX_TOKEN_ENTRIES: u8 = 10;

/// The fixed-size header for each registry account.
///
/// A registry account's data consists of a statically sized [`RegistryHeader`] followed by
/// `max_tokens` entry slots stored as raw bytes, of which the first `num_tokens` hold live
/// [`crate::state::token_entry::TokenEntry`] values in insertion order.
///
/// `authority` and `max_tokens` are written exactly once, when the account is initialized, and
/// never change afterwards.
#[repr(C)]
#[derive(Clone, Debug)]
pub struct RegistryHeader {
    /// The u64 registry account discriminant as LE bytes.
    discriminant: LeU64,
    /// The only identity permitted to mutate this registry.
    pub authority: Pubkey,
    /// The number of live entries.
    num_tokens: u8,
    /// The entry capacity fixed at initialization.
    max_tokens: u8,
    /// Pause gate: 1 blocks add/remove until cleared. Only 0 and 1 are valid.
    paused: u8,
    /// The bump for the registry PDA.
    pub registry_bump: u8,
    // Pad the header length to a multiple of 8.
    _padding: [u8; 4],
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - `validate_bit_patterns` rejects the one field with invalid states (`paused`).
unsafe impl Transmutable for RegistryHeader {
    #[allow(clippy::identity_op)]
    const LEN: usize = 0
    /* discriminant */  + size_of::<LeU64>()
    /* authority */     + size_of::<Pubkey>()
    /* num_tokens */    + size_of::<u8>()
    /* max_tokens */    + size_of::<u8>()
    /* paused */        + size_of::<u8>()
    /* registry_bump */ + size_of::<u8>()
    /* _padding */      + size_of::<[u8; 4]>();

    #[inline(always)]
    fn validate_bit_patterns(bytes: &[u8]) -> BasketResult {
        // `paused` is the only field with invalid bit patterns; it must be 0 or 1.
        const PAUSED_OFFSET: usize = size_of::<LeU64>() + size_of::<Pubkey>() + 2;
        if bytes[PAUSED_OFFSET] > 1 {
            return Err(BasketError::InvalidPauseFlag);
        }
        Ok(())
    }
}

const_assert_eq!(RegistryHeader::LEN, size_of::<RegistryHeader>());
const_assert_eq!(align_of::<RegistryHeader>(), 1);

impl RegistryHeader {
    /// Initializes the header in place for a freshly created, zeroed registry account.
    #[inline(always)]
    pub fn init(&mut self, authority: &Pubkey, max_tokens: u8, registry_bump: u8) {
        *self = RegistryHeader {
            discriminant: REGISTRY_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            authority: *authority,
            num_tokens: 0,
            max_tokens,
            paused: 0,
            registry_bump,
            _padding: [0; 4],
        };
    }

    #[inline(always)]
    pub fn verify_discriminant(&self) -> BasketResult {
        if self.discriminant() != REGISTRY_ACCOUNT_DISCRIMINANT {
            return Err(BasketError::InvalidAccountDiscriminant);
        }
        Ok(())
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
    }

    #[inline(always)]
    pub fn num_tokens(&self) -> u8 {
        self.num_tokens
    }

    #[inline(always)]
    pub fn increment_num_tokens(&mut self) {
        self.num_tokens = self.num_tokens.saturating_add(1);
    }

    #[inline(always)]
    pub fn decrement_num_tokens(&mut self) {
        self.num_tokens = self.num_tokens.saturating_sub(1);
    }

    #[inline(always)]
    pub fn max_tokens(&self) -> u8 {
        self.max_tokens
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.num_tokens >= self.max_tokens
    }

    #[inline(always)]
    pub fn paused(&self) -> bool {
        self.paused == 1
    }

    #[inline(always)]
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused as u8;
    }
}
