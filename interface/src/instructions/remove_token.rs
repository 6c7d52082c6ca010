use pinocchio::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    error::BasketError,
    state::transmutable::Transmutable,
};

#[repr(C)]
pub struct RemoveTokenInstructionData {
    mint: Pubkey,
}

impl RemoveTokenInstructionData {
    pub fn new(mint: Pubkey) -> Self {
        Self { mint }
    }

    #[inline(always)]
    pub fn mint(&self) -> &Pubkey {
        &self.mint
    }

    #[inline(always)]
    pub fn unpack(instruction_data: &[u8]) -> Result<&Self, BasketError> {
        Self::load(instruction_data)
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        unsafe { &*(self as *const Self as *const [u8; Self::LEN]) }
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for RemoveTokenInstructionData {
    const LEN: usize = size_of::<Pubkey>();

    #[inline(always)]
    fn validate_bit_patterns(_bytes: &[u8]) -> crate::error::BasketResult {
        // All bit patterns are valid: no enums, bools, or other types with invalid states.
        Ok(())
    }
}

const_assert_eq!(
    RemoveTokenInstructionData::LEN,
    size_of::<RemoveTokenInstructionData>()
);
const_assert_eq!(1, align_of::<RemoveTokenInstructionData>());
