use pinocchio::pubkey::Pubkey;
use static_assertions::const_assert_eq;

use crate::{
    error::BasketError,
    state::transmutable::Transmutable,
};

#[repr(C)]
pub struct AddTokenInstructionData {
    mint: Pubkey,
    weight: u8,
}

impl AddTokenInstructionData {
    pub fn new(mint: Pubkey, weight: u8) -> Self {
        Self { mint, weight }
    }

    #[inline(always)]
    pub fn mint(&self) -> &Pubkey {
        &self.mint
    }

    #[inline(always)]
    pub fn weight(&self) -> u8 {
        self.weight
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
unsafe impl Transmutable for AddTokenInstructionData {
    const LEN: usize = size_of::<Pubkey>() + size_of::<u8>();

    #[inline(always)]
    fn validate_bit_patterns(_bytes: &[u8]) -> crate::error::BasketResult {
        // All bit patterns are valid: no enums, bools, or other types with invalid states.
        Ok(())
    }
}

const_assert_eq!(
    AddTokenInstructionData::LEN,
    size_of::<AddTokenInstructionData>()
);
const_assert_eq!(1, align_of::<AddTokenInstructionData>());

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let data = AddTokenInstructionData::new([3u8; 32], 45);
        let unpacked = AddTokenInstructionData::unpack(data.as_bytes()).unwrap();
        assert_eq!(unpacked.mint(), &[3u8; 32]);
        assert_eq!(unpacked.weight(), 45);
    }

    #[test]
    fn rejects_short_buffers() {
        assert_eq!(
            AddTokenInstructionData::unpack(&[0u8; 32]).unwrap_err(),
            BasketError::InsufficientByteLength,
        );
    }
}
