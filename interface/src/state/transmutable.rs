use crate::error::{BasketError, BasketResult};

/// Marker trait for a zero-copy view of bytes as `&Self` via an unchecked cast, aka a transmute.
///
/// # Safety
///
/// Implementor guarantees:
/// - `Self` has a stable layout; i.e. `#[repr(C)]` or `#[repr(transparent)]`
/// - `size_of::<Self> == LEN`
/// - `align_of::<Self> == 1`
/// - `validate_bit_patterns` returns `Ok(())` only when `bytes` is a valid representation of `Self`
pub unsafe trait Transmutable: Sized {
    /// The cumulative size in bytes of all fields in the struct.
    const LEN: usize;

    /// Validates that `bytes` represents a valid `Self`.
    ///
    /// Called after length checks, so implementors may assume `bytes.len() == Self::LEN`.
    /// Should be marked `#[inline(always)]` in implementations for optimal performance.
    fn validate_bit_patterns(bytes: &[u8]) -> BasketResult;

    /// Returns a reference to `Self` from the given bytes after checking the byte length and
    /// validating that `bytes` represents a valid bit pattern.
    #[inline(always)]
    fn load(bytes: &[u8]) -> Result<&Self, BasketError> {
        if bytes.len() != Self::LEN {
            return Err(BasketError::InsufficientByteLength);
        }
        Self::validate_bit_patterns(bytes)?;

        // Safety: All bit patterns were validated and `bytes.len() == Self::LEN`
        unsafe { Ok(&*(bytes.as_ptr() as *const Self)) }
    }

    /// Returns a reference to `Self` from the given bytes.
    ///
    /// # Safety
    ///
    /// Caller guarantees either:
    /// - All bit patterns are valid for `Self`, *or*
    /// - `bytes` is a valid representation of `Self`; e.g. enum variants have been validated.
    ///
    /// And:
    /// - `bytes.len()` is equal to `Self::LEN`.
    #[inline(always)]
    unsafe fn load_unchecked(bytes: &[u8]) -> &Self {
        &*(bytes.as_ptr() as *const Self)
    }

    /// Returns a mutable reference to `Self` from the given bytes after checking the byte length
    /// and validating that `bytes` represents a valid bit pattern.
    #[inline(always)]
    fn load_mut(bytes: &mut [u8]) -> Result<&mut Self, BasketError> {
        if bytes.len() != Self::LEN {
            return Err(BasketError::InsufficientByteLength);
        }
        Self::validate_bit_patterns(bytes)?;

        // Safety: All bit patterns were validated and `bytes.len() == Self::LEN`
        unsafe { Ok(&mut *(bytes.as_ptr() as *mut Self)) }
    }

    /// Returns a mutable reference to `Self` from the given bytes.
    ///
    /// # Safety
    ///
    /// Caller guarantees either:
    /// - All bit patterns are valid for `Self`, *or*
    /// - `bytes` is a valid representation of `Self`; e.g. enum variants have been validated.
    ///
    /// And:
    /// - `bytes.len()` is equal to `Self::LEN`.
    #[inline(always)]
    unsafe fn load_unchecked_mut(bytes: &mut [u8]) -> &mut Self {
        &mut *(bytes.as_ptr() as *mut Self)
    }
}
