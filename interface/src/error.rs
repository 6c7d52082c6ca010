//! Common error types and conversion helpers to represent them as error message strings.

use pinocchio::program_error::ProgramError;

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "client", derive(strum_macros::FromRepr))]
#[repr(u8)]
pub enum BasketError {
    InvalidInstructionTag,
    InsufficientByteLength,
    InvalidAccountDiscriminant,
    AccountNotInitialized,
    AlreadyInitialized,
    NotOwnedBySystemProgram,
    InvalidRegistryAccountOwner,
    NotEnoughAccountKeys,
    UnallocatedAccountData,
    UnalignedData,
    InvalidPauseFlag,
    AddressDerivationFailed,
    InvalidCapacity,
    Unauthorized,
    ProgramPaused,
    BasketFull,
    DuplicateToken,
    TokenNotFound,
    WeightOverflow,
}

impl From<BasketError> for ProgramError {
    #[inline(always)]
    fn from(e: BasketError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<BasketError> for &'static str {
    fn from(value: BasketError) -> Self {
        match value {
            BasketError::InvalidInstructionTag => "Invalid instruction tag",
            BasketError::InsufficientByteLength => "Not enough bytes passed",
            BasketError::InvalidAccountDiscriminant => "Invalid account discriminant",
            BasketError::AccountNotInitialized => "Account hasn't been initialized",
            BasketError::AlreadyInitialized => "Account has already been initialized",
            BasketError::NotOwnedBySystemProgram => "Account is not owned by the system program",
            BasketError::InvalidRegistryAccountOwner => "Invalid registry account owner",
            BasketError::NotEnoughAccountKeys => "Not enough account keys passed",
            BasketError::UnallocatedAccountData => "Account data hasn't been properly allocated",
            BasketError::UnalignedData => "Account data is unaligned",
            BasketError::InvalidPauseFlag => "Pause flag must be 0 or 1",
            BasketError::AddressDerivationFailed => "PDA derivation failed",
            BasketError::InvalidCapacity => "Registry capacity must be between 1 and the maximum",
            BasketError::Unauthorized => "Caller is not the registry authority",
            BasketError::ProgramPaused => "Registry is paused",
            BasketError::BasketFull => "Registry already holds the maximum number of tokens",
            BasketError::DuplicateToken => "Token mint is already in the registry",
            BasketError::TokenNotFound => "Token mint not found in the registry",
            BasketError::WeightOverflow => "Total token weight would exceed the maximum",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for BasketError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type BasketResult = Result<(), BasketError>;
