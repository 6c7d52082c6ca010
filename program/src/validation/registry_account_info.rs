use basket_interface::{
    error::BasketError,
    state::{
        registry::{
            RegistryRef,
            RegistryRefMut,
        },
        registry_header::RegistryHeader,
        transmutable::Transmutable,
    },
};
use pinocchio::account_info::AccountInfo;

#[derive(Clone)]
pub struct RegistryAccountInfo<'a> {
    /// The account info as a private field. This disallows manual construction, guaranteeing an
    /// extra level of safety and simplifying the safety contracts for the unsafe internal methods.
    info: &'a AccountInfo,
}

impl<'a> RegistryAccountInfo<'a> {
    #[inline(always)]
    pub fn info(&self) -> &'a AccountInfo {
        self.info
    }

    /// Checks that the account is owned by this program and holds a properly initialized
    /// registry: enough bytes for a header, a valid pause flag, and the registry discriminant.
    ///
    /// # Safety
    ///
    /// Caller guarantees:
    /// - WRITE accounts are not currently borrowed in *any* capacity.
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[READ]` Registry account
    #[inline(always)]
    pub unsafe fn new(info: &'a AccountInfo) -> Result<RegistryAccountInfo<'a>, BasketError> {
        if !info.is_owned_by(&crate::ID) {
            return Err(BasketError::InvalidRegistryAccountOwner);
        }

        let data = unsafe { info.borrow_data_unchecked() };
        if data.len() < RegistryHeader::LEN {
            return Err(BasketError::AccountNotInitialized);
        }

        // Validates the pause-flag bit pattern on top of the length check above.
        let header = RegistryHeader::load(&data[..RegistryHeader::LEN])?;
        if header.verify_discriminant().is_err() {
            return Err(BasketError::AccountNotInitialized);
        }

        Ok(Self { info })
    }

    /// Helper function to load registry data given the owner-validated and initialized account.
    ///
    /// # Safety
    ///
    /// Caller guarantees:
    /// - WRITE accounts are not currently borrowed in *any* capacity.
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[READ]` Registry account
    #[inline(always)]
    pub unsafe fn load_unchecked(&self) -> RegistryRef {
        let data = unsafe { self.info.borrow_data_unchecked() };
        // Safety: `Self::new` guarantees the account info is program-owned and initialized.
        unsafe { RegistryRef::from_bytes(data) }
    }

    /// Helper function to load registry data given the owner-validated and initialized account.
    ///
    /// # Safety
    ///
    /// Caller guarantees:
    /// - WRITE accounts are not currently borrowed in *any* capacity.
    /// - READ accounts are not currently mutably borrowed.
    ///
    /// ### Accounts
    ///   0. `[WRITE]` Registry account
    #[inline(always)]
    pub unsafe fn load_unchecked_mut(&mut self) -> RegistryRefMut {
        let data = unsafe { self.info.borrow_mut_data_unchecked() };
        // Safety: `Self::new` guarantees the account info is program-owned and initialized.
        unsafe { RegistryRefMut::from_bytes_mut(data) }
    }
}
