//! See [`MutateRegistryContext`].

use basket_interface::error::BasketError;
use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
};

use crate::validation::registry_account_info::RegistryAccountInfo;

/// The account context for any instruction that mutates an existing registry (add, remove, or
/// pause), validating the authority signature and the registry account passed in.
///
/// The authority *signature* is checked here; whether the signer is the registry's recorded
/// authority is checked by the operation itself.
#[derive(Clone)]
pub struct MutateRegistryContext<'a> {
    pub authority: &'a AccountInfo,
    pub registry_account: RegistryAccountInfo<'a>,
}

impl<'a> MutateRegistryContext<'a> {
    /// # Safety
    ///
    /// Caller guarantees no accounts passed have their data borrowed in any capacity. This is a
    /// more restrictive safety contract than is necessary for soundness but is much simpler.
    pub unsafe fn load(
        accounts: &'a [AccountInfo],
    ) -> Result<MutateRegistryContext<'a>, ProgramError> {
        let [authority, registry_account] = accounts else {
            return Err(BasketError::NotEnoughAccountKeys.into());
        };

        if !authority.is_signer() {
            return Err(ProgramError::MissingRequiredSignature);
        }

        // Safety: Scoped borrow of registry account data.
        let registry_account = unsafe { RegistryAccountInfo::new(registry_account) }?;

        Ok(Self {
            authority,
            registry_account,
        })
    }
}
