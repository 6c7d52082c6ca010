use basket_interface::{
    error::BasketError,
    state::SYSTEM_PROGRAM_ID,
};
use pinocchio::account_info::AccountInfo;

/// An account that has not been created yet: zero data and owned by the system program.
///
/// Constructing this for an account that already holds registry data fails with
/// [`BasketError::AlreadyInitialized`], which is how a second `Initialize` for the same
/// authority is rejected.
#[derive(Clone)]
pub struct UninitializedAccountInfo<'a> {
    pub account: &'a AccountInfo,
}

impl<'a> UninitializedAccountInfo<'a> {
    #[inline(always)]
    pub fn new(account: &'a AccountInfo) -> Result<UninitializedAccountInfo<'a>, BasketError> {
        if account.data_len() != 0 {
            return Err(BasketError::AlreadyInitialized);
        }
        if !account.is_owned_by(&SYSTEM_PROGRAM_ID) {
            return Err(BasketError::NotOwnedBySystemProgram);
        }

        Ok(Self { account })
    }
}
