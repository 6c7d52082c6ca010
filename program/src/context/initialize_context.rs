//! See [`InitializeContext`].

use basket_interface::error::BasketError;
use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
};

use crate::validation::uninitialized_account_info::UninitializedAccountInfo;

/// The account context for the `Initialize` instruction, validating the authority signature and
/// that the registry account hasn't been created yet.
#[derive(Clone)]
pub struct InitializeContext<'a> {
    pub authority: &'a AccountInfo,
    pub registry_account: UninitializedAccountInfo<'a>,
    pub system_program: &'a AccountInfo,
}

impl<'a> InitializeContext<'a> {
    pub fn load(accounts: &'a [AccountInfo]) -> Result<InitializeContext<'a>, ProgramError> {
        let [authority, registry_account, system_program] = accounts else {
            return Err(BasketError::NotEnoughAccountKeys.into());
        };

        if !authority.is_signer() {
            return Err(ProgramError::MissingRequiredSignature);
        }

        // The registry PDA itself isn't re-derived here: the `CreateAccount` CPI is signed with
        // the derived seeds, so creation fails if the passed account doesn't match the PDA.
        let registry_account = UninitializedAccountInfo::new(registry_account)?;

        Ok(Self {
            authority,
            registry_account,
            system_program,
        })
    }
}
