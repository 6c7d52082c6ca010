//! The registry state machine: initialization plus the three authority-gated mutations.
//!
//! Every mutating operation takes the caller's address explicitly and performs its own
//! authorization check as the first step, returning a typed error instead of leaning on account
//! constraints. All checks complete before the first byte of state is written, so a failed call
//! leaves the account data byte-for-byte unchanged.

use basket_interface::{
    error::{
        BasketError,
        BasketResult,
    },
    state::{
        registry::{
            required_space,
            RegistryRefMut,
        },
        registry_header::{
            RegistryHeader,
            MAX_TOKEN_ENTRIES,
        },
        token_entry::{
            TokenEntry,
            MAX_TOTAL_WEIGHT,
        },
        transmutable::Transmutable,
    },
};
use pinocchio::pubkey::Pubkey;

/// Initializes a freshly created registry account. This function skips the discriminant check
/// based on the assumption that the account has just been created on-chain.
///
/// This function should *only* be called atomically in the same instruction that the registry
/// account is created or in tests.
pub fn initialize_registry_account_data<'a>(
    zeroed_registry_account_data: &'a mut [u8],
    authority: &Pubkey,
    max_tokens: u8,
    registry_bump: u8,
) -> Result<RegistryRefMut<'a>, BasketError> {
    if max_tokens == 0 || max_tokens > MAX_TOKEN_ENTRIES {
        return Err(BasketError::InvalidCapacity);
    }

    let account_data_len = zeroed_registry_account_data.len();
    if account_data_len < RegistryHeader::LEN {
        return Err(BasketError::UnallocatedAccountData);
    }
    if account_data_len != required_space(max_tokens) {
        return Err(BasketError::UnalignedData);
    }

    // Safety: The account's data length was verified and zeroed bytes are a valid header.
    let mut registry = unsafe { RegistryRefMut::from_bytes_mut(zeroed_registry_account_data) };
    registry.header.init(authority, max_tokens, registry_bump);

    Ok(registry)
}

/// Appends a `(mint, weight)` entry for the registry authority.
///
/// Checks, in order: caller is the authority, the registry isn't paused, a slot is free, the mint
/// isn't already tracked, and the weight budget isn't exceeded.
pub fn add_token(
    registry: &mut RegistryRefMut,
    caller: &Pubkey,
    mint: &Pubkey,
    weight: u8,
) -> BasketResult {
    if caller != &registry.header.authority {
        return Err(BasketError::Unauthorized);
    }
    if registry.header.paused() {
        return Err(BasketError::ProgramPaused);
    }
    if registry.header.is_full() {
        return Err(BasketError::BasketFull);
    }
    if registry.find_entry(mint).is_some() {
        return Err(BasketError::DuplicateToken);
    }
    if registry.total_weight() + weight as u16 > MAX_TOTAL_WEIGHT as u16 {
        return Err(BasketError::WeightOverflow);
    }

    registry.push_entry(&TokenEntry::new(*mint, weight))
}

/// Removes the entry with the given mint for the registry authority, preserving the relative
/// order of the remaining entries.
pub fn remove_token(registry: &mut RegistryRefMut, caller: &Pubkey, mint: &Pubkey) -> BasketResult {
    if caller != &registry.header.authority {
        return Err(BasketError::Unauthorized);
    }
    if registry.header.paused() {
        return Err(BasketError::ProgramPaused);
    }

    let index = registry
        .find_entry(mint)
        .ok_or(BasketError::TokenNotFound)?;

    registry.remove_entry(index)
}

/// Sets the pause gate for the registry authority. Setting the current value is a no-op success.
pub fn set_paused(registry: &mut RegistryRefMut, caller: &Pubkey, paused: bool) -> BasketResult {
    if caller != &registry.header.authority {
        return Err(BasketError::Unauthorized);
    }

    registry.header.set_paused(paused);

    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::{
        vec,
        vec::Vec,
    };

    use basket_interface::state::registry::RegistryRef;
    use solana_pubkey::Pubkey as SolanaPubkey;

    use super::*;

    fn unique_pubkey() -> Pubkey {
        SolanaPubkey::new_unique().to_bytes()
    }

    /// A registry account image plus the authority that owns it.
    struct TestRegistry {
        bytes: Vec<u8>,
        authority: Pubkey,
    }

    impl TestRegistry {
        fn new(max_tokens: u8) -> Self {
            let authority = unique_pubkey();
            let mut bytes = vec![0u8; required_space(max_tokens)];
            initialize_registry_account_data(&mut bytes, &authority, max_tokens, 254)
                .expect("Should initialize registry data");
            Self { bytes, authority }
        }

        fn registry(&mut self) -> RegistryRefMut<'_> {
            // Safety: `bytes` was initialized by `initialize_registry_account_data`.
            unsafe { RegistryRefMut::from_bytes_mut(&mut self.bytes) }
        }

        fn view(&self) -> RegistryRef<'_> {
            // Safety: `bytes` was initialized by `initialize_registry_account_data`.
            unsafe { RegistryRef::from_bytes(&self.bytes) }
        }

        fn add(&mut self, caller: &Pubkey, mint: &Pubkey, weight: u8) -> BasketResult {
            add_token(&mut self.registry(), caller, mint, weight)
        }

        fn remove(&mut self, caller: &Pubkey, mint: &Pubkey) -> BasketResult {
            remove_token(&mut self.registry(), caller, mint)
        }

        fn pause(&mut self, caller: &Pubkey, paused: bool) -> BasketResult {
            set_paused(&mut self.registry(), caller, paused)
        }
    }

    #[test]
    fn initialize_yields_empty_unpaused_registry() {
        let test = TestRegistry::new(7);
        let view = test.view();
        assert!(view.is_initialized());
        assert!(view.entries().is_empty());
        assert!(!view.header.paused());
        assert_eq!(view.header.authority, test.authority);
        assert_eq!(view.header.max_tokens(), 7);
        assert_eq!(view.header.num_tokens(), 0);
        assert_eq!(view.header.registry_bump, 254);
        assert_eq!(view.capacity(), 7);
    }

    #[test]
    fn initialize_rejects_invalid_capacities() {
        let authority = unique_pubkey();
        let mut zero_capacity = vec![0u8; required_space(0)];
        assert_eq!(
            initialize_registry_account_data(&mut zero_capacity, &authority, 0, 254).unwrap_err(),
            BasketError::InvalidCapacity,
        );

        let oversized = MAX_TOKEN_ENTRIES + 1;
        let mut too_many = vec![0u8; required_space(oversized)];
        assert_eq!(
            initialize_registry_account_data(&mut too_many, &authority, oversized, 254)
                .unwrap_err(),
            BasketError::InvalidCapacity,
        );
    }

    #[test]
    fn initialize_rejects_misallocated_account_data() {
        let authority = unique_pubkey();
        let mut too_short = vec![0u8; RegistryHeader::LEN - 1];
        assert_eq!(
            initialize_registry_account_data(&mut too_short, &authority, 1, 254).unwrap_err(),
            BasketError::UnallocatedAccountData,
        );

        // Allocated for three entries but initialized for two.
        let mut mismatched = vec![0u8; required_space(3)];
        assert_eq!(
            initialize_registry_account_data(&mut mismatched, &authority, 2, 254).unwrap_err(),
            BasketError::UnalignedData,
        );
    }

    #[test]
    fn adds_track_count_until_capacity() {
        let mut test = TestRegistry::new(5);
        let authority = test.authority;
        let mints: Vec<Pubkey> = (0..5).map(|_| unique_pubkey()).collect();

        for (i, mint) in mints.iter().enumerate() {
            test.add(&authority, mint, 10).unwrap();
            assert_eq!(test.view().header.num_tokens() as usize, i + 1);
        }

        let before = test.bytes.clone();
        assert_eq!(
            test.add(&authority, &unique_pubkey(), 10),
            Err(BasketError::BasketFull),
        );
        assert_eq!(test.bytes, before);

        // Entries remain in insertion order.
        let entry_mints: Vec<Pubkey> = test.view().entries().iter().map(|e| e.mint).collect();
        assert_eq!(entry_mints, mints);
    }

    #[test]
    fn duplicate_mint_is_rejected_without_mutation() {
        let mut test = TestRegistry::new(3);
        let authority = test.authority;
        let mint = unique_pubkey();

        test.add(&authority, &mint, 10).unwrap();
        let before = test.bytes.clone();

        assert_eq!(
            test.add(&authority, &mint, 15),
            Err(BasketError::DuplicateToken),
        );
        assert_eq!(test.bytes, before);
    }

    #[test]
    fn non_authority_callers_are_rejected_without_mutation() {
        let mut test = TestRegistry::new(3);
        let authority = test.authority;
        let stranger = unique_pubkey();
        let mint = unique_pubkey();
        test.add(&authority, &mint, 10).unwrap();

        let before = test.bytes.clone();
        assert_eq!(
            test.add(&stranger, &unique_pubkey(), 10),
            Err(BasketError::Unauthorized),
        );
        assert_eq!(test.remove(&stranger, &mint), Err(BasketError::Unauthorized));
        assert_eq!(test.pause(&stranger, true), Err(BasketError::Unauthorized));
        assert_eq!(test.bytes, before);
    }

    #[test]
    fn pause_gates_add_and_remove() {
        let mut test = TestRegistry::new(3);
        let authority = test.authority;
        let mint = unique_pubkey();
        test.add(&authority, &mint, 10).unwrap();

        test.pause(&authority, true).unwrap();
        assert_eq!(
            test.add(&authority, &unique_pubkey(), 10),
            Err(BasketError::ProgramPaused),
        );
        assert_eq!(
            test.remove(&authority, &mint),
            Err(BasketError::ProgramPaused),
        );

        // Setting the current value again is a no-op success.
        test.pause(&authority, true).unwrap();
        assert!(test.view().header.paused());

        test.pause(&authority, false).unwrap();
        test.add(&authority, &unique_pubkey(), 10).unwrap();
        test.remove(&authority, &mint).unwrap();
    }

    #[test]
    fn remove_deletes_exactly_the_matching_entry() {
        let mut test = TestRegistry::new(4);
        let authority = test.authority;
        let mints: Vec<Pubkey> = (0..4).map(|_| unique_pubkey()).collect();
        for mint in &mints {
            test.add(&authority, mint, 5).unwrap();
        }

        let before = test.bytes.clone();
        assert_eq!(
            test.remove(&authority, &unique_pubkey()),
            Err(BasketError::TokenNotFound),
        );
        assert_eq!(test.bytes, before);

        test.remove(&authority, &mints[1]).unwrap();
        let view = test.view();
        assert_eq!(view.header.num_tokens(), 3);
        assert!(view.find_entry(&mints[1]).is_none());
        let remaining: Vec<Pubkey> = view.entries().iter().map(|e| e.mint).collect();
        assert_eq!(remaining, vec![mints[0], mints[2], mints[3]]);
    }

    #[test]
    fn weight_budget_is_enforced_after_all_other_checks() {
        let mut test = TestRegistry::new(5);
        let authority = test.authority;
        let mint = unique_pubkey();
        test.add(&authority, &mint, 60).unwrap();

        let before = test.bytes.clone();
        assert_eq!(
            test.add(&authority, &unique_pubkey(), 50),
            Err(BasketError::WeightOverflow),
        );
        assert_eq!(test.bytes, before);

        // A duplicate mint is reported as such even when its weight would also overflow.
        assert_eq!(
            test.add(&authority, &mint, 50),
            Err(BasketError::DuplicateToken),
        );

        test.add(&authority, &unique_pubkey(), 40).unwrap();
        assert_eq!(test.view().total_weight(), 100);
    }

    #[test]
    fn error_precedence_follows_check_order() {
        let mut test = TestRegistry::new(1);
        let authority = test.authority;
        let stranger = unique_pubkey();
        let mint = unique_pubkey();

        // Fill the registry, then pause it.
        test.add(&authority, &mint, 10).unwrap();
        test.pause(&authority, true).unwrap();

        // Unauthorized wins over paused and full.
        assert_eq!(
            test.add(&stranger, &mint, 10),
            Err(BasketError::Unauthorized),
        );
        // Paused wins over full and duplicate.
        assert_eq!(test.add(&authority, &mint, 10), Err(BasketError::ProgramPaused));

        // Full wins over duplicate once unpaused.
        test.pause(&authority, false).unwrap();
        assert_eq!(test.add(&authority, &mint, 10), Err(BasketError::BasketFull));
    }

    #[test]
    fn end_to_end_scenario() {
        let mut test = TestRegistry::new(5);
        let authority = test.authority;
        let x = unique_pubkey();
        let y = unique_pubkey();

        test.add(&authority, &x, 10).unwrap();
        assert_eq!(test.add(&authority, &x, 15), Err(BasketError::DuplicateToken));
        test.remove(&authority, &x).unwrap();
        assert!(test.view().entries().is_empty());
        assert_eq!(test.remove(&authority, &x), Err(BasketError::TokenNotFound));
        test.pause(&authority, true).unwrap();
        assert_eq!(test.add(&authority, &y, 10), Err(BasketError::ProgramPaused));
        test.pause(&authority, false).unwrap();
        test.add(&authority, &y, 10).unwrap();

        let view = test.view();
        assert_eq!(view.entries().len(), 1);
        assert_eq!(view.entries()[0].mint, y);
        assert_eq!(view.entries()[0].weight, 10);
    }
}
