//! Helpers for driving the compiled `basket` program inside the Mollusk SVM harness, plus
//! fixtures for building registry accounts without a VM.

use std::path::PathBuf;

use basket::shared::registry_operations::initialize_registry_account_data;
use basket_interface::state::registry::required_space;
use mollusk_svm::Mollusk;
use solana_sdk::{
    account::Account,
    pubkey::Pubkey,
    rent::Rent,
    system_program,
};

use crate::pda::{
    find_registry_address,
    program_id,
};

/// Converts an input deploy file to a program name used by the [`Mollusk::new`] function.
///
/// Requires the full file name; for example, `basket.so` would return the absolute path version
/// of `../target/deploy/basket`, which is exactly what [`Mollusk::new`] expects.
fn deploy_file_to_program_name(deploy_file: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../target/deploy/")
        .join(deploy_file)
        .canonicalize()
        .map(|p| {
            p.to_str()
                .expect("Path should convert to a &str")
                .strip_suffix(".so")
                .expect("Deploy file should have an `.so` suffix")
                .to_string()
        })
        .expect("Should create relative target/deploy/ path")
}

/// Creates a [`Mollusk`] instance with the compiled `basket` program loaded.
///
/// Requires the SBF build artifact from `cargo build-sbf` under `target/deploy/`.
pub fn new_basket_mollusk() -> Mollusk {
    Mollusk::new(&program_id(), &deploy_file_to_program_name("basket.so"))
}

/// A plain, rent-funded system account.
pub fn system_account(lamports: u64) -> Account {
    Account::new(lamports, 0, &system_program::ID)
}

/// Builds an already-initialized registry account image for `authority` without running the
/// program: the same bytes `Initialize` would produce on-chain.
///
/// Returns the registry address together with the account.
pub fn registry_account_with_data(authority: &Pubkey, max_tokens: u8) -> (Pubkey, Account) {
    let (registry, registry_bump) = find_registry_address(authority);

    let mut data = vec![0u8; required_space(max_tokens)];
    initialize_registry_account_data(
        &mut data,
        &authority.to_bytes(),
        max_tokens,
        registry_bump,
    )
    .expect("Should initialize registry data");

    let account = Account {
        lamports: Rent::default().minimum_balance(data.len()),
        data,
        owner: program_id(),
        executable: false,
        rent_epoch: 0,
    };

    (registry, account)
}
