//! PDA derivations for `basket` registry accounts.

use basket_interface::seeds::REGISTRY_SEED;
use solana_sdk::pubkey::Pubkey;

/// The `basket` program id as an SDK pubkey.
pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(basket::ID)
}

/// Derives the registry account PDA owned by `authority`.
///
/// One registry exists per authority; the derived address is the handle every instruction and
/// query uses to name it.
pub fn find_registry_address(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_SEED, authority.as_ref()], &program_id())
}
