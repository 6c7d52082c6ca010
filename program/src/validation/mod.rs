//! Account validation newtypes.
//!
//! Each wrapper proves a property about the underlying account (program ownership, initialized
//! registry data, or a blank system account) at construction time.

pub mod registry_account_info;
pub mod uninitialized_account_info;
