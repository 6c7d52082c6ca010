//! Instruction handlers for the `basket` program.
//!
//! Routes decoded instructions to their corresponding handlers and encapsulates all
//! on-chain logic for each supported operation.

pub mod add_token;
pub mod initialize;
pub mod remove_token;
pub mod set_paused;

pub use add_token::process_add_token;
pub use initialize::process_initialize;
pub use remove_token::process_remove_token;
pub use set_paused::process_set_paused;
