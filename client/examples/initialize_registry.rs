//! Creates a fresh registry on a local validator and prints its initial state.
//!
//! Expects `solana-test-validator` running on `http://localhost:8899` with the `basket` program
//! deployed.

use client::{
    e2e_helpers::E2e,
    print_kv,
};
use colored::Colorize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let e2e = E2e::new_registry(None, 5).await?;

    let view = e2e.view_registry().await?;
    print_kv!("Registry", e2e.registry.registry);
    print_kv!("Authority", view.authority());
    print_kv!("Capacity", view.max_tokens());
    print_kv!("Paused", view.is_paused());
    print_kv!("Entries", view.entries().len());

    Ok(())
}
