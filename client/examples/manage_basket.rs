//! Walks a registry through its full lifecycle on a local validator: add two tokens, remove one,
//! pause, and resume.

use client::{
    e2e_helpers::E2e,
    logs::log_divider,
    print_kv,
    LogColor,
};
use colored::Colorize;
use solana_sdk::pubkey::Pubkey;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let e2e = E2e::new_registry(None, 5).await?;
    print_kv!("Registry", e2e.registry.registry, LogColor::Header);

    let sol_mint = Pubkey::new_unique();
    let usdc_mint = Pubkey::new_unique();

    e2e.add_token(&sol_mint, 60).await?;
    e2e.add_token(&usdc_mint, 40).await?;

    log_divider();
    let view = e2e.view_registry().await?;
    for entry in view.entries() {
        print_kv!(entry.mint, entry.weight);
    }

    e2e.remove_token(&sol_mint).await?;

    e2e.set_paused(true).await?;
    // Mutations are rejected while paused; show the failure without aborting the example.
    if let Err(error) = e2e.add_token(&Pubkey::new_unique(), 10).await {
        print_kv!("Add while paused", error, LogColor::Warning);
    }
    e2e.set_paused(false).await?;

    log_divider();
    let view = e2e.view_registry().await?;
    print_kv!("Paused", view.is_paused());
    print_kv!("Entries", view.entries().len());

    Ok(())
}
