//! Convenience harness for end-to-end examples against a local validator.
//!
//! Upon instantiation it:
//! - Airdrops [`crate::transactions::DEFAULT_FUND_AMOUNT`] lamports to a fresh authority.
//! - Creates and initializes the authority's registry with the requested capacity.

use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
};

use crate::{
    context::registry::RegistryContext,
    transactions::CustomRpcClient,
    views::{
        view_registry_account,
        RegistryView,
    },
};

pub struct E2e {
    pub rpc: CustomRpcClient,
    pub registry: RegistryContext,
    pub authority: Keypair,
}

impl E2e {
    pub async fn new_registry(
        rpc: Option<CustomRpcClient>,
        max_tokens: u8,
    ) -> anyhow::Result<Self> {
        let rpc = rpc.unwrap_or_default();

        let authority = rpc.fund_new_account().await?;
        let registry = RegistryContext::new(authority.pubkey());

        rpc.send_single_signer(&authority, [registry.initialize(max_tokens)])
            .await?;

        Ok(Self {
            rpc,
            registry,
            authority,
        })
    }

    pub async fn view_registry(&self) -> anyhow::Result<RegistryView> {
        view_registry_account(&self.rpc, &self.registry.registry).await
    }

    pub async fn add_token(&self, mint: &Pubkey, weight: u8) -> anyhow::Result<Signature> {
        self.rpc
            .send_single_signer(&self.authority, [self.registry.add_token(mint, weight)])
            .await
    }

    pub async fn remove_token(&self, mint: &Pubkey) -> anyhow::Result<Signature> {
        self.rpc
            .send_single_signer(&self.authority, [self.registry.remove_token(mint)])
            .await
    }

    pub async fn set_paused(&self, paused: bool) -> anyhow::Result<Signature> {
        self.rpc
            .send_single_signer(&self.authority, [self.registry.set_paused(paused)])
            .await
    }
}
