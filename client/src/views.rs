//! Read-only view helpers for decoding `basket` on-chain registry accounts into ergonomic Rust
//! structs.
//!
//! [`RegistryView`] is the client-side read surface of a registry: its entries, pause state,
//! authority, and capacity.

use anyhow::bail;
use basket_interface::state::{
    registry::RegistryRef,
    registry_header::RegistryHeader,
    token_entry::TokenEntry,
    transmutable::Transmutable,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    pda::program_id,
    transactions::CustomRpcClient,
};

/// Fetches and decodes the registry account at `registry`.
pub async fn view_registry_account(
    rpc: &CustomRpcClient,
    registry: &Pubkey,
) -> anyhow::Result<RegistryView> {
    let account = rpc.client.get_account(registry).await?;
    try_registry_view_from_owner_and_data(&account.owner, &account.data)
}

/// Decodes registry account bytes after checking the owner and header validity.
pub fn try_registry_view_from_owner_and_data(
    owner: &Pubkey,
    data: &[u8],
) -> anyhow::Result<RegistryView> {
    if owner != &program_id() {
        bail!("Account isn't owned by the basket program");
    }
    if data.len() < RegistryHeader::LEN {
        bail!("Account is uninitialized");
    }
    if let Err(e) = RegistryHeader::load(&data[..RegistryHeader::LEN]) {
        bail!("Invalid registry header: {e}");
    }

    // Safety: Length and bit patterns were just checked.
    let registry = unsafe { RegistryRef::from_bytes(data) };
    if !registry.is_initialized() {
        bail!("Account is uninitialized");
    }

    Ok(registry.into())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryHeaderView {
    pub discriminant: u64,
    pub authority: Pubkey,
    pub num_tokens: u8,
    pub max_tokens: u8,
    pub paused: bool,
    pub registry_bump: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntryView {
    pub mint: Pubkey,
    pub weight: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryView {
    pub header: RegistryHeaderView,
    pub entries: Vec<TokenEntryView>,
}

impl RegistryView {
    /// The live entries, in insertion order.
    pub fn entries(&self) -> &[TokenEntryView] {
        &self.entries
    }

    pub fn is_paused(&self) -> bool {
        self.header.paused
    }

    pub fn authority(&self) -> Pubkey {
        self.header.authority
    }

    pub fn max_tokens(&self) -> u8 {
        self.header.max_tokens
    }
}

impl From<&RegistryHeader> for RegistryHeaderView {
    fn from(header: &RegistryHeader) -> Self {
        Self {
            discriminant: header.discriminant(),
            authority: Pubkey::new_from_array(header.authority),
            num_tokens: header.num_tokens(),
            max_tokens: header.max_tokens(),
            paused: header.paused(),
            registry_bump: header.registry_bump,
        }
    }
}

impl From<&TokenEntry> for TokenEntryView {
    fn from(entry: &TokenEntry) -> Self {
        Self {
            mint: Pubkey::new_from_array(entry.mint),
            weight: entry.weight,
        }
    }
}

impl From<RegistryRef<'_>> for RegistryView {
    fn from(registry: RegistryRef) -> Self {
        Self {
            header: registry.header.into(),
            entries: registry.entries().iter().map(TokenEntryView::from).collect(),
        }
    }
}
