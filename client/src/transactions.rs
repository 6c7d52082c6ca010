//! Lightweight, nonblocking RPC client utilities for funding accounts, sending transactions,
//! and reporting `basket`-related transaction outcomes.

use anyhow::{
    bail,
    Context,
};
use colored::Colorize;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
    },
    signer::Signer,
    transaction::Transaction,
};

use crate::{
    print_kv,
    LogColor,
};

pub struct CustomRpcClient {
    pub client: RpcClient,
}

impl Default for CustomRpcClient {
    fn default() -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(
                "http://localhost:8899".into(),
                CommitmentConfig::confirmed(),
            ),
        }
    }
}

impl CustomRpcClient {
    pub fn new(client: RpcClient) -> Self {
        Self { client }
    }

    pub fn new_from_url(url: &str) -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(url.into(), CommitmentConfig::confirmed()),
        }
    }

    pub async fn fund_account(&self, address: &Pubkey) -> anyhow::Result<()> {
        fund(&self.client, address).await
    }

    pub async fn fund_new_account(&self) -> anyhow::Result<Keypair> {
        let kp = Keypair::new();
        fund(&self.client, &kp.pubkey()).await?;

        Ok(kp)
    }

    /// Sends and confirms a single signer transaction with the signer passed in as the payer and
    /// sole signer.
    /// Instructions that require multiple signers should not be used here as they will obviously
    /// fail.
    pub async fn send_single_signer(
        &self,
        signer: &Keypair,
        instructions: impl AsRef<[Instruction]>,
    ) -> anyhow::Result<Signature> {
        self.send_and_confirm_txn(signer, &[], instructions.as_ref())
            .await
    }

    pub async fn send_and_confirm_txn(
        &self,
        payer: &Keypair,
        signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        let bh = self
            .client
            .get_latest_blockhash()
            .await
            .context("Should be able to get blockhash")?;

        let msg = Message::new(instructions, Some(&payer.pubkey()));
        let mut tx = Transaction::new_unsigned(msg);
        tx.try_sign(
            &std::iter::once(payer)
                .chain(signers.iter().cloned())
                .collect::<Vec<_>>(),
            bh,
        )
        .context("Should sign")?;

        match self.client.send_and_confirm_transaction(&tx).await {
            Ok(signature) => Ok(signature),
            Err(error) => {
                print_kv!("Failed transaction", error, LogColor::Error);
                print_kv!("Payer", payer.pubkey(), LogColor::Error);
                Err(error).context("Failed transaction submission")
            }
        }
    }
}

const MAX_TRIES: u8 = 20;

pub const DEFAULT_FUND_AMOUNT: u64 = 10_000_000_000;

async fn fund(rpc: &RpcClient, address: &Pubkey) -> anyhow::Result<()> {
    let airdrop_signature: Signature = rpc
        .request_airdrop(address, DEFAULT_FUND_AMOUNT)
        .await
        .context("Failed to request airdrop")?;

    let mut i = 0;
    // Wait for airdrop confirmation.
    while !rpc
        .confirm_transaction(&airdrop_signature)
        .await
        .context("Couldn't confirm transaction")?
        && i < MAX_TRIES
    {
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        i += 1;
    }

    if i == MAX_TRIES {
        bail!("Airdrop did not land.");
    }

    Ok(())
}

/// Checks if an account at the given address exists on-chain.
pub async fn account_exists(rpc: &RpcClient, address: &Pubkey) -> anyhow::Result<bool> {
    Ok(rpc
        .get_account_with_commitment(address, CommitmentConfig::confirmed())
        .await
        .context("Couldn't retrieve account data")?
        .value
        .is_some())
}
