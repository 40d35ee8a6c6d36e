// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Submission of deployment requests to a JSON-RPC endpoint.

use std::time::Duration;

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::Address,
    providers::{PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
};

use super::{DeploymentError, DeploymentReceipt, DeploymentRequest, GasEstimate};
use crate::utils::color::DebugColor;

/// Sends deployment requests to a network and waits for them to be mined.
#[allow(async_fn_in_trait)]
pub trait Submitter {
    /// Ask the network what the request would cost without sending it.
    async fn estimate(&self, request: &DeploymentRequest) -> Result<GasEstimate, DeploymentError>;

    /// Sign and send the request, then wait for its receipt.
    async fn submit(&self, request: DeploymentRequest)
        -> Result<DeploymentReceipt, DeploymentError>;
}

/// [`Submitter`] backed by an alloy provider connected to the request's endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct RpcSubmitter;

impl Submitter for RpcSubmitter {
    async fn estimate(&self, request: &DeploymentRequest) -> Result<GasEstimate, DeploymentError> {
        let provider = ProviderBuilder::new().connect(request.endpoint()).await?;
        let from = match request.signers()?.first() {
            Some(signer) => signer.address(),
            None => node_account(&provider).await?,
        };
        let tx = request.tx().clone().from(from);

        let gas = provider.estimate_gas(tx).await?;
        let gas_price = match request.gas_price() {
            Some(gas_price) => gas_price,
            None => provider.get_gas_price().await?,
        };
        Ok(GasEstimate {
            gas,
            gas_limit: request.gas_limit(),
            gas_price,
        })
    }

    async fn submit(
        &self,
        request: DeploymentRequest,
    ) -> Result<DeploymentReceipt, DeploymentError> {
        let endpoint = request.endpoint().to_owned();
        let confirmations = request.confirmations();
        let timeout = request.timeout();

        if request.uses_node_accounts() {
            let provider = ProviderBuilder::new().connect(&endpoint).await?;
            let from = node_account(&provider).await?;
            debug!(@grey, "sender address (node account): {}", from.debug_lavender());
            return send(&provider, request.into_tx(from), confirmations, timeout).await;
        }

        let mut signers = request.signers()?.into_iter();
        let Some(sender) = signers.next() else {
            return Err(DeploymentError::NoAccounts);
        };
        let from = sender.address();
        debug!(@grey, "sender address: {}", from.debug_lavender());

        let mut wallet = EthereumWallet::new(sender);
        for signer in signers {
            wallet.register_signer(signer);
        }
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&endpoint)
            .await?;
        send(&provider, request.into_tx(from), confirmations, timeout).await
    }
}

async fn node_account(provider: &impl Provider) -> Result<Address, DeploymentError> {
    provider
        .get_accounts()
        .await?
        .first()
        .copied()
        .ok_or(DeploymentError::NoAccounts)
}

async fn send(
    provider: &impl Provider,
    tx: TransactionRequest,
    confirmations: u64,
    timeout: Duration,
) -> Result<DeploymentReceipt, DeploymentError> {
    let pending = provider.send_transaction(tx).await?;
    debug!(@grey, "sent deploy tx: {}", pending.tx_hash().debug_lavender());

    let receipt = confirm(pending, confirmations, timeout).await?;
    deployment_receipt(&receipt)
}

/// Wait for the transaction to be mined with `confirmations` blocks, or fail after `timeout`.
async fn confirm(
    pending: PendingTransactionBuilder<Ethereum>,
    confirmations: u64,
    timeout: Duration,
) -> Result<TransactionReceipt, DeploymentError> {
    let tx_hash = *pending.tx_hash();
    pending
        .with_required_confirmations(confirmations)
        .with_timeout(Some(timeout))
        .get_receipt()
        .await
        .map_err(|source| DeploymentError::Unconfirmed { tx_hash, source })
}

fn deployment_receipt(receipt: &TransactionReceipt) -> Result<DeploymentReceipt, DeploymentError> {
    let tx_hash = receipt.transaction_hash;
    if !receipt.status() {
        return Err(DeploymentError::Reverted { tx_hash });
    }

    let contract_address = receipt
        .contract_address
        .ok_or(DeploymentError::NoContractAddress { tx_hash })?;
    Ok(DeploymentReceipt {
        contract_address,
        tx_hash,
        gas_used: receipt.gas_used,
    })
}
