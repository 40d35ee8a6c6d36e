// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.
//!
//! A deployment is a single creation transaction: it is submitted once, awaited until mined (or
//! until the confirmation timeout expires) and never retried.

use std::time::Duration;

use alloy::primitives::{Address, TxHash, U256};

use crate::{
    core::{artifact::Artifact, manifest::NetworkProfile},
    utils::color::DebugColor,
};

pub use request::DeploymentRequest;
pub use submitter::{RpcSubmitter, Submitter};

pub mod constructor;
pub mod request;
pub mod submitter;

/// Per-invocation settings layered over the selected network profile.
#[derive(Debug, Default)]
pub struct DeploymentConfig {
    pub constructor_args: Vec<String>,
    pub constructor_value: U256,
    /// Overrides the profile's confirmation timeout.
    pub confirmation_timeout: Option<Duration>,
    /// Overrides the profile's required confirmations.
    pub confirmations: Option<u64>,
}

/// Outcome of a mined deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub contract_address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

/// Result of a dry run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas: u64,
    /// Gas limit the profile would send instead of the estimate, if it fixes one.
    pub gas_limit: Option<u64>,
    pub gas_price: u128,
}

impl GasEstimate {
    /// Upper bound of the transaction fee in wei.
    pub fn max_cost(&self) -> u128 {
        let gas = self.gas_limit.unwrap_or(self.gas);
        self.gas_price.saturating_mul(gas.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::TransportError),

    #[error("invalid key for account #{index}: {source}")]
    InvalidAccount {
        index: usize,
        source: alloy::signers::local::LocalSignerError,
    },
    #[error("no account available to send the deployment")]
    NoAccounts,
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("deploy tx {} was not confirmed: {source}", .tx_hash.debug_red())]
    Unconfirmed {
        tx_hash: TxHash,
        source: alloy::providers::PendingTransactionError,
    },
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of {}", .tx_hash.debug_red())]
    NoContractAddress { tx_hash: TxHash },
}

/// Deploys `artifact` to `network`, returning once the creation transaction is mined.
pub async fn deploy(
    artifact: &Artifact,
    network: &NetworkProfile,
    config: &DeploymentConfig,
    submitter: &impl Submitter,
) -> Result<DeploymentReceipt, DeploymentError> {
    let request = DeploymentRequest::new(artifact, network, config)?;
    debug!(@grey,
        "deploying {} to {} ({} bytes of initcode)",
        artifact.fully_qualified_name(),
        network.name,
        request.initcode().len()
    );

    let receipt = submitter.submit(request).await?;
    info!(@grey, "deployed code at address: {}", receipt.contract_address.debug_lavender());
    debug!(@grey, "gas used: {}", receipt.gas_used);
    info!(@grey, "deployment tx hash: {}", receipt.tx_hash.debug_lavender());
    Ok(receipt)
}

/// Estimates the deployment of `artifact` to `network` without sending it.
pub async fn estimate_gas(
    artifact: &Artifact,
    network: &NetworkProfile,
    config: &DeploymentConfig,
    submitter: &impl Submitter,
) -> Result<GasEstimate, DeploymentError> {
    let request = DeploymentRequest::new(artifact, network, config)?;
    submitter.estimate(&request).await
}
