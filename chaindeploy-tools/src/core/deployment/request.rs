// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract creation transaction built from an artifact and a network profile

use std::{fmt, time::Duration};

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxKind},
    rpc::types::TransactionRequest,
    signers::{local::PrivateKeySigner, Signer},
};

use super::{constructor, DeploymentConfig, DeploymentError};
use crate::core::{artifact::Artifact, manifest::NetworkProfile};

/// Deployment transaction request, together with where and how it is submitted.
pub struct DeploymentRequest {
    endpoint: String,
    accounts: Vec<String>,
    tx: TransactionRequest,
    confirmations: u64,
    timeout: Duration,
}

impl DeploymentRequest {
    /// Build the creation transaction for `artifact` on `network`.
    ///
    /// Gas limit, gas price and chain id are copied from the profile when it sets them and are
    /// otherwise left for the node to fill in.
    pub fn new(
        artifact: &Artifact,
        network: &NetworkProfile,
        config: &DeploymentConfig,
    ) -> Result<Self, DeploymentError> {
        let mut initcode = artifact.bytecode.clone();
        initcode.extend(constructor::encode_args(
            &artifact.abi,
            &config.constructor_args,
            config.constructor_value,
        )?);

        let mut tx = TransactionRequest::default()
            .with_deploy_code(initcode)
            .with_value(config.constructor_value);
        if let Some(chain_id) = network.chain_id {
            tx.set_chain_id(chain_id);
        }
        if let Some(gas) = network.gas {
            tx.set_gas_limit(gas);
        }
        if let Some(gas_price) = network.gas_price {
            tx.set_gas_price(gas_price);
        }

        Ok(Self {
            endpoint: network.url.clone(),
            accounts: network.accounts.clone(),
            tx,
            confirmations: config.confirmations.unwrap_or(network.confirmations),
            timeout: config
                .confirmation_timeout
                .unwrap_or(network.confirmation_timeout),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Account keys exactly as configured.
    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    /// Whether the node signs with its own unlocked account.
    pub fn uses_node_accounts(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn tx(&self) -> &TransactionRequest {
        &self.tx
    }

    /// Creation bytecode followed by encoded constructor arguments.
    pub fn initcode(&self) -> &[u8] {
        self.tx
            .input
            .input()
            .map(|input| input.as_ref())
            .unwrap_or_default()
    }

    pub fn is_create(&self) -> bool {
        matches!(self.tx.to, Some(TxKind::Create))
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.tx.chain_id
    }

    pub fn gas_limit(&self) -> Option<u64> {
        self.tx.gas
    }

    pub fn gas_price(&self) -> Option<u128> {
        self.tx.gas_price
    }

    pub fn confirmations(&self) -> u64 {
        self.confirmations
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Parse the configured keys into signers; the first one sends the transaction.
    pub fn signers(&self) -> Result<Vec<PrivateKeySigner>, DeploymentError> {
        self.accounts
            .iter()
            .enumerate()
            .map(|(index, key)| {
                key.parse::<PrivateKeySigner>()
                    .map(|signer| signer.with_chain_id(self.tx.chain_id))
                    .map_err(|source| DeploymentError::InvalidAccount { index, source })
            })
            .collect()
    }

    /// The transaction to send, with `from` set.
    pub fn into_tx(self, from: Address) -> TransactionRequest {
        self.tx.with_from(from)
    }
}

impl fmt::Debug for DeploymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeploymentRequest")
            .field("endpoint", &self.endpoint)
            .field("accounts", &self.accounts.len())
            .field("tx", &self.tx)
            .field("confirmations", &self.confirmations)
            .field("timeout", &self.timeout)
            .finish()
    }
}
