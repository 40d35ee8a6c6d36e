// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::time::Duration;

use serde::{de, Deserialize, Deserializer};

/// Endpoint used when a network does not name one: a local development node.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8545";

/// Confirmation wait used when neither the network nor the command line sets one.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(300);

/// Block confirmations required when neither the network nor the command line sets them.
pub const DEFAULT_CONFIRMATIONS: u64 = 1;

/// A `[networks.<name>]` table as written in `Deploy.toml`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TomlNetwork {
    pub url: Option<String>,
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub gas: GasSetting,
    #[serde(default)]
    pub gas_price: GasSetting,
    pub accounts: Option<Vec<String>>,
    /// Seconds to wait for the deployment to be mined.
    pub confirmation_timeout: Option<u64>,
    pub confirmations: Option<u64>,
}

/// A gas amount that is either fixed in the manifest or left to the node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GasSetting {
    #[default]
    Auto,
    Fixed(u64),
}

impl GasSetting {
    pub fn fixed(self) -> Option<u64> {
        match self {
            Self::Auto => None,
            Self::Fixed(value) => Some(value),
        }
    }
}

impl<'de> Deserialize<'de> for GasSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Fixed(u64),
            Keyword(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Fixed(value) => Ok(Self::Fixed(value)),
            Raw::Keyword(keyword) if keyword == "auto" => Ok(Self::Auto),
            Raw::Keyword(other) => Err(de::Error::invalid_value(
                de::Unexpected::Str(&other),
                &"an integer or \"auto\"",
            )),
        }
    }
}

/// The network a deployment is submitted to, resolved from the manifest.
///
/// Strings are carried exactly as written: an empty `url` or an empty account key reaches the
/// transport or the signer unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkProfile {
    pub name: String,
    pub url: String,
    pub chain_id: Option<u64>,
    pub gas: Option<u64>,
    pub gas_price: Option<u128>,
    pub accounts: Vec<String>,
    pub confirmation_timeout: Duration,
    pub confirmations: u64,
}

impl NetworkProfile {
    pub fn new(name: impl Into<String>, toml: &TomlNetwork) -> Self {
        Self {
            name: name.into(),
            url: toml
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned()),
            chain_id: toml.chain_id,
            gas: toml.gas.fixed(),
            gas_price: toml.gas_price.fixed().map(u128::from),
            accounts: toml.accounts.clone().unwrap_or_default(),
            confirmation_timeout: toml
                .confirmation_timeout
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_CONFIRMATION_TIMEOUT),
            confirmations: toml.confirmations.unwrap_or(DEFAULT_CONFIRMATIONS),
        }
    }

    /// The built-in profile for a local development node.
    pub fn local(name: impl Into<String>) -> Self {
        Self::new(name, &TomlNetwork::default())
    }

    /// Whether transactions are signed by the node's own unlocked account.
    pub fn uses_node_accounts(&self) -> bool {
        self.accounts.is_empty()
    }
}
