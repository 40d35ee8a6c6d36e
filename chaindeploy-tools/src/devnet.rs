// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::time::Duration;

use eyre::{Result, WrapErr};
use reqwest::{header::HeaderValue, Method, Response};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

use crate::core::manifest::NetworkProfile;

/// First prefunded anvil account.
pub const DEVNET_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub const DEVNET_CHAIN_ID: u64 = 31337;

const ANVIL_IMAGE_NAME: &str = "ghcr.io/foundry-rs/foundry";
const ANVIL_IMAGE_TAG: &str = "stable";
const ANVIL_PORT: u16 = 8545;

/// Manage a local anvil node for deploying contracts.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a new anvil node in the background.
    /// This node will be shutdown when this struct is dropped.
    pub async fn new() -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(ANVIL_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"net_version","params":[],"id":1}"#)
            .with_response_matcher_async(rpc_response_matcher);
        let container = GenericImage::new(ANVIL_IMAGE_NAME, ANVIL_IMAGE_TAG)
            .with_exposed_port(ANVIL_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_cmd(vec!["anvil --host 0.0.0.0"])
            .start()
            .await
            .wrap_err("failed to start anvil container")?;
        let port = container
            .get_host_port_ipv4(ANVIL_PORT)
            .await
            .wrap_err("failed to get anvil RPC port")?;
        Ok(Node {
            _container: container,
            rpc: format!("http://localhost:{port}"),
        })
    }

    /// Get the node RPC.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// A network profile signing with the prefunded devnet key.
    pub fn network(&self) -> NetworkProfile {
        NetworkProfile {
            name: "devnet".to_owned(),
            url: self.rpc.clone(),
            chain_id: Some(DEVNET_CHAIN_ID),
            gas: Some(2_100_000),
            gas_price: Some(10_000_000_000),
            accounts: vec![DEVNET_PRIVATE_KEY.to_owned()],
            confirmation_timeout: Duration::from_secs(30),
            confirmations: 1,
        }
    }
}

async fn rpc_response_matcher(response: Response) -> bool {
    let Ok(text) = response.text().await else {
        return false;
    };
    text.contains("result")
}
