// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use crate::{
    core::{
        artifact::Artifact,
        deployment::{self, DeploymentConfig, DeploymentReceipt, RpcSubmitter},
        manifest::NetworkProfile,
    },
    utils::{color::DebugColor, format_eth, format_gwei},
    Result,
};

/// Resolve `contract` under `artifacts` and deploy it to `network`.
pub async fn deploy(
    contract: &str,
    artifacts: &Path,
    network: &NetworkProfile,
    config: &DeploymentConfig,
) -> Result<DeploymentReceipt> {
    let artifact = Artifact::find(artifacts, contract)?;
    debug!(@grey, "endpoint: {}", network.url.debug_lavender());
    let receipt = deployment::deploy(&artifact, network, config, &RpcSubmitter).await?;
    Ok(receipt)
}

/// Resolve `contract` and print what deploying it to `network` would cost.
pub async fn estimate_gas(
    contract: &str,
    artifacts: &Path,
    network: &NetworkProfile,
    config: &DeploymentConfig,
) -> Result<()> {
    let artifact = Artifact::find(artifacts, contract)?;
    let estimate = deployment::estimate_gas(&artifact, network, config, &RpcSubmitter).await?;

    greyln!("estimates");
    greyln!("deployment tx gas: {}", estimate.gas.debug_lavender());
    if let Some(limit) = estimate.gas_limit {
        greyln!("configured gas limit: {}", limit.debug_lavender());
    }
    greyln!("gas price: {}", format_gwei(estimate.gas_price));
    greyln!("deployment tx max cost: {}", format_eth(estimate.max_cost()));
    Ok(())
}
