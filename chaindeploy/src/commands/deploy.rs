// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{utils::parse_ether, Address, U256};
use chaindeploy_tools::{core::deployment::DeploymentConfig, ops};

use crate::{
    common_args::{ArtifactArgs, ManifestArgs, NetworkArgs},
    constants::DEPLOYED_PREFIX,
    error::ChainDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contract to deploy, by name (`Storage`) or fully qualified (`contracts/Storage.sol:Storage`).
    contract: String,
    /// Only perform gas estimation.
    #[arg(long)]
    estimate_gas: bool,
    /// The constructor arguments.
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_hyphen_values = true,
    )]
    constructor_args: Vec<String>,
    /// The amount of Ether sent to the contract through the constructor.
    #[arg(long, value_parser = parse_ether, default_value = "0")]
    value: U256,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    manifest: ManifestArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub async fn exec(args: Args) -> ChainDeployResult {
    let manifest = args.manifest.load()?;
    let network = args.network.select(&manifest)?;
    let artifacts = args.artifacts.dir(&manifest);
    let config = DeploymentConfig {
        constructor_args: args.constructor_args,
        constructor_value: args.value,
        confirmation_timeout: args.network.timeout(),
        confirmations: args.network.confirmations(),
    };
    log::debug!("deploying {} to network {}", args.contract, network.name);

    if args.estimate_gas {
        ops::estimate_gas(&args.contract, &artifacts, &network, &config).await?;
        return Ok(());
    }

    let receipt = ops::deploy(&args.contract, &artifacts, &network, &config).await?;
    println!("{}", deployed_line(&receipt.contract_address));
    Ok(())
}

fn deployed_line(address: &Address) -> String {
    format!("{DEPLOYED_PREFIX} {address}")
}
