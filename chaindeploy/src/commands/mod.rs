// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::ChainDeployResult;

mod deploy;
mod networks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy a compiled contract
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// List the network profiles in the manifest
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
}

pub async fn exec(cmd: Command) -> ChainDeployResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Networks(args) => networks::exec(args),
    }
}
