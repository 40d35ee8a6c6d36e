// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use chaindeploy_tools::ops;

use crate::{common_args::ManifestArgs, error::ChainDeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Also show gas settings, accounts, compiler and explorer settings.
    #[arg(long)]
    details: bool,

    #[command(flatten)]
    manifest: ManifestArgs,
}

pub fn exec(args: Args) -> ChainDeployResult {
    let manifest = args.manifest.load()?;
    ops::print_networks(&manifest, args.details)?;
    Ok(())
}
