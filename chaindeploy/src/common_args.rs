// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, time::Duration};

use chaindeploy_tools::core::manifest::{DeployManifest, ManifestError, NetworkProfile};

use crate::constants::{CONFIG_ENV, NETWORK_ENV};

#[derive(Debug, clap::Args)]
pub struct ManifestArgs {
    /// Path to the deployment manifest [default: Deploy.toml in the current directory]
    #[arg(long, env = CONFIG_ENV)]
    config: Option<PathBuf>,
}

impl ManifestArgs {
    pub fn load(&self) -> Result<DeployManifest, ManifestError> {
        DeployManifest::read(self.config.as_deref())
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network profile from the manifest to deploy to
    #[arg(long, env = NETWORK_ENV)]
    network: Option<String>,
    /// Seconds to wait for the deployment to be mined, overriding the profile
    #[arg(long)]
    timeout: Option<u64>,
    /// Block confirmations to wait for, overriding the profile
    #[arg(long)]
    confirmations: Option<u64>,
}

impl NetworkArgs {
    pub fn select(&self, manifest: &DeployManifest) -> Result<NetworkProfile, ManifestError> {
        manifest.network(self.network.as_deref())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn confirmations(&self) -> Option<u64> {
        self.confirmations
    }
}

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Directory holding compiled artifacts, overriding `paths.artifacts` from the manifest
    #[arg(long)]
    artifacts: Option<PathBuf>,
}

impl ArtifactArgs {
    pub fn dir(&self, manifest: &DeployManifest) -> PathBuf {
        self.artifacts
            .clone()
            .unwrap_or_else(|| manifest.artifacts_dir())
    }
}
