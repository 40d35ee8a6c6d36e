// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use chaindeploy_tools::core::{
    artifact::ArtifactError, deployment::DeploymentError, manifest::ManifestError,
};

pub type ChainDeployResult = Result<(), ChainDeployError>;

/// Every failure ends the process with the same exit code; only the message differs.
#[derive(Debug)]
pub struct ChainDeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl ChainDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for ChainDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for ChainDeployError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for ChainDeployError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<chaindeploy_tools::Error> for ChainDeployError {
    fn from(err: chaindeploy_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ArtifactError> for ChainDeployError {
    fn from(err: ArtifactError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<DeploymentError> for ChainDeployError {
    fn from(err: DeploymentError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<ManifestError> for ChainDeployError {
    fn from(err: ManifestError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}
