// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The `Deploy.toml` manifest: named network profiles, compiler settings and explorer settings.
//!
//! The manifest is read once at startup and never mutated. Values are not validated; whatever is
//! written is handed to the signer or the transport as-is.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize};

pub use compiler::{CompilerProfile, CompilerSettings, Optimizer, TomlSolidity};
pub use network::{GasSetting, NetworkProfile, TomlNetwork, DEFAULT_ENDPOINT};

pub mod compiler;
pub mod network;

/// Filename for the deployment manifest.
pub const FILENAME: &str = "Deploy.toml";

/// Network selected when neither the command line nor the manifest picks one.
pub const DEFAULT_NETWORK: &str = "hardhat";

/// Build output directory when the manifest does not set `paths.artifacts`.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing {}", .0.display())]
    Missing(PathBuf),
    #[error("unknown network {name:?}, expected one of: {}", .known.join(", "))]
    UnknownNetwork { name: String, known: Vec<String> },
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeployManifest {
    pub default_network: Option<String>,
    #[serde(default)]
    pub solidity: TomlSolidity,
    #[serde(default)]
    pub networks: BTreeMap<String, TomlNetwork>,
    #[serde(default)]
    pub etherscan: TomlExplorer,
    #[serde(default)]
    pub paths: TomlPaths,
    /// Directory holding the manifest; relative paths inside it resolve from here.
    #[serde(skip)]
    pub root: PathBuf,
}

/// The `[etherscan]` table. The key is carried as written, including when empty.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TomlExplorer {
    #[serde(default)]
    pub api_key: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TomlPaths {
    pub artifacts: Option<PathBuf>,
}

impl DeployManifest {
    /// Read the manifest at `path`, or `Deploy.toml` in the current directory.
    ///
    /// An explicit path must exist. Without one, a missing `Deploy.toml` yields the defaults,
    /// which only know the local `hardhat` network.
    pub fn read(path: Option<&Path>) -> Result<Self, ManifestError> {
        let path = match path {
            Some(path) => path,
            None if Path::new(FILENAME).exists() => Path::new(FILENAME),
            None => {
                debug!(@grey, "no {FILENAME} found, using defaults");
                return Ok(Self::default());
            }
        };
        let mut manifest: Self = load(path)?;
        manifest.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(manifest)
    }

    /// Resolve the network to deploy to.
    ///
    /// `selected` comes from the command line or environment; otherwise `defaultNetwork` is used,
    /// falling back to [`DEFAULT_NETWORK`].
    pub fn network(&self, selected: Option<&str>) -> Result<NetworkProfile, ManifestError> {
        let name = selected
            .or(self.default_network.as_deref())
            .unwrap_or(DEFAULT_NETWORK);
        match self.networks.get(name) {
            Some(toml) => Ok(NetworkProfile::new(name, toml)),
            None if name == DEFAULT_NETWORK => Ok(NetworkProfile::local(name)),
            None => Err(ManifestError::UnknownNetwork {
                name: name.to_owned(),
                known: self.network_names().map(ToOwned::to_owned).collect(),
            }),
        }
    }

    /// All selectable network names, including the built-in local one.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        let builtin = (!self.networks.contains_key(DEFAULT_NETWORK)).then_some(DEFAULT_NETWORK);
        builtin
            .into_iter()
            .chain(self.networks.keys().map(String::as_str))
    }

    /// Directory holding compiled artifacts, relative to the manifest's directory.
    pub fn artifacts_dir(&self) -> PathBuf {
        let artifacts = self
            .paths
            .artifacts
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_ARTIFACTS_DIR));
        self.root.join(artifacts)
    }
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::Missing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let manifest = toml::from_str(&contents)?;
    Ok(manifest)
}
