// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts produced by the external build step.
//!
//! Artifacts live at `<artifacts>/<source path>/<ContractName>.json`. A contract is looked up either
//! by its bare name, which must be unique across the build output, or by its fully qualified name
//! `contracts/Storage.sol:Storage`.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::json_abi::JsonAbi;
use glob::Pattern;
use serde::Deserialize;

use crate::utils::decode0x;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid artifact {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("{0}")]
    Glob(#[from] glob::GlobError),

    #[error("artifact for contract {name:?} not found in {}", .root.display())]
    NotFound { name: String, root: PathBuf },
    #[error(
        "multiple artifacts for contract {name:?}, use a fully qualified name: {}",
        .candidates.join(", ")
    )]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error(
        "contract {0} has no creation bytecode (abstract contract or interface?)"
    )]
    EmptyBytecode(String),
    #[error("contract {name} has unlinked libraries: {}", .libraries.join(", "))]
    UnlinkedLibraries { name: String, libraries: Vec<String> },
    #[error("contract {name} has invalid bytecode: {source}")]
    InvalidBytecode {
        name: String,
        source: hex::FromHexError,
    },
}

/// A compiled contract ready for deployment.
#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    pub contract_name: String,
    pub source_name: String,
    pub abi: JsonAbi,
    pub bytecode: Vec<u8>,
}

impl Artifact {
    /// Resolve and load the artifact for `name` under `root`.
    pub fn find(root: impl AsRef<Path>, name: &str) -> Result<Self, ArtifactError> {
        let path = find(root.as_ref(), name)?;
        Self::load(path)
    }

    /// Load an artifact file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let raw: RawArtifact =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        raw.try_into()
    }

    /// The `source:Name` form of the contract name.
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }
}

/// Locate the artifact file for a bare or fully qualified contract name.
pub fn find(root: &Path, name: &str) -> Result<PathBuf, ArtifactError> {
    if let Some((source, contract)) = name.rsplit_once(':') {
        let path = root.join(source).join(format!("{contract}.json"));
        return if path.is_file() {
            Ok(path)
        } else {
            Err(ArtifactError::NotFound {
                name: name.to_owned(),
                root: root.to_path_buf(),
            })
        };
    }

    let pattern = format!(
        "{}/**/{}.json",
        Pattern::escape(&root.to_string_lossy()),
        Pattern::escape(name)
    );
    let mut matches = Vec::new();
    for path in glob::glob(&pattern)? {
        let path = path?;
        // Build info and cache files never sit in a `*.sol` directory.
        if path
            .parent()
            .and_then(Path::extension)
            .is_some_and(|ext| ext == "sol")
        {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(ArtifactError::NotFound {
            name: name.to_owned(),
            root: root.to_path_buf(),
        }),
        1 => Ok(matches.remove(0)),
        _ => Err(ArtifactError::Ambiguous {
            name: name.to_owned(),
            candidates: matches
                .iter()
                .filter_map(|path| qualified_name(root, path))
                .collect(),
        }),
    }
}

fn qualified_name(root: &Path, path: &Path) -> Option<String> {
    let source = path.parent()?.strip_prefix(root).ok()?;
    let contract = path.file_stem()?.to_string_lossy();
    let source = source
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    Some(format!("{source}:{contract}"))
}

/// Artifact file as written by the build step.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: String,
    source_name: String,
    abi: JsonAbi,
    bytecode: String,
    #[serde(default)]
    link_references: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

impl TryFrom<RawArtifact> for Artifact {
    type Error = ArtifactError;

    fn try_from(raw: RawArtifact) -> Result<Self, Self::Error> {
        if !raw.link_references.is_empty() || raw.bytecode.contains("__$") {
            let libraries = raw
                .link_references
                .iter()
                .flat_map(|(source, libs)| libs.keys().map(move |lib| format!("{source}:{lib}")))
                .collect();
            return Err(ArtifactError::UnlinkedLibraries {
                name: raw.contract_name,
                libraries,
            });
        }

        let bytecode = decode0x(&raw.bytecode).map_err(|source| ArtifactError::InvalidBytecode {
            name: raw.contract_name.clone(),
            source,
        })?;
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(raw.contract_name));
        }

        Ok(Self {
            contract_name: raw.contract_name,
            source_name: raw.source_name,
            abi: raw.abi,
            bytecode,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Creation code for a contract whose runtime code is a single `STOP`.
    pub(crate) const STOP_INITCODE: &str = "0x6001600c60003960016000f300";

    pub(crate) fn write_artifact(root: &Path, source: &str, name: &str, abi: &str, bytecode: &str) {
        let dir = root.join(source);
        fs::create_dir_all(&dir).unwrap();
        let json = format!(
            r#"{{
  "_format": "hh-sol-artifact-1",
  "contractName": "{name}",
  "sourceName": "{source}",
  "abi": {abi},
  "bytecode": "{bytecode}",
  "deployedBytecode": "0x00",
  "linkReferences": {{}},
  "deployedLinkReferences": {{}}
}}"#
        );
        fs::write(dir.join(format!("{name}.json")), json).unwrap();
        fs::write(dir.join(format!("{name}.dbg.json")), "{}").unwrap();
    }

    #[test]
    fn finds_by_bare_name() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "contracts/IPFSStorage.sol",
            "IPFSStorage",
            "[]",
            STOP_INITCODE,
        );
        fs::create_dir_all(dir.path().join("build-info")).unwrap();
        fs::write(dir.path().join("build-info/IPFSStorage.json"), "{}").unwrap();

        let artifact = Artifact::find(dir.path(), "IPFSStorage").unwrap();
        assert_eq!(artifact.contract_name, "IPFSStorage");
        assert_eq!(
            artifact.fully_qualified_name(),
            "contracts/IPFSStorage.sol:IPFSStorage"
        );
        assert_eq!(artifact.bytecode, decode0x(STOP_INITCODE).unwrap());
        assert!(artifact.abi.constructor.is_none());
    }

    #[test]
    fn missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifact::find(dir.path(), "IPFSStorage").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
    }

    #[test]
    fn root_and_name_are_matched_literally() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("proj[1]*?/artifacts");
        write_artifact(
            &root,
            "contracts/IPFSStorage.sol",
            "IPFSStorage",
            "[]",
            STOP_INITCODE,
        );

        let artifact = Artifact::find(&root, "IPFSStorage").unwrap();
        assert_eq!(artifact.contract_name, "IPFSStorage");

        assert!(matches!(
            Artifact::find(&root, "IPFS*"),
            Err(ArtifactError::NotFound { .. })
        ));
        assert!(matches!(
            Artifact::find(&root, "IPFSStorag?"),
            Err(ArtifactError::NotFound { .. })
        ));
    }

    #[test]
    fn ambiguous_name_needs_qualification() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "contracts/A.sol", "Storage", "[]", STOP_INITCODE);
        write_artifact(dir.path(), "contracts/B.sol", "Storage", "[]", STOP_INITCODE);

        match Artifact::find(dir.path(), "Storage").unwrap_err() {
            ArtifactError::Ambiguous { candidates, .. } => {
                assert_eq!(
                    candidates,
                    ["contracts/A.sol:Storage", "contracts/B.sol:Storage"]
                );
            }
            err => panic!("unexpected error: {err}"),
        }

        let artifact = Artifact::find(dir.path(), "contracts/B.sol:Storage").unwrap();
        assert_eq!(artifact.source_name, "contracts/B.sol");
        assert!(Artifact::find(dir.path(), "contracts/C.sol:Storage").is_err());
    }

    #[test]
    fn rejects_undeployable_bytecode() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "contracts/I.sol", "IStorage", "[]", "0x");
        write_artifact(
            dir.path(),
            "contracts/L.sol",
            "Linked",
            "[]",
            "0x73__$f7a8c5b9b1a2c3d4e5f6a7b8c9d0e1f2a3$__6001",
        );

        assert!(matches!(
            Artifact::find(dir.path(), "IStorage"),
            Err(ArtifactError::EmptyBytecode(_))
        ));
        assert!(matches!(
            Artifact::find(dir.path(), "Linked"),
            Err(ArtifactError::UnlinkedLibraries { .. })
        ));
    }
}
