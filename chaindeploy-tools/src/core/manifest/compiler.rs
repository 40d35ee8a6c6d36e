// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use serde::Deserialize;

/// The `[solidity]` table. Only the external build step consumes it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TomlSolidity {
    #[serde(default)]
    pub compilers: Vec<CompilerProfile>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CompilerProfile {
    pub version: String,
    #[serde(default)]
    pub settings: CompilerSettings,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CompilerSettings {
    #[serde(default)]
    pub optimizer: Optimizer,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Optimizer {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_runs")]
    pub runs: u32,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: default_runs(),
        }
    }
}

fn default_runs() -> u32 {
    200
}
