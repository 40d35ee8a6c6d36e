// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Prefix of the single line printed on stdout after a successful deployment.
pub const DEPLOYED_PREFIX: &str = "Contract deployed to:";

/// Environment variable selecting the network profile.
pub const NETWORK_ENV: &str = "CHAINDEPLOY_NETWORK";

/// Environment variable pointing at the deployment manifest.
pub const CONFIG_ENV: &str = "CHAINDEPLOY_CONFIG";
