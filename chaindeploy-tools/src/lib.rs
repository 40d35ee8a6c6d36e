// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for deploying compiled EVM contract artifacts.
//!
//! The [`core`] module holds the building blocks (manifest, artifacts, deployment) while [`ops`]
//! wires them together the way the `chaindeploy` CLI runs them.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;

pub use error::{Error, Result};
