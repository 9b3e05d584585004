// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for loading and validating smart-contract toolchain configuration.
//!
//! A configuration names one or more networks (host, port, network id), the contracts source
//! directory, the solc optimizer settings and the embedded database flag. It is loaded once,
//! validated up front, and handed out read-only as a [`DeploymentConfig`].

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod utils;

pub use crate::core::{
    artifact::ContractArtifact,
    config::{ConfigError, ConfigLoader, DeploymentConfig},
    manifest::Format,
    network::{Host, NetworkDescriptor, NetworkId, Port},
};
pub use error::{Error, Result};
