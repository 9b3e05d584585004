// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts (`<contracts_build_directory>/<Name>.json`).
//!
//! Only the keys needed to find a deployed contract are read: its name, ABI and the address
//! recorded for each network id. Everything else in the file is ignored.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use alloy::json_abi::JsonAbi;
use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};

use crate::core::network::NetworkId;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error reading {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid artifact {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid contract name {0:?}")]
    InvalidName(String),
    #[error("no artifact for {contract} at {} (has it been compiled?)", .path.display())]
    Missing { contract: String, path: PathBuf },
    #[error("{contract} has no recorded deployments")]
    NoDeployments { contract: String },
    #[error("{contract} is not deployed on network {network_id}")]
    NotDeployed { contract: String, network_id: u64 },
    #[error("{contract} is deployed on several networks ({ids}); pass an explicit network id")]
    Ambiguous { contract: String, ids: String },
    #[error("network id {requested} does not match the configured network id {configured}")]
    NetworkMismatch { requested: u64, configured: NetworkId },
    #[error("artifact lists a deployment under non-numeric network id {0:?}")]
    InvalidNetworkKey(String),
}

/// The parts of a compiled contract artifact used for address lookup.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    /// Deployments keyed by network id.
    #[serde(default)]
    pub networks: BTreeMap<String, ArtifactNetwork>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactNetwork {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<TxHash>,
}

impl ContractArtifact {
    /// Path of the artifact for `contract` within `build_dir`.
    pub fn path(build_dir: impl AsRef<Path>, contract: &str) -> Result<PathBuf, ArtifactError> {
        let valid = !contract.is_empty()
            && contract != "."
            && contract != ".."
            && !contract.contains(['/', '\\']);
        if !valid {
            return Err(ArtifactError::InvalidName(contract.to_string()));
        }
        Ok(build_dir.as_ref().join(format!("{contract}.json")))
    }

    /// Read the artifact for `contract` from `build_dir`.
    pub fn load(build_dir: impl AsRef<Path>, contract: &str) -> Result<Self, ArtifactError> {
        let path = Self::path(build_dir, contract)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ArtifactError::Missing {
                    contract: contract.to_string(),
                    path,
                });
            }
            Err(source) => return Err(ArtifactError::Io { path, source }),
        };
        let artifact: Self =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Json {
                path: path.clone(),
                source,
            })?;
        if artifact.contract_name != contract {
            warn!(@yellow,
                "{} declares contract name {}",
                path.display(),
                artifact.contract_name
            );
        }
        Ok(artifact)
    }

    /// Find where this contract is deployed for a configured network id.
    ///
    /// A numeric network id selects its own entry. The wildcard selects `requested` if given,
    /// otherwise the only recorded deployment.
    pub fn deployment(
        &self,
        network_id: NetworkId,
        requested: Option<u64>,
    ) -> Result<&ArtifactNetwork, ArtifactError> {
        let id = match (network_id, requested) {
            (configured, Some(requested)) => {
                if !configured.accepts(requested) {
                    return Err(ArtifactError::NetworkMismatch {
                        requested,
                        configured,
                    });
                }
                requested
            }
            (NetworkId::Id(id), None) => id,
            (NetworkId::Any, None) => return self.only_deployment(),
        };
        self.networks
            .get(&id.to_string())
            .ok_or_else(|| ArtifactError::NotDeployed {
                contract: self.contract_name.clone(),
                network_id: id,
            })
    }

    /// Deployed address for a configured network id. See [`Self::deployment`].
    pub fn address_for(
        &self,
        network_id: NetworkId,
        requested: Option<u64>,
    ) -> Result<Address, ArtifactError> {
        self.deployment(network_id, requested)
            .map(|deployment| deployment.address)
    }

    fn only_deployment(&self) -> Result<&ArtifactNetwork, ArtifactError> {
        let mut deployments = self.networks.iter();
        match (deployments.next(), deployments.next()) {
            (None, _) => Err(ArtifactError::NoDeployments {
                contract: self.contract_name.clone(),
            }),
            (Some((key, deployment)), None) => {
                key.parse::<u64>()
                    .map_err(|_| ArtifactError::InvalidNetworkKey(key.clone()))?;
                debug!(@grey,
                    "using the only deployment of {}, on network {}",
                    self.contract_name,
                    key
                );
                Ok(deployment)
            }
            (Some(_), Some(_)) => Err(ArtifactError::Ambiguous {
                contract: self.contract_name.clone(),
                ids: self
                    .networks
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}
