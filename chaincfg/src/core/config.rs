// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Validated deployment configuration.
//!
//! A [`DeploymentConfig`] can only be obtained by loading a manifest through [`ConfigLoader`],
//! which checks every field up front and fails on the first problem, naming the field. Once
//! loaded the config is read-only.

use std::{
    collections::BTreeMap,
    env, fs, io,
    path::{Path, PathBuf},
};

use alloy_primitives::Address;
use typed_builder::TypedBuilder;

use crate::core::{
    compiler::{Compilers, Optimizer, SolcSettings},
    db::DbConfig,
    manifest::{
        self, Format, ManifestError, TomlCompilers, TomlConfig, TomlDb, TomlNetwork,
        TomlNetworkId, TomlOptimizer, TomlSolc,
    },
    network::{Host, NetworkDescriptor, NetworkError, NetworkId, Port},
};

/// Network selected when none is requested explicitly.
pub const DEFAULT_NETWORK: &str = "development";
pub const DEFAULT_CONTRACTS_DIRECTORY: &str = "./contracts";
pub const DEFAULT_CONTRACTS_BUILD_DIRECTORY: &str = "./build/contracts";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    Manifest(#[from] ManifestError),
    #[error("could not determine working directory: {0}")]
    WorkingDir(io::Error),

    #[error("missing required field `{0}`")]
    MissingField(String),
    #[error("`{0}` must not be empty")]
    EmptyValue(String),
    #[error("no networks declared (expected at least one `networks.<name>` table)")]
    NoNetworks,
    #[error("network names must not be empty")]
    EmptyNetworkName,
    #[error("`{field}`: {source}")]
    Network { field: String, source: NetworkError },
    #[error("`{field}` must be a positive integer, got {value}")]
    NotPositive { field: String, value: i64 },
    #[error("`{field}`: invalid address {value:?}")]
    InvalidAddress { field: String, value: String },
    #[error("`{field}`: optimizer runs must be a non-negative 32-bit integer, got {value}")]
    InvalidRuns { field: String, value: i64 },

    #[error("`contracts_directory`: {} does not exist", .0.display())]
    ContractsDirNotFound(PathBuf),
    #[error("`contracts_directory`: {} is not a directory", .0.display())]
    ContractsDirNotADirectory(PathBuf),
    #[error("`contracts_directory`: {} is not readable: {source}", .path.display())]
    ContractsDirUnreadable { path: PathBuf, source: io::Error },

    #[error("unknown network `{name}` (available: {available})")]
    UnknownNetwork { name: String, available: String },
}

/// Loads and validates configuration.
///
/// Relative paths in the config (`contracts_directory`) resolve against `working_dir`, which
/// defaults to the process's current directory.
#[derive(Clone, Debug, Default, TypedBuilder)]
#[builder(field_defaults(default))]
pub struct ConfigLoader {
    #[builder(setter(strip_option, into))]
    working_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.toml` or `.json` config file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<DeploymentConfig, ConfigError> {
        let path = path.as_ref();
        let manifest: TomlConfig = manifest::load(path)?;
        let config = self.validate(manifest)?;
        info!(@grey, "loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from literal text.
    pub fn load_str(
        &self,
        contents: &str,
        format: Format,
    ) -> Result<DeploymentConfig, ConfigError> {
        let manifest = manifest::parse_str(contents, format)?;
        self.validate(manifest)
    }

    /// Find the nearest config file at or above `start`, then load it.
    pub fn discover(
        &self,
        start: impl AsRef<Path>,
    ) -> Result<(PathBuf, DeploymentConfig), ConfigError> {
        let path = manifest::discover(start)?;
        let config = self.load(&path)?;
        Ok((path, config))
    }

    /// Validate an already parsed manifest.
    pub fn validate(&self, manifest: TomlConfig) -> Result<DeploymentConfig, ConfigError> {
        let working_dir = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir().map_err(ConfigError::WorkingDir)?,
        };
        validate_config(manifest, &working_dir)
    }
}

/// A validated configuration. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentConfig {
    networks: BTreeMap<String, NetworkDescriptor>,
    contracts_directory: String,
    resolved_contracts_directory: PathBuf,
    contracts_build_directory: String,
    resolved_contracts_build_directory: PathBuf,
    compilers: Compilers,
    db: DbConfig,
}

impl DeploymentConfig {
    /// Load a config file, resolving relative paths against the current directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        ConfigLoader::new().load(path)
    }

    /// Parse config text, resolving relative paths against the current directory.
    pub fn parse(contents: &str, format: Format) -> Result<Self, ConfigError> {
        ConfigLoader::new().load_str(contents, format)
    }

    /// All declared networks, ordered by name.
    pub fn networks(&self) -> &BTreeMap<String, NetworkDescriptor> {
        &self.networks
    }

    /// Look up a network by name.
    pub fn network(&self, name: &str) -> Result<&NetworkDescriptor, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork {
                name: name.to_string(),
                available: self
                    .networks
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// `contracts_directory` exactly as written.
    pub fn contracts_directory(&self) -> &str {
        &self.contracts_directory
    }

    /// `contracts_directory` joined onto the working directory used at load time.
    pub fn resolved_contracts_directory(&self) -> &Path {
        &self.resolved_contracts_directory
    }

    /// Where compiled artifacts are written, exactly as written.
    pub fn contracts_build_directory(&self) -> &str {
        &self.contracts_build_directory
    }

    pub fn resolved_contracts_build_directory(&self) -> &Path {
        &self.resolved_contracts_build_directory
    }

    pub fn compilers(&self) -> &Compilers {
        &self.compilers
    }

    pub fn db(&self) -> DbConfig {
        self.db
    }

    /// Convert back into the manifest shape, with defaults filled in.
    pub fn to_manifest(&self) -> TomlConfig {
        let networks = self
            .networks
            .iter()
            .map(|(name, network)| (name.clone(), network_to_manifest(network)))
            .collect();
        let solc = self.compilers.solc();
        let optimizer = solc.optimizer();
        TomlConfig {
            contracts_directory: Some(self.contracts_directory.clone()),
            contracts_build_directory: Some(self.contracts_build_directory.clone()),
            networks,
            compilers: Some(TomlCompilers {
                solc: Some(TomlSolc {
                    version: solc.version().map(String::from),
                    optimizer: Some(TomlOptimizer {
                        enabled: Some(optimizer.enabled()),
                        runs: Some(optimizer.runs().into()),
                    }),
                }),
            }),
            db: Some(TomlDb {
                enabled: Some(self.db.enabled()),
            }),
        }
    }

    /// Render the config in the given format.
    pub fn render(&self, format: Format) -> Result<String, ManifestError> {
        manifest::to_string(&self.to_manifest(), format)
    }
}

fn network_to_manifest(network: &NetworkDescriptor) -> TomlNetwork {
    let network_id = match network.network_id() {
        NetworkId::Any => TomlNetworkId::Text(network.network_id().to_string()),
        NetworkId::Id(id) => match i64::try_from(id) {
            Ok(id) => TomlNetworkId::Number(id),
            Err(_) => TomlNetworkId::Text(id.to_string()),
        },
    };
    TomlNetwork {
        host: Some(network.host().to_string()),
        port: Some(network.port().get().into()),
        network_id: Some(network_id),
        // Both were range checked from i64 on the way in
        gas: network.gas().and_then(|gas| i64::try_from(gas).ok()),
        gas_price: network.gas_price().and_then(|price| i64::try_from(price).ok()),
        from: network.from().map(|from| from.to_checksum(None)),
    }
}

fn validate_config(
    manifest: TomlConfig,
    working_dir: &Path,
) -> Result<DeploymentConfig, ConfigError> {
    if manifest.networks.is_empty() {
        return Err(ConfigError::NoNetworks);
    }
    let mut networks = BTreeMap::new();
    for (name, network) in manifest.networks {
        let descriptor = validate_network(&name, network)?;
        debug!(@grey, "network {}: {}", name, descriptor.endpoint());
        networks.insert(name, descriptor);
    }

    let contracts_directory = non_empty(
        "contracts_directory",
        manifest.contracts_directory,
        DEFAULT_CONTRACTS_DIRECTORY,
    )?;
    let resolved_contracts_directory = working_dir.join(&contracts_directory);
    check_contracts_directory(&resolved_contracts_directory)?;

    let contracts_build_directory = non_empty(
        "contracts_build_directory",
        manifest.contracts_build_directory,
        DEFAULT_CONTRACTS_BUILD_DIRECTORY,
    )?;
    let resolved_contracts_build_directory = working_dir.join(&contracts_build_directory);

    let compilers = validate_compilers(manifest.compilers)?;
    let db = DbConfig {
        enabled: manifest.db.and_then(|db| db.enabled).unwrap_or_default(),
    };
    if db.enabled {
        debug!(@grey, "embedded db enabled");
    }

    Ok(DeploymentConfig {
        networks,
        contracts_directory,
        resolved_contracts_directory,
        contracts_build_directory,
        resolved_contracts_build_directory,
        compilers,
        db,
    })
}

fn validate_network(name: &str, network: TomlNetwork) -> Result<NetworkDescriptor, ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::EmptyNetworkName);
    }
    let field = |key: &str| format!("networks.{name}.{key}");
    let network_err = |key: &str| {
        let field = field(key);
        move |source| ConfigError::Network { field, source }
    };

    let host = network
        .host
        .ok_or_else(|| ConfigError::MissingField(field("host")))?;
    let host: Host = host.parse().map_err(network_err("host"))?;

    let port = network
        .port
        .ok_or_else(|| ConfigError::MissingField(field("port")))?;
    let port = Port::try_from(port).map_err(network_err("port"))?;

    let network_id = match network.network_id {
        None => return Err(ConfigError::MissingField(field("network_id"))),
        Some(TomlNetworkId::Number(id)) => NetworkId::try_from(id),
        Some(TomlNetworkId::Text(id)) => id.parse(),
    }
    .map_err(network_err("network_id"))?;

    let gas = network.gas.map(|gas| positive(field("gas"), gas)).transpose()?;
    let gas_price = network
        .gas_price
        .map(|price| positive(field("gas_price"), price))
        .transpose()?;
    let from = network
        .from
        .map(|from| {
            from.parse::<Address>()
                .map_err(|_| ConfigError::InvalidAddress {
                    field: field("from"),
                    value: from.clone(),
                })
        })
        .transpose()?;

    Ok(NetworkDescriptor {
        host,
        port,
        network_id,
        gas,
        gas_price,
        from,
    })
}

fn validate_compilers(compilers: Option<TomlCompilers>) -> Result<Compilers, ConfigError> {
    let Some(solc) = compilers.and_then(|c| c.solc) else {
        return Ok(Compilers::default());
    };

    let version = match solc.version {
        Some(version) if version.trim().is_empty() => {
            return Err(ConfigError::EmptyValue("compilers.solc.version".into()));
        }
        version => version,
    };

    let mut optimizer = Optimizer::default();
    if let Some(toml) = solc.optimizer {
        if let Some(enabled) = toml.enabled {
            optimizer.enabled = enabled;
        }
        if let Some(runs) = toml.runs {
            optimizer.runs = u32::try_from(runs).map_err(|_| ConfigError::InvalidRuns {
                field: "compilers.solc.optimizer.runs".into(),
                value: runs,
            })?;
        }
    }

    Ok(Compilers {
        solc: SolcSettings { version, optimizer },
    })
}

fn check_contracts_directory(path: &Path) -> Result<(), ConfigError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::ContractsDirNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ConfigError::ContractsDirUnreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if !metadata.is_dir() {
        return Err(ConfigError::ContractsDirNotADirectory(path.to_path_buf()));
    }
    fs::read_dir(path).map_err(|source| ConfigError::ContractsDirUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn non_empty(field: &str, value: Option<String>, default: &str) -> Result<String, ConfigError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue(field.into())),
        Some(value) => Ok(value),
        None => Ok(default.to_string()),
    }
}

fn positive(field: String, value: i64) -> Result<u64, ConfigError> {
    match u64::try_from(value) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::NotPositive { field, value }),
    }
}
