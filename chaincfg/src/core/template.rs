// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Initialize a project with a default configuration.

use std::path::{Path, PathBuf};

use crate::{core::config::DEFAULT_CONTRACTS_DIRECTORY, utils::create_dir_if_dne};

/// Contracts directory as a plain relative path, without the leading `./`.
fn contracts_dir() -> &'static str {
    DEFAULT_CONTRACTS_DIRECTORY.trim_start_matches("./")
}

/// Errors which may occur from initializing a project.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write a default `chaincfg.toml` and create the contracts directory in `path`.
///
/// Existing files are left untouched. Returns the paths which were created.
pub fn init(path: impl AsRef<Path>) -> Result<Vec<PathBuf>, TemplateError> {
    let path = path.as_ref();
    create_dir_if_dne(path)?;

    let mut created = copy_from_template_if_dne!(
        "src/templates/project" -> path,
        "chaincfg.toml",
    );

    let contracts = path.join(contracts_dir());
    if create_dir_if_dne(&contracts)? {
        created.push(contracts);
    }

    for created in &created {
        info!(@mint, "created {}", created.display());
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::{config::ConfigLoader, network::NetworkId};

    #[test]
    fn init_creates_loadable_project() {
        let dir = tempfile::tempdir().unwrap();
        let created = init(dir.path()).unwrap();
        assert_eq!(created.len(), 2);
        let contracts = created[1].display().to_string();
        assert_eq!(contracts, dir.path().join("contracts").display().to_string());
        assert!(!contracts.contains("/./"), "{contracts}");
        assert!(dir.path().join("contracts").is_dir());

        let config = ConfigLoader::builder()
            .working_dir(dir.path())
            .build()
            .load(dir.path().join("chaincfg.toml"))
            .unwrap();
        let dev = config.network("development").unwrap();
        assert_eq!(dev.endpoint(), "http://127.0.0.1:8545");
        assert_eq!(dev.network_id(), NetworkId::Any);
        assert_eq!(config.compilers().solc().optimizer().runs(), 200);
        assert!(!config.db().enabled());
    }

    #[test]
    fn init_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("chaincfg.toml");
        fs::write(&manifest, "# mine\n").unwrap();

        let created = init(dir.path()).unwrap();
        assert_eq!(created, vec![dir.path().join("contracts")]);
        assert_eq!(fs::read_to_string(&manifest).unwrap(), "# mine\n");

        assert!(init(dir.path()).unwrap().is_empty());
    }
}
