// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{env, path::PathBuf};

use chaincfg::{
    core::{
        config::{ConfigError, DEFAULT_NETWORK},
        manifest,
    },
    ConfigLoader, DeploymentConfig, NetworkDescriptor, Result,
};

use crate::constants::NETWORK_ENV;

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Path to a chaincfg.toml or chaincfg.json file (defaults to the nearest one found from the
    /// current directory upwards).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load and validate the config, returning where it was read from.
    ///
    /// The directory holding the config file is the project root: relative paths inside the
    /// config resolve against it.
    pub fn load(&self) -> Result<(PathBuf, DeploymentConfig)> {
        let cwd = env::current_dir().map_err(ConfigError::WorkingDir)?;
        let path = match &self.config {
            Some(path) => path.clone(),
            None => manifest::discover(&cwd)?,
        };
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => cwd.join(parent),
            _ => cwd,
        };
        let config = ConfigLoader::builder()
            .working_dir(root)
            .build()
            .load(&path)?;
        Ok((path, config))
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network to use.
    #[arg(short, long, env = NETWORK_ENV, default_value = DEFAULT_NETWORK)]
    pub network: String,
}

impl NetworkArgs {
    pub fn select<'a>(
        &self,
        config: &'a DeploymentConfig,
    ) -> Result<&'a NetworkDescriptor> {
        Ok(config.network(&self.network)?)
    }
}
