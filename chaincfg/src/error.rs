// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Manifest(#[from] crate::core::manifest::ManifestError),
    #[error("{0}")]
    Config(#[from] crate::core::config::ConfigError),
    #[error("{0}")]
    Artifact(#[from] crate::core::artifact::ArtifactError),
    #[error("{0}")]
    Template(#[from] crate::core::template::TemplateError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ConfigError;

    #[test]
    fn module_errors_keep_their_message() {
        let err = Error::from(ConfigError::NoNetworks);
        assert_eq!(err.to_string(), ConfigError::NoNetworks.to_string());
        assert!(matches!(err, Error::Config(ConfigError::NoNetworks)));
    }
}
