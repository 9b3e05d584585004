// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! On-disk configuration manifests (`chaincfg.toml` / `chaincfg.json`).
//!
//! Types in this module mirror the file exactly and carry no validation beyond what serde
//! enforces. See [`crate::core::config`] for the validated form.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

pub use config::{TomlCompilers, TomlConfig, TomlDb, TomlOptimizer, TomlSolc};
pub use network::{TomlNetwork, TomlNetworkId};

mod config;
mod network;

/// Manifest filenames, in the order they are searched for.
pub const FILENAMES: &[&str] = &["chaincfg.toml", "chaincfg.json"];

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] serde_path_to_error::Error<toml::de::Error>),
    #[error("toml write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("json read error: {0}")]
    JsonRead(#[from] serde_path_to_error::Error<serde_json::Error>),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing config file: {}", .0.display())]
    Missing(PathBuf),
    #[error("no {} found in {} or any parent directory", FILENAMES.join(" or "), .0.display())]
    NotFound(PathBuf),
    #[error("unsupported config format for {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Serialization format of a manifest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(ManifestError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => f.write_str("toml"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Read and parse a manifest file, choosing the format from its extension.
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    if !path.exists() {
        return Err(ManifestError::Missing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    parse_str(&contents, format)
}

/// Parse a manifest from literal text.
///
/// Type errors carry the dotted path of the offending key, e.g. `networks.development.port`.
pub fn parse_str<T: DeserializeOwned>(contents: &str, format: Format) -> Result<T, ManifestError> {
    let manifest = match format {
        Format::Toml => serde_path_to_error::deserialize(toml::Deserializer::new(contents))?,
        Format::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(contents);
            let manifest = serde_path_to_error::deserialize(&mut deserializer)?;
            deserializer.end()?;
            manifest
        }
    };
    Ok(manifest)
}

/// Render a manifest in the given format.
pub fn to_string<T: Serialize>(manifest: &T, format: Format) -> Result<String, ManifestError> {
    let contents = match format {
        Format::Toml => toml::to_string_pretty(manifest)?,
        Format::Json => serde_json::to_string_pretty(manifest)?,
    };
    Ok(contents)
}

/// Find the nearest manifest, starting at `start` and walking up through its parents.
pub fn discover(start: impl AsRef<Path>) -> Result<PathBuf, ManifestError> {
    let start = start.as_ref();
    for dir in start.ancestors() {
        for filename in FILENAMES {
            let candidate = dir.join(filename);
            if candidate.is_file() {
                debug!(@grey, "found config at {}", candidate.display());
                return Ok(candidate);
            }
        }
    }
    Err(ManifestError::NotFound(start.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path("chaincfg.toml").unwrap(), Format::Toml);
        assert_eq!(Format::from_path("dir/chaincfg.JSON").unwrap(), Format::Json);
        assert!(matches!(
            Format::from_path("truffle-config.js"),
            Err(ManifestError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            Format::from_path("chaincfg"),
            Err(ManifestError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn trailing_json_rejected() {
        let err = parse_str::<TomlConfig>("{} {}", Format::Json).unwrap_err();
        assert!(matches!(err, ManifestError::Json(_)), "{err}");
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load::<TomlConfig>(dir.path().join("chaincfg.toml")).unwrap_err();
        assert!(matches!(err, ManifestError::Missing(_)));
    }

    #[test]
    fn discover_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join("chaincfg.json"), "{}").unwrap();

        let found = discover(&nested).unwrap();
        assert_eq!(found, root.path().join("chaincfg.json"));
    }

    #[test]
    fn discover_prefers_toml() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("chaincfg.json"), "{}").unwrap();
        fs::write(root.path().join("chaincfg.toml"), "").unwrap();

        let found = discover(root.path()).unwrap();
        assert_eq!(found, root.path().join("chaincfg.toml"));
    }

    #[test]
    fn discover_nothing() {
        let root = tempfile::tempdir().unwrap();
        assert!(matches!(
            discover(root.path()),
            Err(ManifestError::NotFound(_))
        ));
    }
}
