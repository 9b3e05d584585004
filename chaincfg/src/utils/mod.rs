// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use std::{fs, path::Path};

pub mod color;

/// Check if a directory exists, creating it if not.
///
/// Returns true if the directory was created.
pub fn create_dir_if_dne(path: impl AsRef<Path>) -> std::io::Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path)?;
    Ok(true)
}

