// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The `[db]` table, toggling the toolchain's embedded indexing database.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub(crate) enabled: bool,
}

impl DbConfig {
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}
