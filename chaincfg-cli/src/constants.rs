// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Environment variable selecting the network when `--network` is not given.
pub const NETWORK_ENV: &str = "CHAINCFG_NETWORK";
