// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use chaincfg::core::template;

use crate::error::CliResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Directory to initialize.
    #[clap(default_value = ".")]
    path: PathBuf,
}

pub fn exec(args: Args) -> CliResult {
    let created = template::init(&args.path)?;
    if created.is_empty() {
        log::info!("nothing to do, {} is already initialized", args.path.display());
    }
    Ok(())
}
