// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    common_args::{ConfigArgs, NetworkArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn exec(args: Args) -> CliResult {
    let (_path, config) = args.config.load()?;
    let network = args.network.select(&config)?;
    println!("{}", network.endpoint());
    Ok(())
}
