// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use chaincfg::ContractArtifact;

use crate::{
    common_args::{ConfigArgs, NetworkArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the compiled contract, e.g. `SnailMarket`.
    #[arg(long)]
    contract: String,
    /// Network id to look up when the network is configured with `network_id = "*"`.
    #[arg(long)]
    network_id: Option<u64>,

    #[command(flatten)]
    config: ConfigArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn exec(args: Args) -> CliResult {
    let (_path, config) = args.config.load()?;
    let network = args.network.select(&config)?;
    let artifact =
        ContractArtifact::load(config.resolved_contracts_build_directory(), &args.contract)?;
    let address = artifact.address_for(network.network_id(), args.network_id)?;
    println!("{address}");
    Ok(())
}
