// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    common_args::ConfigArgs,
    error::CliResult,
    utils::{print_field, style::OK},
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
    /// Also require this network to be declared.
    #[arg(short, long)]
    network: Option<String>,
}

pub fn exec(args: Args) -> CliResult {
    let (path, config) = args.config.load()?;
    if let Some(network) = &args.network {
        config.network(network)?;
    }

    println!("{OK}ok{OK:#}: {}", path.display());
    for (name, network) in config.networks() {
        print_field(
            &format!("networks.{name}"),
            format_args!("{} (network id {})", network.endpoint(), network.network_id()),
        );
    }
    print_field(
        "contracts_directory",
        config.resolved_contracts_directory().display(),
    );
    let solc = config.compilers().solc();
    let optimizer = solc.optimizer();
    print_field(
        "optimizer",
        format_args!(
            "{} ({} runs)",
            if optimizer.enabled() { "enabled" } else { "disabled" },
            optimizer.runs()
        ),
    );
    if let Some(version) = solc.version() {
        print_field("solc", version);
    }
    print_field(
        "db",
        if config.db().enabled() { "enabled" } else { "disabled" },
    );
    Ok(())
}
