// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use chaincfg::Format;

use crate::{common_args::ConfigArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    config: ConfigArgs,
    /// Print JSON instead of TOML.
    #[arg(long)]
    json: bool,
}

pub fn exec(args: Args) -> CliResult {
    let (_path, config) = args.config.load()?;
    let format = if args.json { Format::Json } else { Format::Toml };
    let rendered = config.render(format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
