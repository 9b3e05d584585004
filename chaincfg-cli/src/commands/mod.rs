// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod address;
mod check;
mod endpoint;
mod init;
mod show;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Look up where a compiled contract is deployed on a network
    #[clap(visible_alias = "a")]
    Address(address::Args),
    /// Load and validate a config
    #[clap(visible_alias = "c")]
    Check(check::Args),
    /// Print the RPC endpoint of a network
    #[clap(visible_alias = "e")]
    Endpoint(endpoint::Args),
    /// Create a default config in a directory
    Init(init::Args),
    /// Print the validated config
    #[clap(visible_alias = "s")]
    Show(show::Args),
}

pub fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Address(args) => address::exec(args),
        Command::Check(args) => check::exec(args),
        Command::Endpoint(args) => endpoint::exec(args),
        Command::Init(args) => init::exec(args),
        Command::Show(args) => show::exec(args),
    }
}
