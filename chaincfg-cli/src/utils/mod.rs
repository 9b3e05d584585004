// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use style::{BOLD, ERROR};

pub mod style;

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

/// Print an aligned `key: value` line.
pub fn print_field(key: &str, value: impl Display) {
    println!("{BOLD}{key:>20}{BOLD:#}  {value}");
}
