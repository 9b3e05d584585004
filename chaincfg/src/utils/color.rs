// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Terminal colors.

use std::fmt::Display;

pub const GREY: &str = "\x1b[0;0m\x1b[90m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const CLEAR: &str = "\x1b[0;0m";
pub const YELLOW: &str = "\x1b[33;1m";

pub trait Color {
    fn color(&self, color: &str) -> String;

    fn grey(&self) -> String;
    fn mint(&self) -> String;
    fn yellow(&self) -> String;
}

impl<T: Display> Color for T {
    fn color(&self, color: &str) -> String {
        format!("{color}{self}{CLEAR}")
    }

    fn grey(&self) -> String {
        self.color(GREY)
    }

    fn mint(&self) -> String {
        self.color(MINT)
    }

    fn yellow(&self) -> String {
        self.color(YELLOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_clears() {
        assert_eq!(8545_u16.mint(), format!("{MINT}8545{CLEAR}"));
        assert!("development".grey().ends_with(CLEAR));
    }
}
