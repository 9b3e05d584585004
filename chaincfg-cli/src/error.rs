// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type CliResult = Result<(), CliError>;

#[derive(Debug)]
pub struct CliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

/// Anything `eyre` can report fails the command with a generic failure exit code.
impl<E> From<E> for CliError
where
    E: Into<eyre::Error>,
{
    fn from(err: E) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use chaincfg::core::config::ConfigError;

    use super::*;

    #[test]
    fn library_errors_convert() {
        let err = CliError::from(chaincfg::Error::from(ConfigError::NoNetworks));
        assert_eq!(err.to_string(), ConfigError::NoNetworks.to_string());

        let err = CliError::from(std::io::Error::other("disk on fire"));
        assert_eq!(err.to_string(), "disk on fire");
    }
}
