// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiler settings passed through to solc.

/// Default optimizer runs, matching solc's own default.
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// The `[compilers]` table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compilers {
    pub(crate) solc: SolcSettings,
}

impl Compilers {
    pub fn solc(&self) -> &SolcSettings {
        &self.solc
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolcSettings {
    pub(crate) version: Option<String>,
    pub(crate) optimizer: Optimizer,
}

impl SolcSettings {
    /// Requested solc version, if pinned.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn optimizer(&self) -> Optimizer {
        self.optimizer
    }
}

/// Optimizer settings.
///
/// `runs` estimates how often deployed code will be executed: low values favor smaller
/// deployment size, high values favor cheaper calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Optimizer {
    pub(crate) enabled: bool,
    pub(crate) runs: u32,
}

impl Optimizer {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: DEFAULT_OPTIMIZER_RUNS,
        }
    }
}
