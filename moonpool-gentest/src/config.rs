//! Generator configuration.

use serde::{Deserialize, Serialize};

/// Number of steps a run executes unless configured otherwise.
pub const DEFAULT_COMMANDS: usize = 10_000;

/// Settings applied at the start of every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of steps executed by each run.
    pub commands: usize,
    /// Seed used to reset the random provider before each run.
    ///
    /// `None` derives a fresh seed from the wall clock on every run.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            commands: DEFAULT_COMMANDS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Set the number of steps per run.
    pub fn with_commands(mut self, commands: usize) -> Self {
        self.commands = commands;
        self
    }

    /// Fix the seed used by every run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
