//! Per-run reporting.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Name of the generator that ran.
    pub generator: String,
    /// Seed the random provider was reset to.
    pub seed: u64,
    /// Whether the seed came from configuration rather than the clock.
    pub fixed_seed: bool,
    /// Number of steps executed.
    pub steps: usize,
    /// How many times each actor was chosen, by position.
    pub selections: Vec<u64>,
    /// Wall-clock time taken by the run.
    pub wall_time: Duration,
}

impl RunReport {
    /// Fraction of steps that chose the actor at `index`.
    pub fn selection_ratio(&self, index: usize) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.selections.get(index).copied().unwrap_or_default() as f64 / self.steps as f64
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Run Report: {} ===", self.generator)?;
        let origin = if self.fixed_seed { "fixed" } else { "clock" };
        writeln!(f, "Seed: {} ({})", self.seed, origin)?;
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(f, "Wall time: {:?}", self.wall_time)?;
        writeln!(f, "Selections:")?;
        for (index, count) in self.selections.iter().enumerate() {
            writeln!(
                f,
                "  actor {}: {} ({:.2}%)",
                index,
                count,
                self.selection_ratio(index) * 100.0
            )?;
        }
        Ok(())
    }
}
