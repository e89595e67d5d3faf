//! Run configuration read from a YAML file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

/// Full numeric configuration of one variational run.
///
/// Every field has a default matching the CLI defaults, so a YAML file only
/// needs to name the values it changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Starting value of the variational parameter.
    pub alpha: f64,
    /// Number of random walkers.
    pub walkers: usize,
    /// Total Metropolis steps per walker.
    pub steps: usize,
    /// Metropolis steps discarded for thermalization.
    pub thermalization: usize,
    /// System scale for walker initialization and proposals.
    pub proposal_scale: f64,
    /// Convergence threshold for the energy estimate.
    pub convergence: f64,
    /// Damping factor for the steepest-descent update.
    pub gamma: f64,
    /// Iteration cap for the descent loop.
    pub max_iterations: usize,
    /// Seconds between sampling progress reports; zero disables them.
    pub report_interval: f64,
    /// Seed for the master random generator.
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            alpha: 1.2,
            walkers: 40,
            steps: 3000,
            thermalization: 400,
            proposal_scale: 1.0,
            convergence: 1e-4,
            gamma: 1.0,
            max_iterations: 100,
            report_interval: 1.0,
            seed: 1,
        }
    }
}

/// Deserialize a [`RunConfig`] from a YAML file.
pub fn read_run_config(path: &Path) -> Result<RunConfig> {
    let file = File::open(path)
        .wrap_err_with(|| format!("unable to open run configuration {}", path.display()))?;
    let config = serde_yaml::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("failed to parse run configuration {}", path.display()))?;
    Ok(config)
}
