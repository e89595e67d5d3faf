//! IO module - run configuration, trajectory output, and logging setup.

mod config;
mod output;

pub use config::{read_run_config, RunConfig};
pub use output::{convergence_path, setup_logging, write_trajectory, write_trajectory_file};
