use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use tracing::{info, warn};

use rust_vmc::io::{read_run_config, setup_logging, write_trajectory_file, RunConfig};
use rust_vmc::{
    ConvergenceCriterion, HarmonicOscillator, HeliumAtom, HydrogenAtom, MetropolisSampler,
    SamplerParams, SteepestDescent, Termination, TrialSystem,
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SystemChoice {
    Harmonic,
    Hydrogen,
    Helium,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CriterionChoice {
    /// Energy change between consecutive iterations
    EnergyDiff,
    /// Standard deviation of the local energy
    EnergyStdev,
}

impl From<CriterionChoice> for ConvergenceCriterion {
    fn from(choice: CriterionChoice) -> Self {
        match choice {
            CriterionChoice::EnergyDiff => ConvergenceCriterion::EnergyDiff,
            CriterionChoice::EnergyStdev => ConvergenceCriterion::EnergyStdev,
        }
    }
}

/// Variational Monte Carlo with steepest-descent parameter optimization
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Physical system to optimize
    #[arg(long, value_enum, default_value_t = SystemChoice::Harmonic)]
    system: SystemChoice,

    /// Starting value of the variational parameter alpha
    #[arg(short, long, default_value_t = 1.2)]
    alpha: f64,

    /// Number of random walkers
    #[arg(short, long, default_value_t = 40)]
    walkers: usize,

    /// Total Metropolis steps per walker
    #[arg(short, long, default_value_t = 3000)]
    steps: usize,

    /// Metropolis steps to discard for thermalization
    #[arg(short, long, default_value_t = 400)]
    thermalization: usize,

    /// Time interval (s) between progress reports during Metropolis walks
    #[arg(short = 'p', long, default_value_t = 1.0)]
    report_interval: f64,

    /// Convergence threshold for the energy estimate
    #[arg(short, long, default_value_t = 1e-4)]
    convergence: f64,

    /// Damping factor for the steepest-descent update
    #[arg(long, default_value_t = 1.0)]
    gamma: f64,

    /// Maximum descent iterations before reporting non-convergence
    #[arg(long, default_value_t = 100)]
    max_iterations: usize,

    /// Convergence metric
    #[arg(long, value_enum, default_value_t = CriterionChoice::EnergyDiff)]
    criterion: CriterionChoice,

    /// System scale for walker initialization and proposal steps
    #[arg(long, default_value_t = 1.0)]
    proposal_scale: f64,

    /// Seed for the master random generator
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Directory for the convergence table
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Optional YAML run configuration; replaces the numeric flags above
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn run_config(&self) -> Result<RunConfig> {
        match &self.config {
            Some(path) => read_run_config(path),
            None => Ok(RunConfig {
                alpha: self.alpha,
                walkers: self.walkers,
                steps: self.steps,
                thermalization: self.thermalization,
                proposal_scale: self.proposal_scale,
                convergence: self.convergence,
                gamma: self.gamma,
                max_iterations: self.max_iterations,
                report_interval: self.report_interval,
                seed: self.seed,
            }),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    setup_logging();

    let args = Args::parse();
    let run = args.run_config()?;

    match args.system {
        SystemChoice::Harmonic => run_system(HarmonicOscillator, &run, &args),
        SystemChoice::Hydrogen => run_system(HydrogenAtom, &run, &args),
        SystemChoice::Helium => run_system(HeliumAtom, &run, &args),
    }
}

fn run_system<S>(system: S, run: &RunConfig, args: &Args) -> Result<()>
where
    S: TrialSystem + Sync,
{
    info!(
        "variational Monte Carlo for the {}: alpha0 = {}, {} walkers, {} steps ({} thermalization)",
        system.name(),
        run.alpha,
        run.walkers,
        run.steps,
        run.thermalization
    );

    let params = SamplerParams {
        walkers: run.walkers,
        steps: run.steps,
        thermalization: run.thermalization,
        proposal_scale: run.proposal_scale,
        report_interval: run.report_interval,
    };
    let mut sampler = MetropolisSampler::new(params, run.seed);
    let descent = SteepestDescent::new()
        .with_gamma(run.gamma)
        .with_convergence_threshold(run.convergence)
        .with_criterion(args.criterion.into())
        .with_max_iterations(run.max_iterations);

    let result = descent.optimize(&system, &mut sampler, run.alpha)?;

    match result.termination {
        Termination::Converged => {
            info!("converged after {} iterations", result.trajectory.len());
        }
        Termination::IterationBudgetExhausted => {
            warn!(
                "did not converge within {} iterations; trajectory is partial",
                run.max_iterations
            );
        }
    }
    info!(
        "final alpha = {:.6}, energy = {:.6} +/- {:.6}",
        result.final_alpha,
        result.final_energy,
        result.trajectory.last().map(|s| s.stdev).unwrap_or(f64::NAN)
    );

    let path = write_trajectory_file(&args.output_dir, system.name(), &result.trajectory)?;
    info!("trajectory written to {}", path.display());

    Ok(())
}
