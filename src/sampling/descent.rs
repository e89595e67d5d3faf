//! Steepest-descent optimization of the variational parameter.
//!
//! The descent direction is the VMC gradient estimator
//!
//!   dE/da = 2 (<E_L * d(ln psi)/da> - <E_L> <d(ln psi)/da>),
//!
//! the covariance between the local energy and the wavefunction
//! log-derivative over the sampled configurations.

use nalgebra::DVector;
use tracing::{info, warn};

use crate::error::VmcError;
use crate::wavefunction::TrialSystem;

use super::estimators::{sample_mean, sample_stdev};
use super::sampler::MetropolisSampler;

/// Metric tested against the convergence threshold after each iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConvergenceCriterion {
    /// Absolute change of the energy estimate between consecutive
    /// iterations.
    EnergyDiff,
    /// Sample standard deviation of the local energy.
    EnergyStdev,
}

/// One recorded iteration of the descent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DescentStep {
    pub iteration: usize,
    pub alpha: f64,
    pub energy: f64,
    pub stdev: f64,
}

/// How the descent loop terminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The convergence metric fell below the threshold.
    Converged,
    /// The iteration cap was reached first; the trajectory is partial.
    IterationBudgetExhausted,
}

/// Full outcome of a descent run.
#[derive(Clone, Debug)]
pub struct DescentResult {
    pub trajectory: Vec<DescentStep>,
    pub termination: Termination,
    pub final_alpha: f64,
    pub final_energy: f64,
}

/// One damped steepest-descent update of the variational parameter.
///
/// Pure function of its inputs; the two sample means are computed
/// independently, matching the estimator contract.
pub fn steepest_descent_step<S: TrialSystem>(
    system: &S,
    samples: &[DVector<f64>],
    alpha: f64,
    energy: f64,
    gamma: f64,
) -> Result<f64, VmcError> {
    let energy_logder = sample_mean(samples, |r| {
        system.local_energy(r, alpha) * system.log_derivative(r, alpha)
    })?;
    let logder = sample_mean(samples, |r| system.log_derivative(r, alpha))?;
    let derivative = 2.0 * (energy_logder - energy * logder);
    Ok(alpha - gamma * derivative)
}

/// The outer convergence loop: Sampler -> Estimator -> Updater until the
/// energy estimate stabilizes or the iteration budget runs out.
#[derive(Copy, Clone, Debug)]
pub struct SteepestDescent {
    /// Damping factor for the gradient update.
    pub gamma: f64,
    /// Threshold the convergence metric is tested against.
    pub convergence_threshold: f64,
    /// Which metric decides convergence.
    pub criterion: ConvergenceCriterion,
    /// Hard cap on the number of iterations.
    pub max_iterations: usize,
}

impl Default for SteepestDescent {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            convergence_threshold: 1e-4,
            criterion: ConvergenceCriterion::EnergyDiff,
            max_iterations: 100,
        }
    }
}

impl SteepestDescent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the convergence threshold.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Set the convergence metric.
    pub fn with_criterion(mut self, criterion: ConvergenceCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Run the descent from `alpha0`.
    ///
    /// Each iteration draws a fresh sample set at the current alpha,
    /// estimates the energy and its spread from the finite local-energy
    /// values (singular configurations are dropped with a logged warning),
    /// records the trajectory step, tests convergence, and otherwise
    /// updates alpha.
    pub fn optimize<S>(
        &self,
        system: &S,
        sampler: &mut MetropolisSampler,
        alpha0: f64,
    ) -> Result<DescentResult, VmcError>
    where
        S: TrialSystem + Sync,
    {
        if self.max_iterations == 0 {
            return Err(VmcError::InvalidConfiguration(
                "iteration budget must be positive".into(),
            ));
        }
        if !(self.convergence_threshold.is_finite() && self.convergence_threshold >= 0.0) {
            return Err(VmcError::InvalidConfiguration(format!(
                "convergence threshold must be non-negative, got {}",
                self.convergence_threshold
            )));
        }

        let mut alpha = alpha0;
        let mut previous_energy = f64::INFINITY;
        let mut trajectory = Vec::new();
        let mut termination = Termination::IterationBudgetExhausted;

        for iteration in 1..=self.max_iterations {
            let mut samples = sampler.sample(system, alpha)?;

            let drawn = samples.len();
            samples.retain(|r| {
                system.local_energy(r, alpha).is_finite()
                    && system.log_derivative(r, alpha).is_finite()
            });
            let dropped = drawn - samples.len();
            if dropped > 0 {
                warn!(
                    "iteration {}: dropped {} of {} configurations with non-finite observables",
                    iteration, dropped, drawn
                );
            }

            let energy = sample_mean(&samples, |r| system.local_energy(r, alpha))?;
            let stdev = sample_stdev(&samples, |r| system.local_energy(r, alpha), energy)?;
            trajectory.push(DescentStep {
                iteration,
                alpha,
                energy,
                stdev,
            });
            info!(
                "iteration {:3}: alpha = {:9.6}, E = {:9.6} +/- {:.6}",
                iteration, alpha, energy, stdev
            );

            let metric = match self.criterion {
                ConvergenceCriterion::EnergyDiff => (energy - previous_energy).abs(),
                ConvergenceCriterion::EnergyStdev => stdev,
            };
            if metric < self.convergence_threshold {
                termination = Termination::Converged;
                break;
            }

            previous_energy = energy;
            alpha = steepest_descent_step(system, &samples, alpha, energy, self.gamma)?;
        }

        let last = trajectory
            .last()
            .copied()
            .ok_or_else(|| VmcError::InvalidConfiguration("no iterations were run".into()))?;

        Ok(DescentResult {
            trajectory,
            termination,
            final_alpha: last.alpha,
            final_energy: last.energy,
        })
    }
}
