//! Population Metropolis sampling with thermalization discard.

use std::time::Instant;

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::VmcError;
use crate::wavefunction::TrialSystem;

use super::walker::Walker;

/// Parameters for one Metropolis sampling pass.
#[derive(Copy, Clone, Debug)]
pub struct SamplerParams {
    /// Number of independent walkers.
    pub walkers: usize,
    /// Total Metropolis rounds; every walker takes one step per round.
    pub steps: usize,
    /// Leading rounds discarded so the chains forget their start points.
    pub thermalization: usize,
    /// System scale: walker initialization range and proposal step scale.
    pub proposal_scale: f64,
    /// Seconds between progress reports; zero disables reporting.
    pub report_interval: f64,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            walkers: 40,
            steps: 3000,
            thermalization: 400,
            proposal_scale: 1.0,
            report_interval: 1.0,
        }
    }
}

impl SamplerParams {
    /// Fail fast on parameters that can never produce a valid sample set.
    pub fn validate(&self) -> Result<(), VmcError> {
        if self.walkers == 0 {
            return Err(VmcError::InvalidConfiguration(
                "walker count must be positive".into(),
            ));
        }
        if self.steps <= self.thermalization {
            return Err(VmcError::InvalidConfiguration(format!(
                "total steps ({}) must exceed thermalization steps ({})",
                self.steps, self.thermalization
            )));
        }
        if !(self.proposal_scale.is_finite() && self.proposal_scale > 0.0) {
            return Err(VmcError::InvalidConfiguration(format!(
                "proposal scale must be positive and finite, got {}",
                self.proposal_scale
            )));
        }
        Ok(())
    }

    /// Number of configurations one pass collects.
    pub fn samples_per_pass(&self) -> usize {
        self.walkers * (self.steps - self.thermalization)
    }
}

/// Drives a population of walkers through Metropolis rounds and collects
/// post-thermalization configurations.
///
/// Owns an explicitly seeded master generator; every sampling pass builds a
/// fresh walker population, each walker with its own stream split off the
/// master, so runs are reproducible and the per-round stepping can be
/// parallelized without shared mutable state.
pub struct MetropolisSampler {
    params: SamplerParams,
    rng: StdRng,
}

impl MetropolisSampler {
    pub fn new(params: SamplerParams, seed: u64) -> Self {
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn params(&self) -> &SamplerParams {
        &self.params
    }

    /// Run one full sampling pass against `psi(., alpha)^2`.
    ///
    /// Returns exactly `walkers * (steps - thermalization)` configurations,
    /// ordered round-major, walker-minor. Progress reporting is
    /// observability only and never affects the collected samples.
    pub fn sample<S>(&mut self, system: &S, alpha: f64) -> Result<Vec<DVector<f64>>, VmcError>
    where
        S: TrialSystem + Sync,
    {
        self.params.validate()?;

        let coord_count = system.coord_count();
        let mut walkers = (0..self.params.walkers)
            .map(|_| {
                Walker::new(
                    coord_count,
                    self.params.proposal_scale,
                    StdRng::seed_from_u64(self.rng.gen()),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut samples = Vec::with_capacity(self.params.samples_per_pass());
        let mut accepted = 0usize;
        let started = Instant::now();
        let mut last_report = Instant::now();

        for round in 0..self.params.steps {
            // Walker chains are independent given alpha; step the whole
            // population in parallel. Each walker owns its RNG, and samples
            // are collected sequentially in walker order below, so the
            // result does not depend on thread scheduling.
            accepted += walkers
                .par_iter_mut()
                .map(|w| w.metropolis_step(system, alpha) as usize)
                .sum::<usize>();

            if round >= self.params.thermalization {
                for walker in &walkers {
                    samples.push(walker.config().clone());
                }
            }

            if self.params.report_interval > 0.0
                && last_report.elapsed().as_secs_f64() >= self.params.report_interval
            {
                info!(
                    "metropolis round {}/{}: {} samples collected",
                    round + 1,
                    self.params.steps,
                    samples.len()
                );
                last_report = Instant::now();
            }
        }

        debug!(
            "sampling pass finished: {} samples in {:.2} s, acceptance rate {:.3}",
            samples.len(),
            started.elapsed().as_secs_f64(),
            accepted as f64 / (self.params.walkers * self.params.steps) as f64
        );

        Ok(samples)
    }
}
