//! 1D harmonic oscillator with a Gaussian trial wavefunction.
//!
//! Trial form `psi(x, alpha) = exp(-alpha x^2)`. The exact ground state is
//! `alpha = 0.5` with energy `0.5`, where the local energy becomes constant
//! and its variance vanishes.

use nalgebra::DVector;

use crate::wavefunction::TrialSystem;

/// Single particle in one dimension in a quadratic potential.
#[derive(Copy, Clone, Debug, Default)]
pub struct HarmonicOscillator;

impl TrialSystem for HarmonicOscillator {
    fn particles(&self) -> usize {
        1
    }

    fn dims(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "harmonic_oscillator"
    }

    fn wavefunction(&self, r: &DVector<f64>, alpha: f64) -> f64 {
        let x = r[0];
        (-alpha * x * x).exp()
    }

    fn local_energy(&self, r: &DVector<f64>, alpha: f64) -> f64 {
        let x = r[0];
        alpha + x * x * (0.5 - 2.0 * alpha * alpha)
    }

    fn log_derivative(&self, r: &DVector<f64>, _alpha: f64) -> f64 {
        let x = r[0];
        -x * x
    }
}
