//! Hydrogen atom with an exponential trial wavefunction.
//!
//! Trial form `psi(R, alpha) = exp(-alpha |R|)`. The exact ground state is
//! `alpha = 1` with energy `-0.5` Ha. The local energy carries a `1/r`
//! singularity at the nucleus; configurations landing on it are filtered by
//! the descent loop.

use nalgebra::DVector;

use crate::wavefunction::TrialSystem;

/// One electron in the Coulomb field of a unit-charge nucleus at the origin.
#[derive(Copy, Clone, Debug, Default)]
pub struct HydrogenAtom;

impl TrialSystem for HydrogenAtom {
    fn particles(&self) -> usize {
        1
    }

    fn dims(&self) -> usize {
        3
    }

    fn name(&self) -> &'static str {
        "hydrogen"
    }

    fn wavefunction(&self, r: &DVector<f64>, alpha: f64) -> f64 {
        (-alpha * r.norm()).exp()
    }

    fn local_energy(&self, r: &DVector<f64>, alpha: f64) -> f64 {
        let r_inv = 1.0 / r.norm();
        -r_inv - 0.5 * alpha * (alpha - 2.0 * r_inv)
    }

    fn log_derivative(&self, r: &DVector<f64>, _alpha: f64) -> f64 {
        -r.norm()
    }
}
