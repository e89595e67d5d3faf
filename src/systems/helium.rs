//! Helium atom with a Pade-Jastrow trial wavefunction.
//!
//! Trial form
//! `psi = exp(-2 r1 - 2 r2) * exp(r12 / (2 (1 + alpha r12)))`,
//! a product of hydrogenic orbitals (Z = 2) and an electron-electron Jastrow
//! factor whose cusp parameter is the variational degree of freedom.

use nalgebra::DVector;

use crate::wavefunction::TrialSystem;

/// Two electrons around a Z = 2 nucleus at the origin.
///
/// A configuration holds electron one in coordinates 0..3 and electron two
/// in coordinates 3..6.
#[derive(Copy, Clone, Debug, Default)]
pub struct HeliumAtom;

impl TrialSystem for HeliumAtom {
    fn particles(&self) -> usize {
        2
    }

    fn dims(&self) -> usize {
        3
    }

    fn name(&self) -> &'static str {
        "helium"
    }

    fn wavefunction(&self, r: &DVector<f64>, alpha: f64) -> f64 {
        let r1 = r.fixed_rows::<3>(0);
        let r2 = r.fixed_rows::<3>(3);
        let r12_norm = (r1 - r2).norm();
        (-2.0 * r1.norm() - 2.0 * r2.norm()).exp()
            * (r12_norm / (2.0 * (1.0 + alpha * r12_norm))).exp()
    }

    fn local_energy(&self, r: &DVector<f64>, alpha: f64) -> f64 {
        let r1 = r.fixed_rows::<3>(0);
        let r2 = r.fixed_rows::<3>(3);
        let r12 = r1 - r2;
        let r12_norm = r12.norm();

        // Unit vectors from each electron toward the nucleus frame
        let rv1 = r1 / r1.norm();
        let rv2 = r2 / r2.norm();

        let x = 1.0 + alpha * r12_norm;

        -4.0 + 1.0 / r12_norm + (rv1 - rv2).dot(&r12) / (r12_norm * x * x)
            - 1.0 / (r12_norm * x.powi(3))
            - 1.0 / (4.0 * x.powi(4))
    }

    fn log_derivative(&self, r: &DVector<f64>, alpha: f64) -> f64 {
        let r1 = r.fixed_rows::<3>(0);
        let r2 = r.fixed_rows::<3>(3);
        let r12_norm = (r1 - r2).norm();
        let ratio = r12_norm / (1.0 + alpha * r12_norm);
        -0.5 * ratio * ratio
    }
}
