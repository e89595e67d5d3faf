//! Trial-system trait for single-parameter VMC.

use nalgebra::DVector;

/// A physical system described by a trial wavefunction with one variational
/// parameter.
///
/// A configuration is the joint position of all particles, flattened to
/// `particles() * dims()` coordinates. Only `wavefunction(r, alpha)^2` is
/// used as the sampling weight, so the sign of the wavefunction is
/// irrelevant; it must be finite almost everywhere on the support the
/// walkers can reach.
pub trait TrialSystem {
    /// Number of particles in the system.
    fn particles(&self) -> usize;

    /// Number of spatial dimensions per particle.
    fn dims(&self) -> usize;

    /// Short name used for logging and output file naming.
    fn name(&self) -> &'static str;

    /// Evaluate the trial wavefunction at configuration `r`.
    fn wavefunction(&self, r: &DVector<f64>, alpha: f64) -> f64;

    /// Local energy `(H psi)/psi` at configuration `r`.
    fn local_energy(&self, r: &DVector<f64>, alpha: f64) -> f64;

    /// Log-derivative of the trial wavefunction with respect to the
    /// variational parameter, `d(ln psi)/d(alpha)`.
    fn log_derivative(&self, r: &DVector<f64>, alpha: f64) -> f64;

    /// Total coordinate count of one configuration.
    fn coord_count(&self) -> usize {
        self.particles() * self.dims()
    }

    /// Numerical log-derivative using central difference in alpha.
    fn numerical_log_derivative(&self, r: &DVector<f64>, alpha: f64, h: f64) -> f64 {
        let fwd = self.wavefunction(r, alpha + h).abs().ln();
        let bwd = self.wavefunction(r, alpha - h).abs().ln();
        (fwd - bwd) / (2.0 * h)
    }
}
