//! Rust VMC - Variational Monte Carlo in Rust
//!
//! This crate estimates the ground-state energy of small quantum systems
//! from a one-parameter trial wavefunction, sampled by a population of
//! Metropolis walkers, and optimizes the parameter by stochastic steepest
//! descent until the energy estimate stabilizes.

pub mod error;
pub mod io;
pub mod sampling;
pub mod systems;
pub mod wavefunction;

// Re-export commonly used types at crate root
pub use error::VmcError;
pub use sampling::{
    sample_mean, sample_stdev, steepest_descent_step, ConvergenceCriterion, DescentResult,
    DescentStep, MetropolisSampler, SamplerParams, SteepestDescent, Termination, Walker,
};
pub use systems::{HarmonicOscillator, HeliumAtom, HydrogenAtom};
pub use wavefunction::TrialSystem;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::DVector;

    use crate::sampling::{
        sample_mean, sample_stdev, MetropolisSampler, SamplerParams, SteepestDescent, Termination,
    };
    use crate::systems::{HarmonicOscillator, HeliumAtom, HydrogenAtom};
    use crate::wavefunction::TrialSystem;

    #[test]
    fn test_harmonic_local_energy() {
        let system = HarmonicOscillator;
        let r = DVector::from_vec(vec![0.5]);
        // alpha + x^2 (0.5 - 2 alpha^2) at alpha = 1.2, x = 0.5
        assert_relative_eq!(system.local_energy(&r, 1.2), 0.605, epsilon = 1e-12);
    }

    #[test]
    fn test_harmonic_local_energy_is_constant_at_ground_state() {
        // At alpha = 0.5 the trial wavefunction is exact and the local
        // energy equals 0.5 everywhere.
        let system = HarmonicOscillator;
        for &x in &[-2.0, -0.3, 0.0, 0.7, 1.9] {
            let r = DVector::from_vec(vec![x]);
            assert_relative_eq!(system.local_energy(&r, 0.5), 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hydrogen_local_energy_is_constant_at_ground_state() {
        // alpha = 1 reproduces the exact 1s orbital: E_L = -0.5 Ha at any
        // point off the nucleus.
        let system = HydrogenAtom;
        for r in [
            DVector::from_vec(vec![1.0, 0.0, 0.0]),
            DVector::from_vec(vec![0.3, -0.4, 1.2]),
        ] {
            assert_relative_eq!(system.local_energy(&r, 1.0), -0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hydrogen_wavefunction_value() {
        let system = HydrogenAtom;
        let r = DVector::from_vec(vec![1.0, 0.0, 0.0]);
        assert_relative_eq!(system.wavefunction(&r, 1.0), (-1.0f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(system.log_derivative(&r, 1.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_helium_wavefunction_is_symmetric_under_exchange() {
        let system = HeliumAtom;
        let r = DVector::from_vec(vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        let swapped = DVector::from_vec(vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
        assert_relative_eq!(
            system.wavefunction(&r, 0.8),
            system.wavefunction(&swapped, 0.8),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            system.local_energy(&r, 0.8),
            system.local_energy(&swapped, 0.8),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_helium_local_energy_is_singular_on_coalescence() {
        // Coincident electrons sit on the 1/r12 singularity; the descent
        // loop filters such configurations rather than averaging them.
        let system = HeliumAtom;
        let r = DVector::from_vec(vec![0.5, 0.5, 0.5, 0.5, 0.5, 0.5]);
        assert!(!system.local_energy(&r, 0.8).is_finite());
    }

    #[test]
    fn test_analytic_log_derivatives_match_numerical() {
        let h = 1e-5;

        let harmonic = HarmonicOscillator;
        let r = DVector::from_vec(vec![0.7]);
        assert_relative_eq!(
            harmonic.log_derivative(&r, 1.1),
            harmonic.numerical_log_derivative(&r, 1.1, h),
            epsilon = 1e-6
        );

        let hydrogen = HydrogenAtom;
        let r = DVector::from_vec(vec![0.4, -0.3, 0.8]);
        assert_relative_eq!(
            hydrogen.log_derivative(&r, 0.9),
            hydrogen.numerical_log_derivative(&r, 0.9, h),
            epsilon = 1e-6
        );

        let helium = HeliumAtom;
        let r = DVector::from_vec(vec![1.2, 0.0, 0.0, -0.3, 0.9, 0.1]);
        assert_relative_eq!(
            helium.log_derivative(&r, 0.8),
            helium.numerical_log_derivative(&r, 0.8, h),
            epsilon = 1e-6
        );
    }

    /// Narrow Gaussian weight used to check Metropolis stationarity.
    struct GaussianPeak {
        center: f64,
        sigma: f64,
    }

    impl TrialSystem for GaussianPeak {
        fn particles(&self) -> usize {
            1
        }
        fn dims(&self) -> usize {
            1
        }
        fn name(&self) -> &'static str {
            "gaussian_peak"
        }
        fn wavefunction(&self, r: &DVector<f64>, _alpha: f64) -> f64 {
            let d = r[0] - self.center;
            (-d * d / (2.0 * self.sigma * self.sigma)).exp()
        }
        fn local_energy(&self, _r: &DVector<f64>, _alpha: f64) -> f64 {
            0.0
        }
        fn log_derivative(&self, _r: &DVector<f64>, _alpha: f64) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_metropolis_samples_squared_wavefunction() {
        // Sampling weight is psi^2, so for psi with spread sigma the
        // sampled distribution has spread sigma / sqrt(2).
        let target = GaussianPeak {
            center: 1.0,
            sigma: 0.1,
        };
        let params = SamplerParams {
            walkers: 10,
            steps: 20_000,
            thermalization: 2_000,
            proposal_scale: 1.0,
            report_interval: 0.0,
        };
        let mut sampler = MetropolisSampler::new(params, 1);
        let samples = sampler.sample(&target, 0.0).unwrap();
        assert_eq!(samples.len(), params.samples_per_pass());

        let mean = sample_mean(&samples, |r| r[0]).unwrap();
        let stdev = sample_stdev(&samples, |r| r[0], mean).unwrap();
        assert_relative_eq!(mean, 1.0, epsilon = 0.02);
        assert_relative_eq!(stdev, 0.1 / f64::sqrt(2.0), epsilon = 0.005);
    }

    #[test]
    fn test_harmonic_oscillator_descent_finds_ground_state() {
        // From alpha0 = 1.2 the descent must land on the known analytical
        // ground state alpha = 0.5, E = 0.5.
        let system = HarmonicOscillator;
        let params = SamplerParams {
            walkers: 40,
            steps: 3000,
            thermalization: 400,
            proposal_scale: 1.0,
            report_interval: 0.0,
        };
        let mut sampler = MetropolisSampler::new(params, 7);
        let descent = SteepestDescent::new()
            .with_convergence_threshold(3e-3)
            .with_max_iterations(60);

        let result = descent.optimize(&system, &mut sampler, 1.2).unwrap();

        assert_eq!(result.termination, Termination::Converged);
        assert_relative_eq!(result.final_alpha, 0.5, epsilon = 0.05);
        assert_relative_eq!(result.final_energy, 0.5, epsilon = 0.01);
        assert!(result.trajectory.len() >= 2);
        assert_relative_eq!(result.trajectory[0].alpha, 1.2, epsilon = 1e-12);
    }
}
