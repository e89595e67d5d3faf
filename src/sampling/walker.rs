//! Random walker over particle configuration space.

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::VmcError;
use crate::wavefunction::TrialSystem;

/// Proposal step standard deviation as a fraction of the system scale.
pub const PROPOSAL_STEP_FRACTION: f64 = 0.4;

/// Policy for an undefined acceptance ratio: when the wavefunction is
/// exactly zero at the current configuration, the proposed move is accepted
/// unconditionally so the walker cannot stay stuck at a zero-weight point.
pub const FORCE_ACCEPT_ON_ZERO_WEIGHT: bool = true;

/// One independent Markov-chain explorer.
///
/// Owns a single configuration (the joint position of all particles,
/// flattened to one coordinate vector), the proposal scale, and its own
/// random generator. The stored configuration is always an accepted (or
/// initial) point, never a rejected proposal.
pub struct Walker {
    config: DVector<f64>,
    step: Normal<f64>,
    rng: StdRng,
}

impl Walker {
    /// Create a walker with a configuration drawn uniformly from
    /// `[0, scale)` per coordinate.
    pub fn new(coord_count: usize, scale: f64, mut rng: StdRng) -> Result<Self, VmcError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(VmcError::InvalidConfiguration(format!(
                "proposal scale must be positive and finite, got {}",
                scale
            )));
        }
        if coord_count == 0 {
            return Err(VmcError::InvalidConfiguration(
                "configuration must have at least one coordinate".into(),
            ));
        }
        let config = DVector::from_fn(coord_count, |_, _| rng.gen_range(0.0..scale));
        let step = Normal::new(0.0, PROPOSAL_STEP_FRACTION * scale).map_err(|_| {
            VmcError::InvalidConfiguration(format!("invalid proposal scale {}", scale))
        })?;
        Ok(Self { config, step, rng })
    }

    /// Current configuration of the walker.
    pub fn config(&self) -> &DVector<f64> {
        &self.config
    }

    /// Propose a new configuration: one axis chosen uniformly at random,
    /// perturbed by a zero-mean normal step. The stored configuration is
    /// untouched; only the walker's random state advances.
    pub fn propose(&mut self) -> DVector<f64> {
        let axis = self.rng.gen_range(0..self.config.len());
        let mut proposal = self.config.clone();
        proposal[axis] += self.step.sample(&mut self.rng);
        proposal
    }

    /// Move to `destination` unconditionally. The caller has already made
    /// the accept/reject decision.
    pub fn accept(&mut self, destination: DVector<f64>) -> Result<(), VmcError> {
        if destination.len() != self.config.len() {
            return Err(VmcError::ShapeMismatch {
                expected: self.config.len(),
                actual: destination.len(),
            });
        }
        self.config = destination;
        Ok(())
    }

    /// One Metropolis step against `psi(., alpha)^2`: propose, accept with
    /// probability `min(1, (psi'/psi)^2)`. Returns whether the move was
    /// accepted.
    ///
    /// A zero-valued wavefunction at the current point forces acceptance
    /// (see [`FORCE_ACCEPT_ON_ZERO_WEIGHT`]); a non-finite ratio from a
    /// degenerate proposal rejects the move, keeping the walker on a valid
    /// point.
    pub fn metropolis_step<S: TrialSystem>(&mut self, system: &S, alpha: f64) -> bool {
        let psi = system.wavefunction(&self.config, alpha);
        let proposal = self.propose();
        let psi_new = system.wavefunction(&proposal, alpha);

        let accepted = if psi == 0.0 {
            FORCE_ACCEPT_ON_ZERO_WEIGHT
        } else {
            let p = (psi_new / psi).powi(2);
            p >= 1.0 || self.rng.gen::<f64>() < p
        };

        if accepted {
            // Shape invariant holds by construction of the proposal.
            self.config = proposal;
        }
        accepted
    }
}
