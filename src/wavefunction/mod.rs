//! Wavefunction module - the trial-system contract for VMC sampling.

mod traits;

pub use traits::TrialSystem;
