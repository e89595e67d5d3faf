//! Sampling module - Metropolis walkers, estimators, and steepest descent.

mod descent;
mod estimators;
mod sampler;
mod walker;

pub use descent::{
    steepest_descent_step, ConvergenceCriterion, DescentResult, DescentStep, SteepestDescent,
    Termination,
};
pub use estimators::{sample_mean, sample_stdev, STDEV_BESSEL_CORRECTION};
pub use sampler::{MetropolisSampler, SamplerParams};
pub use walker::{Walker, FORCE_ACCEPT_ON_ZERO_WEIGHT, PROPOSAL_STEP_FRACTION};
