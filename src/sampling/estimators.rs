//! Statistical estimators over a set of sampled configurations.

use nalgebra::DVector;

use crate::error::VmcError;

/// Variance denominator policy: `true` selects the Bessel-corrected sample
/// variance (denominator N - 1), `false` the population variance.
pub const STDEV_BESSEL_CORRECTION: bool = true;

/// Arithmetic mean of the observable `f` over the sample set.
pub fn sample_mean<F>(samples: &[DVector<f64>], f: F) -> Result<f64, VmcError>
where
    F: Fn(&DVector<f64>) -> f64,
{
    if samples.is_empty() {
        return Err(VmcError::EmptyInput);
    }
    let sum: f64 = samples.iter().map(|r| f(r)).sum();
    Ok(sum / samples.len() as f64)
}

/// Sample standard deviation of the observable `f` about a precomputed
/// `mean`. Needs at least two samples.
pub fn sample_stdev<F>(samples: &[DVector<f64>], f: F, mean: f64) -> Result<f64, VmcError>
where
    F: Fn(&DVector<f64>) -> f64,
{
    if samples.is_empty() {
        return Err(VmcError::EmptyInput);
    }
    if samples.len() < 2 {
        return Err(VmcError::InsufficientSamples {
            needed: 2,
            got: samples.len(),
        });
    }
    let sum_dev: f64 = samples.iter().map(|r| (f(r) - mean).powi(2)).sum();
    let denominator = if STDEV_BESSEL_CORRECTION {
        (samples.len() - 1) as f64
    } else {
        samples.len() as f64
    };
    Ok((sum_dev / denominator).sqrt())
}
