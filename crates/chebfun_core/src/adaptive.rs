//! Adaptive construction: dichotomy over point counts and coefficient pruning.
//!
//! A function is sampled at 2^k + 1 Chebyshev points for increasing k until
//! its last two Chebyshev coefficients are negligible relative to the
//! largest one. The accepted coefficient vector is then pruned to its last
//! significant entry.

use log::{debug, trace};

use crate::chebfun::{max_modulus, Chebfun};
use crate::domain::Domain;
use crate::error::{ChebError, Result};
use crate::settings::FitSettings;
use crate::traits::ChebValue;
use crate::transform::{coefficients_to_values, interpolation_points, values_to_coefficients};

/// Coefficients at or below this multiple of eps * vscale are negligible.
const THRESHOLD_FACTOR: f64 = 128.0;

/// Pruning threshold for a function of magnitude `vscale`.
pub fn threshold(vscale: f64) -> f64 {
    THRESHOLD_FACTOR * f64::EPSILON * vscale
}

/// Length to keep: one past the last coefficient whose modulus reaches the
/// threshold, and at least 1.
pub fn cutoff<T: ChebValue>(coeffs: &[T], vscale: f64) -> usize {
    let bound = threshold(vscale);
    coeffs
        .iter()
        .rposition(|c| c.modulus() >= bound)
        .map_or(1, |last| last + 1)
}

/// Samples `f` (defined on [-1, 1]) at `n` Chebyshev points.
pub fn sample_function<T, F>(f: &F, n: usize) -> Vec<T>
where
    T: ChebValue,
    F: Fn(f64) -> T,
{
    interpolation_points(n).into_iter().map(f).collect()
}

/// Finds the Chebyshev coefficients of `f` on [-1, 1] by trying 2^k + 1
/// points for k in kmin..kmax.
///
/// Without `require_convergence` the coefficients of the last attempt are
/// returned even when the tail never became negligible.
pub fn dichotomy<T, F>(f: F, kmin: u32, kmax: u32, require_convergence: bool) -> Result<Vec<T>>
where
    T: ChebValue,
    F: Fn(f64) -> T,
{
    FitSettings { kmin, kmax }.validate()?;

    let mut coeffs = Vec::new();
    let mut tail = f64::NAN;
    let mut bound = f64::NAN;
    for k in kmin..kmax {
        let npoints = (1usize << k) + 1;
        let sampled = sample_function(&f, npoints);
        coeffs = values_to_coefficients(&sampled);

        bound = threshold(max_modulus(&coeffs));
        let last = &coeffs[coeffs.len() - 2..];
        tail = last.iter().fold(0.0_f64, |m, c| m.max(c.modulus()));
        trace!("dichotomy k={k}: {npoints} points, tail {tail:e}, threshold {bound:e}");
        if last.iter().all(|c| c.modulus() <= bound) {
            debug!("dichotomy converged with {npoints} points");
            return Ok(coeffs);
        }
    }

    if require_convergence {
        return Err(ChebError::NoConvergence {
            tail,
            threshold: bound,
        });
    }
    debug!(
        "dichotomy accepted {} coefficients without convergence (tail {tail:e})",
        coeffs.len()
    );
    Ok(coeffs)
}

impl<T: ChebValue> Chebfun<T> {
    /// Builds a Fun from Chebyshev coefficients, pruning with vscale 1.
    pub fn from_chebcoeff(coeffs: &[T], domain: Domain, prune: bool) -> Result<Self> {
        Self::from_chebcoeff_with_vscale(coeffs, domain, prune, 1.0)
    }

    pub fn from_chebcoeff_with_vscale(
        coeffs: &[T],
        domain: Domain,
        prune: bool,
        vscale: f64,
    ) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(ChebError::EmptyValues);
        }
        Ok(Self::from_coefficients(coeffs, domain, prune, vscale))
    }

    /// Callers guarantee `coeffs` is non-empty.
    pub(crate) fn from_coefficients(coeffs: &[T], domain: Domain, prune: bool, vscale: f64) -> Self {
        let kept = if prune {
            &coeffs[..cutoff(coeffs, vscale)]
        } else {
            coeffs
        };
        Self::build(coefficients_to_values(kept), domain, Some(vscale))
    }

    /// Adaptively fits `f` on `domain`.
    ///
    /// With `n = None` the full dichotomy runs and must converge. With a
    /// hint, only the power of two just above `n` is tried and the result is
    /// accepted whatever its tail.
    pub fn from_function<F>(f: F, domain: Domain, n: Option<usize>) -> Result<Self>
    where
        F: Fn(f64) -> T,
    {
        Self::from_function_with(f, domain, n, &FitSettings::default())
    }

    pub fn from_function_with<F>(
        f: F,
        domain: Domain,
        n: Option<usize>,
        settings: &FitSettings,
    ) -> Result<Self>
    where
        F: Fn(f64) -> T,
    {
        let on_unit = |t: f64| f(domain.from_unit(t));
        let coeffs = match n {
            Some(n) => {
                // floor(log2 n) + 1
                let k = usize::BITS - n.leading_zeros();
                dichotomy(on_unit, k, k + 1, false)?
            }
            None => dichotomy(on_unit, settings.kmin, settings.kmax, true)?,
        };
        Ok(Self::from_coefficients(&coeffs, domain, true, 1.0))
    }
}
