//! The `Chebfun` function object: samples at Chebyshev points plus a domain.

use serde::Serialize;

use crate::domain::Domain;
use crate::error::{ChebError, Result};
use crate::interpolant;
use crate::traits::ChebValue;
use crate::transform::{interpolation_points, values_to_coefficients};

/// Stored values with all moduli at or below this are treated as zero.
pub const ZERO_TOLERANCE: f64 = 1e-8;

/// A Chebyshev interpolant on a finite interval.
///
/// `values` holds the samples at the Chebyshev points of [-1, 1] (ordered
/// from 1 down to -1), mapped affinely onto `domain`. Coefficients are
/// derived on demand. Every operation returns a new `Chebfun`.
#[derive(Debug, Clone, Serialize)]
pub struct Chebfun<T: ChebValue = f64> {
    values: Vec<T>,
    domain: Domain,
    vscale: f64,
    #[serde(skip)]
    unit_nodes: Vec<f64>,
    #[serde(skip)]
    weights: Vec<f64>,
}

impl<T: ChebValue> Chebfun<T> {
    /// Builds the interpolant through `values`; the vscale is max |values|.
    pub fn from_values(values: Vec<T>, domain: Domain) -> Result<Self> {
        if values.is_empty() {
            return Err(ChebError::EmptyValues);
        }
        Ok(Self::build(values, domain, None))
    }

    /// Like `from_values`, but keeps an externally supplied vscale.
    pub fn from_values_with_vscale(values: Vec<T>, domain: Domain, vscale: f64) -> Result<Self> {
        if values.is_empty() {
            return Err(ChebError::EmptyValues);
        }
        Ok(Self::build(values, domain, Some(vscale)))
    }

    /// The constant function `value` on `domain`.
    pub fn constant(value: T, domain: Domain) -> Self {
        Self::build(vec![value], domain, None)
    }

    /// Recasts another Fun from its values and domain.
    pub fn from_fun(other: &Chebfun<T>) -> Self {
        Self::build(other.values.clone(), other.domain, None)
    }

    /// The function x -> x on `domain`.
    pub fn identity(domain: Domain) -> Self {
        Self::build(
            vec![T::from_real(domain.end()), T::from_real(domain.start())],
            domain,
            None,
        )
    }

    /// The Chebyshev polynomial T_n on [-1, 1].
    pub fn basis(n: usize) -> Self {
        let values = (0..=n)
            .map(|k| if k % 2 == 0 { T::one() } else { -T::one() })
            .collect();
        Self::build(values, Domain::unit(), None)
    }

    /// Callers guarantee `values` is non-empty.
    pub(crate) fn build(values: Vec<T>, domain: Domain, vscale: Option<f64>) -> Self {
        let n = values.len();
        let vscale = vscale.unwrap_or_else(|| max_modulus(&values));
        Self {
            values,
            domain,
            vscale,
            unit_nodes: interpolation_points(n),
            weights: interpolant::barycentric_weights(n),
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn vscale(&self) -> f64 {
        self.vscale
    }

    /// Number of interpolation nodes.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn coefficients(&self) -> Vec<T> {
        values_to_coefficients(&self.values)
    }

    /// Interpolation nodes mapped onto the domain, in storage order.
    pub fn nodes(&self) -> Vec<f64> {
        self.unit_nodes
            .iter()
            .map(|&t| self.domain.from_unit(t))
            .collect()
    }

    pub fn eval(&self, x: f64) -> T {
        interpolant::evaluate_at(
            &self.unit_nodes,
            &self.weights,
            &self.values,
            self.domain.to_unit(x),
        )
    }

    pub fn eval_many(&self, xs: &[f64]) -> Vec<T> {
        let unit: Vec<f64> = xs.iter().map(|&x| self.domain.to_unit(x)).collect();
        interpolant::evaluate(&self.unit_nodes, &self.weights, &self.values, &unit)
    }

    /// True when every stored value is numerically zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| v.modulus() <= ZERO_TOLERANCE)
    }

    /// Refits `self` on the sub-interval [start, end] of its domain.
    pub fn restrict(&self, start: f64, end: f64) -> Result<Self> {
        let invalid = || ChebError::InvalidRestriction {
            start,
            end,
            domain: self.domain,
        };
        if !(start < end) || start < self.domain.start() || end > self.domain.end() {
            return Err(invalid());
        }
        let subdomain = Domain::new(start, end).map_err(|_| invalid())?;
        Self::from_function(|x| self.eval(x), subdomain, None)
    }
}

/// Equal when the difference is numerically the zero function; Funs on
/// different domains are never equal.
impl<T: ChebValue> PartialEq for Chebfun<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sub(other).map(|d| d.is_zero()).unwrap_or(false)
    }
}

pub(crate) fn max_modulus<T: ChebValue>(values: &[T]) -> f64 {
    values.iter().fold(0.0_f64, |m, v| m.max(v.modulus()))
}
