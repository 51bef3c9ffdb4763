//! Vector-valued Chebyshev interpolants.
//!
//! Every component shares the nodes, the domain and the vscale. Adaptive
//! fitting and pruning look at all components together: the threshold comes
//! from the largest coefficient of any component, and a component that
//! needs more coefficients keeps them for all of them.

use log::{debug, trace};
use nalgebra::{DMatrix, DVector};
use serde::Serialize;

use crate::adaptive::{cutoff, threshold};
use crate::calculus::{antiderivative_coefficients, clenshaw_curtis, derivative_coefficients};
use crate::chebfun::{max_modulus, Chebfun, ZERO_TOLERANCE};
use crate::domain::Domain;
use crate::error::{ChebError, Result};
use crate::interpolant;
use crate::settings::FitSettings;
use crate::traits::ChebValue;
use crate::transform::{coefficients_to_values, interpolation_points, values_to_coefficients};

/// A Chebyshev interpolant whose samples have several components.
///
/// Matrices going in and out are laid out with one row per node (or
/// coefficient, or query point) and one column per component.
#[derive(Debug, Clone, Serialize)]
pub struct VectorChebfun<T: ChebValue = f64> {
    /// Node values, one column per component; all columns have equal length.
    columns: Vec<Vec<T>>,
    domain: Domain,
    vscale: f64,
    #[serde(skip)]
    unit_nodes: Vec<f64>,
    #[serde(skip)]
    weights: Vec<f64>,
}

/// One past the last row in which any column reaches the threshold.
pub fn shared_cutoff<T: ChebValue>(columns: &[Vec<T>], vscale: f64) -> usize {
    columns
        .iter()
        .map(|column| cutoff(column, vscale))
        .max()
        .unwrap_or(1)
}

fn columns_of<T: ChebValue>(matrix: &DMatrix<T>) -> Vec<Vec<T>> {
    matrix
        .column_iter()
        .map(|column| column.iter().copied().collect())
        .collect()
}

fn sample_columns<T, F>(f: &F, dimension: usize, n: usize) -> Result<Vec<Vec<T>>>
where
    T: ChebValue,
    F: Fn(f64) -> Vec<T>,
{
    let mut columns = vec![Vec::with_capacity(n); dimension];
    for t in interpolation_points(n) {
        let sample = f(t);
        if sample.len() != dimension {
            return Err(ChebError::DimensionMismatch {
                expected: dimension,
                actual: sample.len(),
            });
        }
        for (column, value) in columns.iter_mut().zip(sample) {
            column.push(value);
        }
    }
    Ok(columns)
}

/// Dichotomy over all components of `f` at once.
///
/// The last two coefficients of every component must be negligible
/// relative to the largest coefficient of any component.
pub fn dichotomy_columns<T, F>(
    f: &F,
    dimension: usize,
    kmin: u32,
    kmax: u32,
    require_convergence: bool,
) -> Result<Vec<Vec<T>>>
where
    T: ChebValue,
    F: Fn(f64) -> Vec<T>,
{
    FitSettings { kmin, kmax }.validate()?;

    let mut coeffs: Vec<Vec<T>> = Vec::new();
    let mut tail = f64::NAN;
    let mut bound = f64::NAN;
    for k in kmin..kmax {
        let npoints = (1usize << k) + 1;
        coeffs = sample_columns(f, dimension, npoints)?
            .iter()
            .map(|column| values_to_coefficients(column))
            .collect();

        let largest = coeffs
            .iter()
            .map(|column| max_modulus(column))
            .fold(0.0_f64, f64::max);
        bound = threshold(largest);
        let lasts = || coeffs.iter().flat_map(|column| &column[column.len() - 2..]);
        tail = lasts().fold(0.0_f64, |m, c| m.max(c.modulus()));
        trace!("vector dichotomy k={k}: {npoints} points, tail {tail:e}, threshold {bound:e}");
        if lasts().all(|c| c.modulus() <= bound) {
            debug!("vector dichotomy converged with {npoints} points over {dimension} components");
            return Ok(coeffs);
        }
    }

    if require_convergence {
        return Err(ChebError::NoConvergence {
            tail,
            threshold: bound,
        });
    }
    Ok(coeffs)
}

impl<T: ChebValue> VectorChebfun<T> {
    /// Builds the interpolant through the rows of `values`; the vscale is
    /// the largest modulus of any entry.
    pub fn from_values(values: &DMatrix<T>, domain: Domain) -> Result<Self> {
        if values.is_empty() {
            return Err(ChebError::EmptyValues);
        }
        Ok(Self::build(columns_of(values), domain, None))
    }

    /// Stacks scalar Funs on a common domain, padding the shorter
    /// coefficient series with zeros.
    pub fn from_components(components: &[Chebfun<T>]) -> Result<Self> {
        let first = components.first().ok_or(ChebError::EmptyValues)?;
        let domain = first.domain();
        if let Some(other) = components
            .iter()
            .find(|c| !c.domain().approx_eq(&domain))
        {
            return Err(ChebError::DomainMismatch {
                left: domain,
                right: other.domain(),
            });
        }

        let size = components.iter().map(Chebfun::size).max().unwrap_or(1);
        let coeffs = components
            .iter()
            .map(|c| {
                let mut column = c.coefficients();
                column.resize(size, T::zero());
                column
            })
            .collect();
        let vscale = components.iter().map(Chebfun::vscale).fold(0.0_f64, f64::max);
        Ok(Self::from_coefficient_columns(coeffs, domain, false, vscale))
    }

    /// Builds from a coefficient matrix, pruning with vscale 1.
    pub fn from_chebcoeff(coeffs: &DMatrix<T>, domain: Domain, prune: bool) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(ChebError::EmptyValues);
        }
        Ok(Self::from_coefficient_columns(
            columns_of(coeffs),
            domain,
            prune,
            1.0,
        ))
    }

    /// Adaptively fits `f`, whose samples must have `dimension` components.
    ///
    /// The degree hint `n` behaves as for scalar Funs.
    pub fn from_function<F>(f: F, dimension: usize, domain: Domain, n: Option<usize>) -> Result<Self>
    where
        F: Fn(f64) -> Vec<T>,
    {
        Self::from_function_with(f, dimension, domain, n, &FitSettings::default())
    }

    pub fn from_function_with<F>(
        f: F,
        dimension: usize,
        domain: Domain,
        n: Option<usize>,
        settings: &FitSettings,
    ) -> Result<Self>
    where
        F: Fn(f64) -> Vec<T>,
    {
        if dimension == 0 {
            return Err(ChebError::EmptyValues);
        }
        let on_unit = |t: f64| f(domain.from_unit(t));
        let coeffs = match n {
            Some(n) => {
                let k = usize::BITS - n.leading_zeros();
                dichotomy_columns(&on_unit, dimension, k, k + 1, false)?
            }
            None => dichotomy_columns(&on_unit, dimension, settings.kmin, settings.kmax, true)?,
        };
        Ok(Self::from_coefficient_columns(coeffs, domain, true, 1.0))
    }

    /// Callers guarantee at least one non-empty column.
    fn from_coefficient_columns(
        coeffs: Vec<Vec<T>>,
        domain: Domain,
        prune: bool,
        vscale: f64,
    ) -> Self {
        let len = if prune {
            shared_cutoff(&coeffs, vscale)
        } else {
            coeffs[0].len()
        };
        let columns = coeffs
            .iter()
            .map(|column| coefficients_to_values(&column[..len]))
            .collect();
        Self::build(columns, domain, Some(vscale))
    }

    fn build(columns: Vec<Vec<T>>, domain: Domain, vscale: Option<f64>) -> Self {
        let n = columns.first().map_or(0, Vec::len);
        let vscale = vscale.unwrap_or_else(|| {
            columns
                .iter()
                .map(|column| max_modulus(column))
                .fold(0.0_f64, f64::max)
        });
        Self {
            columns,
            domain,
            vscale,
            unit_nodes: interpolation_points(n),
            weights: interpolant::barycentric_weights(n),
        }
    }

    /// Number of components per sample.
    pub fn dimension(&self) -> usize {
        self.columns.len()
    }

    /// Number of interpolation nodes.
    pub fn size(&self) -> usize {
        self.unit_nodes.len()
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn vscale(&self) -> f64 {
        self.vscale
    }

    pub fn values(&self) -> DMatrix<T> {
        DMatrix::from_fn(self.size(), self.dimension(), |i, j| self.columns[j][i])
    }

    pub fn coefficients(&self) -> DMatrix<T> {
        let coeffs: Vec<Vec<T>> = self
            .columns
            .iter()
            .map(|column| values_to_coefficients(column))
            .collect();
        DMatrix::from_fn(self.size(), self.dimension(), |i, j| coeffs[j][i])
    }

    pub fn nodes(&self) -> Vec<f64> {
        self.unit_nodes
            .iter()
            .map(|&t| self.domain.from_unit(t))
            .collect()
    }

    /// The `index`-th component as a scalar Fun on the same domain.
    pub fn component(&self, index: usize) -> Result<Chebfun<T>> {
        let column = self
            .columns
            .get(index)
            .ok_or(ChebError::ComponentOutOfRange {
                index,
                dimension: self.dimension(),
            })?;
        Ok(Chebfun::build(column.clone(), self.domain, None))
    }

    pub fn eval(&self, x: f64) -> DVector<T> {
        let t = self.domain.to_unit(x);
        DVector::from_iterator(
            self.dimension(),
            self.columns
                .iter()
                .map(|column| interpolant::evaluate_at(&self.unit_nodes, &self.weights, column, t)),
        )
    }

    /// One row per query point, one column per component.
    pub fn eval_many(&self, xs: &[f64]) -> DMatrix<T> {
        let unit: Vec<f64> = xs.iter().map(|&x| self.domain.to_unit(x)).collect();
        let evaluated: Vec<Vec<T>> = self
            .columns
            .iter()
            .map(|column| interpolant::evaluate(&self.unit_nodes, &self.weights, column, &unit))
            .collect();
        DMatrix::from_fn(xs.len(), self.dimension(), |i, j| evaluated[j][i])
    }

    pub fn is_zero(&self) -> bool {
        self.columns
            .iter()
            .flatten()
            .all(|v| v.modulus() <= ZERO_TOLERANCE)
    }

    pub fn add(&self, other: &VectorChebfun<T>) -> Result<VectorChebfun<T>> {
        if !self.domain.approx_eq(&other.domain) {
            return Err(ChebError::DomainMismatch {
                left: self.domain,
                right: other.domain,
            });
        }
        if self.dimension() != other.dimension() {
            return Err(ChebError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }

        let size = self.size().max(other.size());
        let padded = |fun: &VectorChebfun<T>| -> Vec<Vec<T>> {
            fun.columns
                .iter()
                .map(|column| {
                    let mut coeffs = values_to_coefficients(column);
                    coeffs.resize(size, T::zero());
                    coeffs
                })
                .collect()
        };
        let sum = padded(self)
            .into_iter()
            .zip(padded(other))
            .map(|(a, b)| a.into_iter().zip(b).map(|(x, y)| x + y).collect::<Vec<T>>())
            .collect();
        let vscale = self.vscale.max(other.vscale);
        Ok(Self::from_coefficient_columns(sum, self.domain, true, vscale))
    }

    pub fn sub(&self, other: &VectorChebfun<T>) -> Result<VectorChebfun<T>> {
        self.add(&other.neg())
    }

    pub fn neg(&self) -> VectorChebfun<T> {
        let columns = self
            .columns
            .iter()
            .map(|column| column.iter().map(|&v| -v).collect::<Vec<T>>())
            .collect();
        Self::build(columns, self.domain, Some(self.vscale))
    }

    /// Definite integral of every component over the domain.
    pub fn sum(&self) -> DVector<T> {
        let half_width = 0.5 * self.domain.width();
        DVector::from_iterator(
            self.dimension(),
            self.columns
                .iter()
                .map(|column| clenshaw_curtis(&values_to_coefficients(column)) * half_width),
        )
    }

    /// Componentwise antiderivative vanishing at the left endpoint.
    pub fn integrate(&self) -> VectorChebfun<T> {
        let half_width = 0.5 * self.domain.width();
        let coeffs = self
            .columns
            .iter()
            .map(|column| {
                antiderivative_coefficients(&values_to_coefficients(column))
                    .into_iter()
                    .map(|c| c * half_width)
                    .collect::<Vec<T>>()
            })
            .collect();
        let antiderivative = Self::from_coefficient_columns(coeffs, self.domain, true, 1.0);
        // Nodes run from right to left, so the last row is the left endpoint.
        let columns = antiderivative
            .columns
            .iter()
            .map(|column| {
                let offset = column[column.len() - 1];
                column.iter().map(|&v| v - offset).collect::<Vec<T>>()
            })
            .collect();
        Self::build(columns, self.domain, Some(antiderivative.vscale))
    }

    /// Componentwise `order`-th derivative.
    pub fn differentiate(&self, order: usize) -> VectorChebfun<T> {
        let scale = (2.0 / self.domain.width()).powi(order as i32);
        let coeffs = self
            .columns
            .iter()
            .map(|column| {
                let mut coeffs = values_to_coefficients(column);
                for _ in 0..order {
                    coeffs = derivative_coefficients(&coeffs);
                }
                coeffs.into_iter().map(|c| c * scale).collect::<Vec<T>>()
            })
            .collect();
        Self::from_coefficient_columns(coeffs, self.domain, true, 1.0)
    }
}
