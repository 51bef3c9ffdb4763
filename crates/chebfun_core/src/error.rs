//! Error kinds shared by every fallible operation in the crate.

use thiserror::Error;

use crate::domain::Domain;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChebError {
    /// The dichotomy search ran out of degrees before the trailing
    /// Chebyshev coefficients dropped below the pruning threshold.
    #[error("Dichotomy did not converge: tail coefficients {tail:e} above threshold {threshold:e}")]
    NoConvergence { tail: f64, threshold: f64 },

    #[error("Domain mismatch: {left} vs {right}")]
    DomainMismatch { left: Domain, right: Domain },

    #[error("Invalid restriction [{start}, {end}] of domain {domain}")]
    InvalidRestriction { start: f64, end: f64, domain: Domain },

    #[error("Invalid domain [{start}, {end}]: endpoints must be finite with start < end")]
    InvalidDomain { start: f64, end: f64 },

    #[error("A Chebfun needs at least one sample value")]
    EmptyValues,

    /// A vector-valued sample had the wrong number of components.
    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Component {index} out of range for dimension {dimension}")]
    ComponentOutOfRange { index: usize, dimension: usize },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, ChebError>;
