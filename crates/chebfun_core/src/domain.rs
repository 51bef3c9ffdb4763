//! Finite intervals and the affine maps onto the canonical interval [-1, 1].

use serde::Serialize;
use std::fmt;

use crate::error::{ChebError, Result};

/// Tolerance (absolute and relative) used when comparing endpoints of two domains.
pub const DOMAIN_TOLERANCE: f64 = 1e-14;

/// A non-degenerate interval [start, end] with start < end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    start: f64,
    end: f64,
}

impl Domain {
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !(start.is_finite() && end.is_finite()) || start >= end {
            return Err(ChebError::InvalidDomain { start, end });
        }
        Ok(Self { start, end })
    }

    /// The canonical interval [-1, 1].
    pub fn unit() -> Self {
        Self {
            start: -1.0,
            end: 1.0,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Maps x in [start, end] to t in [-1, 1].
    pub fn to_unit(&self, x: f64) -> f64 {
        (2.0 * x - self.start - self.end) / (self.end - self.start)
    }

    /// Maps t in [-1, 1] to x in [start, end].
    pub fn from_unit(&self, t: f64) -> f64 {
        0.5 * (self.end - self.start) * t + 0.5 * (self.start + self.end)
    }

    /// Endpoint-wise comparison within `DOMAIN_TOLERANCE`.
    pub fn approx_eq(&self, other: &Domain) -> bool {
        close(self.start, other.start) && close(self.end, other.end)
    }

    /// True when `other` lies inside this domain (endpoints may coincide).
    pub fn contains(&self, other: &Domain) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::unit()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= DOMAIN_TOLERANCE + DOMAIN_TOLERANCE * b.abs()
}
