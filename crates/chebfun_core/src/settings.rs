//! Tunable numeric settings for adaptive fitting and rootfinding.

use serde::{Deserialize, Serialize};

use crate::error::{ChebError, Result};

/// Range of the dichotomy search: Funs are tried at 2^k + 1 points for
/// k in kmin..kmax.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FitSettings {
    pub kmin: u32,
    pub kmax: u32,
}

impl Default for FitSettings {
    fn default() -> Self {
        Self { kmin: 2, kmax: 12 }
    }
}

impl FitSettings {
    pub fn validate(&self) -> Result<()> {
        if self.kmin >= self.kmax {
            return Err(ChebError::InvalidSettings(format!(
                "kmin ({}) must be smaller than kmax ({})",
                self.kmin, self.kmax
            )));
        }
        if self.kmax >= usize::BITS - 1 {
            return Err(ChebError::InvalidSettings(format!(
                "kmax ({}) exceeds the addressable sample count",
                self.kmax
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RootSettings {
    /// Largest Fun (in nodes) solved directly with a colleague matrix.
    pub max_colleague_size: usize,
    /// Split position in canonical coordinates used when subdividing.
    pub split_point: f64,
    /// Eigenvalues with a larger imaginary part are not real roots.
    pub imag_tolerance: f64,
}

impl Default for RootSettings {
    fn default() -> Self {
        Self {
            max_colleague_size: 100,
            split_point: 0.0123456789,
            imag_tolerance: 1e-10,
        }
    }
}

impl RootSettings {
    pub fn validate(&self) -> Result<()> {
        if self.max_colleague_size < 2 {
            return Err(ChebError::InvalidSettings(
                "max_colleague_size must be at least 2".into(),
            ));
        }
        if !(self.split_point > -1.0 && self.split_point < 1.0) {
            return Err(ChebError::InvalidSettings(format!(
                "split_point ({}) must lie strictly inside (-1, 1)",
                self.split_point
            )));
        }
        if !(self.imag_tolerance >= 0.0) {
            return Err(ChebError::InvalidSettings(
                "imag_tolerance must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
