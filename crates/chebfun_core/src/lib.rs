//! The `chebfun_core` crate approximates functions on a finite interval by
//! Chebyshev interpolants and provides a calculus on them.
//!
//! Key components:
//! - **Transform**: samples at Chebyshev points <-> Chebyshev coefficients (FFT based).
//! - **Interpolant**: barycentric evaluation through Chebyshev points.
//! - **Chebfun**: the immutable function object (values + domain + vscale).
//! - **Adaptive**: dichotomy search for the smallest machine-precision fit.
//! - **Arithmetic / Calculus**: operators, elementary functions, sum, integrate, differentiate.
//! - **Roots**: colleague-matrix eigenvalues with recursive subdivision.
//! - **Vector**: multi-component Funs sharing nodes, domain and pruning.

pub mod adaptive;
pub mod arithmetic;
pub mod calculus;
pub mod chebfun;
pub mod domain;
pub mod error;
pub mod interpolant;
pub mod roots;
pub mod settings;
pub mod traits;
pub mod transform;
pub mod vector;

#[cfg(test)]
mod test_utils;

pub use chebfun::Chebfun;
pub use domain::Domain;
pub use error::{ChebError, Result};
pub use settings::{FitSettings, RootSettings};
pub use traits::ChebValue;
pub use vector::VectorChebfun;
