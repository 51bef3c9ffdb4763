//! Real roots of `Chebfun`s.
//!
//! Uses Boyd's recursive subdivision: Funs with at most
//! `max_colleague_size` nodes are solved through the eigenvalues of their
//! colleague matrix, larger ones are split at a slightly off-centre point
//! and each half is refit and solved recursively.
//!
//! A complex-valued Fun has a real root where its real and imaginary parts
//! vanish together: candidates come from the part with the larger scale and
//! are kept when the other part is negligible there.
//!
//! J. P. Boyd, Computing zeros on a real interval through Chebyshev
//! expansion and polynomial rootfinding, SIAM J. Numer. Anal., 40 (2002),
//! pp. 1666-1682.

use log::{debug, trace};
use nalgebra::linalg::balancing::balance_parlett_reinsch;
use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::adaptive::cutoff;
use crate::chebfun::Chebfun;
use crate::error::Result;
use crate::settings::RootSettings;

impl Chebfun<f64> {
    /// Roots in the domain, sorted ascending.
    pub fn roots(&self) -> Result<Vec<f64>> {
        self.roots_with(&RootSettings::default())
    }

    pub fn roots_with(&self, settings: &RootSettings) -> Result<Vec<f64>> {
        settings.validate()?;
        self.find_roots(settings)
    }

    fn find_roots(&self, settings: &RootSettings) -> Result<Vec<f64>> {
        let domain = self.domain();
        if self.size() <= settings.max_colleague_size {
            let mut roots: Vec<f64> = colleague_roots(
                &self.coefficients(),
                self.vscale(),
                settings.imag_tolerance,
            )
            .into_iter()
            .map(|t| domain.from_unit(t))
            .collect();
            roots.sort_by(f64::total_cmp);
            return Ok(roots);
        }

        let split = domain.from_unit(settings.split_point);
        trace!("splitting {} nodes on {domain} at {split}", self.size());
        let mut roots = self.restrict(domain.start(), split)?.find_roots(settings)?;
        roots.extend(self.restrict(split, domain.end())?.find_roots(settings)?);
        Ok(roots)
    }
}

impl Chebfun<Complex64> {
    /// Real roots in the domain, sorted ascending.
    pub fn roots(&self) -> Result<Vec<f64>> {
        self.roots_with(&RootSettings::default())
    }

    pub fn roots_with(&self, settings: &RootSettings) -> Result<Vec<f64>> {
        settings.validate()?;
        let re = self.real();
        let im = self.imag();
        let (primary, secondary) = if re.vscale() >= im.vscale() {
            (re, im)
        } else {
            (im, re)
        };
        let candidates = primary.find_roots(settings)?;
        if secondary.is_zero() {
            return Ok(candidates);
        }

        let tolerance = settings.imag_tolerance * self.vscale().max(1.0);
        let roots: Vec<f64> = candidates
            .into_iter()
            .filter(|&t| secondary.eval(t).abs() <= tolerance)
            .collect();
        debug!("{} real roots of complex Fun on {}", roots.len(), self.domain());
        Ok(roots)
    }
}

/// Real roots in [-1, 1] of the Chebyshev series `coeffs`.
///
/// Trailing coefficients below the pruning threshold for `vscale` are
/// dropped first so the leading coefficient is significant.
pub fn colleague_roots(coeffs: &[f64], vscale: f64, imag_tolerance: f64) -> Vec<f64> {
    let mut len = cutoff(coeffs, vscale).min(coeffs.len());
    while len > 1 && coeffs[len - 1] == 0.0 {
        len -= 1;
    }
    let coeffs = &coeffs[..len];

    match len {
        0 | 1 => Vec::new(),
        2 => {
            let root = -coeffs[0] / coeffs[1];
            if root.abs() <= 1.0 {
                vec![root]
            } else {
                Vec::new()
            }
        }
        _ => {
            let mut colleague = colleague_matrix(coeffs);
            balance_parlett_reinsch(&mut colleague);
            debug!("solving colleague matrix of dimension {}", colleague.nrows());
            colleague
                .complex_eigenvalues()
                .iter()
                .filter(|z| z.im.abs() <= imag_tolerance && z.re.abs() <= 1.0)
                .map(|z| z.re)
                .collect()
        }
    }
}

/// Colleague matrix of a series with at least three coefficients.
///
/// Rows encode x T_0 = T_1 and x T_k = (T_{k+1} + T_{k-1}) / 2; the last row
/// substitutes T_n from the series, normalized by its leading coefficient.
pub fn colleague_matrix(coeffs: &[f64]) -> DMatrix<f64> {
    let dim = coeffs.len() - 1;
    let mut colleague = DMatrix::<f64>::zeros(dim, dim);
    for i in 0..dim - 1 {
        colleague[(i, i + 1)] = 0.5;
        colleague[(i + 1, i)] = 0.5;
    }
    colleague[(0, 1)] = 1.0;
    let leading = coeffs[dim];
    for j in 0..dim {
        colleague[(dim - 1, j)] -= 0.5 * coeffs[j] / leading;
    }
    colleague
}
