//! Quadrature, antiderivatives and derivatives via Chebyshev coefficient
//! recurrences.

use crate::chebfun::Chebfun;
use crate::error::Result;
use crate::traits::ChebValue;

/// Coefficients of an antiderivative on [-1, 1] (integration constant 0).
///
/// The result has one more coefficient than the input.
pub fn antiderivative_coefficients<T: ChebValue>(coeffs: &[T]) -> Vec<T> {
    let n = coeffs.len();
    let mut integrated = vec![T::zero(); n + 1];
    if n == 0 {
        return integrated;
    }
    integrated[1] = coeffs[0];
    if n > 1 {
        integrated[2] = coeffs[1] * 0.25;
    }
    for j in 2..n {
        integrated[j + 1] = coeffs[j] / (2.0 * (j + 1) as f64);
        integrated[j - 1] = integrated[j - 1] - coeffs[j] / (2.0 * (j - 1) as f64);
    }
    integrated
}

/// Coefficients of the derivative on [-1, 1], computed back to front.
///
/// Keeps the input length (the top entry is zero) except for constants and
/// linear terms, which collapse to a single coefficient.
pub fn derivative_coefficients<T: ChebValue>(coeffs: &[T]) -> Vec<T> {
    let m = coeffs.len();
    match m {
        0 | 1 => return vec![T::zero()],
        2 => return vec![coeffs[1]],
        _ => {}
    }
    let scaled = |k: usize| coeffs[k] * (2 * k) as f64;
    let mut derived = vec![T::zero(); m];
    derived[m - 2] = scaled(m - 1);
    for k in (1..m - 2).rev() {
        derived[k] = scaled(k + 1) + derived[k + 2];
    }
    derived[0] = (scaled(1) + derived[2]) * 0.5;
    derived
}

/// Integral over [-1, 1] of a Chebyshev series: only even terms contribute,
/// ∫T_2j = 2 / (1 - 4j^2).
pub fn clenshaw_curtis<T: ChebValue>(coeffs: &[T]) -> T {
    coeffs
        .iter()
        .step_by(2)
        .enumerate()
        .fold(T::zero(), |acc, (j, &c)| {
            let even = (2 * j) as f64;
            acc + c * (2.0 / (1.0 - even * even))
        })
}

impl<T: ChebValue> Chebfun<T> {
    /// Definite integral over the domain (Clenshaw-Curtis quadrature).
    pub fn sum(&self) -> T {
        clenshaw_curtis(&self.coefficients()) * (0.5 * self.domain().width())
    }

    /// The antiderivative that vanishes at the left endpoint.
    pub fn integrate(&self) -> Chebfun<T> {
        let domain = self.domain();
        let coeffs: Vec<T> = antiderivative_coefficients(&self.coefficients())
            .into_iter()
            .map(|c| c * (0.5 * domain.width()))
            .collect();
        let antiderivative = Chebfun::from_coefficients(&coeffs, domain, true, 1.0);
        // The left endpoint is a node, so this is its stored value and the
        // shifted value there is exactly zero.
        let offset = antiderivative.eval(domain.start());
        let values = antiderivative.values().iter().map(|&v| v - offset).collect();
        Chebfun::build(values, domain, Some(antiderivative.vscale()))
    }

    /// The `order`-th derivative.
    pub fn differentiate(&self, order: usize) -> Chebfun<T> {
        let domain = self.domain();
        let mut coeffs = self.coefficients();
        for _ in 0..order {
            coeffs = derivative_coefficients(&coeffs);
        }
        let scale = (2.0 / domain.width()).powi(order as i32);
        let coeffs: Vec<T> = coeffs.into_iter().map(|c| c * scale).collect();
        Chebfun::from_coefficients(&coeffs, domain, true, 1.0)
    }

    /// Same as `integrate`.
    pub fn cumsum(&self) -> Chebfun<T> {
        self.integrate()
    }

    /// Same as `differentiate`.
    pub fn diff(&self, order: usize) -> Chebfun<T> {
        self.differentiate(order)
    }

    /// Integral of the pointwise product.
    pub fn dot(&self, other: &Chebfun<T>) -> Result<T> {
        Ok(self.mul(other)?.sum())
    }

    /// Square root of `self.dot(self)`.
    pub fn norm(&self) -> Result<T> {
        Ok(self.dot(self)?.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use crate::error::ChebError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn antiderivative_of_basis_polynomials() {
        // ∫T0 = T1, ∫T1 = T2/4, ∫T2 = T3/6 - T1/2
        assert_eq!(antiderivative_coefficients(&[1.0]), vec![0.0, 1.0]);
        assert_eq!(antiderivative_coefficients(&[0.0, 1.0]), vec![0.0, 0.0, 0.25]);
        let t2 = antiderivative_coefficients(&[0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(t2[1], -0.5);
        assert_abs_diff_eq!(t2[3], 1.0 / 6.0);
    }

    #[test]
    fn derivative_special_cases() {
        assert_eq!(derivative_coefficients(&[4.0]), vec![0.0]);
        assert_eq!(derivative_coefficients(&[4.0, -2.0]), vec![-2.0]);
        // d/dx (a0 + a1 x + a2 T2) = a1 + 4 a2 x
        assert_eq!(derivative_coefficients(&[1.0, 3.0, 2.0]), vec![3.0, 8.0, 0.0]);
    }

    #[test]
    fn derivative_of_t4() {
        // T4' = 4 U3 = 8 T3 + 8 T1
        let derived = derivative_coefficients(&[0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(derived, vec![0.0, 8.0, 0.0, 8.0, 0.0]);
    }

    #[test]
    fn definite_integrals() -> anyhow::Result<()> {
        let square = Chebfun::from_function(|x: f64| x * x, Domain::unit(), None)?;
        assert_abs_diff_eq!(square.sum(), 2.0 / 3.0, epsilon = 1e-15);

        let domain = Domain::new(0.0, std::f64::consts::PI)?;
        let sine = Chebfun::from_function(f64::sin, domain, None)?;
        assert_abs_diff_eq!(sine.sum(), 2.0, epsilon = 1e-14);

        let constant = Chebfun::constant(3.0, Domain::new(1.0, 5.0)?);
        assert_abs_diff_eq!(constant.sum(), 12.0, epsilon = 1e-14);
        Ok(())
    }

    #[test]
    fn integral_vanishes_at_left_endpoint() -> anyhow::Result<()> {
        let domain = Domain::new(-0.5, 2.0)?;
        let f = Chebfun::from_function(|x: f64| x.exp(), domain, None)?;
        let primitive = f.integrate();
        assert_eq!(primitive.eval(domain.start()), 0.0);
        for k in 0..=10 {
            let x = -0.5 + 0.25 * k as f64;
            let expected = x.exp() - (-0.5_f64).exp();
            assert!((primitive.eval(x) - expected).abs() < 1e-13);
        }
        assert!((primitive.eval(domain.end()) - f.sum()).abs() < 1e-13);
        Ok(())
    }

    #[test]
    fn integral_of_constant_is_linear() {
        let c = Chebfun::constant(2.0, Domain::new(1.0, 3.0).unwrap());
        let primitive = c.integrate();
        assert_eq!(primitive.size(), 2);
        assert!((primitive.eval(2.5) - 3.0).abs() < 1e-14);
    }

    #[test]
    fn differentiate_inverts_integrate() -> anyhow::Result<()> {
        let domain = Domain::new(0.0, 3.0)?;
        let f = Chebfun::from_function(|x: f64| (2.0 * x).cos() + x, domain, None)?;
        let roundtrip = f.integrate().differentiate(1);
        let lhs = roundtrip.coefficients();
        let rhs = f.coefficients();
        // Pruning the antiderivative drops terms near 128 eps; differentiating
        // amplifies the k-th of them by about 2k.
        for k in 0..lhs.len().min(rhs.len()) {
            assert_abs_diff_eq!(lhs[k], rhs[k], epsilon = 1e-10);
        }
        for k in 0..=30 {
            let x = 0.1 * k as f64;
            assert_abs_diff_eq!(roundtrip.eval(x), f.eval(x), epsilon = 1e-10);
        }
        Ok(())
    }

    #[test]
    fn higher_derivatives_scale_with_domain() -> anyhow::Result<()> {
        let domain = Domain::new(-2.0, 2.0)?;
        let f = Chebfun::from_function(|x: f64| x.powi(3), domain, None)?;
        let second = f.differentiate(2);
        for &x in &[-1.5, 0.0, 0.7, 2.0] {
            assert!((second.eval(x) - 6.0 * x).abs() < 1e-12);
        }
        let fourth = f.differentiate(4);
        assert_eq!(fourth.size(), 1);
        assert!(fourth.is_zero());
        Ok(())
    }

    #[test]
    fn cumsum_and_diff_match_integrate_and_differentiate() -> anyhow::Result<()> {
        let f = Chebfun::from_function(|x: f64| x.sin() * x, Domain::new(-1.0, 2.0)?, None)?;
        assert_eq!(f.cumsum().values(), f.integrate().values());
        assert_eq!(f.diff(2).values(), f.differentiate(2).values());
        assert_eq!(f.diff(0).values(), f.values());
        Ok(())
    }

    #[test]
    fn dot_and_norm() -> anyhow::Result<()> {
        let domain = Domain::new(0.0, 4.0)?;
        let one = Chebfun::constant(1.0, domain);
        assert_abs_diff_eq!(one.norm()?, 2.0, epsilon = 1e-14);

        let x = Chebfun::<f64>::identity(domain);
        // ∫_0^4 x dx
        assert_abs_diff_eq!(x.dot(&one)?, 8.0, epsilon = 1e-13);

        let elsewhere = Chebfun::constant(1.0, Domain::unit());
        assert!(matches!(
            x.dot(&elsewhere),
            Err(ChebError::DomainMismatch { .. })
        ));
        Ok(())
    }
}
