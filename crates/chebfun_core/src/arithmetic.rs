//! Arithmetic and elementary functions on `Chebfun`s.
//!
//! Addition and subtraction are linear and act on Chebyshev coefficients.
//! Products, quotients, powers and the elementary functions are not: they
//! resample the pointwise result and refit it adaptively.

use crate::chebfun::Chebfun;
use crate::error::{ChebError, Result};
use crate::traits::ChebValue;

impl<T: ChebValue> Chebfun<T> {
    fn ensure_same_domain(&self, other: &Chebfun<T>) -> Result<()> {
        if self.domain().approx_eq(&other.domain()) {
            Ok(())
        } else {
            Err(ChebError::DomainMismatch {
                left: self.domain(),
                right: other.domain(),
            })
        }
    }

    fn promote(&self, value: T) -> Chebfun<T> {
        Chebfun::constant(value, self.domain())
    }

    /// Sum of coefficients, the shorter vector zero-padded; pruned with the
    /// larger of the two vscales.
    fn add_coefficients(&self, other: &Chebfun<T>) -> Chebfun<T> {
        let (mut sum, shorter) = if self.size() >= other.size() {
            (self.coefficients(), other.coefficients())
        } else {
            (other.coefficients(), self.coefficients())
        };
        for (s, c) in sum.iter_mut().zip(shorter) {
            *s = *s + c;
        }
        let vscale = self.vscale().max(other.vscale());
        Chebfun::from_coefficients(&sum, self.domain(), true, vscale)
    }

    /// Refits `op` applied pointwise to the values of `self`.
    fn resample<F>(&self, op: F) -> Result<Chebfun<T>>
    where
        F: Fn(T) -> T,
    {
        Chebfun::from_function(|x| op(self.eval(x)), self.domain(), None)
    }

    fn resample_with<F>(&self, other: &Chebfun<T>, op: F) -> Result<Chebfun<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.ensure_same_domain(other)?;
        Chebfun::from_function(|x| op(self.eval(x), other.eval(x)), self.domain(), None)
    }

    pub fn add(&self, other: &Chebfun<T>) -> Result<Chebfun<T>> {
        self.ensure_same_domain(other)?;
        Ok(self.add_coefficients(other))
    }

    pub fn sub(&self, other: &Chebfun<T>) -> Result<Chebfun<T>> {
        self.add(&other.neg())
    }

    pub fn add_scalar(&self, value: T) -> Chebfun<T> {
        self.add_coefficients(&self.promote(value))
    }

    pub fn sub_scalar(&self, value: T) -> Chebfun<T> {
        self.add_scalar(-value)
    }

    /// value - self
    pub fn rsub_scalar(&self, value: T) -> Chebfun<T> {
        self.sub_scalar(value).neg()
    }

    pub fn neg(&self) -> Chebfun<T> {
        let values = self.values().iter().map(|&v| -v).collect();
        Chebfun::build(values, self.domain(), None)
    }

    pub fn mul(&self, other: &Chebfun<T>) -> Result<Chebfun<T>> {
        self.resample_with(other, |a, b| a * b)
    }

    /// Pointwise quotient; fragile where `other` vanishes.
    pub fn div(&self, other: &Chebfun<T>) -> Result<Chebfun<T>> {
        self.resample_with(other, |a, b| a / b)
    }

    pub fn pow(&self, other: &Chebfun<T>) -> Result<Chebfun<T>> {
        self.resample_with(other, |a, b| a.pow(b))
    }

    pub fn mul_scalar(&self, value: T) -> Result<Chebfun<T>> {
        self.mul(&self.promote(value))
    }

    pub fn div_scalar(&self, value: T) -> Result<Chebfun<T>> {
        self.div(&self.promote(value))
    }

    /// value / self
    pub fn rdiv_scalar(&self, value: T) -> Result<Chebfun<T>> {
        self.promote(value).div(self)
    }

    pub fn pow_scalar(&self, exponent: T) -> Result<Chebfun<T>> {
        self.pow(&self.promote(exponent))
    }

    pub fn sqrt(&self) -> Result<Chebfun<T>> {
        self.resample(T::sqrt)
    }

    pub fn exp(&self) -> Result<Chebfun<T>> {
        self.resample(T::exp)
    }

    pub fn exp2(&self) -> Result<Chebfun<T>> {
        self.resample(T::exp2)
    }

    pub fn expm1(&self) -> Result<Chebfun<T>> {
        self.resample(T::expm1)
    }

    pub fn ln(&self) -> Result<Chebfun<T>> {
        self.resample(T::ln)
    }

    pub fn log2(&self) -> Result<Chebfun<T>> {
        self.resample(T::log2)
    }

    pub fn log1p(&self) -> Result<Chebfun<T>> {
        self.resample(T::log1p)
    }

    pub fn sin(&self) -> Result<Chebfun<T>> {
        self.resample(T::sin)
    }

    pub fn cos(&self) -> Result<Chebfun<T>> {
        self.resample(T::cos)
    }

    pub fn tan(&self) -> Result<Chebfun<T>> {
        self.resample(T::tan)
    }

    pub fn asin(&self) -> Result<Chebfun<T>> {
        self.resample(T::asin)
    }

    pub fn acos(&self) -> Result<Chebfun<T>> {
        self.resample(T::acos)
    }

    pub fn atan(&self) -> Result<Chebfun<T>> {
        self.resample(T::atan)
    }

    pub fn sinh(&self) -> Result<Chebfun<T>> {
        self.resample(T::sinh)
    }

    pub fn cosh(&self) -> Result<Chebfun<T>> {
        self.resample(T::cosh)
    }

    pub fn tanh(&self) -> Result<Chebfun<T>> {
        self.resample(T::tanh)
    }

    pub fn asinh(&self) -> Result<Chebfun<T>> {
        self.resample(T::asinh)
    }

    pub fn acosh(&self) -> Result<Chebfun<T>> {
        self.resample(T::acosh)
    }

    pub fn atanh(&self) -> Result<Chebfun<T>> {
        self.resample(T::atanh)
    }

    /// Modulus, refit as a real-valued Fun.
    pub fn abs(&self) -> Result<Chebfun<f64>> {
        Chebfun::from_function(|x| self.eval(x).modulus(), self.domain(), None)
    }

    /// Real part, taken directly from the stored values.
    pub fn real(&self) -> Chebfun<f64> {
        let values = self.values().iter().map(|v| v.real_part()).collect();
        Chebfun::build(values, self.domain(), None)
    }

    /// Imaginary part, taken directly from the stored values.
    pub fn imag(&self) -> Chebfun<f64> {
        let values = self.values().iter().map(|v| v.imag_part()).collect();
        Chebfun::build(values, self.domain(), None)
    }
}

// Rounding only makes sense for real values. These rarely converge unless
// the result is constant on the domain.
impl Chebfun<f64> {
    pub fn ceil(&self) -> Result<Chebfun<f64>> {
        self.resample(f64::ceil)
    }

    pub fn floor(&self) -> Result<Chebfun<f64>> {
        self.resample(f64::floor)
    }

    pub fn trunc(&self) -> Result<Chebfun<f64>> {
        self.resample(f64::trunc)
    }

    pub fn fabs(&self) -> Result<Chebfun<f64>> {
        self.resample(f64::abs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use num_complex::Complex64;

    fn sample_points(domain: Domain) -> Vec<f64> {
        (0..=40)
            .map(|k| domain.start() + domain.width() * k as f64 / 40.0)
            .collect()
    }

    #[test]
    fn sum_and_product_match_pointwise() -> anyhow::Result<()> {
        let domain = Domain::new(0.0, 2.0)?;
        let f = Chebfun::from_function(f64::sin, domain, None)?;
        let g = Chebfun::from_function(|x: f64| x.exp(), domain, None)?;
        let sum = f.add(&g)?;
        let diff = f.sub(&g)?;
        let prod = f.mul(&g)?;
        let quot = f.div(&g)?;
        // Fits are pruned at an absolute 128 eps, so errors grow with |f|.
        let close = |actual: f64, expected: f64| {
            (actual - expected).abs() < 1e-13 * (1.0 + expected.abs())
        };
        for x in sample_points(domain) {
            assert!(close(sum.eval(x), x.sin() + x.exp()));
            assert!(close(diff.eval(x), x.sin() - x.exp()));
            assert!(close(prod.eval(x), x.sin() * x.exp()), "product at {x}");
            assert!(close(quot.eval(x), x.sin() / x.exp()));
        }
        Ok(())
    }

    #[test]
    fn sum_keeps_the_larger_vscale() -> anyhow::Result<()> {
        let f = Chebfun::from_values(vec![2.0, 1.0, 0.0], Domain::unit())?;
        let g = Chebfun::from_values(vec![-5.0, 0.5], Domain::unit())?;
        assert_eq!(f.add(&g)?.vscale(), 5.0);
        Ok(())
    }

    #[test]
    fn mismatched_domains_are_rejected() {
        let f = Chebfun::<f64>::identity(Domain::unit());
        let g = Chebfun::<f64>::identity(Domain::new(0.0, 1.0).unwrap());
        for result in [f.add(&g), f.sub(&g), f.mul(&g), f.div(&g), f.pow(&g)] {
            match result {
                Err(ChebError::DomainMismatch { left, right }) => {
                    assert_eq!(left, Domain::unit());
                    assert_eq!(right, g.domain());
                }
                other => panic!("expected DomainMismatch, got {other:?}"),
            }
        }
    }

    #[test]
    fn scalars_are_promoted_to_constants() -> anyhow::Result<()> {
        let domain = Domain::new(-1.0, 3.0)?;
        let x = Chebfun::<f64>::identity(domain);
        let shifted = x.add_scalar(2.0);
        let flipped = x.rsub_scalar(1.0);
        let scaled = x.mul_scalar(3.0)?;
        let halved = x.div_scalar(2.0)?;
        let squared = x.pow_scalar(2.0)?;
        for t in sample_points(domain) {
            assert!((shifted.eval(t) - (t + 2.0)).abs() < 1e-14);
            assert!((flipped.eval(t) - (1.0 - t)).abs() < 1e-14);
            assert!((scaled.eval(t) - 3.0 * t).abs() < 1e-13);
            assert!((halved.eval(t) - 0.5 * t).abs() < 1e-13);
            assert!((squared.eval(t) - t * t).abs() < 1e-12);
        }
        assert_eq!(squared.size(), 3);
        Ok(())
    }

    #[test]
    fn reciprocal_of_positive_function() -> anyhow::Result<()> {
        let domain = Domain::new(1.0, 4.0)?;
        let x = Chebfun::<f64>::identity(domain);
        let inv = x.rdiv_scalar(1.0)?;
        for t in sample_points(domain) {
            assert!((inv.eval(t) - 1.0 / t).abs() < 1e-13);
        }
        Ok(())
    }

    #[test]
    fn negation_flips_values() {
        let f = Chebfun::from_values(vec![1.0, -2.0, 3.0], Domain::unit()).unwrap();
        assert_eq!(f.neg().values(), &[-1.0, 2.0, -3.0]);
        assert!(f.add(&f.neg()).unwrap().is_zero());
    }

    fn assert_matches(fun: &Chebfun<f64>, reference: fn(f64) -> f64) {
        for t in sample_points(fun.domain()) {
            assert!((fun.eval(t) - reference(t)).abs() < 1e-12);
        }
    }

    #[test]
    fn elementary_functions_compose() -> anyhow::Result<()> {
        let x = Chebfun::<f64>::identity(Domain::new(0.1, 0.9)?);
        assert_matches(&x.sqrt()?, f64::sqrt);
        assert_matches(&x.exp()?, f64::exp);
        assert_matches(&x.exp2()?, f64::exp2);
        assert_matches(&x.expm1()?, f64::exp_m1);
        assert_matches(&x.ln()?, f64::ln);
        assert_matches(&x.log2()?, f64::log2);
        assert_matches(&x.log1p()?, f64::ln_1p);
        assert_matches(&x.sin()?, f64::sin);
        assert_matches(&x.cos()?, f64::cos);
        assert_matches(&x.tan()?, f64::tan);
        assert_matches(&x.asin()?, f64::asin);
        assert_matches(&x.acos()?, f64::acos);
        assert_matches(&x.atan()?, f64::atan);
        assert_matches(&x.sinh()?, f64::sinh);
        assert_matches(&x.cosh()?, f64::cosh);
        assert_matches(&x.tanh()?, f64::tanh);
        assert_matches(&x.asinh()?, f64::asinh);
        assert_matches(&x.atanh()?, f64::atanh);

        let shifted = x.add_scalar(1.5).acosh()?;
        assert!((shifted.eval(0.5) - 2.0_f64.acosh()).abs() < 1e-13);
        Ok(())
    }

    #[test]
    fn rounding_a_constant_region_converges() -> anyhow::Result<()> {
        let domain = Domain::new(0.2, 0.8)?;
        let x = Chebfun::<f64>::identity(domain);
        assert!((x.floor()?.eval(0.5)).abs() < 1e-14);
        assert!((x.ceil()?.eval(0.5) - 1.0).abs() < 1e-14);
        assert!((x.trunc()?.eval(0.3)).abs() < 1e-14);
        assert!((x.neg().fabs()?.eval(0.3) - 0.3).abs() < 1e-14);
        Ok(())
    }

    #[test]
    fn real_and_imaginary_parts_are_linear() -> anyhow::Result<()> {
        let domain = Domain::unit();
        let f = Chebfun::from_function(|x: f64| Complex64::new(0.0, x).exp(), domain, None)?;
        let re = f.real();
        let im = f.imag();
        assert_eq!(re.size(), f.size());
        for t in sample_points(domain) {
            assert!((re.eval(t) - t.cos()).abs() < 1e-14);
            assert!((im.eval(t) - t.sin()).abs() < 1e-14);
        }
        let modulus = f.abs()?;
        assert_eq!(modulus.size(), 1);
        assert!((modulus.eval(0.4) - 1.0).abs() < 1e-14);
        Ok(())
    }
}
