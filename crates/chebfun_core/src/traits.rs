use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::Serialize;
use std::f64::consts::LN_2;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A type that can be sampled at Chebyshev points and stored in a `Chebfun`.
///
/// Implemented for real (`f64`) and complex (`Complex64`) samples. The
/// transforms run in complex arithmetic, so every value must round-trip
/// through `Complex64`; real values drop the imaginary residue on the way
/// back.
pub trait ChebValue:
    Copy
    + Debug
    + PartialEq
    + Zero
    + One
    + Serialize
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Send
    + Sync
    + 'static
{
    fn from_real(x: f64) -> Self;
    fn from_complex(z: Complex64) -> Self;
    fn to_complex(self) -> Complex64;

    /// Absolute value for reals, modulus for complex numbers.
    fn modulus(self) -> f64;
    fn real_part(self) -> f64;
    fn imag_part(self) -> f64;

    fn pow(self, exponent: Self) -> Self;
    fn sqrt(self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn expm1(self) -> Self;
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn log1p(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
}

impl ChebValue for f64 {
    fn from_real(x: f64) -> Self {
        x
    }
    fn from_complex(z: Complex64) -> Self {
        z.re
    }
    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }
    fn modulus(self) -> f64 {
        f64::abs(self)
    }
    fn real_part(self) -> f64 {
        self
    }
    fn imag_part(self) -> f64 {
        0.0
    }
    fn pow(self, exponent: Self) -> Self {
        self.powf(exponent)
    }
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
    fn exp(self) -> Self {
        f64::exp(self)
    }
    fn exp2(self) -> Self {
        f64::exp2(self)
    }
    fn expm1(self) -> Self {
        f64::exp_m1(self)
    }
    fn ln(self) -> Self {
        f64::ln(self)
    }
    fn log2(self) -> Self {
        f64::log2(self)
    }
    fn log1p(self) -> Self {
        f64::ln_1p(self)
    }
    fn sin(self) -> Self {
        f64::sin(self)
    }
    fn cos(self) -> Self {
        f64::cos(self)
    }
    fn tan(self) -> Self {
        f64::tan(self)
    }
    fn asin(self) -> Self {
        f64::asin(self)
    }
    fn acos(self) -> Self {
        f64::acos(self)
    }
    fn atan(self) -> Self {
        f64::atan(self)
    }
    fn sinh(self) -> Self {
        f64::sinh(self)
    }
    fn cosh(self) -> Self {
        f64::cosh(self)
    }
    fn tanh(self) -> Self {
        f64::tanh(self)
    }
    fn asinh(self) -> Self {
        f64::asinh(self)
    }
    fn acosh(self) -> Self {
        f64::acosh(self)
    }
    fn atanh(self) -> Self {
        f64::atanh(self)
    }
}

impl ChebValue for Complex64 {
    fn from_real(x: f64) -> Self {
        Complex64::new(x, 0.0)
    }
    fn from_complex(z: Complex64) -> Self {
        z
    }
    fn to_complex(self) -> Complex64 {
        self
    }
    fn modulus(self) -> f64 {
        self.norm()
    }
    fn real_part(self) -> f64 {
        self.re
    }
    fn imag_part(self) -> f64 {
        self.im
    }
    fn pow(self, exponent: Self) -> Self {
        self.powc(exponent)
    }
    fn sqrt(self) -> Self {
        Complex64::sqrt(self)
    }
    fn exp(self) -> Self {
        Complex64::exp(self)
    }
    fn exp2(self) -> Self {
        Complex64::exp(self * LN_2)
    }
    fn expm1(self) -> Self {
        Complex64::exp(self) - Complex64::one()
    }
    fn ln(self) -> Self {
        Complex64::ln(self)
    }
    fn log2(self) -> Self {
        Complex64::ln(self) / LN_2
    }
    fn log1p(self) -> Self {
        Complex64::ln(self + Complex64::one())
    }
    fn sin(self) -> Self {
        Complex64::sin(self)
    }
    fn cos(self) -> Self {
        Complex64::cos(self)
    }
    fn tan(self) -> Self {
        Complex64::tan(self)
    }
    fn asin(self) -> Self {
        Complex64::asin(self)
    }
    fn acos(self) -> Self {
        Complex64::acos(self)
    }
    fn atan(self) -> Self {
        Complex64::atan(self)
    }
    fn sinh(self) -> Self {
        Complex64::sinh(self)
    }
    fn cosh(self) -> Self {
        Complex64::cosh(self)
    }
    fn tanh(self) -> Self {
        Complex64::tanh(self)
    }
    fn asinh(self) -> Self {
        Complex64::asinh(self)
    }
    fn acosh(self) -> Self {
        Complex64::acosh(self)
    }
    fn atanh(self) -> Self {
        Complex64::atanh(self)
    }
}
