//! Conversions between samples at Chebyshev points and Chebyshev coefficients.
//!
//! Both directions are a type-I discrete cosine transform, computed as an
//! FFT of the even (mirror) extension of the data. For N samples the
//! extension has length 2(N - 1).

use rustfft::{num_complex::Complex64, FftPlanner};
use std::f64::consts::PI;

use crate::traits::ChebValue;

/// The N Chebyshev-Gauss-Lobatto points cos(kπ/(N-1)), k = 0..N-1.
///
/// Points run from 1 down to -1. A single point sits at 0.
pub fn interpolation_points(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let denom = (n - 1) as f64;
            (0..n).map(|k| (k as f64 * PI / denom).cos()).collect()
        }
    }
}

/// Chebyshev coefficients of the interpolant through `samples`.
pub fn values_to_coefficients<T: ChebValue>(samples: &[T]) -> Vec<T> {
    let n = samples.len();
    if n <= 1 {
        return samples.to_vec();
    }

    let data: Vec<Complex64> = samples.iter().map(|v| v.to_complex()).collect();
    let mut buffer = even_extension(&data);
    let mut planner = FftPlanner::<f64>::new();
    planner.plan_fft_forward(buffer.len()).process(&mut buffer);

    let scale = 1.0 / (n - 1) as f64;
    let mut coeffs: Vec<T> = buffer[..n]
        .iter()
        .map(|z| T::from_complex(*z * scale))
        .collect();
    coeffs[0] = coeffs[0] * 0.5;
    coeffs[n - 1] = coeffs[n - 1] * 0.5;
    coeffs
}

/// Values at the Chebyshev points of the series with coefficients `coeffs`.
pub fn coefficients_to_values<T: ChebValue>(coeffs: &[T]) -> Vec<T> {
    let n = coeffs.len();
    if n <= 1 {
        return coeffs.to_vec();
    }

    // Interior coefficients are halved; the boundary ones keep full weight.
    let data: Vec<Complex64> = coeffs
        .iter()
        .enumerate()
        .map(|(k, c)| {
            let z = c.to_complex();
            if k == 0 || k == n - 1 {
                z
            } else {
                z * 0.5
            }
        })
        .collect();
    let mut buffer = even_extension(&data);
    let mut planner = FftPlanner::<f64>::new();
    // rustfft leaves the inverse unnormalized, which is exactly the
    // 2(N - 1) scaling of the normalized inverse.
    planner.plan_fft_inverse(buffer.len()).process(&mut buffer);

    buffer[..n].iter().map(|z| T::from_complex(*z)).collect()
}

/// [x0, x1, ..., x_{n-1}] -> [x0, ..., x_{n-1}, x_{n-2}, ..., x1]
fn even_extension(data: &[Complex64]) -> Vec<Complex64> {
    let n = data.len();
    let mut extended = Vec::with_capacity(2 * (n - 1));
    extended.extend_from_slice(data);
    extended.extend(data[1..n - 1].iter().rev());
    extended
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn interpolation_points_cover_unit_interval() {
        assert!(interpolation_points(0).is_empty());
        assert_eq!(interpolation_points(1), vec![0.0]);

        let points = interpolation_points(5);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], 1.0);
        assert_eq!(points[4], -1.0);
        for (k, &x) in points.iter().enumerate() {
            assert_relative_eq!(x, (k as f64 * PI / 4.0).cos(), epsilon = 1e-15);
        }
    }

    #[test]
    fn even_extension_mirrors_interior() {
        let data: Vec<Complex64> = (0..5).map(|k| Complex64::new(k as f64, 0.0)).collect();
        let extended: Vec<f64> = even_extension(&data).iter().map(|z| z.re).collect();
        assert_eq!(extended, vec![0.0, 1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn single_sample_is_its_own_coefficient() {
        assert_eq!(values_to_coefficients(&[3.5]), vec![3.5]);
        assert_eq!(coefficients_to_values(&[3.5]), vec![3.5]);
    }

    #[test]
    fn chebyshev_polynomial_has_unit_coefficient() {
        // T_3 sampled at 4 Chebyshev points alternates in sign.
        let coeffs = values_to_coefficients(&[1.0, -1.0, 1.0, -1.0]);
        let expected = [0.0, 0.0, 0.0, 1.0];
        for (c, e) in coeffs.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*c, *e, epsilon = 1e-15);
        }
    }

    #[test]
    fn samples_of_quadratic_give_exact_coefficients() {
        // x^2 = (T_0 + T_2) / 2
        let samples: Vec<f64> = interpolation_points(5).iter().map(|x| x * x).collect();
        let coeffs = values_to_coefficients(&samples);
        let expected = [0.5, 0.0, 0.5, 0.0, 0.0];
        for (c, e) in coeffs.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*c, *e, epsilon = 1e-15);
        }
    }

    #[test]
    fn round_trip_recovers_real_samples() {
        for &n in &[2usize, 3, 17, 64, 257] {
            let samples: Vec<f64> = (0..n).map(|k| (k as f64).sin() + 0.1 * k as f64).collect();
            let recovered = coefficients_to_values(&values_to_coefficients(&samples));
            let scale = samples.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
            for (r, s) in recovered.iter().zip(samples.iter()) {
                assert!((r - s).abs() <= 1e-12 * scale, "n = {n}: {r} vs {s}");
            }
        }
    }

    #[test]
    fn round_trip_recovers_complex_samples() {
        let samples: Vec<Complex64> = (0..33)
            .map(|k| Complex64::new((k as f64).cos(), 0.5 * k as f64))
            .collect();
        let recovered = coefficients_to_values(&values_to_coefficients(&samples));
        for (r, s) in recovered.iter().zip(samples.iter()) {
            assert!((r - s).norm() < 1e-12 * 16.0);
        }
    }
}
