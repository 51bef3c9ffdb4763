//! Barycentric interpolation through values at Chebyshev points.

use crate::traits::ChebValue;

/// Query points closer than this to a node return the node's stored value.
const NODE_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Barycentric weights for N Chebyshev-Gauss-Lobatto points: alternating
/// ±1, halved at both ends.
pub fn barycentric_weights(n: usize) -> Vec<f64> {
    let mut weights: Vec<f64> = (0..n)
        .map(|k| if k % 2 == 0 { 1.0 } else { -1.0 })
        .collect();
    if let Some(first) = weights.first_mut() {
        *first *= 0.5;
    }
    if let Some(last) = weights.last_mut() {
        *last *= 0.5;
    }
    weights
}

/// Evaluates the interpolant at a single point of [-1, 1].
pub fn evaluate_at<T: ChebValue>(nodes: &[f64], weights: &[f64], values: &[T], x: f64) -> T {
    debug_assert_eq!(nodes.len(), values.len());
    debug_assert_eq!(nodes.len(), weights.len());

    let mut numerator = T::zero();
    let mut denominator = 0.0;
    for ((&node, &weight), &value) in nodes.iter().zip(weights).zip(values) {
        let diff = x - node;
        if diff.abs() <= NODE_TOLERANCE {
            return value;
        }
        let term = weight / diff;
        numerator = numerator + value * term;
        denominator += term;
    }
    numerator / denominator
}

/// Evaluates the interpolant at every point of `points`.
pub fn evaluate<T: ChebValue>(
    nodes: &[f64],
    weights: &[f64],
    values: &[T],
    points: &[f64],
) -> Vec<T> {
    points
        .iter()
        .map(|&x| evaluate_at(nodes, weights, values, x))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::interpolation_points;

    #[test]
    fn weights_alternate_and_halve_at_ends() {
        assert_eq!(barycentric_weights(4), vec![0.5, -1.0, 1.0, -0.5]);
        assert_eq!(barycentric_weights(2), vec![0.5, -0.5]);
        assert!(barycentric_weights(0).is_empty());
    }

    #[test]
    fn node_hits_return_stored_values() {
        let nodes = interpolation_points(9);
        let weights = barycentric_weights(9);
        let values: Vec<f64> = (0..9).map(|k| k as f64 * 1.5 - 2.0).collect();
        let result = evaluate(&nodes, &weights, &values, &nodes);
        assert_eq!(result, values);
    }

    #[test]
    fn reproduces_polynomials_between_nodes() {
        let nodes = interpolation_points(6);
        let weights = barycentric_weights(6);
        let poly = |x: f64| 3.0 * x.powi(5) - x.powi(2) + 0.25;
        let values: Vec<f64> = nodes.iter().map(|&x| poly(x)).collect();
        for &x in &[-0.93, -0.4, 0.011, 0.5, 0.99] {
            let y = evaluate_at(&nodes, &weights, &values, x);
            assert!((y - poly(x)).abs() < 1e-13);
        }
    }

    #[test]
    fn single_node_is_constant() {
        let nodes = interpolation_points(1);
        let weights = barycentric_weights(1);
        assert_eq!(evaluate_at(&nodes, &weights, &[7.0], 0.3), 7.0);
        assert_eq!(evaluate_at(&nodes, &weights, &[7.0], 0.0), 7.0);
    }
}
