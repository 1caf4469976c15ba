//! Activation functions
//!
//! This module provides the two activations the network uses:
//! - ReLU, applied to feature maps after convolution and to dense outputs
//! - Softmax, applied to the two output-layer scores

use crate::tensor::FeatureMap;

/// ReLU applied in-place to a flat buffer.
///
/// Sets all negative values to 0.0, keeps non-negative values unchanged.
pub fn relu_inplace(data: &mut [f64]) {
    for value in data.iter_mut() {
        if *value < 0.0 {
            *value = 0.0;
        }
    }
}

/// ReLU applied in-place to a feature map.
pub fn relu_map_inplace(map: &mut FeatureMap) {
    relu_inplace(map.as_mut_slice());
}

/// Softmax over a score vector: `exp(x_i) / sum(exp(x_j))`.
///
/// If the exponential sum is exactly 0.0 (only reachable with non-finite
/// inputs), returns an all-zero vector instead of dividing by zero. That is
/// a deliberate saturation fallback, not an error.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let exponentials: Vec<f64> = scores.iter().map(|&value| value.exp()).collect();
    let sum: f64 = exponentials.iter().sum();

    if sum == 0.0 {
        return vec![0.0; scores.len()];
    }
    exponentials.iter().map(|&value| value / sum).collect()
}
