//! Fully-connected (dense) unit
//!
//! One learned weight vector plus a scalar bias producing a single scalar
//! activation from a full-length input vector.

use crate::error::{Error, Result};

/// Compute `bias + sum(input[i] * weights[i])` over the full input length.
///
/// Weight and input lengths must match exactly; a mismatch is a fatal
/// precondition violation reported as a shape error.
pub fn fully_connected(input: &[f64], weights: &[f64], bias: f64) -> Result<f64> {
    if input.len() != weights.len() {
        return Err(Error::ShapeMismatch(format!(
            "dense unit has {} weights but input has {} values",
            weights.len(),
            input.len()
        )));
    }

    let mut activation = bias;
    for (value, weight) in input.iter().zip(weights.iter()) {
        activation += value * weight;
    }
    Ok(activation)
}
