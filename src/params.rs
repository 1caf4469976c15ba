//! Parameter slicing
//!
//! Carves a flat weight vector into per-unit blocks. This is the single
//! validated boundary in the pipeline: a weight or bias vector shorter than
//! a requested unit's slice aborts the run with an error naming the layer
//! and unit index, rather than reading out of bounds.

use crate::error::{Error, Result};
use crate::tensor::Kernel;

/// One unit (neuron): a contiguous weight block plus a scalar bias, sliced
/// fresh from the shared flat vectors each iteration and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl Unit {
    /// Reshape this unit's weight block into a square kernel of the given
    /// side. The block length must equal `side * side`.
    pub fn kernel(&self, side: usize) -> Result<Kernel> {
        Kernel::from_flat(self.weights.clone(), side)
    }
}

/// Slice `count` units of `block_size` weights each out of a flat weight
/// vector, pairing unit `i` with `biases[i]`. Unit `i` takes weight elements
/// `[block_size * i, block_size * (i + 1))`.
///
/// Fails before producing anything if either vector is too short for any
/// requested unit; `layer` names the layer in the error.
pub fn slice_units(
    weights: &[f64],
    biases: &[f64],
    count: usize,
    block_size: usize,
    layer: &'static str,
) -> Result<Vec<Unit>> {
    let needed = count * block_size;
    if weights.len() < needed {
        // Report the first unit whose slice would run past the end.
        let unit = weights.len() / block_size.max(1);
        return Err(Error::InsufficientWeights {
            layer,
            unit,
            needed,
            available: weights.len(),
        });
    }
    if biases.len() < count {
        return Err(Error::InsufficientBiases {
            layer,
            unit: biases.len(),
            available: biases.len(),
        });
    }

    let units = (0..count)
        .map(|i| Unit {
            weights: weights[block_size * i..block_size * (i + 1)].to_vec(),
            bias: biases[i],
        })
        .collect();
    Ok(units)
}
