//! Convolution operator
//!
//! Valid (no-padding) convolution of a square input with a square kernel,
//! stride 1, plus a scalar bias added to every output cell.

use crate::error::{Error, Result};
use crate::tensor::{FeatureMap, Kernel};

/// Convolve an `A x A` input with a `B x B` kernel (B <= A), producing an
/// `(A - B + 1) x (A - B + 1)` feature map where
/// `out[i][j] = bias + sum(input[i+m][j+n] * kernel[m][n])`.
///
/// Returns a shape error when the kernel is larger than the input.
pub fn convolve(input: &FeatureMap, kernel: &Kernel, bias: f64) -> Result<FeatureMap> {
    let input_side = input.side();
    let kernel_side = kernel.side();

    if kernel_side > input_side {
        return Err(Error::ShapeMismatch(format!(
            "kernel side {} exceeds input side {}",
            kernel_side, input_side
        )));
    }

    let output_side = input_side - kernel_side + 1;
    let mut output = FeatureMap::zeros(output_side);

    for i in 0..output_side {
        for j in 0..output_side {
            let mut sum = 0.0;
            for m in 0..kernel_side {
                for n in 0..kernel_side {
                    sum += input.get(i + m, j + n) * kernel.get(m, n);
                }
            }
            output.set(i, j, sum + bias);
        }
    }
    Ok(output)
}
