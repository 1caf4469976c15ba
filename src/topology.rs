//! Declared network topology
//!
//! The pre-trained weight files imply a fixed shape (5 conv units with 3x3
//! kernels, 10 hidden units with fan-in 845, 2 output units with fan-in 10).
//! Rather than scattering those as magic constants through the pipeline, the
//! topology is a declared structure the assembler consumes, so the shape
//! contract is auditable and testable in isolation.

use crate::error::{Error, Result};

/// The convolution stage: `units` independent square kernels of
/// `kernel_side x kernel_side` weights, each followed by ReLU and 2x2
/// max pooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvStage {
    pub units: usize,
    pub kernel_side: usize,
}

/// A dense stage: `units` fully-connected units each consuming `fan_in`
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseStage {
    pub units: usize,
    pub fan_in: usize,
}

/// The full three-stage topology. Unit counts and fan-ins are fixed by the
/// pre-trained weight shapes; `validate` checks that the declared numbers
/// are mutually consistent before any weights are touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    /// Side length of the square input image.
    pub image_side: usize,
    pub conv: ConvStage,
    pub hidden: DenseStage,
    pub output: DenseStage,
}

impl Topology {
    /// The fixed topology for the binary MNIST evaluator:
    /// 28x28 input, 5 conv units (3x3), 10 hidden units (fan-in 845),
    /// 2 output units (fan-in 10).
    pub fn binary_mnist() -> Self {
        Self {
            image_side: 28,
            conv: ConvStage {
                units: 5,
                kernel_side: 3,
            },
            hidden: DenseStage {
                units: 10,
                fan_in: 845,
            },
            output: DenseStage { units: 2, fan_in: 10 },
        }
    }

    /// Feature-map side after the convolution stage (valid convolution,
    /// stride 1).
    pub fn conv_output_side(&self) -> usize {
        self.image_side - self.conv.kernel_side + 1
    }

    /// Weight-block size of one convolutional unit.
    pub fn kernel_area(&self) -> usize {
        self.conv.kernel_side * self.conv.kernel_side
    }

    /// Feature-map side after 2x2 max pooling (integer division).
    pub fn pooled_side(&self) -> usize {
        self.conv_output_side() / 2
    }

    /// Length of the flattened vector the hidden stage consumes: all pooled
    /// maps concatenated in conv-unit order. This single number is the
    /// ordering contract shared by `flatten` and the dense weight slicer.
    pub fn flattened_len(&self) -> usize {
        self.conv.units * self.pooled_side() * self.pooled_side()
    }

    /// Check internal consistency of the declared shape.
    pub fn validate(&self) -> Result<()> {
        if self.conv.units == 0 || self.hidden.units == 0 || self.output.units == 0 {
            return Err(Error::InvalidConfig(
                "topology stages must all have at least one unit".to_string(),
            ));
        }
        if self.conv.kernel_side == 0 || self.conv.kernel_side > self.image_side {
            return Err(Error::InvalidConfig(format!(
                "kernel side {} invalid for image side {}",
                self.conv.kernel_side, self.image_side
            )));
        }
        if self.hidden.fan_in != self.flattened_len() {
            return Err(Error::InvalidConfig(format!(
                "hidden fan-in {} does not match flattened length {}",
                self.hidden.fan_in,
                self.flattened_len()
            )));
        }
        if self.output.fan_in != self.hidden.units {
            return Err(Error::InvalidConfig(format!(
                "output fan-in {} does not match hidden unit count {}",
                self.output.fan_in, self.hidden.units
            )));
        }
        Ok(())
    }
}
