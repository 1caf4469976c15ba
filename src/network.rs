//! Network assembler
//!
//! Wires the layer operators and parameter slices into the fixed three-stage
//! pipeline and produces a probability pair per input image. There is exactly
//! one path through the network, no branching by input:
//!
//! 1. normalize the input image
//! 2. per conv unit: convolve -> ReLU -> 2x2 max pool
//! 3. flatten the pooled maps in unit-index order
//! 4. per hidden unit: fully-connected -> clamp at zero
//! 5. per output unit: fully-connected against the hidden vector
//! 6. softmax the two raw scores

use crate::error::Result;
use crate::layers::{convolve, flatten, fully_connected, max_pool};
use crate::params::slice_units;
use crate::tensor::Image;
use crate::topology::Topology;
use crate::utils::activations::{relu_map_inplace, softmax};

/// The six flat parameter vectors, loaded once from the weight files and
/// shared read-only across all evaluation iterations.
#[derive(Debug, Clone)]
pub struct WeightSet {
    pub conv_weights: Vec<f64>,
    pub conv_biases: Vec<f64>,
    pub hidden_weights: Vec<f64>,
    pub hidden_biases: Vec<f64>,
    pub output_weights: Vec<f64>,
    pub output_biases: Vec<f64>,
}

/// Classification outcome for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted class, 0 or 1. Class 0 wins exact ties.
    pub class: usize,
    /// Softmax probability per class.
    pub probabilities: Vec<f64>,
}

/// The assembled network: a validated topology plus the shared weights.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    weights: WeightSet,
}

impl Network {
    /// Assemble a network, validating the topology up front. The weight
    /// vectors themselves are checked per iteration when units are sliced.
    pub fn new(topology: Topology, weights: WeightSet) -> Result<Self> {
        topology.validate()?;
        Ok(Self { topology, weights })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Run the forward pass, producing the softmax probability pair.
    ///
    /// Units are sliced fresh from the shared weight vectors on every call
    /// and discarded afterwards; a weight file too short for the declared
    /// topology surfaces here as a fatal error.
    pub fn forward(&self, image: &Image) -> Result<Vec<f64>> {
        let topology = &self.topology;
        let input = image.normalize();

        // Conv stage: one pooled map per unit, kept in unit-index order so
        // flatten and the hidden-stage weight slices agree on ordering.
        let conv_units = slice_units(
            &self.weights.conv_weights,
            &self.weights.conv_biases,
            topology.conv.units,
            topology.kernel_area(),
            "conv",
        )?;
        let mut pooled = Vec::with_capacity(topology.conv.units);
        for unit in &conv_units {
            let kernel = unit.kernel(topology.conv.kernel_side)?;
            let mut map = convolve(&input, &kernel, unit.bias)?;
            relu_map_inplace(&mut map);
            pooled.push(max_pool(&map));
        }

        let flattened = flatten(&pooled);

        // Hidden stage: fully-connected with ReLU clamp.
        let hidden_units = slice_units(
            &self.weights.hidden_weights,
            &self.weights.hidden_biases,
            topology.hidden.units,
            topology.hidden.fan_in,
            "dense",
        )?;
        let mut hidden = Vec::with_capacity(topology.hidden.units);
        for unit in &hidden_units {
            let activation = fully_connected(&flattened, &unit.weights, unit.bias)?;
            hidden.push(activation.max(0.0));
        }

        // Output stage: raw scores, no clamp.
        let output_units = slice_units(
            &self.weights.output_weights,
            &self.weights.output_biases,
            topology.output.units,
            topology.output.fan_in,
            "output",
        )?;
        let mut scores = Vec::with_capacity(topology.output.units);
        for unit in &output_units {
            scores.push(fully_connected(&hidden, &unit.weights, unit.bias)?);
        }

        Ok(softmax(&scores))
    }

    /// Classify an image: forward pass plus the larger-probability decision,
    /// with class 0 winning exact ties.
    pub fn classify(&self, image: &Image) -> Result<Prediction> {
        let probabilities = self.forward(image)?;
        let class = if probabilities[0] >= probabilities[1] { 0 } else { 1 };
        Ok(Prediction {
            class,
            probabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // A weight set sized for the binary MNIST topology with every
    // parameter zero: all scores tie, softmax gives [0.5, 0.5].
    fn zero_weights(topology: &Topology) -> WeightSet {
        WeightSet {
            conv_weights: vec![0.0; topology.conv.units * topology.kernel_area()],
            conv_biases: vec![0.0; topology.conv.units],
            hidden_weights: vec![0.0; topology.hidden.units * topology.hidden.fan_in],
            hidden_biases: vec![0.0; topology.hidden.units],
            output_weights: vec![0.0; topology.output.units * topology.output.fan_in],
            output_biases: vec![0.0; topology.output.units],
        }
    }

    fn blank_image(side: usize) -> Image {
        Image::from_flat(vec![0.0; side * side], side).unwrap()
    }

    #[test]
    fn test_forward_zero_weights_gives_even_split() {
        let topology = Topology::binary_mnist();
        let network = Network::new(topology, zero_weights(&topology)).unwrap();

        let probabilities = network.forward(&blank_image(28)).unwrap();
        assert_eq!(probabilities.len(), 2);
        assert_relative_eq!(probabilities[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(probabilities[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_classify_tie_picks_class_zero() {
        let topology = Topology::binary_mnist();
        let network = Network::new(topology, zero_weights(&topology)).unwrap();

        let prediction = network.classify(&blank_image(28)).unwrap();
        assert_eq!(prediction.class, 0);
    }

    #[test]
    fn test_classify_favors_larger_score() {
        let topology = Topology::binary_mnist();
        let mut weights = zero_weights(&topology);
        // Bias the second output unit upward; everything else stays zero.
        weights.output_biases[1] = 1.0;
        let network = Network::new(topology, weights).unwrap();

        let prediction = network.classify(&blank_image(28)).unwrap();
        assert_eq!(prediction.class, 1);
        assert!(prediction.probabilities[1] > prediction.probabilities[0]);
    }

    #[test]
    fn test_forward_rejects_short_weight_file() {
        let topology = Topology::binary_mnist();
        let mut weights = zero_weights(&topology);
        weights.hidden_weights.pop();
        let network = Network::new(topology, weights).unwrap();

        let result = network.forward(&blank_image(28));
        assert!(matches!(
            result,
            Err(crate::error::Error::InsufficientWeights { layer: "dense", .. })
        ));
    }

    #[test]
    fn test_new_rejects_invalid_topology() {
        let mut topology = Topology::binary_mnist();
        let weights = zero_weights(&topology);
        topology.hidden.fan_in = 100;
        assert!(Network::new(topology, weights).is_err());
    }
}
