// Tests for the full forward pass: topology consistency, known-output
// convolution stacks, and the tie-break decision rule.

use approx::assert_relative_eq;

use cnn_eval::network::{Network, WeightSet};
use cnn_eval::tensor::Image;
use cnn_eval::topology::Topology;

fn weights_for(topology: &Topology, fill: f64) -> WeightSet {
    WeightSet {
        conv_weights: vec![fill; topology.conv.units * topology.kernel_area()],
        conv_biases: vec![0.0; topology.conv.units],
        hidden_weights: vec![fill; topology.hidden.units * topology.hidden.fan_in],
        hidden_biases: vec![0.0; topology.hidden.units],
        output_weights: vec![fill; topology.output.units * topology.output.fan_in],
        output_biases: vec![0.0; topology.output.units],
    }
}

#[test]
fn binary_mnist_topology_shapes() {
    let topology = Topology::binary_mnist();
    topology.validate().unwrap();

    // 28 -> 26 (3x3 valid conv) -> 13 (2x2 pool); 5 maps of 169 = 845.
    assert_eq!(topology.conv_output_side(), 26);
    assert_eq!(topology.pooled_side(), 13);
    assert_eq!(topology.flattened_len(), topology.hidden.fan_in);
    assert_eq!(topology.hidden.units, topology.output.fan_in);
}

#[test]
fn zero_network_predicts_class_zero_with_even_split() {
    let topology = Topology::binary_mnist();
    let network = Network::new(topology, weights_for(&topology, 0.0)).unwrap();

    // A real-looking image: one bright block in the middle.
    let mut pixels = vec![0.0f64; 28 * 28];
    for row in 10..18 {
        for col in 10..18 {
            pixels[row * 28 + col] = 200.0;
        }
    }
    let image = Image::from_flat(pixels, 28).unwrap();

    let prediction = network.classify(&image).unwrap();
    assert_eq!(prediction.class, 0);
    assert_relative_eq!(prediction.probabilities[0], 0.5, epsilon = 1e-12);
    assert_relative_eq!(prediction.probabilities[1], 0.5, epsilon = 1e-12);
}

#[test]
fn identical_output_units_always_tie() {
    // Non-trivial weights, but both output units share the same slice, so
    // the two scores are always equal and class 0 must win.
    let topology = Topology::binary_mnist();
    let network = Network::new(topology, weights_for(&topology, 0.1)).unwrap();

    let pixels: Vec<f64> = (0..28 * 28).map(|i| (i % 7) as f64).collect();
    let image = Image::from_flat(pixels, 28).unwrap();

    let prediction = network.classify(&image).unwrap();
    assert_eq!(prediction.class, 0);
    let sum: f64 = prediction.probabilities.iter().sum();
    assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
}

#[test]
fn probabilities_always_sum_to_one() {
    let topology = Topology::binary_mnist();
    let mut weights = weights_for(&topology, 0.05);
    weights.output_biases[0] = -0.3;
    weights.output_biases[1] = 0.7;
    let network = Network::new(topology, weights).unwrap();

    let image = Image::from_flat(vec![128.0; 28 * 28], 28).unwrap();
    let probabilities = network.forward(&image).unwrap();
    let sum: f64 = probabilities.iter().sum();
    assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
}

#[test]
fn truncated_weight_vector_is_a_fatal_error() {
    let topology = Topology::binary_mnist();
    let mut weights = weights_for(&topology, 0.0);
    // One short of what the 5 conv units need.
    weights.conv_weights.truncate(5 * 9 - 1);
    let network = Network::new(topology, weights).unwrap();

    let image = Image::from_flat(vec![0.0; 28 * 28], 28).unwrap();
    let err = network.forward(&image).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("conv"), "error should name the layer: {}", msg);
}
