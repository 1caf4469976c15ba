// evaluate_cnn.rs
// Inference-only evaluator for the fixed-topology binary-digit CNN.
//
// Expected files (overridable via a JSON config passed as the first
// argument, see config/eval.json):
//   ./mnist_train.csv
//   ./train_data/conv_layer_1_{weight,bias}.txt
//   ./train_data/dense_layer_2_{weight,bias}.txt
//   ./train_data/output_layer_3_{weight,bias}.txt
//
// Output: one running-accuracy line per example and a final accuracy line.

use std::env;
use std::io::{self, BufWriter, Write};
use std::process;

use cnn_eval::config::{load_config, EvalConfig};
use cnn_eval::data::read_dataset;
use cnn_eval::eval::evaluate;
use cnn_eval::network::{Network, WeightSet};
use cnn_eval::topology::Topology;
use cnn_eval::Result;

fn run() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => EvalConfig::default(),
    };

    let topology = Topology::binary_mnist();
    let weights = WeightSet::load(&config)?;
    let network = Network::new(topology, weights)?;

    let dataset = read_dataset(&config.dataset_path, topology.image_side)?;
    println!("Examples: {} | Cap: {}", dataset.len(), config.max_iterations);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    evaluate(&network, &dataset, config.max_iterations, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
