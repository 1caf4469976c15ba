//! Evaluation configuration
//!
//! File paths and the iteration cap are externalized to a JSON config so a
//! deployment can point the evaluator at different weight exports or
//! datasets without a rebuild. The defaults match the layout the training
//! export produces (`train_data/...`, `mnist_train.csv`, cap 12665).
//!
//! # Example
//!
//! ```json
//! {
//!   "dataset_path": "mnist_train.csv",
//!   "conv_weight_path": "train_data/conv_layer_1_weight.txt",
//!   "conv_bias_path": "train_data/conv_layer_1_bias.txt",
//!   "dense_weight_path": "train_data/dense_layer_2_weight.txt",
//!   "dense_bias_path": "train_data/dense_layer_2_bias.txt",
//!   "output_weight_path": "train_data/output_layer_3_weight.txt",
//!   "output_bias_path": "train_data/output_layer_3_bias.txt",
//!   "max_iterations": 12665
//! }
//! ```

use serde::Deserialize;
use std::fs;

use crate::error::{Error, Result};

fn default_max_iterations() -> usize {
    12_665
}

/// Configuration for one evaluation run.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalConfig {
    /// Labeled dataset CSV (header row, then `label, pixel_0..pixel_783`).
    pub dataset_path: String,

    /// Convolution-stage weight file (one number per line).
    pub conv_weight_path: String,
    /// Convolution-stage bias file.
    pub conv_bias_path: String,

    /// Hidden dense-stage weight file.
    pub dense_weight_path: String,
    /// Hidden dense-stage bias file.
    pub dense_bias_path: String,

    /// Output-stage weight file.
    pub output_weight_path: String,
    /// Output-stage bias file.
    pub output_bias_path: String,

    /// Maximum number of dataset examples to evaluate.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            dataset_path: "mnist_train.csv".to_string(),
            conv_weight_path: "train_data/conv_layer_1_weight.txt".to_string(),
            conv_bias_path: "train_data/conv_layer_1_bias.txt".to_string(),
            dense_weight_path: "train_data/dense_layer_2_weight.txt".to_string(),
            dense_bias_path: "train_data/dense_layer_2_bias.txt".to_string(),
            output_weight_path: "train_data/output_layer_3_weight.txt".to_string(),
            output_bias_path: "train_data/output_layer_3_bias.txt".to_string(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Loads an evaluation configuration from a JSON file.
///
/// Reads the file at `path`, deserializes it, and validates the result.
pub fn load_config(path: &str) -> Result<EvalConfig> {
    let contents = fs::read_to_string(path)?;
    let config: EvalConfig = serde_json::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &EvalConfig) -> Result<()> {
    if config.max_iterations == 0 {
        return Err(Error::InvalidConfig(
            "max_iterations must be greater than 0".to_string(),
        ));
    }

    let paths = [
        ("dataset_path", &config.dataset_path),
        ("conv_weight_path", &config.conv_weight_path),
        ("conv_bias_path", &config.conv_bias_path),
        ("dense_weight_path", &config.dense_weight_path),
        ("dense_bias_path", &config.dense_bias_path),
        ("output_weight_path", &config.output_weight_path),
        ("output_bias_path", &config.output_bias_path),
    ];
    for (name, value) in paths {
        if value.is_empty() {
            return Err(Error::InvalidConfig(format!("{} must not be empty", name)));
        }
    }
    Ok(())
}
