//! Binary-Digit CNN Evaluator
//!
//! This library evaluates a small, fixed-topology convolutional network
//! against a labeled 28x28 image dataset and reports running classification
//! accuracy. Weights are pre-trained and loaded from flat text files; there
//! is no training or weight update anywhere in the crate.
//!
//! # Modules
//!
//! - `tensor`: Image, FeatureMap and Kernel value types
//! - `layers`: Layer operators (convolve, max-pool, fully-connected, flatten)
//! - `params`: Slicing of flat weight vectors into per-unit blocks
//! - `topology`: Declared network topology and its validation
//! - `network`: The fixed forward-pass pipeline
//! - `eval`: Evaluation loop and running-accuracy reporting
//! - `config`: Evaluation configuration (file paths, iteration cap)
//! - `data`: Weight-file and dataset readers

pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod layers;
pub mod network;
pub mod params;
pub mod tensor;
pub mod topology;
pub mod utils;

pub use error::{Error, Result};
