//! Shared utilities for the forward pass
//!
//! Currently just the activation functions (ReLU, softmax).

pub mod activations;
