//! Evaluation loop
//!
//! Iterates over the labeled dataset, classifies each image, and keeps a
//! running accuracy counter. Reporting goes to a caller-supplied writer so
//! tests can capture the stream; the binary passes stdout.

use std::io::Write;

use crate::data::LabeledImage;
use crate::error::Result;
use crate::network::Network;
use crate::tensor::round_places;

/// Running correct/total counter. The percentage is quantized to two
/// decimals exactly as reported: `round(correct / total * 10000) / 100`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningAccuracy {
    correct: usize,
    total: usize,
}

impl RunningAccuracy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classification outcome.
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        }
        self.total += 1;
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Accuracy percentage rounded to two decimals. Zero before any example
    /// has been recorded.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round_places(self.correct as f64 / self.total as f64 * 100.0, 2)
    }
}

/// Evaluate the network over `dataset`, up to `max_iterations` examples,
/// writing one `Iteration: <n> Accuracy = <pct>%` line per example and a
/// final `Final Accuracy: <pct>%` line. Returns the final percentage.
///
/// A fatal configuration error (short weight file) aborts the loop and
/// propagates; report ordering is strictly sequential.
pub fn evaluate<W: Write>(
    network: &Network,
    dataset: &[LabeledImage],
    max_iterations: usize,
    out: &mut W,
) -> Result<f64> {
    let mut accuracy = RunningAccuracy::new();

    for example in dataset.iter().take(max_iterations) {
        let prediction = network.classify(&example.image)?;
        accuracy.record(prediction.class == example.label);
        writeln!(
            out,
            "Iteration: {} Accuracy = {:.2}%",
            accuracy.total(),
            accuracy.percent()
        )?;
    }

    writeln!(out, "Final Accuracy: {:.2}%", accuracy.percent())?;
    Ok(accuracy.percent())
}
