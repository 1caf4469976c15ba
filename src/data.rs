//! Weight-file and dataset readers
//!
//! Plain I/O plumbing around the core: weight files are one real number per
//! line, the dataset is a CSV of labeled 28x28 images. The core consumes the
//! results as typed values (flat weight vectors and `Image`s); malformed
//! numerics are reported here, never inside the pipeline.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::config::EvalConfig;
use crate::error::{Error, Result};
use crate::network::WeightSet;
use crate::tensor::{round_places, Image};

/// One labeled example: a 28x28 image and its ground-truth class.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledImage {
    pub label: usize,
    pub image: Image,
}

/// Read a weight file: one real number per line, blank lines skipped, each
/// value quantized to one decimal place.
pub fn read_weight_file(path: &str) -> Result<Vec<f64>> {
    let file = File::open(path).map_err(|err| {
        Error::InvalidData(format!("could not open weight file {}: {}", path, err))
    })?;

    let mut values = Vec::new();
    for (line_number, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: f64 = trimmed.parse().map_err(|_| {
            Error::InvalidData(format!(
                "{}:{}: not a number: {:?}",
                path,
                line_number + 1,
                trimmed
            ))
        })?;
        values.push(round_places(value, 1));
    }
    Ok(values)
}

/// Read the labeled dataset CSV.
///
/// The header row is discarded; each remaining row is
/// `label, pixel_0, ..., pixel_(side*side - 1)`. Rows whose label is not
/// 0 or 1 are discarded. Pixels are reshaped row-major into a square image
/// and quantized to one decimal place at load.
pub fn read_dataset(path: &str, side: usize) -> Result<Vec<LabeledImage>> {
    let file = File::open(path)
        .map_err(|err| Error::InvalidData(format!("could not open dataset {}: {}", path, err)))?;
    let mut lines = BufReader::new(file).lines();

    // Header row.
    if lines.next().transpose()?.is_none() {
        return Err(Error::InvalidData(format!("dataset {} is empty", path)));
    }

    let pixel_count = side * side;
    let mut examples = Vec::new();
    for (line_number, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut cells = line.split(',');
        let label_cell = cells.next().unwrap_or("").trim();
        let label: i64 = label_cell.parse().map_err(|_| {
            Error::InvalidData(format!(
                "{}:{}: bad label {:?}",
                path,
                line_number + 2,
                label_cell
            ))
        })?;
        if label != 0 && label != 1 {
            continue;
        }

        let mut pixels = Vec::with_capacity(pixel_count);
        for cell in cells {
            let value: f64 = cell.trim().parse().map_err(|_| {
                Error::InvalidData(format!(
                    "{}:{}: bad pixel value {:?}",
                    path,
                    line_number + 2,
                    cell.trim()
                ))
            })?;
            pixels.push(round_places(value, 1));
        }
        if pixels.len() != pixel_count {
            return Err(Error::InvalidData(format!(
                "{}:{}: expected {} pixels, found {}",
                path,
                line_number + 2,
                pixel_count,
                pixels.len()
            )));
        }

        examples.push(LabeledImage {
            label: label as usize,
            image: Image::from_flat(pixels, side)?,
        });
    }
    Ok(examples)
}

impl WeightSet {
    /// Load all six parameter files named by the config. Done exactly once
    /// per run; the result is shared read-only across iterations.
    pub fn load(config: &EvalConfig) -> Result<Self> {
        Ok(Self {
            conv_weights: read_weight_file(&config.conv_weight_path)?,
            conv_biases: read_weight_file(&config.conv_bias_path)?,
            hidden_weights: read_weight_file(&config.dense_weight_path)?,
            hidden_biases: read_weight_file(&config.dense_bias_path)?,
            output_weights: read_weight_file(&config.output_weight_path)?,
            output_biases: read_weight_file(&config.output_bias_path)?,
        })
    }
}
