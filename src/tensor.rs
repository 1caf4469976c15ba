//! Square-grid value types used by the pipeline
//!
//! The pipeline passes three kinds of square grids around: the input `Image`,
//! intermediate `FeatureMap`s, and the 3x3 `Kernel` a convolutional unit
//! carries. All three store row-major `f64` data and validate their shape at
//! construction so downstream operators can index without re-checking.

use crate::error::{Error, Result};

/// Round `value` to `places` decimal places, matching the reference
/// `round(x * 10^p) / 10^p` quantization used for weights and pixels.
pub fn round_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// A square grayscale input image, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pixels: Vec<f64>,
    side: usize,
}

impl Image {
    /// Build an image from a flat row-major buffer of `side * side` pixels.
    pub fn from_flat(pixels: Vec<f64>, side: usize) -> Result<Self> {
        if pixels.len() != side * side {
            return Err(Error::ShapeMismatch(format!(
                "image buffer has {} pixels, expected {}x{}",
                pixels.len(),
                side,
                side
            )));
        }
        Ok(Self { pixels, side })
    }

    /// Side length in pixels.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Pixel at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.pixels[row * self.side + col]
    }

    /// Rescale pixels into [0, 1] against the image's maximum value, with
    /// two-decimal quantization. An all-zero image (max == 0) maps to an
    /// all-zero output rather than dividing by zero. This runs once per
    /// image before the convolution stage; intermediate feature maps are
    /// never renormalized.
    pub fn normalize(&self) -> FeatureMap {
        let max_value = self.pixels.iter().cloned().fold(0.0f64, f64::max);

        let data = self
            .pixels
            .iter()
            .map(|&value| {
                if max_value != 0.0 {
                    round_places(value / max_value, 2)
                } else {
                    0.0
                }
            })
            .collect();

        FeatureMap {
            data,
            side: self.side,
        }
    }
}

/// A square 2-D activation buffer produced by one layer operator and
/// consumed by the next. Row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMap {
    data: Vec<f64>,
    side: usize,
}

impl FeatureMap {
    /// Build a feature map from a flat row-major buffer.
    pub fn from_flat(data: Vec<f64>, side: usize) -> Result<Self> {
        if data.len() != side * side {
            return Err(Error::ShapeMismatch(format!(
                "feature map buffer has {} values, expected {}x{}",
                data.len(),
                side,
                side
            )));
        }
        Ok(Self { data, side })
    }

    /// An all-zero map of the given side.
    pub fn zeros(side: usize) -> Self {
        Self {
            data: vec![0.0; side * side],
            side,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.side + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.side + col] = value;
    }

    /// Row-major view of the underlying buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view of the underlying buffer.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

/// A square convolution kernel reshaped from one unit's flat weight block.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    data: Vec<f64>,
    side: usize,
}

impl Kernel {
    /// Reshape a flat weight block into a `side x side` kernel, row-major.
    pub fn from_flat(data: Vec<f64>, side: usize) -> Result<Self> {
        if data.len() != side * side {
            return Err(Error::ShapeMismatch(format!(
                "kernel block has {} weights, expected {}x{}",
                data.len(),
                side,
                side
            )));
        }
        Ok(Self { data, side })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.side + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_places() {
        assert_relative_eq!(round_places(0.256, 1), 0.3);
        assert_relative_eq!(round_places(0.254, 2), 0.25);
        assert_relative_eq!(round_places(-1.25, 1), -1.3);
    }

    #[test]
    fn test_image_shape_validation() {
        assert!(Image::from_flat(vec![0.0; 9], 3).is_ok());
        assert!(Image::from_flat(vec![0.0; 8], 3).is_err());
    }

    #[test]
    fn test_normalize_range_and_granularity() {
        let image = Image::from_flat(vec![0.0, 51.0, 159.0, 253.0], 2).unwrap();
        let normalized = image.normalize();

        for &value in normalized.as_slice() {
            assert!((0.0..=1.0).contains(&value));
            // Two-decimal granularity.
            assert_relative_eq!(round_places(value, 2), value);
        }
        assert_relative_eq!(normalized.get(1, 1), 1.0);
        assert_relative_eq!(normalized.get(0, 1), 0.2); // round(51/253 * 100) / 100
    }

    #[test]
    fn test_normalize_all_zero_image() {
        let image = Image::from_flat(vec![0.0; 16], 4).unwrap();
        let normalized = image.normalize();
        assert!(normalized.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_feature_map_indexing() {
        let mut map = FeatureMap::zeros(3);
        map.set(1, 2, 4.5);
        assert_relative_eq!(map.get(1, 2), 4.5);
        assert_relative_eq!(map.as_slice()[5], 4.5);
    }

    #[test]
    fn test_kernel_reshape_row_major() {
        let kernel = Kernel::from_flat(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_relative_eq!(kernel.get(0, 1), 2.0);
        assert_relative_eq!(kernel.get(1, 0), 3.0);
    }

    #[test]
    fn test_kernel_rejects_non_square_block() {
        assert!(Kernel::from_flat(vec![1.0; 8], 3).is_err());
    }
}
