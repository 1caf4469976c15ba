//! Layer operators for the forward pass
//!
//! Pure functions over the tensor value types: convolution, max pooling,
//! fully-connected units, and flattening. Each operator validates shape
//! compatibility at its boundary and fails with a typed error rather than
//! relying on caller discipline.

pub mod conv;
pub mod dense;
pub mod pool;

pub use conv::convolve;
pub use dense::fully_connected;
pub use pool::max_pool;

use crate::tensor::FeatureMap;

/// Concatenate feature maps into one flat vector, row-major within each map,
/// maps in the order given.
///
/// The order must match the order the dense layer's weight slices were
/// generated in; the network assembler passes the conv stage's output vector
/// (unit-index order) straight through so both sides derive from the same
/// topology.
pub fn flatten(maps: &[FeatureMap]) -> Vec<f64> {
    let total: usize = maps.iter().map(|map| map.as_slice().len()).sum();
    let mut output = Vec::with_capacity(total);
    for map in maps {
        output.extend_from_slice(map.as_slice());
    }
    output
}
