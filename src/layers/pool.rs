//! Max pooling operator
//!
//! Non-overlapping 2x2 max pooling, stride equal to the window size.

use crate::tensor::FeatureMap;

/// Pool a map of side `N` down to `N/2`, each output cell taking the max of
/// its disjoint 2x2 source block.
///
/// For odd `N` the output side is `N / 2` by integer division, silently
/// dropping the last row and column. The pre-trained weights were produced
/// against this truncation, so it is preserved as-is.
pub fn max_pool(input: &FeatureMap) -> FeatureMap {
    let output_side = input.side() / 2;
    let mut output = FeatureMap::zeros(output_side);

    for i in 0..output_side {
        for j in 0..output_side {
            let mut max_value = input.get(2 * i, 2 * j);
            max_value = max_value.max(input.get(2 * i, 2 * j + 1));
            max_value = max_value.max(input.get(2 * i + 1, 2 * j));
            max_value = max_value.max(input.get(2 * i + 1, 2 * j + 1));
            output.set(i, j, max_value);
        }
    }
    output
}
