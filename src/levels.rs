//! Rank-quantile height level classification
//!
//! Converts the raw noise field into discrete level values in [0, 1] whose
//! per-level populations follow the configured weights. Levels are assigned
//! by sorted rank rather than by value thresholds, so the split is robust
//! to whatever distribution the noise happens to produce.

/// Assign a level value in [0, 1] to every cell.
///
/// Cell indices are stable-sorted ascending by noise value; level `l`
/// consumes `floor(normalized_weight[l] * n)` of the lowest remaining
/// ranks, and the last level absorbs the rounding slack so every cell is
/// classified exactly once. Ties in noise value keep row-major order.
pub fn assign_levels(noise: &[f32], level_weights: &[f32]) -> Vec<f32> {
    let n = noise.len();
    let levels = level_weights.len();
    debug_assert!(levels > 0, "level weights validated before generation");

    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|a, b| noise[*a].total_cmp(&noise[*b]));

    let weight_sum: f32 = level_weights.iter().sum();

    let mut result = vec![0.0f32; n];
    let mut k = 0;
    for (l, weight) in level_weights.iter().enumerate() {
        let count = if l == levels - 1 {
            n - k
        } else {
            (weight / weight_sum * n as f32) as usize
        };
        let value = if levels == 1 {
            0.0
        } else {
            l as f32 / (levels - 1) as f32
        };

        let mut taken = 0;
        while taken < count && k < n {
            result[indices[k]] = value;
            k += 1;
            taken += 1;
        }
    }

    result
}
