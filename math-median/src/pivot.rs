//! Pivot selection strategies for quickselect

use rand::Rng;

/// How quickselect picks its pivot at each partition step.
///
/// The pivot value does not have to be an element of the slice; the
/// three-way partition handles absent pivots as long as the value splits
/// the slice non-trivially.
pub trait PivotStrategy {
    fn pick(&self, nums: &[f64]) -> f64;
}

/// Uniformly random element of the slice (expected O(n) selection)
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPivot;

impl PivotStrategy for RandomPivot {
    fn pick(&self, nums: &[f64]) -> f64 {
        let mut rng = rand::rng();
        nums[rng.random_range(0..nums.len())]
    }
}

/// Deterministic median-of-medians pivot (worst-case O(n) selection).
///
/// Chops the slice into columns of 5, takes each column's median, then
/// recursively selects the median of those medians.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianOfMedians;

impl PivotStrategy for MedianOfMedians {
    fn pick(&self, nums: &[f64]) -> f64 {
        if nums.len() <= 5 {
            return crate::select::naive_median_unchecked(nums);
        }

        let medians: Vec<f64> = columnize(nums)
            .iter()
            .map(|col| middle_of_sorted(col))
            .collect();

        // The recursion bottoms out because the medians list shrinks by a
        // factor of 5 each level.
        crate::select::median_unchecked(&medians, self)
    }
}

/// Chop a slice into columns of 5, each sorted in descending order
fn columnize(nums: &[f64]) -> Vec<Vec<f64>> {
    let mut columns: Vec<Vec<f64>> = nums.chunks(5).map(|c| c.to_vec()).collect();
    for col in &mut columns {
        col.sort_by(|a, b| b.total_cmp(a));
    }
    columns
}

/// Median of an already-sorted column (average of the two middle elements
/// when the length is even)
fn middle_of_sorted(col: &[f64]) -> f64 {
    let n = col.len();
    if n % 2 == 1 {
        col[n / 2]
    } else {
        (col[n / 2 - 1] + col[n / 2]) * 0.5
    }
}
