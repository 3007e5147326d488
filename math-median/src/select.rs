//! Quickselect and median entry points

use crate::pivot::{MedianOfMedians, PivotStrategy};
use crate::{MedianError, Result};

/// k-th smallest element (0-based rank) under the given pivot strategy
pub fn select_kth(nums: &[f64], k: usize, strategy: &impl PivotStrategy) -> Result<f64> {
    if nums.is_empty() {
        return Err(MedianError::EmptyInput);
    }
    if k >= nums.len() {
        return Err(MedianError::RankOutOfRange {
            rank: k,
            len: nums.len(),
        });
    }

    Ok(quick_select(nums, k, strategy))
}

/// Median using deterministic median-of-medians pivots (worst-case O(n))
pub fn median(nums: &[f64]) -> Result<f64> {
    median_with(nums, &MedianOfMedians)
}

/// Median under the given pivot strategy.
///
/// Even-length inputs return the average of the two middle elements.
pub fn median_with(nums: &[f64], strategy: &impl PivotStrategy) -> Result<f64> {
    if nums.is_empty() {
        return Err(MedianError::EmptyInput);
    }

    Ok(median_unchecked(nums, strategy))
}

/// Sort-based O(n log n) median, kept as the oracle the selection
/// algorithms are tested against
pub fn naive_median(nums: &[f64]) -> Result<f64> {
    if nums.is_empty() {
        return Err(MedianError::EmptyInput);
    }

    Ok(naive_median_unchecked(nums))
}

pub(crate) fn naive_median_unchecked(nums: &[f64]) -> f64 {
    let mut sorted = nums.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) * 0.5
    }
}

pub(crate) fn median_unchecked(nums: &[f64], strategy: &impl PivotStrategy) -> f64 {
    let n = nums.len();
    if n % 2 == 1 {
        quick_select(nums, n / 2, strategy)
    } else {
        let lower = quick_select(nums, n / 2 - 1, strategy);
        let upper = quick_select(nums, n / 2, strategy);
        (lower + upper) * 0.5
    }
}

/// Three-way partition quickselect.
///
/// Elements equal to the pivot go into their own bucket so repeated values
/// cannot defeat the recursion.
fn quick_select(nums: &[f64], k: usize, strategy: &impl PivotStrategy) -> f64 {
    if nums.len() == 1 {
        return nums[0];
    }

    let pivot = strategy.pick(nums);
    let mut lows = Vec::new();
    let mut highs = Vec::new();
    let mut pivots = 0usize;

    for &num in nums {
        if num < pivot {
            lows.push(num);
        } else if num > pivot {
            highs.push(num);
        } else {
            pivots += 1;
        }
    }

    if k < lows.len() {
        quick_select(&lows, k, strategy)
    } else if k < lows.len() + pivots {
        pivot
    } else {
        quick_select(&highs, k - lows.len() - pivots, strategy)
    }
}
