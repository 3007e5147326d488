//! Dynamic program over finish-time-sorted intervals

use crate::types::{Interval, Schedule};
use crate::{Result, ScheduleError};

/// Solve the weighted interval scheduling problem.
///
/// Returns the maximal combined weight together with a compatible subset
/// achieving it. Ties are broken in favor of fewer intervals (an interval
/// is only taken when it strictly improves the total).
pub fn solve(intervals: &[Interval]) -> Result<Schedule> {
    for (index, iv) in intervals.iter().enumerate() {
        if iv.finish < iv.start {
            return Err(ScheduleError::InvalidInterval {
                index,
                start: iv.start,
                finish: iv.finish,
            });
        }
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| a.finish.total_cmp(&b.finish));

    let n = sorted.len();

    // prev[j] = number of intervals in the sorted prefix that finish no
    // later than sorted[j] starts, i.e. the 1-based index of the previous
    // compatible interval (0 when none exists).
    let prev: Vec<usize> = (0..n)
        .map(|j| find_previous_compatible(&sorted[..j], &sorted[j]))
        .collect();

    // best[j] = maximal weight using the first j intervals
    let mut best = vec![0.0f64; n + 1];
    for j in 1..=n {
        let take = sorted[j - 1].weight + best[prev[j - 1]];
        best[j] = take.max(best[j - 1]);
    }

    // Trace back through the table to recover the chosen subset
    let mut chosen = Vec::new();
    let mut j = n;
    while j > 0 {
        let take = sorted[j - 1].weight + best[prev[j - 1]];
        if take > best[j - 1] {
            chosen.push(sorted[j - 1]);
            j = prev[j - 1];
        } else {
            j -= 1;
        }
    }
    chosen.reverse();

    Ok(Schedule {
        max_weight: best[n],
        intervals: chosen,
    })
}

/// Index just past the last interval in the finish-sorted prefix that is
/// compatible with `current` (binary search, O(log n))
fn find_previous_compatible(prefix: &[Interval], current: &Interval) -> usize {
    prefix.partition_point(|iv| iv.finish <= current.start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_empty_input() {
        let schedule = solve(&[]).unwrap();
        assert_eq!(schedule.max_weight, 0.0);
        assert!(schedule.intervals.is_empty());
    }

    #[test]
    fn test_disjoint_intervals_take_all() {
        let intervals = vec![
            Interval::new(0.0, 1.0, 1.0),
            Interval::new(2.0, 3.0, 2.0),
            Interval::new(4.0, 5.0, 3.0),
        ];

        let schedule = solve(&intervals).unwrap();
        assert_eq!(schedule.max_weight, 6.0);
        assert_eq!(schedule.intervals.len(), 3);
    }

    #[test]
    fn test_overlapping_intervals_take_heaviest() {
        let intervals = vec![
            Interval::new(0.0, 10.0, 5.0),
            Interval::new(1.0, 9.0, 2.0),
            Interval::new(2.0, 8.0, 4.0),
        ];

        let schedule = solve(&intervals).unwrap();
        assert_eq!(schedule.max_weight, 5.0);
        assert_eq!(schedule.intervals, vec![Interval::new(0.0, 10.0, 5.0)]);
    }

    #[test]
    fn test_textbook_instance() {
        // Skipping the heavy middle interval in favor of the two outer
        // ones is the well-known trap for greedy approaches
        let intervals = vec![
            Interval::new(0.0, 3.0, 2.0),
            Interval::new(1.0, 4.0, 4.0),
            Interval::new(3.0, 6.0, 4.0),
            Interval::new(4.5, 7.0, 7.0),
            Interval::new(5.0, 10.0, 2.0),
            Interval::new(8.0, 11.0, 1.0),
        ];

        let schedule = solve(&intervals).unwrap();
        assert_eq!(schedule.max_weight, 12.0);

        // Chosen subset must be pairwise compatible and sum to the weight
        let total: f64 = schedule.intervals.iter().map(|iv| iv.weight).sum();
        assert_eq!(total, schedule.max_weight);
        for (i, a) in schedule.intervals.iter().enumerate() {
            for b in &schedule.intervals[i + 1..] {
                assert!(a.compatible_with(b), "{} overlaps {}", a, b);
            }
        }
    }

    #[test]
    fn test_touching_endpoints_are_compatible() {
        let intervals = vec![
            Interval::new(0.0, 2.0, 1.0),
            Interval::new(2.0, 4.0, 1.0),
            Interval::new(4.0, 6.0, 1.0),
        ];

        let schedule = solve(&intervals).unwrap();
        assert_eq!(schedule.max_weight, 3.0);
        assert_eq!(schedule.intervals.len(), 3);
    }

    #[test]
    fn test_first_interval_weight_counted() {
        // A single interval's weight must survive into the table
        let schedule = solve(&[Interval::new(1.0, 2.0, 9.5)]).unwrap();
        assert_eq!(schedule.max_weight, 9.5);
        assert_eq!(schedule.intervals.len(), 1);
    }

    #[test]
    fn test_matches_exhaustive_search() {
        fn exhaustive_max(intervals: &[Interval]) -> f64 {
            let n = intervals.len();
            let mut best = 0.0f64;
            for mask in 0u32..(1 << n) {
                let subset: Vec<&Interval> = (0..n)
                    .filter(|&i| mask & (1 << i) != 0)
                    .map(|i| &intervals[i])
                    .collect();
                let ok = subset
                    .iter()
                    .enumerate()
                    .all(|(i, a)| subset[i + 1..].iter().all(|b| a.compatible_with(b)));
                if ok {
                    let w: f64 = subset.iter().map(|iv| iv.weight).sum();
                    best = best.max(w);
                }
            }
            best
        }

        let mut rng = rand::rng();
        for _ in 0..20 {
            let intervals: Vec<Interval> = (0..12)
                .map(|_| {
                    let start = rng.random::<f64>() * 20.0;
                    let finish = start + rng.random::<f64>() * 5.0;
                    let weight = rng.random::<f64>() * 10.0;
                    Interval::new(start, finish, weight)
                })
                .collect();

            let schedule = solve(&intervals).unwrap();
            let expected = exhaustive_max(&intervals);
            assert!(
                (schedule.max_weight - expected).abs() < 1e-9,
                "dp = {}, exhaustive = {}",
                schedule.max_weight,
                expected
            );
        }
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let result = solve(&[Interval::new(5.0, 1.0, 1.0)]);
        assert!(matches!(
            result,
            Err(ScheduleError::InvalidInterval { index: 0, .. })
        ));
    }
}
