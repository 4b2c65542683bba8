//! Equal-width histogram binning of integer samples.
//!
//! A [`Histogram`] partitions `[min, max]` of the samples into
//! `interval_count` buckets of real-valued width
//! `step = (max - min) / interval_count`. Bucket `i` covers
//! `[min + i*step, min + (i+1)*step)`; the last bucket is closed at `max`.
//!
//! Bucket membership is computed in exact integer arithmetic,
//! `floor((x - min) * n / (max - min))`, which is `floor((x - min) / step)`
//! without floating-point rounding at bucket edges.

use crate::error::{Error, Result};

/// Interval count used when none is configured.
pub const DEFAULT_INTERVALS: usize = 10;

const COMPONENT: &str = "histogram";

/// Immutable frequency histogram over a sample set.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    min_value: i64,
    max_value: i64,
    step: f64,
    counts: Vec<usize>,
}

/// One bucket of a [`Histogram`] with its display bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Zero-based bucket index.
    pub index: usize,
    /// Lower label bound, `min + floor(i * step)`.
    pub lower: i64,
    /// Upper label bound, `min + floor((i + 1) * step)`.
    pub upper: i64,
    /// Number of samples in the bucket.
    pub count: usize,
}

impl Histogram {
    /// Bin `samples` into `interval_count` equal-width buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `samples` is empty and
    /// [`Error::InvalidConfig`] if `interval_count` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_hist::histogram::Histogram;
    ///
    /// let hist = Histogram::build(&[5, 5, 5], 4).unwrap();
    /// assert_eq!(hist.counts(), &[3, 0, 0, 0]);
    /// ```
    pub fn build(samples: &[i64], interval_count: usize) -> Result<Self> {
        crate::time_scope!(COMPONENT, format!("build n={} k={interval_count}", samples.len()));

        if interval_count == 0 {
            return Err(Error::InvalidConfig("interval count must be positive".to_string()));
        }
        let (Some(&min_value), Some(&max_value)) = (samples.iter().min(), samples.iter().max())
        else {
            return Err(Error::EmptyInput);
        };

        let range = span(min_value, max_value);
        // Degenerate range: everything lands in bucket 0, no division.
        let step = if range == 0 { 0.0 } else { range as f64 / interval_count as f64 };

        let mut counts = vec![0usize; interval_count];
        for &x in samples {
            counts[index_in(x, min_value, range, interval_count)] += 1;
        }

        crate::debug!(
            COMPONENT,
            "min={min_value} max={max_value} step={step} counts={counts:?}"
        );

        Ok(Self { min_value, max_value, step, counts })
    }

    /// Smallest sample.
    #[must_use]
    pub const fn min_value(&self) -> i64 {
        self.min_value
    }

    /// Largest sample.
    #[must_use]
    pub const fn max_value(&self) -> i64 {
        self.max_value
    }

    /// Real-valued bucket width; zero when all samples are equal.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Number of buckets.
    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.counts.len()
    }

    /// Per-bucket counts.
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of binned samples.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Height of the tallest bucket.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Bucket a value falls into, or `None` if it lies outside `[min, max]`.
    #[must_use]
    pub fn bucket_of(&self, x: i64) -> Option<usize> {
        if x < self.min_value || x > self.max_value {
            return None;
        }
        let range = span(self.min_value, self.max_value);
        Some(index_in(x, self.min_value, range, self.counts.len()))
    }

    /// Label bounds `(lower, upper)` of bucket `index`.
    ///
    /// Bounds are truncated to integers for display; membership is decided by
    /// [`Histogram::bucket_of`]. The last bucket's upper bound is `max`.
    #[must_use]
    pub fn bounds(&self, index: usize) -> Option<(i64, i64)> {
        let n = self.counts.len();
        if index >= n {
            return None;
        }
        let range = span(self.min_value, self.max_value);
        let lower = offset(self.min_value, range, index, n);
        let upper = if index + 1 == n {
            self.max_value
        } else {
            offset(self.min_value, range, index + 1, n)
        };
        Some((lower, upper))
    }

    /// Display label `lower-upper` of bucket `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<String> {
        self.bounds(index).map(|(lower, upper)| format!("{lower}-{upper}"))
    }

    /// Labels of all buckets in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.buckets().map(|b| format!("{}-{}", b.lower, b.upper)).collect()
    }

    /// Iterate over buckets with their bounds and counts.
    pub fn buckets(&self) -> impl Iterator<Item = Bucket> + '_ {
        self.counts.iter().enumerate().filter_map(move |(index, &count)| {
            self.bounds(index).map(|(lower, upper)| Bucket { index, lower, upper, count })
        })
    }
}

/// `max - min` without overflow.
fn span(min: i64, max: i64) -> u128 {
    (i128::from(max) - i128::from(min)) as u128
}

/// `floor((x - min) * n / range)` clamped to the last bucket.
fn index_in(x: i64, min: i64, range: u128, n: usize) -> usize {
    if range == 0 {
        return 0;
    }
    let d = (i128::from(x) - i128::from(min)) as u128;
    let idx = d * n as u128 / range;
    (idx as usize).min(n - 1)
}

/// `min + floor(i * range / n)`, the truncated label bound of edge `i`.
fn offset(min: i64, range: u128, i: usize, n: usize) -> i64 {
    let delta = range * i as u128 / n as u128;
    (i128::from(min) + delta as i128) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_degenerate_range() {
        let hist = Histogram::build(&[5, 5, 5], 4).unwrap();
        assert_eq!(hist.min_value(), 5);
        assert_eq!(hist.max_value(), 5);
        assert_eq!(hist.step(), 0.0);
        assert_eq!(hist.counts(), &[3, 0, 0, 0]);
    }

    #[test]
    fn test_one_per_bucket() {
        let samples: Vec<i64> = (1..=10).collect();
        let hist = Histogram::build(&samples, 10).unwrap();
        assert_eq!(hist.counts(), &[1; 10]);
        assert!((hist.step() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_max_lands_in_last_bucket() {
        let hist = Histogram::build(&[0, 10], 5).unwrap();
        assert_eq!(hist.counts(), &[1, 0, 0, 0, 1]);
        assert_eq!(hist.bucket_of(10), Some(4));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(Histogram::build(&[], 10), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_zero_intervals_rejected() {
        assert!(matches!(Histogram::build(&[1, 2, 3], 0), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_order_independent() {
        let a = Histogram::build(&[3, 1, 4, 1, 5, 9, 2, 6], 3).unwrap();
        let b = Histogram::build(&[9, 6, 5, 4, 3, 2, 1, 1], 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_labels_truncate() {
        // step = 10 / 3
        let hist = Histogram::build(&[0, 10], 3).unwrap();
        assert_eq!(hist.labels(), vec!["0-3", "3-6", "6-10"]);
    }

    #[test]
    fn test_negative_samples() {
        let hist = Histogram::build(&[-10, -5, 0, 5, 10], 4).unwrap();
        assert_eq!(hist.counts(), &[1, 1, 1, 2]);
        assert_eq!(hist.bounds(0), Some((-10, -5)));
        assert_eq!(hist.bounds(3), Some((5, 10)));
        assert_eq!(hist.bounds(4), None);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let hist = Histogram::build(&[i64::MIN, 0, i64::MAX], 2).unwrap();
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.counts(), &[1, 2]);
    }

    #[test]
    fn test_bucket_of_outside_range() {
        let hist = Histogram::build(&[1, 2, 3], 2).unwrap();
        assert_eq!(hist.bucket_of(0), None);
        assert_eq!(hist.bucket_of(4), None);
    }

    #[test]
    fn test_buckets_iter() {
        let hist = Histogram::build(&[1, 2, 2, 3], 2).unwrap();
        let buckets: Vec<Bucket> = hist.buckets().collect();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0], Bucket { index: 0, lower: 1, upper: 2, count: 1 });
        assert_eq!(buckets[1].count, 3);
        assert_eq!(hist.max_count(), 3);
    }

    proptest! {
        #[test]
        fn prop_counts_sum_to_len(
            samples in prop::collection::vec(-1_000_000i64..1_000_000, 1..300),
            k in 1usize..64,
        ) {
            let hist = Histogram::build(&samples, k).unwrap();
            prop_assert_eq!(hist.counts().len(), k);
            prop_assert_eq!(hist.total(), samples.len());
        }

        #[test]
        fn prop_value_within_bucket_label(
            samples in prop::collection::vec(-5_000i64..5_000, 1..200),
            k in 1usize..40,
        ) {
            let hist = Histogram::build(&samples, k).unwrap();
            for &x in &samples {
                let i = hist.bucket_of(x).unwrap();
                let (lower, upper) = hist.bounds(i).unwrap();
                prop_assert!(lower <= x && x <= upper, "{} not in {}-{}", x, lower, upper);
            }
        }

        #[test]
        fn prop_deterministic(
            samples in prop::collection::vec(any::<i32>().prop_map(i64::from), 1..100),
            k in 1usize..20,
        ) {
            let a = Histogram::build(&samples, k).unwrap();
            let b = Histogram::build(&samples, k).unwrap();
            prop_assert_eq!(a.counts(), b.counts());
        }
    }
}
