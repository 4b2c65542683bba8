//! Descriptive statistics over a sample set.

use std::fmt;

use crate::error::{Error, Result};

/// Summary statistics of an integer sample set.
///
/// Dispersion uses the sample (n − 1) form, so it is undefined for a single
/// sample and reported as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median; the mean of the two middle values for even counts.
    pub median: f64,
    /// Sample standard deviation.
    pub std_dev: Option<f64>,
    /// Sample variance.
    pub variance: Option<f64>,
    /// Smallest sample.
    pub min: i64,
    /// Largest sample.
    pub max: i64,
    /// `max - min`.
    pub range: u64,
}

impl Summary {
    /// Compute the summary of `samples`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `samples` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_hist::stats::Summary;
    ///
    /// let s = Summary::from_samples(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
    /// assert_eq!(s.mean, 5.0);
    /// assert_eq!(s.median, 4.5);
    /// ```
    pub fn from_samples(samples: &[i64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let count = sorted.len();
        let min = sorted[0];
        let max = sorted[count - 1];

        let sum: i128 = sorted.iter().map(|&x| i128::from(x)).sum();
        let mean = sum as f64 / count as f64;

        let mid = count / 2;
        let median = if count % 2 == 1 {
            sorted[mid] as f64
        } else {
            (i128::from(sorted[mid - 1]) + i128::from(sorted[mid])) as f64 / 2.0
        };

        let variance = (count > 1).then(|| {
            let squares: f64 = sorted.iter().map(|&x| (x as f64 - mean).powi(2)).sum();
            squares / (count - 1) as f64
        });
        let std_dev = variance.map(f64::sqrt);

        let range = (i128::from(max) - i128::from(min)) as u64;

        Ok(Self { count, mean, median, std_dev, variance, min, max, range })
    }
}

fn write_dispersion(f: &mut fmt::Formatter<'_>, name: &str, value: Option<f64>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{name}: {v:.2}"),
        None => writeln!(f, "{name}: n/a"),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "Mean: {:.2}", self.mean)?;
        // An even-count median is a mean of two values and always shows a
        // fractional part (`2.0`); an odd-count median is a sample (`5`).
        if self.count % 2 == 0 {
            writeln!(f, "Median: {:?}", self.median)?;
        } else {
            writeln!(f, "Median: {}", self.median)?;
        }
        write_dispersion(f, "Standard deviation", self.std_dev)?;
        write_dispersion(f, "Variance", self.variance)?;
        writeln!(f, "Min: {}", self.min)?;
        writeln!(f, "Max: {}", self.max)?;
        writeln!(f, "Range: {}", self.range)?;
        write!(f, "Count: {}", self.count)
    }
}
