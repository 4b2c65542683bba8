//! Sample sources: number files, typed text, and random generation.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

const COMPONENT: &str = "input";

/// Value that terminates typed input.
pub const SENTINEL: i64 = 0;

/// Parse one integer per line. Blank lines are skipped; surrounding
/// whitespace is ignored.
///
/// # Errors
///
/// Returns [`Error::Format`] naming the first line that is not an integer.
pub fn parse_lines(text: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(value) = parse_line(line, idx + 1)? {
            values.push(value);
        }
    }
    Ok(values)
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<i64>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| Error::Format { line: line_no, content: trimmed.to_string() })
}

/// Read a sample file with one integer per line.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the path does not exist, [`Error::Io`] if
/// it cannot be read, and [`Error::Format`] for a non-integer line.
pub fn read_numbers_file(path: &Path) -> Result<Vec<i64>> {
    if !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }
    let text = fs::read_to_string(path)?;
    let values = parse_lines(&text)?;
    crate::debug!(COMPONENT, "read {} values from {}", values.len(), path.display());
    Ok(values)
}

/// Parse a block of typed numbers, removing the first `0` sentinel.
///
/// Values after the sentinel are kept, so a block pasted with a trailing
/// terminator and one without it parse alike.
///
/// # Errors
///
/// Returns [`Error::Format`] for a non-integer line.
pub fn parse_numbers(text: &str) -> Result<Vec<i64>> {
    let mut values = parse_lines(text)?;
    if let Some(pos) = values.iter().position(|&v| v == SENTINEL) {
        values.remove(pos);
    }
    Ok(values)
}

/// Read typed numbers from a line-oriented reader until the `0` sentinel
/// line or end of input.
///
/// # Errors
///
/// Returns [`Error::Io`] on read failure and [`Error::Format`] for a
/// non-integer line.
pub fn read_until_sentinel<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line, idx + 1)? {
            Some(SENTINEL) => break,
            Some(value) => values.push(value),
            None => {}
        }
    }
    Ok(values)
}

/// Parameters for uniform random sample generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSpec {
    /// Number of samples.
    pub count: usize,
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Seed for reproducible output; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl RandomSpec {
    /// Create an unseeded spec.
    #[must_use]
    pub const fn new(count: usize, min: i64, max: i64) -> Self {
        Self { count, min, max, seed: None }
    }

    /// Set a fixed seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check `count > 0` and `min < max`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the violated bound.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidConfig("random sample count must be positive".to_string()));
        }
        if self.min >= self.max {
            return Err(Error::InvalidConfig(format!(
                "random minimum ({}) must be less than maximum ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Draw `count` integers uniformly from `[min, max]`.
    ///
    /// # Errors
    ///
    /// See [`RandomSpec::validate`].
    pub fn generate(&self) -> Result<Vec<i64>> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let values: Vec<i64> =
            (0..self.count).map(|_| rng.random_range(self.min..=self.max)).collect();
        crate::debug!(
            COMPONENT,
            "generated {} values in [{}, {}] seed={:?}",
            values.len(),
            self.min,
            self.max,
            self.seed
        );
        Ok(values)
    }
}

/// Draw uniformly distributed samples per `spec`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `count == 0` or `min >= max`.
pub fn generate(spec: &RandomSpec) -> Result<Vec<i64>> {
    spec.generate()
}
