//! Session state: the current sample set and interval count.
//!
//! Every user action is a pure transition
//! `apply(session, action) -> (session', outcome)`. A failed action returns
//! the session unchanged, so callers can report the error and carry on.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::histogram::{Histogram, DEFAULT_INTERVALS};
use crate::input::{self, RandomSpec};
use crate::plots::AsciiRenderer;
use crate::stats::Summary;

const COMPONENT: &str = "session";

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the samples with the given values.
    Load(Vec<i64>),
    /// Replace the samples with the contents of a number file.
    LoadFile(PathBuf),
    /// Replace the samples with typed text (first `0` sentinel removed).
    LoadText(String),
    /// Replace the samples with random values and set the interval count.
    Generate {
        /// Random sample parameters.
        spec: RandomSpec,
        /// Interval count to use from now on.
        intervals: usize,
    },
    /// Change the interval count.
    SetIntervals(usize),
    /// Build the histogram of the current samples.
    Build,
    /// Compute summary statistics of the current samples.
    Statistics,
}

/// Result of a successful action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Samples were replaced.
    Loaded {
        /// Number of samples now held.
        count: usize,
    },
    /// The interval count was changed.
    IntervalsSet(usize),
    /// A histogram was built.
    Built(Box<Built>),
    /// Statistics were computed.
    Statistics(Summary),
}

/// A built histogram and its console rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Built {
    /// The histogram.
    pub histogram: Histogram,
    /// Console text: header line plus rows and labels.
    pub ascii: String,
}

/// Sample set plus interval count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    samples: Vec<i64>,
    interval_count: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self { samples: Vec::new(), interval_count: DEFAULT_INTERVALS }
    }
}

impl Session {
    /// Empty session with `interval_count` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `interval_count` is zero.
    pub fn new(interval_count: usize) -> Result<Self> {
        check_intervals(interval_count)?;
        Ok(Self { samples: Vec::new(), interval_count })
    }

    /// Current samples.
    #[must_use]
    pub fn samples(&self) -> &[i64] {
        &self.samples
    }

    /// Current interval count.
    #[must_use]
    pub const fn interval_count(&self) -> usize {
        self.interval_count
    }

    /// Apply `action`, returning the next session and the outcome.
    ///
    /// On error the returned session equals `self`.
    #[must_use]
    pub fn apply(self, action: Action) -> (Self, Result<Outcome>) {
        crate::trace!(COMPONENT, "apply {}", action_name(&action));
        match self.transition(&action) {
            Ok((next, outcome)) => (next.unwrap_or(self), Ok(outcome)),
            Err(err) => {
                crate::warn!(COMPONENT, "{} failed: {err}", action_name(&action));
                (self, Err(err))
            }
        }
    }

    /// Compute the outcome and, if the state changes, the next session.
    fn transition(&self, action: &Action) -> Result<(Option<Self>, Outcome)> {
        match action {
            Action::Load(values) => self.replaced(values.clone()),
            Action::LoadFile(path) => self.replaced(input::read_numbers_file(path)?),
            Action::LoadText(text) => self.replaced(input::parse_numbers(text)?),
            Action::Generate { spec, intervals } => {
                check_intervals(*intervals)?;
                let samples = spec.generate()?;
                let count = samples.len();
                let next = Self { samples, interval_count: *intervals };
                Ok((Some(next), Outcome::Loaded { count }))
            }
            Action::SetIntervals(n) => {
                check_intervals(*n)?;
                let next = Self { samples: self.samples.clone(), interval_count: *n };
                Ok((Some(next), Outcome::IntervalsSet(*n)))
            }
            Action::Build => {
                let histogram = Histogram::build(&self.samples, self.interval_count)?;
                let ascii = AsciiRenderer::render_console(&histogram);
                Ok((None, Outcome::Built(Box::new(Built { histogram, ascii }))))
            }
            Action::Statistics => {
                Ok((None, Outcome::Statistics(Summary::from_samples(&self.samples)?)))
            }
        }
    }

    fn replaced(&self, samples: Vec<i64>) -> Result<(Option<Self>, Outcome)> {
        if samples.is_empty() {
            return Err(Error::EmptyInput);
        }
        let count = samples.len();
        let next = Self { samples, interval_count: self.interval_count };
        Ok((Some(next), Outcome::Loaded { count }))
    }
}

fn check_intervals(n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidConfig("interval count must be positive".to_string()));
    }
    Ok(())
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Load(_) => "load",
        Action::LoadFile(_) => "load-file",
        Action::LoadText(_) => "load-text",
        Action::Generate { .. } => "generate",
        Action::SetIntervals(_) => "set-intervals",
        Action::Build => "build",
        Action::Statistics => "statistics",
    }
}
