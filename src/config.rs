//! Configuration for trueno-hist.
//!
//! YAML configuration with precedence: CLI > ENV > file > defaults.
//!
//! ```yaml
//! version: 1
//! histogram:
//!   intervals: 10
//!   output: histogram_output.txt
//! chart:
//!   width: 1000
//!   height: 700
//!   theme: light
//! display:
//!   mode: half-block
//!   columns: 100
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::histogram::DEFAULT_INTERVALS;
use crate::output::{TerminalEncoder, TerminalMode};
use crate::plots::{Theme, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH};

/// Environment variable overriding the interval count.
pub const INTERVALS_ENV: &str = "TRUENO_HIST_INTERVALS";

/// Default text dump path.
pub const DEFAULT_OUTPUT: &str = "histogram_output.txt";

const COMPONENT: &str = "config";

/// Histogram settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Number of buckets.
    #[serde(default = "default_intervals")]
    pub intervals: usize,

    /// Path of the text dump.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_intervals() -> usize {
    DEFAULT_INTERVALS
}
fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self { intervals: default_intervals(), output: default_output() }
    }
}

/// Chart image settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Image width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Color theme.
    #[serde(default)]
    pub theme: Theme,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}
fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { width: default_width(), height: default_height(), theme: Theme::default() }
    }
}

/// Terminal display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Terminal rendering mode.
    #[serde(default)]
    pub mode: TerminalMode,

    /// Width in terminal columns.
    #[serde(default = "default_columns")]
    pub columns: u32,
}

fn default_columns() -> u32 {
    TerminalEncoder::DEFAULT_COLUMNS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { mode: TerminalMode::default(), columns: default_columns() }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Histogram settings.
    #[serde(default)]
    pub histogram: HistogramConfig,

    /// Chart settings.
    #[serde(default)]
    pub chart: ChartConfig,

    /// Terminal display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            histogram: HistogramConfig::default(),
            chart: ChartConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location, `<config dir>/trueno-hist/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trueno-hist").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the file does not exist, [`Error::Io`]
    /// if it cannot be read, and [`Error::ConfigParse`] or
    /// [`Error::InvalidConfig`] if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;
        let config = Self::parse(&content)?;
        crate::debug!(COMPONENT, "loaded {}", path.display());
        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::InvalidConfig`] for out-of-range values.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file at `path` if it exists, else the defaults.
    ///
    /// # Errors
    ///
    /// A file that exists but is malformed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            crate::trace!(COMPONENT, "no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Applies environment overrides (`TRUENO_HIST_INTERVALS`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the variable is set but is not a
    /// positive integer.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_intervals_override(std::env::var(INTERVALS_ENV).ok().as_deref())
    }

    fn apply_intervals_override(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(raw) = value {
            let intervals = raw.trim().parse::<usize>().map_err(|_| {
                Error::InvalidConfig(format!("{INTERVALS_ENV}='{raw}' is not a positive integer"))
            })?;
            self.histogram.intervals = intervals;
            self.validate()?;
            crate::debug!(COMPONENT, "{INTERVALS_ENV} override: {intervals}");
        }
        Ok(self)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.histogram.intervals == 0 {
            return Err(Error::InvalidConfig("histogram.intervals must be positive".to_string()));
        }
        if self.chart.width < MIN_WIDTH || self.chart.height < MIN_HEIGHT {
            return Err(Error::InvalidConfig(format!(
                "chart size {}x{} is below the minimum {MIN_WIDTH}x{MIN_HEIGHT}",
                self.chart.width, self.chart.height
            )));
        }
        if self.display.columns == 0 {
            return Err(Error::InvalidConfig("display.columns must be positive".to_string()));
        }
        Ok(())
    }
}
