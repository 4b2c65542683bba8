//! Debug logging for trueno-hist.
//!
//! Structured, leveled output to stderr. Disabled by default; enabled via the
//! `--debug` flag or `TRUENO_HIST_DEBUG=1`.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Environment variable that enables debug output.
pub const DEBUG_ENV: &str = "TRUENO_HIST_DEBUG";

/// Global debug mode flag.
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Start time stored as millis since UNIX epoch.
static START_TIME_MS: AtomicU64 = AtomicU64::new(0);

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Enables debug mode globally.
pub fn enable() {
    START_TIME_MS.store(now_ms(), Ordering::SeqCst);
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disables debug mode globally.
pub fn disable() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Enables debug mode if `TRUENO_HIST_DEBUG` is set to `1` or `true`.
pub fn enable_from_env() {
    if let Ok(value) = std::env::var(DEBUG_ENV) {
        if value == "1" || value.eq_ignore_ascii_case("true") {
            enable();
        }
    }
}

/// Returns true if debug mode is enabled.
#[inline]
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

fn elapsed_ms() -> u64 {
    let start = START_TIME_MS.load(Ordering::Relaxed);
    if start == 0 {
        return 0;
    }
    now_ms().saturating_sub(start)
}

/// Debug log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Tracing entry/exit of operations
    Trace,
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    fn color_code(self) -> &'static str {
        match self {
            Level::Trace => "\x1b[90m",
            Level::Debug => "\x1b[36m",
            Level::Info => "\x1b[32m",
            Level::Warn => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }
}

/// Logs a message if debug mode is enabled.
pub fn log(level: Level, component: &str, message: &str) {
    if !is_enabled() {
        return;
    }

    // Format: [+0000ms] [LEVEL] [component] message
    let _ = writeln!(
        io::stderr(),
        "[+{:04}ms] {}[{:5}]\x1b[0m [{}] {}",
        elapsed_ms(),
        level.color_code(),
        level.as_str(),
        component,
        message
    );
}

/// Logs with format arguments.
#[macro_export]
macro_rules! debug_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            $crate::debug::log($level, $component, &format!($($arg)*));
        }
    };
}

/// Convenience macro for trace level.
#[macro_export]
macro_rules! trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Trace, $component, $($arg)*)
    };
}

/// Convenience macro for debug level.
#[macro_export]
macro_rules! debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Debug, $component, $($arg)*)
    };
}

/// Convenience macro for info level.
#[macro_export]
macro_rules! info {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Info, $component, $($arg)*)
    };
}

/// Convenience macro for warn level.
#[macro_export]
macro_rules! warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Warn, $component, $($arg)*)
    };
}

/// Convenience macro for error level.
#[macro_export]
macro_rules! error {
    ($component:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Error, $component, $($arg)*)
    };
}

/// RAII guard for timing a scope.
pub struct TimingGuard {
    component: &'static str,
    operation: String,
    start: Instant,
}

impl TimingGuard {
    /// Creates a new timing guard.
    pub fn new(component: &'static str, operation: impl Into<String>) -> Self {
        let operation = operation.into();
        if is_enabled() {
            log(Level::Trace, component, &format!("-> {operation}"));
        }
        Self { component, operation, start: Instant::now() }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        if is_enabled() {
            let elapsed = self.start.elapsed();
            log(
                Level::Trace,
                self.component,
                &format!("<- {} ({:.2}ms)", self.operation, elapsed.as_secs_f64() * 1000.0),
            );
        }
    }
}

/// Creates a timing guard for a scope.
#[macro_export]
macro_rules! time_scope {
    ($component:expr, $operation:expr) => {
        let _guard = $crate::debug::TimingGuard::new($component, $operation);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_as_str() {
        assert_eq!(Level::Trace.as_str(), "TRACE");
        assert_eq!(Level::Debug.as_str(), "DEBUG");
        assert_eq!(Level::Info.as_str(), "INFO");
        assert_eq!(Level::Warn.as_str(), "WARN");
        assert_eq!(Level::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_level_has_color() {
        for level in [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error] {
            assert!(level.color_code().starts_with("\x1b["));
        }
    }

    #[test]
    fn test_enable_disable() {
        enable();
        assert!(is_enabled());
        log(Level::Info, "test", "hello world");
        disable();
        assert!(!is_enabled());
    }

    #[test]
    fn test_log_when_disabled_does_nothing() {
        disable();
        log(Level::Debug, "test", "message");
    }

    #[test]
    fn test_timing_guard_fields() {
        let guard = TimingGuard::new("drop_test", "test_operation");
        assert_eq!(guard.component, "drop_test");
        assert_eq!(guard.operation, "test_operation");
        drop(guard);
    }
}
