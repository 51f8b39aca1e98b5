//! Logging setup
//!
//! Installs a `tracing` subscriber. The filter comes from `ATTENDANCE_LOG`
//! when set, otherwise from the configured log level. While the TUI owns
//! the terminal, events go to the log file instead of stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AttendancePaths, Settings};
use crate::error::{AttendanceError, AttendanceResult};

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "ATTENDANCE_LOG";

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error (one-shot commands)
    Stderr,
    /// The log file under the base directory (TUI)
    File,
}

/// Build the filter from the environment or settings
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init(paths: &AttendancePaths, settings: &Settings, target: LogTarget) -> AttendanceResult<()> {
    let filter = build_filter(settings);

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File => {
            paths.ensure_directories()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())
                .map_err(|e| AttendanceError::Io(format!("Failed to open log file: {}", e)))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    if let Err(e) = result {
        tracing::debug!("logging already initialized: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_level_falls_back() {
        let settings = Settings {
            log_level: "not a [valid filter".into(),
            ..Settings::default()
        };
        // Must not panic
        let _ = build_filter(&settings);
    }

    #[test]
    fn test_file_target_creates_log() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AttendancePaths::with_base_dir(temp_dir.path().to_path_buf());

        init(&paths, &Settings::default(), LogTarget::File).unwrap();

        assert!(paths.log_file().exists());
    }
}
