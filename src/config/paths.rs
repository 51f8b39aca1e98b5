//! Path management for the attendance tracker
//!
//! Resolves where settings and the log file live.
//!
//! ## Path Resolution Order
//!
//! 1. `ATTENDANCE_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/attendance-cli` on Linux,
//!    `~/Library/Application Support/attendance-cli` on macOS,
//!    `%APPDATA%\attendance-cli\config` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::AttendanceError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "ATTENDANCE_CLI_DATA_DIR";

/// Manages all paths used by the attendance tracker
#[derive(Debug, Clone)]
pub struct AttendancePaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl AttendancePaths {
    /// Create a new AttendancePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AttendanceError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create AttendancePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file written while the TUI is running
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("attendance.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AttendanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AttendanceError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default base directory for this platform
fn resolve_default_path() -> Result<PathBuf, AttendanceError> {
    ProjectDirs::from("", "", "attendance-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| AttendanceError::Config("Could not determine home directory".into()))
}
