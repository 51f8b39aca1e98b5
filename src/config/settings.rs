//! User settings for the attendance tracker
//!
//! Manages preferences for month naming, export location and format, PDF
//! page layout and logging. Settings never hold grid values.

use std::path::PathBuf;

use chrono::Locale;
use serde::{Deserialize, Serialize};

use super::paths::AttendancePaths;
use crate::error::AttendanceError;
use crate::export::pdf::PdfLayout;
use crate::export::ExportFormat;
use crate::models::resolve_locale;

/// User settings for the attendance tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Locale for month names (e.g. "en_US"); falls back to the environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Directory exports are written to (current directory when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_format: ExportFormat,

    /// PDF page layout
    #[serde(default)]
    pub pdf: PdfLayout,

    /// Log filter used when `ATTENDANCE_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: None,
            export_dir: None,
            default_format: ExportFormat::default(),
            pdf: PdfLayout::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Locale used for month names
    pub fn locale(&self) -> Locale {
        resolve_locale(self.locale.as_deref())
    }

    /// Directory exports are written to
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AttendancePaths) -> Result<Self, AttendanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AttendanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AttendanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AttendancePaths) -> Result<(), AttendanceError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AttendanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            AttendanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::pdf::{Orientation, PageSize};
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_format, ExportFormat::Pdf);
        assert_eq!(settings.pdf.page_size, PageSize::A4);
        assert_eq!(settings.export_dir(), PathBuf::from("."));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AttendancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.locale = Some("fr_FR".into());
        settings.pdf.orientation = Orientation::Landscape;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale.as_deref(), Some("fr_FR"));
        assert_eq!(loaded.locale(), Locale::fr_FR);
        assert_eq!(loaded.pdf.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"default_format":"csv"}"#).unwrap();
        assert_eq!(settings.default_format, ExportFormat::Csv);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.pdf, PdfLayout::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AttendancePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, AttendanceError::Config(_)));
    }
}
