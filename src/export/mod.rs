//! Export module for the attendance tracker
//!
//! Writes an attendance report to disk in one of several formats:
//! - PDF: the printable table (the primary export)
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable report

pub mod csv;
pub mod json;
pub mod pdf;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AttendanceError, AttendanceResult};
use crate::reports::AttendanceReport;

pub use self::csv::export_report_csv;
pub use self::json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use self::pdf::{export_report_pdf, Orientation, PageSize, PdfLayout, TableRenderer};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PDF table
    #[default]
    Pdf,
    /// CSV rows
    Csv,
    /// JSON document
    Json,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Write a report in the given format to any writer
pub fn write_report<W: Write>(
    report: &AttendanceReport,
    format: ExportFormat,
    layout: &PdfLayout,
    writer: &mut W,
) -> AttendanceResult<()> {
    match format {
        ExportFormat::Pdf => export_report_pdf(report, layout, writer),
        ExportFormat::Csv => export_report_csv(report, writer),
        ExportFormat::Json => export_report_json(report, writer, true),
    }
}

/// Write a report into `dir` under its standard file name
///
/// Returns the path written.
pub fn save_report(
    report: &AttendanceReport,
    format: ExportFormat,
    layout: &PdfLayout,
    dir: &Path,
) -> AttendanceResult<PathBuf> {
    let path = dir.join(report.file_name(format));

    let result = File::create(&path)
        .map_err(|e| {
            AttendanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            write_report(report, format, layout, &mut writer)?;
            writer
                .flush()
                .map_err(|e| AttendanceError::Export(e.to_string()))
        });

    match result {
        Ok(()) => {
            info!(
                path = %path.display(),
                format = format.extension(),
                rows = report.rows.len() + 1,
                "exported attendance report"
            );
            Ok(path)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "attendance export failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportPeriod;
    use crate::services::AttendanceSheet;
    use chrono::Locale;
    use tempfile::TempDir;

    fn report() -> AttendanceReport {
        let sheet = AttendanceSheet::new(ReportPeriod::new(2024, 1));
        AttendanceReport::generate(&sheet, Locale::en_US)
    }

    #[test]
    fn test_save_report_pdf() {
        let temp_dir = TempDir::new().unwrap();
        let path = save_report(&report(), ExportFormat::Pdf, &PdfLayout::default(), temp_dir.path())
            .unwrap();

        assert_eq!(path, temp_dir.path().join("attendance_report_February_2024.pdf"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_save_report_csv_and_json() {
        let temp_dir = TempDir::new().unwrap();
        let layout = PdfLayout::default();

        let csv_path = save_report(&report(), ExportFormat::Csv, &layout, temp_dir.path()).unwrap();
        let json_path = save_report(&report(), ExportFormat::Json, &layout, temp_dir.path()).unwrap();

        assert!(csv_path.ends_with("attendance_report_February_2024.csv"));
        assert!(json_path.ends_with("attendance_report_February_2024.json"));
        assert_eq!(std::fs::read_to_string(csv_path).unwrap().lines().count(), 31);
    }

    #[test]
    fn test_save_report_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let err = save_report(&report(), ExportFormat::Pdf, &PdfLayout::default(), &missing)
            .unwrap_err();
        assert!(matches!(err, AttendanceError::Export(_)));
    }
}
