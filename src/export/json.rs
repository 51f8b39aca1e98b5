//! JSON Export functionality
//!
//! Exports an attendance report as a versioned JSON document.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{AttendanceError, AttendanceResult};
use crate::reports::AttendanceReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// JSON document wrapping a report with export metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Number of days in the report
    pub day_count: usize,

    /// The report itself
    pub report: &'a AttendanceReport,
}

impl<'a> ReportExport<'a> {
    /// Wrap a report for export
    pub fn new(report: &'a AttendanceReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            day_count: report.rows.len(),
            report,
        }
    }
}

/// Export a report to JSON
pub fn export_report_json<W: Write>(
    report: &AttendanceReport,
    writer: &mut W,
    pretty: bool,
) -> AttendanceResult<()> {
    let export = ReportExport::new(report);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| AttendanceError::Export(e.to_string()))?;

    Ok(())
}
