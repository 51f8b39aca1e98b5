//! CSV Export functionality
//!
//! Exports an attendance report as CSV: the header row, one row per day and
//! the total row, the same cells the PDF table shows.

use std::io::Write;

use crate::error::{AttendanceError, AttendanceResult};
use crate::reports::AttendanceReport;

/// Export a report to CSV
pub fn export_report_csv<W: Write>(report: &AttendanceReport, writer: &mut W) -> AttendanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(&report.header)?;
    for row in report.body() {
        csv_writer.write_record(&row)?;
    }

    csv_writer
        .flush()
        .map_err(|e| AttendanceError::Export(e.to_string()))?;
    Ok(())
}
