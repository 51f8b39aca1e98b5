//! Attendance Report
//!
//! Turns a sheet into the rows every output shares: a header row, one body
//! row per day and a trailing total row. The PDF, CSV and JSON exporters and
//! the `show` command all render this same structure.

use chrono::Locale;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Modify, Style};

use crate::export::ExportFormat;
use crate::models::{format_number, ReportPeriod, CLASS_COUNT};
use crate::services::{AttendanceSheet, SlotRange};

/// Prefix shared by every exported report file
pub const FILE_PREFIX: &str = "attendance_report";

/// One body or total row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Day of the month, or "Total"
    pub label: String,
    /// Numeric value of each class column
    pub values: [f64; CLASS_COUNT],
    /// One sum per reported slot range
    pub range_sums: [f64; 2],
}

impl ReportRow {
    /// Render the row as table cells
    pub fn cells(&self) -> Vec<String> {
        std::iter::once(self.label.clone())
            .chain(self.values.iter().map(|v| format_number(*v)))
            .chain(self.range_sums.iter().map(|v| format_number(*v)))
            .collect()
    }
}

/// Attendance report for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceReport {
    /// The period the report covers
    pub period: ReportPeriod,
    /// Localized long month name
    pub month_name: String,
    /// Column headings
    pub header: Vec<String>,
    /// One row per day
    pub rows: Vec<ReportRow>,
    /// Column and range totals
    pub total: ReportRow,
}

impl AttendanceReport {
    /// Generate the report for a sheet
    pub fn generate(sheet: &AttendanceSheet, locale: Locale) -> Self {
        let summary = sheet.summary();
        let period = sheet.period();

        let rows = summary
            .rows
            .iter()
            .map(|row| ReportRow {
                label: row.date.to_string(),
                values: row.values,
                range_sums: row.range_sums,
            })
            .collect();

        let total = ReportRow {
            label: "Total".to_string(),
            values: summary.column_totals,
            range_sums: summary.range_totals,
        };

        Self {
            period,
            month_name: period.month_name(locale),
            header: header_cells(),
            rows,
            total,
        }
    }

    /// Body rows followed by the total row, as table cells
    pub fn body(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .chain(std::iter::once(&self.total))
            .map(ReportRow::cells)
            .collect()
    }

    /// File name without extension, e.g. `attendance_report_February_2024`
    pub fn file_stem(&self) -> String {
        format!("{}_{}_{}", FILE_PREFIX, self.month_name, self.period.year)
    }

    /// File name for an export format
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!("{}.{}", self.file_stem(), format.extension())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.header.clone());
        for row in self.body() {
            builder.push_record(row);
        }

        let mut table = builder.build();
        table
            .with(Style::modern())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!(
            "Attendance Report - {} {}\n{}\n",
            self.month_name, self.period.year, table
        )
    }
}

/// Column headings: Date, Class 1..7, then one per reported range
pub fn header_cells() -> Vec<String> {
    std::iter::once("Date".to_string())
        .chain((1..=CLASS_COUNT).map(|n| format!("Class {}", n)))
        .chain(SlotRange::REPORTED.iter().map(|r| r.label.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sheet() -> AttendanceSheet {
        let mut sheet = AttendanceSheet::new(ReportPeriod::new(2024, 1));
        for (slot, value) in ["3", "", "x", "2", "", "", "1"].iter().enumerate() {
            sheet.edit(0, slot, *value).unwrap();
        }
        sheet.edit(1, 0, "4").unwrap();
        sheet
    }

    #[test]
    fn test_header() {
        assert_eq!(
            header_cells(),
            vec![
                "Date", "Class 1", "Class 2", "Class 3", "Class 4", "Class 5", "Class 6",
                "Class 7", "1-5", "6-7"
            ]
        );
    }

    #[test]
    fn test_one_row_per_day_plus_total() {
        let report = AttendanceReport::generate(&sample_sheet(), Locale::en_US);
        assert_eq!(report.rows.len(), 29);
        assert_eq!(report.body().len(), 30);
        assert!(report.body().iter().all(|row| row.len() == report.header.len()));
    }

    #[test]
    fn test_body_row_cells() {
        let report = AttendanceReport::generate(&sample_sheet(), Locale::en_US);
        let body = report.body();
        assert_eq!(body[0], vec!["1", "3", "0", "0", "2", "0", "0", "1", "5", "1"]);
        assert_eq!(body[1][0], "2");
        assert_eq!(body[1][8], "4");
    }

    #[test]
    fn test_total_row() {
        let report = AttendanceReport::generate(&sample_sheet(), Locale::en_US);
        assert_eq!(
            report.total.cells(),
            vec!["Total", "7", "0", "0", "2", "0", "0", "1", "9", "1"]
        );
    }

    #[test]
    fn test_file_name() {
        let report = AttendanceReport::generate(&sample_sheet(), Locale::en_US);
        assert_eq!(report.file_name(ExportFormat::Pdf), "attendance_report_February_2024.pdf");
        assert_eq!(report.file_name(ExportFormat::Csv), "attendance_report_February_2024.csv");
    }

    #[test]
    fn test_file_name_uses_locale_month_name() {
        let sheet = AttendanceSheet::new(ReportPeriod::new(2024, 7));
        let report = AttendanceReport::generate(&sheet, Locale::de_DE);
        assert_eq!(report.file_name(ExportFormat::Pdf), "attendance_report_August_2024.pdf");
        let report = AttendanceReport::generate(&sheet, Locale::fr_FR);
        assert_eq!(report.file_name(ExportFormat::Pdf), "attendance_report_août_2024.pdf");
    }

    #[test]
    fn test_format_terminal() {
        let report = AttendanceReport::generate(&sample_sheet(), Locale::en_US);
        let output = report.format_terminal();
        assert!(output.starts_with("Attendance Report - February 2024"));
        assert!(output.contains("Class 7"));
        assert!(output.contains("Total"));
    }
}
