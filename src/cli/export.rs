//! CLI command for exporting the attendance report

use std::path::PathBuf;

use clap::Args;

use super::period::load_sheet;
use crate::config::Settings;
use crate::error::AttendanceResult;
use crate::export::{save_report, ExportFormat};
use crate::models::ReportPeriod;
use crate::reports::AttendanceReport;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format (defaults to the configured format, normally PDF)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Directory to write the report into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// CSV file with `date,class1,...,class7` records to fill the grid
    #[arg(long)]
    pub values: Option<PathBuf>,
}

/// Handle the export command, printing the written path
pub fn handle_export_command(
    period: ReportPeriod,
    settings: &Settings,
    args: ExportArgs,
) -> AttendanceResult<PathBuf> {
    let sheet = load_sheet(period, args.values.as_ref())?;
    let report = AttendanceReport::generate(&sheet, settings.locale());

    let format = args.format.unwrap_or(settings.default_format);
    let dir = args.output.unwrap_or_else(|| settings.export_dir());

    let path = save_report(&report, format, &settings.pdf, &dir)?;
    println!("Attendance report exported to: {}", path.display());
    Ok(path)
}
