//! CLI commands for viewing the grid

use std::path::PathBuf;

use chrono::Locale;
use clap::Args;

use super::period::load_sheet;
use crate::error::AttendanceResult;
use crate::models::ReportPeriod;
use crate::reports::AttendanceReport;

/// Arguments for `show`
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// CSV file with `date,class1,...,class7` records to fill the grid
    #[arg(long)]
    pub values: Option<PathBuf>,
}

/// Print the number of days in the period
pub fn handle_days_command(period: ReportPeriod, locale: Locale) -> AttendanceResult<()> {
    println!("{}: {} days", period.label(locale), period.days_in_month());
    Ok(())
}

/// Print the grid with sums and totals
pub fn handle_show_command(
    period: ReportPeriod,
    locale: Locale,
    args: ShowArgs,
) -> AttendanceResult<()> {
    let sheet = load_sheet(period, args.values.as_ref())?;
    let report = AttendanceReport::generate(&sheet, locale);
    print!("{}", report.format_terminal());
    Ok(())
}
