//! Period selection shared by every command

use std::path::PathBuf;

use clap::Args;

use crate::error::AttendanceResult;
use crate::models::ReportPeriod;
use crate::services::AttendanceSheet;

/// Month and year selection
///
/// Values are passed through unvalidated: month 13 is January of the next
/// year, month 0 is December of the previous one.
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    /// Month number, 1-12 (defaults to the current month)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub month: Option<i32>,

    /// Year (defaults to the current year)
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub year: Option<i32>,
}

impl PeriodArgs {
    /// Resolve the selected period, filling gaps from today's date
    pub fn resolve(&self) -> ReportPeriod {
        let current = ReportPeriod::current();
        let year = self.year.unwrap_or(current.year);
        match self.month {
            Some(month) => ReportPeriod::from_month_number(year, month),
            None => ReportPeriod::new(year, current.month),
        }
    }
}

/// Build a sheet for the period, optionally filled from a values file
pub fn load_sheet(period: ReportPeriod, values: Option<&PathBuf>) -> AttendanceResult<AttendanceSheet> {
    let mut sheet = AttendanceSheet::new(period);
    if let Some(path) = values {
        sheet.load_values(path)?;
    }
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit_period() {
        let args = PeriodArgs {
            month: Some(2),
            year: Some(2024),
        };
        assert_eq!(args.resolve(), ReportPeriod::new(2024, 1));
    }

    #[test]
    fn test_resolve_passes_out_of_range_month_through() {
        let args = PeriodArgs {
            month: Some(13),
            year: Some(2024),
        };
        let period = args.resolve();
        assert_eq!(period.month, 12);
        assert_eq!(period.days_in_month(), 31);
    }

    #[test]
    fn test_resolve_defaults_to_current() {
        let current = ReportPeriod::current();
        assert_eq!(PeriodArgs::default().resolve(), current);
    }
}
