//! Attendance sheet service
//!
//! The sheet is the editable state behind both the TUI and the CLI: the
//! selected period plus the grid derived from it. Changing the period throws
//! the grid away and builds a fresh one; edits only ever touch one cell.

use std::path::Path;

use tracing::debug;

use crate::error::{AttendanceError, AttendanceResult};
use crate::models::{AttendanceGrid, ReportPeriod, CLASS_COUNT};
use crate::services::aggregate::GridSummary;

/// Selected period and its grid
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSheet {
    period: ReportPeriod,
    grid: AttendanceGrid,
}

impl AttendanceSheet {
    /// Create a sheet with a fresh grid for the period
    pub fn new(period: ReportPeriod) -> Self {
        let grid = AttendanceGrid::for_period(&period);
        debug!(%period, days = grid.len(), "built attendance grid");
        Self { period, grid }
    }

    /// Create a sheet for the current month
    pub fn current() -> Self {
        Self::new(ReportPeriod::current())
    }

    /// The selected period
    pub fn period(&self) -> ReportPeriod {
        self.period
    }

    /// The current grid
    pub fn grid(&self) -> &AttendanceGrid {
        &self.grid
    }

    /// Select a period
    ///
    /// When the (month, year) pair differs from the current one the grid is
    /// rebuilt and every entry is lost. Returns whether a rebuild happened.
    pub fn set_period(&mut self, period: ReportPeriod) -> bool {
        if period == self.period {
            return false;
        }

        debug!(from = %self.period, to = %period, "period changed, discarding grid");
        *self = Self::new(period);
        true
    }

    /// Select a month by its 1-based number, keeping the year
    pub fn set_month(&mut self, month_number: i32) -> bool {
        self.set_period(ReportPeriod::from_month_number(self.period.year, month_number))
    }

    /// Select a year, keeping the month
    pub fn set_year(&mut self, year: i32) -> bool {
        self.set_period(ReportPeriod::new(year, self.period.month))
    }

    /// Replace one entry
    ///
    /// The value is stored as given; it is only interpreted when read.
    pub fn edit(
        &mut self,
        day_index: usize,
        slot: usize,
        value: impl Into<String>,
    ) -> AttendanceResult<()> {
        let entry = self
            .grid
            .entry_mut(day_index, slot)
            .ok_or_else(|| AttendanceError::cell_out_of_range(day_index, slot))?;
        *entry = value.into();
        Ok(())
    }

    /// Reset one entry to empty
    pub fn clear(&mut self, day_index: usize, slot: usize) -> AttendanceResult<()> {
        self.edit(day_index, slot, String::new())
    }

    /// Sums and totals for the current grid
    pub fn summary(&self) -> GridSummary {
        GridSummary::compute(&self.grid)
    }

    /// Fill entries from a headerless CSV file
    ///
    /// Each record is `date,class1,...,class7`; trailing class columns may be
    /// omitted. Dates must belong to the selected period.
    pub fn load_values(&mut self, path: &Path) -> AttendanceResult<usize> {
        let file = std::fs::File::open(path).map_err(|e| {
            AttendanceError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.read_values(file)
    }

    /// Fill entries from CSV records (see [`AttendanceSheet::load_values`])
    pub fn read_values<R: std::io::Read>(&mut self, reader: R) -> AttendanceResult<usize> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        // Validate every record before touching the grid
        let mut updates: Vec<(usize, Vec<String>)> = Vec::new();
        for (line, record) in csv_reader.records().enumerate() {
            let record = record?;
            let Some(date_field) = record.get(0) else {
                continue;
            };
            if date_field.is_empty() {
                continue;
            }

            let date: usize = date_field.parse().map_err(|_| {
                AttendanceError::Validation(format!(
                    "Line {}: invalid date '{}'",
                    line + 1,
                    date_field
                ))
            })?;
            if date == 0 || date > self.grid.len() {
                return Err(AttendanceError::Validation(format!(
                    "Line {}: day {} is not in {} ({} days)",
                    line + 1,
                    date,
                    self.period,
                    self.grid.len()
                )));
            }
            if record.len() > CLASS_COUNT + 1 {
                return Err(AttendanceError::Validation(format!(
                    "Line {}: expected at most {} class columns, found {}",
                    line + 1,
                    CLASS_COUNT,
                    record.len() - 1
                )));
            }

            updates.push((date - 1, record.iter().skip(1).map(str::to_string).collect()));
        }

        let filled = updates.len();
        for (day_index, values) in updates {
            for (slot, value) in values.into_iter().enumerate() {
                self.edit(day_index, slot, value)?;
            }
        }

        debug!(rows = filled, "loaded grid values");
        Ok(filled)
    }
}
