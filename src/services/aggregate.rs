//! Attendance aggregation
//!
//! Row range sums, column totals and range totals over the grid. Every
//! function reads entries through [`parse_entry`], so empty or non-numeric
//! cells contribute 0. Nothing here is cached: a grid holds at most 31 x 7
//! cells and sums are recomputed whenever they are displayed or exported.

use serde::Serialize;

use crate::models::{parse_entry, AttendanceGrid, CLASS_COUNT};

/// An inclusive range of class slots summed together in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotRange {
    /// First slot (zero-based, inclusive)
    pub from: usize,
    /// Last slot (zero-based, inclusive)
    pub to: usize,
    /// Column heading, e.g. "1-5"
    pub label: &'static str,
}

impl SlotRange {
    /// Classes 1 to 5
    pub const FIRST_FIVE: SlotRange = SlotRange {
        from: 0,
        to: 4,
        label: "1-5",
    };

    /// Classes 6 and 7
    pub const LAST_TWO: SlotRange = SlotRange {
        from: 5,
        to: 6,
        label: "6-7",
    };

    /// The ranges reported after the class columns, in column order
    pub const REPORTED: [SlotRange; 2] = [Self::FIRST_FIVE, Self::LAST_TWO];
}

/// Sum a row's entries over the inclusive slot range `[from, to]`
///
/// The slice is clamped to the row: bounds past the end shrink it and
/// `from > to` selects nothing.
pub fn range_sum<S: AsRef<str>>(entries: &[S], from: usize, to: usize) -> f64 {
    if from > to || from >= entries.len() {
        return 0.0;
    }

    let last = to.min(entries.len() - 1);
    entries[from..=last]
        .iter()
        .map(|raw| parse_entry(raw.as_ref()).unwrap_or(0.0))
        .sum()
}

/// Sum one class slot across every day of the grid
pub fn column_total(grid: &AttendanceGrid, slot: usize) -> f64 {
    grid.iter()
        .map(|record| {
            record
                .classes
                .get(slot)
                .and_then(|raw| parse_entry(raw))
                .unwrap_or(0.0)
        })
        .sum()
}

/// Sum a slot range across every day of the grid
pub fn range_total(grid: &AttendanceGrid, from: usize, to: usize) -> f64 {
    grid.iter()
        .map(|record| range_sum(&record.classes, from, to))
        .sum()
}

/// Range sums for a single day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSummary {
    /// Day of the month
    pub date: u32,
    /// Numeric value of each class slot
    pub values: [f64; CLASS_COUNT],
    /// One sum per [`SlotRange::REPORTED`] entry
    pub range_sums: [f64; 2],
}

/// Everything the grid displays beyond raw entries, computed in one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSummary {
    /// Per-day range sums, in date order
    pub rows: Vec<RowSummary>,
    /// Total of each class slot
    pub column_totals: [f64; CLASS_COUNT],
    /// Total of each reported range
    pub range_totals: [f64; 2],
}

impl GridSummary {
    /// Compute the summary of a grid
    pub fn compute(grid: &AttendanceGrid) -> Self {
        let rows = grid
            .iter()
            .map(|record| RowSummary {
                date: record.date,
                values: record.values(),
                range_sums: SlotRange::REPORTED
                    .map(|range| range_sum(&record.classes, range.from, range.to)),
            })
            .collect();

        Self {
            rows,
            column_totals: std::array::from_fn(|slot| column_total(grid, slot)),
            range_totals: SlotRange::REPORTED.map(|range| range_total(grid, range.from, range.to)),
        }
    }

    /// Grand total over every cell
    pub fn grand_total(&self) -> f64 {
        self.column_totals.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: &[[&str; CLASS_COUNT]]) -> AttendanceGrid {
        let mut grid = AttendanceGrid::with_days(rows.len() as u32);
        for (day, row) in rows.iter().enumerate() {
            for (slot, value) in row.iter().enumerate() {
                *grid.entry_mut(day, slot).unwrap() = value.to_string();
            }
        }
        grid
    }

    #[test]
    fn test_non_numeric_entries_count_as_zero() {
        let classes = ["3", "", "x", "2", "", "", "1"];
        assert_eq!(range_sum(&classes, 0, 4), 5.0);
        assert_eq!(range_sum(&classes, 5, 6), 1.0);
    }

    #[test]
    fn test_split_ranges_add_up_to_whole_row() {
        let rows = [
            ["3", "", "x", "2", "", "", "1"],
            ["1", "2", "3", "4", "5", "6", "7"],
            ["", "", "", "", "", "", ""],
            ["0.5", "-1", "1e1", " 4 ", "abc", "0x2", "9"],
        ];
        for classes in rows.iter() {
            let split = range_sum(classes, 0, 4) + range_sum(classes, 5, 6);
            assert_eq!(split, range_sum(classes, 0, 6));
        }
    }

    #[test]
    fn test_range_sum_clamps_bounds() {
        let classes = ["1", "2", "3", "4", "5", "6", "7"];
        assert_eq!(range_sum(&classes, 5, 100), 13.0);
        assert_eq!(range_sum(&classes, 10, 12), 0.0);
        assert_eq!(range_sum(&classes, 4, 2), 0.0);
        assert_eq!(range_sum(&classes, 3, 3), 4.0);
    }

    #[test]
    fn test_range_sum_open_ended_upper_bound() {
        let classes = ["1", "2", "3", "4", "5", "6", "7"];
        assert_eq!(range_sum(&classes, 0, usize::MAX), 28.0);
        assert_eq!(range_sum(&classes, 6, usize::MAX), 7.0);
        assert_eq!(range_sum(&classes, usize::MAX, usize::MAX), 0.0);
        let empty: [&str; 0] = [];
        assert_eq!(range_sum(&empty, 0, usize::MAX), 0.0);
    }

    #[test]
    fn test_column_total() {
        let grid = grid_with(&[
            ["4", "", "", "", "", "", ""],
            ["6", "", "", "", "", "", ""],
        ]);
        assert_eq!(column_total(&grid, 0), 10.0);
        assert_eq!(column_total(&grid, 1), 0.0);
        assert_eq!(column_total(&grid, CLASS_COUNT), 0.0);
    }

    #[test]
    fn test_range_total_is_sum_of_rows() {
        let grid = grid_with(&[
            ["1", "1", "1", "1", "1", "2", "2"],
            ["x", "3", "", "", "", "", "5"],
        ]);
        assert_eq!(range_total(&grid, 0, 4), 8.0);
        assert_eq!(range_total(&grid, 5, 6), 9.0);
    }

    #[test]
    fn test_summary() {
        let grid = grid_with(&[
            ["3", "", "x", "2", "", "", "1"],
            ["1", "2", "3", "4", "5", "6", "7"],
        ]);
        let summary = GridSummary::compute(&grid);

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].range_sums, [5.0, 1.0]);
        assert_eq!(summary.rows[1].range_sums, [15.0, 13.0]);
        assert_eq!(summary.column_totals, [4.0, 2.0, 3.0, 6.0, 5.0, 6.0, 8.0]);
        assert_eq!(summary.range_totals, [20.0, 14.0]);
        assert_eq!(summary.grand_total(), 34.0);
    }

    #[test]
    fn test_summary_of_empty_grid() {
        let summary = GridSummary::compute(&AttendanceGrid::with_days(0));
        assert!(summary.rows.is_empty());
        assert_eq!(summary.range_totals, [0.0, 0.0]);
    }
}
