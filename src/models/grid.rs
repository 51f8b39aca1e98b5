//! Attendance grid model
//!
//! The grid holds one [`DayRecord`] per day of the selected month. Each record
//! carries exactly [`CLASS_COUNT`] raw string entries; they stay strings so an
//! untouched cell can be told apart from an explicit "0". Entries are only
//! turned into numbers when something reads them (see [`parse_entry`]).

use serde::{Deserialize, Serialize};

use super::period::ReportPeriod;

/// Number of class slots per day
pub const CLASS_COUNT: usize = 7;

/// One row of the grid: a day of the month and its class entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Day of the month, starting at 1
    pub date: u32,
    /// Raw class entries, one per slot
    pub classes: [String; CLASS_COUNT],
}

impl DayRecord {
    /// Create a record with every entry empty
    pub fn empty(date: u32) -> Self {
        Self {
            date,
            classes: Default::default(),
        }
    }

    /// Numeric value of one slot, with non-numeric entries read as 0
    pub fn value(&self, slot: usize) -> f64 {
        self.classes
            .get(slot)
            .and_then(|raw| parse_entry(raw))
            .unwrap_or(0.0)
    }

    /// Numeric values of every slot
    pub fn values(&self) -> [f64; CLASS_COUNT] {
        std::array::from_fn(|slot| self.value(slot))
    }

    /// Whether every entry is still empty
    pub fn is_blank(&self) -> bool {
        self.classes.iter().all(|c| c.is_empty())
    }
}

/// The in-memory table of day records for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceGrid {
    records: Vec<DayRecord>,
}

impl AttendanceGrid {
    /// Build a fresh grid for a period: one empty record per day
    pub fn for_period(period: &ReportPeriod) -> Self {
        Self::with_days(period.days_in_month())
    }

    /// Build a fresh grid with a given number of days
    pub fn with_days(days: u32) -> Self {
        Self {
            records: (1..=days).map(DayRecord::empty).collect(),
        }
    }

    /// Number of day records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the grid has no days at all
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in date order
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    /// One record by zero-based day index
    pub fn record(&self, day_index: usize) -> Option<&DayRecord> {
        self.records.get(day_index)
    }

    /// Raw entry at a cell
    pub fn entry(&self, day_index: usize, slot: usize) -> Option<&str> {
        self.records
            .get(day_index)
            .and_then(|r| r.classes.get(slot))
            .map(String::as_str)
    }

    /// Mutable access to a raw entry; `None` outside the grid
    pub fn entry_mut(&mut self, day_index: usize, slot: usize) -> Option<&mut String> {
        self.records
            .get_mut(day_index)
            .and_then(|r| r.classes.get_mut(slot))
    }

    /// Iterate over the records
    pub fn iter(&self) -> std::slice::Iter<'_, DayRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a AttendanceGrid {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Convert a raw entry into a number
///
/// Whitespace around the value is ignored and an empty entry reads as 0.
/// Accepts signed decimals with optional exponent, `0x`/`0o`/`0b` integers
/// and `Infinity`. Anything else is non-numeric and yields `None`.
pub fn parse_entry(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u128::from_str_radix(digits, radix).ok().map(|v| v as f64);
    }

    // f64's parser also takes "inf" and "NaN", which are not numbers here
    let numeric_chars = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric_chars || !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    s.parse::<f64>().ok()
}

/// Format a number the way the grid displays it: integers without a
/// fractional part, everything else in shortest form
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_length_matches_month() {
        assert_eq!(AttendanceGrid::for_period(&ReportPeriod::new(2024, 1)).len(), 29);
        assert_eq!(AttendanceGrid::for_period(&ReportPeriod::new(2023, 1)).len(), 28);
        assert_eq!(AttendanceGrid::for_period(&ReportPeriod::new(2024, 3)).len(), 30);
        assert_eq!(AttendanceGrid::for_period(&ReportPeriod::new(2024, 0)).len(), 31);
    }

    #[test]
    fn test_fresh_records_are_blank_and_numbered() {
        let grid = AttendanceGrid::with_days(3);
        let dates: Vec<u32> = grid.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![1, 2, 3]);
        assert!(grid.iter().all(|r| r.is_blank()));
        assert!(grid.iter().all(|r| r.classes.len() == CLASS_COUNT));
    }

    #[test]
    fn test_entry_access() {
        let mut grid = AttendanceGrid::with_days(2);
        *grid.entry_mut(1, 6).unwrap() = "4".to_string();
        assert_eq!(grid.entry(1, 6), Some("4"));
        assert!(grid.entry_mut(2, 0).is_none());
        assert!(grid.entry_mut(0, CLASS_COUNT).is_none());
    }

    #[test]
    fn test_parse_entry_numbers() {
        assert_eq!(parse_entry("3"), Some(3.0));
        assert_eq!(parse_entry(" 2.5 "), Some(2.5));
        assert_eq!(parse_entry("-4"), Some(-4.0));
        assert_eq!(parse_entry("1e2"), Some(100.0));
        assert_eq!(parse_entry(".5"), Some(0.5));
        assert_eq!(parse_entry("0x10"), Some(16.0));
        assert_eq!(parse_entry("0b101"), Some(5.0));
        assert_eq!(parse_entry("Infinity"), Some(f64::INFINITY));
    }

    #[test]
    fn test_parse_entry_empty_is_zero() {
        assert_eq!(parse_entry(""), Some(0.0));
        assert_eq!(parse_entry("   "), Some(0.0));
    }

    #[test]
    fn test_parse_entry_non_numeric() {
        assert_eq!(parse_entry("x"), None);
        assert_eq!(parse_entry("inf"), None);
        assert_eq!(parse_entry("NaN"), None);
        assert_eq!(parse_entry("3 apples"), None);
        assert_eq!(parse_entry("1,5"), None);
        assert_eq!(parse_entry("-"), None);
        assert_eq!(parse_entry("0x"), None);
        assert_eq!(parse_entry("0xZZ"), None);
    }

    #[test]
    fn test_record_values_treat_garbage_as_zero() {
        let mut record = DayRecord::empty(1);
        record.classes[0] = "3".into();
        record.classes[2] = "x".into();
        assert_eq!(record.values(), [3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
