//! Core data models for the attendance tracker
//!
//! This module contains the data structures of the attendance domain: the
//! report period and the grid of day records derived from it.

pub mod grid;
pub mod period;

pub use grid::{format_number, parse_entry, AttendanceGrid, DayRecord, CLASS_COUNT};
pub use period::{parse_locale, resolve_locale, ReportPeriod, DEFAULT_LOCALE};
