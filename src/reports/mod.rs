//! Reports module for the attendance tracker
//!
//! Provides the monthly attendance report shared by the terminal view and
//! every export format.

pub mod attendance;

pub use attendance::{header_cells, AttendanceReport, ReportRow, FILE_PREFIX};
