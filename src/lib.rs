//! attendance-cli - Monthly class attendance grid with printable reports
//!
//! This library builds a day-by-class attendance grid for one month,
//! computes per-day and per-column sums, and exports the result as a PDF
//! table (or CSV/JSON). It backs both the `attendance` CLI and its TUI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Report period and the attendance grid
//! - `services`: The editable sheet and the aggregation rules
//! - `reports`: The header/body/total rows every output shares
//! - `export`: PDF, CSV and JSON writers
//! - `cli`: Command handlers
//! - `tui`: Interactive grid editor
//!
//! # Example
//!
//! ```rust,ignore
//! use attendance_cli::models::ReportPeriod;
//! use attendance_cli::services::AttendanceSheet;
//!
//! let mut sheet = AttendanceSheet::new(ReportPeriod::from_month_number(2024, 2));
//! sheet.edit(0, 0, "3")?;
//! assert_eq!(sheet.summary().column_totals[0], 3.0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::AttendanceError;
