//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod period;
pub mod report;

pub use export::{handle_export_command, ExportArgs};
pub use period::PeriodArgs;
pub use report::{handle_days_command, handle_show_command, ShowArgs};
