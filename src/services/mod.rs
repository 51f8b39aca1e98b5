//! Service layer for the attendance tracker
//!
//! The service layer holds the editable sheet state and the aggregation
//! logic computed on top of it.

pub mod aggregate;
pub mod sheet;

pub use aggregate::{column_total, range_sum, range_total, GridSummary, RowSummary, SlotRange};
pub use sheet::AttendanceSheet;
