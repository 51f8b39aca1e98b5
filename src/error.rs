//! Custom error types for the attendance tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for attendance tracker operations
#[derive(Error, Debug)]
pub enum AttendanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for input files
    #[error("Validation error: {0}")]
    Validation(String),

    /// A cell edit addressed a cell outside the grid
    #[error("Cell out of range: day index {day}, class slot {slot}")]
    CellOutOfRange { day: usize, slot: usize },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// PDF rendering errors
    #[error("PDF error: {0}")]
    Pdf(String),
}

impl AttendanceError {
    /// Create an out-of-range error for a cell address
    pub fn cell_out_of_range(day: usize, slot: usize) -> Self {
        Self::CellOutOfRange { day, slot }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from an export path
    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export(_) | Self::Pdf(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AttendanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for AttendanceError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<lopdf::Error> for AttendanceError {
    fn from(err: lopdf::Error) -> Self {
        Self::Pdf(err.to_string())
    }
}

/// Result type alias for attendance tracker operations
pub type AttendanceResult<T> = Result<T, AttendanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AttendanceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_cell_out_of_range_error() {
        let err = AttendanceError::cell_out_of_range(31, 2);
        assert_eq!(
            err.to_string(),
            "Cell out of range: day index 31, class slot 2"
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_export_classification() {
        assert!(AttendanceError::Pdf("bad stream".into()).is_export());
        assert!(AttendanceError::Export("disk full".into()).is_export());
        assert!(!AttendanceError::Validation("x".into()).is_export());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AttendanceError = io_err.into();
        assert!(matches!(err, AttendanceError::Io(_)));
    }

    #[test]
    fn test_from_csv_error() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("1,2\n3\n".as_bytes());
        let err: AttendanceError = reader
            .records()
            .find_map(Result::err)
            .unwrap()
            .into();
        assert!(matches!(err, AttendanceError::Csv(_)));
    }
}
