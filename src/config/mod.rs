//! Configuration module for the attendance tracker
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AttendancePaths;
pub use settings::Settings;
