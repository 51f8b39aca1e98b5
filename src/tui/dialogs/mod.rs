//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the grid

pub mod help;
