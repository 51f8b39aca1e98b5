//! Interactive attendance grid
//!
//! Edit cells, change the month and year, and export the report without
//! leaving the terminal.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
