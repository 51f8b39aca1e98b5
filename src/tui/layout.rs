//! Screen regions
//!
//! Three bands stacked top to bottom: period fields, the attendance table
//! and a one-line status bar. Dialogs float over the middle of the screen.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Height of the month/year band, borders included
const HEADER_HEIGHT: u16 = 3;
/// Smallest table that still shows the header, one day and the Total row
const MIN_GRID_HEIGHT: u16 = 5;

pub struct AppLayout {
    pub header: Rect,
    pub grid: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [header, grid, status_bar] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MIN_GRID_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            grid,
            status_bar,
        }
    }
}

/// Dialog box of `width` x `height` cells centered in `area`, shrunk to fit
pub fn dialog_area(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [dialog] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    dialog
}
