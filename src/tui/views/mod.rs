//! TUI Views module
//!
//! The screen is a header with the period fields, the attendance grid and a
//! status bar. Dialogs and toasts are drawn on top.

pub mod grid;
pub mod header;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::toast_area;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    grid::render(frame, app, layout.grid);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(toast) = app.toasts.front() {
        let area = toast_area(frame.area(), &toast.message);
        frame.render_widget(toast, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::ReportPeriod;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for line in buffer.content.chunks(buffer.area.width as usize) {
            for cell in line {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_grid_and_totals() {
        let settings = Settings {
            locale: Some("en_US".into()),
            ..Settings::default()
        };
        let mut app = App::new(&settings, ReportPeriod::new(2024, 1));
        app.sheet.edit(0, 0, "3").unwrap();
        app.sheet.edit(0, 6, "4").unwrap();

        let text = screen_text(&mut app, 120, 40);

        assert!(text.contains("Class Attendance Tracker"));
        assert!(text.contains("February"));
        assert!(text.contains("2024"));
        assert!(text.contains("Class 7"));
        assert!(text.contains("1-5"));
        assert!(text.contains("6-7"));
    }

    #[test]
    fn test_totals_stay_visible_on_short_terminal() {
        let settings = Settings {
            locale: Some("en_US".into()),
            ..Settings::default()
        };
        let mut app = App::new(&settings, ReportPeriod::new(2024, 0));
        app.sheet.edit(30, 0, "4").unwrap();
        app.sheet.edit(0, 0, "6").unwrap();

        // Room for only a handful of day rows, selection on day 1
        let text = screen_text(&mut app, 120, 16);
        let total_line = text.lines().find(|l| l.contains("Total")).unwrap();
        assert!(total_line.contains("10"));
    }

    #[test]
    fn test_renders_help_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings, ReportPeriod::new(2024, 1));
        app.open_dialog(ActiveDialog::Help);

        let text = screen_text(&mut app, 100, 40);
        assert!(text.contains("Export PDF"));
    }
}
