//! Header view
//!
//! Title plus the month and year fields. The field being typed into is
//! drawn as a text input.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the header
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Class Attendance Tracker ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(28), // Month
            Constraint::Length(20), // Year
            Constraint::Min(0),     // Day count
        ])
        .split(inner);

    let period = app.sheet.period();

    if app.input_mode == InputMode::EditingMonth {
        frame.render_widget(&app.editor, chunks[0]);
    } else {
        let month = format!(
            "{} ({})",
            period.month_number(),
            period.month_name(app.locale)
        );
        frame.render_widget(field("Month", month, "m"), chunks[0]);
    }

    if app.input_mode == InputMode::EditingYear {
        frame.render_widget(&app.editor, chunks[1]);
    } else {
        frame.render_widget(field("Year", period.year.to_string(), "y"), chunks[1]);
    }

    let days = Paragraph::new(format!("{} days", app.day_count()))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(days, chunks[2]);
}

fn field(label: &str, value: String, key: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" [{}]", key), Style::default().fg(Color::DarkGray)),
    ]))
}
