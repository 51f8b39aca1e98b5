//! Status bar view
//!
//! Shows the period, the selected cell and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.sheet.period().label(app.locale)),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if let Some(record) = app.sheet.grid().record(app.selected_day) {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            format!("Day {} · Class {}", record.date, app.selected_slot + 1),
            Style::default().fg(Color::White),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Normal => " Enter:Edit  m/y:Period  [/]:Month  p:PDF  ?:Help  q:Quit ",
        InputMode::EditingCell => " Enter:Done  Esc:Revert ",
        InputMode::EditingMonth | InputMode::EditingYear => " Enter:Apply  Esc:Cancel ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
