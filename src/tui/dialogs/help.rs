//! Key reference overlay, opened with `?`

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::dialog_area;

const DIALOG_WIDTH: u16 = 56;

/// Key bindings grouped by what they act on
const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Grid",
        &[
            ("arrows/hjkl", "Move between cells"),
            ("g/G", "First/last day"),
            ("Enter/e", "Edit cell"),
            ("0-9", "Type over cell"),
            ("Esc", "Revert cell edit"),
            ("x/Del", "Clear cell"),
        ],
    ),
    (
        "Period",
        &[
            ("m", "Enter month (1-12)"),
            ("y", "Enter year"),
            ("[ / ]", "Previous/next month"),
        ],
    ),
    (
        "Export",
        &[
            ("p", "Export PDF"),
            ("c", "Export CSV"),
            ("J", "Export JSON"),
        ],
    ),
    (
        "General",
        &[("?", "Show/hide help"), ("q", "Quit application")],
    ),
];

pub fn render(frame: &mut Frame, app: &mut App) {
    let mut lines = help_lines();
    lines.push(Line::from(Span::styled(
        format!(" Exports go to {}", app.settings.export_dir().display()),
        Style::default().fg(Color::DarkGray),
    )));

    // Content plus the two border rows
    let area = dialog_area(DIALOG_WIDTH, lines.len() as u16 + 2, frame.area());
    let cyan = Style::default().fg(Color::Cyan);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(cyan)
                .title(" Help ")
                .title_style(cyan.add_modifier(Modifier::BOLD)),
        ),
        area,
    );
}

fn help_lines() -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Cyan);

    let mut lines = Vec::new();
    for (group, keys) in BINDINGS {
        lines.push(Line::from(Span::styled(*group, heading)));
        lines.extend(keys.iter().map(|(k, what)| {
            Line::from(vec![
                Span::styled(format!("{k:>12}"), key),
                Span::raw("  "),
                Span::raw(*what),
            ])
        }));
        lines.push(Line::default());
    }
    lines
}
