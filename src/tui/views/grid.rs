//! Attendance grid view
//!
//! One row per day with the seven class cells and the two range sums. The
//! column totals sit in a footer that stays put while the days scroll.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::models::{format_number, CLASS_COUNT};
use crate::reports::attendance::header_cells;
use crate::tui::app::{App, InputMode};

/// Render the attendance grid
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let summary = app.sheet.summary();
    let editing = app.input_mode == InputMode::EditingCell;

    let header = Row::new(header_cells().into_iter().map(Cell::from))
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

    let mut rows: Vec<Row> = Vec::with_capacity(summary.rows.len());
    for (day_index, (record, row)) in app.sheet.grid().iter().zip(&summary.rows).enumerate() {
        let mut cells = Vec::with_capacity(CLASS_COUNT + 3);
        cells.push(Cell::from(record.date.to_string()).style(Style::default().fg(Color::Cyan)));

        for (slot, raw) in record.classes.iter().enumerate() {
            let selected = day_index == app.selected_day && slot == app.selected_slot;
            let cell = if selected && editing {
                Cell::from(Span::raw(format!("{}▏", raw)))
                    .style(Style::default().fg(Color::Black).bg(Color::Yellow))
            } else if selected {
                Cell::from(raw.as_str())
                    .style(Style::default().fg(Color::Black).bg(Color::Cyan))
            } else if raw.trim().is_empty() {
                Cell::from("·").style(Style::default().fg(Color::DarkGray))
            } else {
                Cell::from(raw.as_str())
            };
            cells.push(cell);
        }

        for sum in row.range_sums {
            cells.push(Cell::from(format_number(sum)).style(Style::default().fg(Color::Green)));
        }

        let style = if day_index % 2 == 1 {
            Style::default().bg(Color::Rgb(30, 30, 30))
        } else {
            Style::default()
        };
        rows.push(Row::new(cells).style(style));
    }

    let total_cells = std::iter::once("Total".to_string())
        .chain(summary.column_totals.iter().map(|v| format_number(*v)))
        .chain(summary.range_totals.iter().map(|v| format_number(*v)))
        .map(Cell::from);
    let footer = Row::new(total_cells).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let widths = std::iter::once(Constraint::Length(6))
        .chain(std::iter::repeat(Constraint::Length(9)).take(CLASS_COUNT))
        .chain([Constraint::Length(8), Constraint::Length(8)]);

    let title = format!(" {} ", app.sheet.period().label(app.locale));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let table = Table::new(rows, widths)
        .header(header)
        .footer(footer)
        .block(block)
        .column_spacing(1);

    let mut state = TableState::default();
    if app.day_count() > 0 {
        state.select(Some(app.selected_day));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
