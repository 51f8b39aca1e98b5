//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::export::ExportFormat;

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.toasts.prune(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::EditingCell => handle_cell_key(app, key),
        InputMode::EditingMonth | InputMode::EditingYear => handle_period_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Navigation
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('h') | KeyCode::Left => app.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.move_right(),
        KeyCode::Char('g') | KeyCode::Home => app.move_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_bottom(),

        // Cell editing
        KeyCode::Enter | KeyCode::Char('e') => app.start_cell_edit(None),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
            app.start_cell_edit(Some(c))
        }
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => app.clear_selected(),

        // Period
        KeyCode::Char('m') => app.start_month_edit(),
        KeyCode::Char('y') => app.start_year_edit(),
        KeyCode::Char('[') => app.prev_month(),
        KeyCode::Char(']') => app.next_month(),

        // Export
        KeyCode::Char('p') => app.export(ExportFormat::Pdf),
        KeyCode::Char('c') => app.export(ExportFormat::Csv),
        KeyCode::Char('J') => app.export(ExportFormat::Json),

        _ => {}
    }
    Ok(())
}

/// Handle keys while typing into a grid cell
///
/// Every change is written to the sheet immediately so totals stay current.
fn handle_cell_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_cell_edit(),
        KeyCode::Enter => app.finish_cell_edit(),
        KeyCode::Tab => {
            app.finish_cell_edit();
            app.move_right();
        }
        KeyCode::Up | KeyCode::Down => {
            app.finish_cell_edit();
            if key.code == KeyCode::Up {
                app.move_up();
            } else {
                app.move_down();
            }
        }
        KeyCode::Char(c) => {
            app.editor.insert(c);
            app.write_cell();
        }
        KeyCode::Backspace => {
            app.editor.backspace();
            app.write_cell();
        }
        KeyCode::Delete => {
            app.editor.delete();
            app.write_cell();
        }
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Home => app.editor.move_start(),
        KeyCode::End => app.editor.move_end(),
        _ => {}
    }
    Ok(())
}

/// Handle keys while typing a month or year
fn handle_period_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_period_edit(),
        KeyCode::Enter => app.commit_period_edit(),
        KeyCode::Char(c) => app.editor.insert(c),
        KeyCode::Backspace => app.editor.backspace(),
        KeyCode::Delete => app.editor.delete(),
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Home => app.editor.move_start(),
        KeyCode::End => app.editor.move_end(),
        _ => {}
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}
