//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the attendance sheet being edited, the selected cell and whatever field
//! is currently taking text input.

use chrono::Locale;
use tracing::{debug, error};

use crate::config::settings::Settings;
use crate::export::{save_report, ExportFormat};
use crate::models::{ReportPeriod, CLASS_COUNT};
use crate::reports::AttendanceReport;
use crate::services::AttendanceSheet;

use super::widgets::{TextInput, Toast, ToastQueue};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the selected grid cell
    EditingCell,
    /// Typing into the month field
    EditingMonth,
    /// Typing into the year field
    EditingYear,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Locale for month names
    pub locale: Locale,

    /// The sheet being edited
    pub sheet: AttendanceSheet,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected day (zero-based row)
    pub selected_day: usize,

    /// Selected class slot (zero-based column)
    pub selected_slot: usize,

    /// Text being typed into the active field
    pub editor: TextInput,

    /// Cell value before the current edit started (restored on cancel)
    pub edit_original: String,

    /// Pending toasts
    pub toasts: ToastQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, period: ReportPeriod) -> Self {
        Self {
            settings,
            locale: settings.locale(),
            sheet: AttendanceSheet::new(period),
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_day: 0,
            selected_slot: 0,
            editor: TextInput::new(),
            edit_original: String::new(),
            toasts: ToastQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a toast
    pub fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Number of days in the current grid
    pub fn day_count(&self) -> usize {
        self.sheet.grid().len()
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_day = self.selected_day.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_day + 1 < self.day_count() {
            self.selected_day += 1;
        }
    }

    /// Move selection left
    pub fn move_left(&mut self) {
        self.selected_slot = self.selected_slot.saturating_sub(1);
    }

    /// Move selection right
    pub fn move_right(&mut self) {
        if self.selected_slot + 1 < CLASS_COUNT {
            self.selected_slot += 1;
        }
    }

    /// Jump to the first day
    pub fn move_top(&mut self) {
        self.selected_day = 0;
    }

    /// Jump to the last day
    pub fn move_bottom(&mut self) {
        self.selected_day = self.day_count().saturating_sub(1);
    }

    /// Raw value of the selected cell
    pub fn selected_value(&self) -> Option<&str> {
        self.sheet.grid().entry(self.selected_day, self.selected_slot)
    }

    /// Start editing the selected cell
    ///
    /// With `initial`, the cell is replaced by that character (typing over
    /// it); otherwise the current value is kept for editing.
    pub fn start_cell_edit(&mut self, initial: Option<char>) {
        let Some(current) = self.selected_value().map(str::to_string) else {
            return;
        };

        self.edit_original = current.clone();
        self.editor = match initial {
            Some(c) => TextInput::new().content(c.to_string()),
            None => TextInput::new().content(current),
        };
        self.input_mode = InputMode::EditingCell;
        self.write_cell();
    }

    /// Write the editor content into the selected cell
    pub fn write_cell(&mut self) {
        let value = self.editor.value().to_string();
        if let Err(e) = self.sheet.edit(self.selected_day, self.selected_slot, value) {
            error!(error = %e, "cell edit failed");
        }
    }

    /// Finish editing the cell, keeping what was typed
    pub fn finish_cell_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.editor.clear();
    }

    /// Abandon the cell edit, restoring the previous value
    pub fn cancel_cell_edit(&mut self) {
        self.editor = TextInput::new().content(std::mem::take(&mut self.edit_original));
        self.write_cell();
        self.finish_cell_edit();
    }

    /// Reset the selected cell to empty
    pub fn clear_selected(&mut self) {
        if let Err(e) = self.sheet.clear(self.selected_day, self.selected_slot) {
            error!(error = %e, "clearing cell failed");
        }
    }

    /// Start typing a new month number
    pub fn start_month_edit(&mut self) {
        let month = self.sheet.period().month_number();
        self.editor = TextInput::new().label("Month").content(month.to_string());
        self.input_mode = InputMode::EditingMonth;
    }

    /// Start typing a new year
    pub fn start_year_edit(&mut self) {
        let year = self.sheet.period().year;
        self.editor = TextInput::new().label("Year").content(year.to_string());
        self.input_mode = InputMode::EditingYear;
    }

    /// Apply the month or year being typed
    ///
    /// An empty field reads as 0. Text that is not a whole number leaves the
    /// period unchanged and reports an error.
    pub fn commit_period_edit(&mut self) {
        let text = self.editor.value().trim().to_string();
        let parsed = if text.is_empty() {
            Ok(0)
        } else {
            text.parse::<i32>()
        };

        let value = match parsed {
            Ok(value) => value,
            Err(_) => {
                let field = match self.input_mode {
                    InputMode::EditingYear => "year",
                    _ => "month",
                };
                self.notify(Toast::error(format!("'{}' is not a valid {}", text, field)));
                return;
            }
        };

        let previous = self.sheet.period();
        let rebuilt = match self.input_mode {
            InputMode::EditingMonth => self.sheet.set_month(value),
            InputMode::EditingYear => self.sheet.set_year(value),
            _ => false,
        };
        self.input_mode = InputMode::Normal;
        self.editor.clear();

        if rebuilt {
            self.after_period_change(previous);
        }
    }

    /// Leave the month/year field without applying it
    pub fn cancel_period_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.editor.clear();
    }

    /// Go to the previous month
    pub fn prev_month(&mut self) {
        let previous = self.sheet.period();
        if self.sheet.set_period(previous.prev()) {
            self.after_period_change(previous);
        }
    }

    /// Go to the next month
    pub fn next_month(&mut self) {
        let previous = self.sheet.period();
        if self.sheet.set_period(previous.next()) {
            self.after_period_change(previous);
        }
    }

    fn after_period_change(&mut self, previous: ReportPeriod) {
        let current = self.sheet.period();
        debug!(from = %previous, to = %current, "tui period changed");

        self.selected_day = self.selected_day.min(self.day_count().saturating_sub(1));
        self.notify(Toast::info(format!(
            "New grid for {} ({} days)",
            current.label(self.locale),
            current.days_in_month()
        )));
    }

    /// Export the current sheet in a format, reporting the outcome
    pub fn export(&mut self, format: ExportFormat) {
        let report = AttendanceReport::generate(&self.sheet, self.locale);
        let dir = self.settings.export_dir();

        match save_report(&report, format, &self.settings.pdf, &dir) {
            Ok(path) => {
                self.notify(Toast::success(format!("Saved {}", path.display())));
            }
            Err(e) => {
                error!(error = %e, "export from tui failed");
                self.notify(Toast::error(e.to_string()));
            }
        }
    }
}
