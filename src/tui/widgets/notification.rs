//! Toast notifications
//!
//! Short-lived messages drawn in the top-right corner: where an export was
//! written, why it failed, or that the grid was rebuilt for a new month.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// How long info and success toasts stay up
const SHORT_LIFETIME: Duration = Duration::from_secs(3);
/// Errors stay long enough to read a path or an I/O message
const ERROR_LIFETIME: Duration = Duration::from_secs(6);
/// Older toasts are dropped beyond this many
const MAX_QUEUED: usize = 4;

/// What a toast reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Grid rebuilt, period changed
    Info,
    /// Export written
    Success,
    /// Export failed or input rejected
    Error,
}

impl ToastKind {
    /// Border color and heading
    pub fn appearance(self) -> (Color, &'static str) {
        match self {
            Self::Info => (Color::Blue, " i Info "),
            Self::Success => (Color::Green, " + Saved "),
            Self::Error => (Color::Red, " x Error "),
        }
    }

    fn lifetime(self) -> Duration {
        match self {
            Self::Error => ERROR_LIFETIME,
            _ => SHORT_LIFETIME,
        }
    }
}

/// A single toast
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    raised_at: Instant,
    lifetime: Duration,
}

impl Toast {
    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            raised_at: Instant::now(),
            lifetime: kind.lifetime(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Whether the toast should be gone at `now`
    pub fn expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= self.lifetime
    }
}

impl Widget for &Toast {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (color, heading) = self.kind.appearance();
        Clear.render(area, buf);

        Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(heading)
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            )
            .render(area, buf);
    }
}

/// Pending toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast, dropping the oldest when the queue is full
    pub fn push(&mut self, toast: Toast) {
        if self.pending.len() == MAX_QUEUED {
            self.pending.pop_front();
        }
        self.pending.push_back(toast);
    }

    /// Drop toasts whose time is up
    pub fn prune(&mut self, now: Instant) {
        self.pending.retain(|t| !t.expired_at(now));
    }

    /// The toast on screen, if any
    pub fn front(&self) -> Option<&Toast> {
        self.pending.front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Top-right rectangle sized to the message, kept inside `frame`
pub fn toast_area(frame: Rect, message: &str) -> Rect {
    let chars = message.chars().count() as u16;
    let width = chars.saturating_add(4).clamp(24, 60).min(frame.width);
    let text_width = width.saturating_sub(2).max(1);
    let height = (chars.div_ceil(text_width).max(1) + 2).min(frame.height.saturating_sub(1));
    Rect::new(frame.right() - width, frame.y + 1, width, height)
}
