//! Input pump
//!
//! A background thread polls crossterm and forwards key presses, resizes and
//! a periodic tick over a channel. The tick drives toast expiry.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, error};

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Map a crossterm event to an app event; everything else is ignored
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        // Windows reports releases too
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

/// Poll until the receiver hangs up or the terminal fails
fn pump(sender: Sender<Event>, tick_rate: Duration) {
    let mut next_tick = Instant::now() + tick_rate;
    loop {
        let wait = next_tick.saturating_duration_since(Instant::now());
        let ready = match event::poll(wait) {
            Ok(ready) => ready,
            Err(e) => {
                error!(error = %e, "failed to poll terminal events");
                return;
            }
        };

        let forwarded = if ready {
            match event::read() {
                Ok(raw) => translate(raw),
                Err(e) => {
                    error!(error = %e, "failed to read terminal event");
                    return;
                }
            }
        } else {
            None
        };
        let tick = Instant::now() >= next_tick;
        if tick {
            next_tick = Instant::now() + tick_rate;
        }

        for event in forwarded.into_iter().chain(tick.then_some(Event::Tick)) {
            if sender.send(event).is_err() {
                debug!("event receiver dropped");
                return;
            }
        }
    }
}

pub struct EventHandler {
    receiver: Receiver<Event>,
    _pump: JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let pump = thread::spawn(move || pump(sender, tick_rate));
        Self {
            receiver,
            _pump: pump,
        }
    }

    /// Block for the next event; fails once the pump thread has stopped
    pub fn next(&self) -> Result<Event, RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent {
            code: KeyCode::Char('p'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_only_key_presses_are_forwarded() {
        assert!(matches!(
            translate(key(KeyEventKind::Press)),
            Some(Event::Key(k)) if k.code == KeyCode::Char('p')
        ));
        assert!(translate(key(KeyEventKind::Release)).is_none());
        assert!(translate(key(KeyEventKind::Repeat)).is_none());
    }

    #[test]
    fn test_resize_and_other_events() {
        assert!(matches!(
            translate(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        ));
        assert!(translate(CrosstermEvent::FocusGained).is_none());
    }
}
