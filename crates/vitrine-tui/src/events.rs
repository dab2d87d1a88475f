//! Input event polling for the Vitrine TUI.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};
use std::time::Duration;

/// One polled input, delivered to the app every cycle. Rapid repeated key
/// presses arrive as separate events in order; each produces at most one
/// state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// The poll timeout elapsed with no input.
    Tick,
}

pub struct EventHandler {
    timeout: Duration,
}

impl EventHandler {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn next_event(&self) -> std::io::Result<InputEvent> {
        if crossterm::event::poll(self.timeout)? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => Ok(InputEvent::Key(key)),
                Event::Mouse(mouse) => Ok(InputEvent::Mouse(mouse)),
                Event::Resize(width, height) => Ok(InputEvent::Resize(width, height)),
                _ => Ok(InputEvent::Tick),
            }
        } else {
            Ok(InputEvent::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}
