//! Terminal event source for the popover loop

use crate::config::Config;
use anyhow::{Context, Result};
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

/// What the popover loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press or repeat
    Key(KeyEvent),
    /// The screen must be redrawn (resize or focus regained)
    Redraw,
    /// Nothing relevant arrived before the poll timed out
    Idle,
}

impl Event {
    /// Map a raw terminal event, dropping the ones the popover ignores
    ///
    /// Key releases are dropped here so handlers only ever see presses and
    /// repeats. Mouse and paste input have no meaning in the popover.
    #[must_use]
    pub fn from_terminal(raw: CrosstermEvent) -> Option<Self> {
        match raw {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key(key)),
            CrosstermEvent::Resize(..) | CrosstermEvent::FocusGained => Some(Self::Redraw),
            _ => None,
        }
    }
}

/// Blocking source of [`Event`]s with a bounded wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSource {
    poll_timeout: Duration,
}

impl EventSource {
    /// Poll with the configured interval
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(Duration::from_millis(config.poll_interval_ms))
    }

    /// Poll with an explicit timeout
    #[must_use]
    pub const fn new(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    /// How long [`EventSource::next`] waits before yielding [`Event::Idle`]
    #[must_use]
    pub const fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }

    /// Wait for the next relevant event
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be polled or read
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.poll_timeout).context("Failed to poll terminal events")? {
            return Ok(Event::Idle);
        }
        let raw = event::read().context("Failed to read terminal event")?;
        Ok(Event::from_terminal(raw).unwrap_or(Event::Idle))
    }
}
