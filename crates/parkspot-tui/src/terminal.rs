//! Terminal driver.
//!
//! Implements [`Driver`] over a ratatui terminal and the crossterm event
//! stream. Input polling uses a tick timeout so transient notices advance
//! even when no keys arrive.

use std::{io, time::Duration};

use crossterm::event::EventStream;
use futures::StreamExt;
use parkspot_app::{App, AppAction, Driver};
use parkspot_core::Position;
use ratatui::DefaultTerminal;
use thiserror::Error;
use tracing::debug;

use crate::{input, ui};

/// Errors from the terminal frontend.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Terminal or input I/O failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Stand-in for the platform location provider.
///
/// A terminal has no positioning hardware; the best-known device position is
/// supplied at startup or absent, in which case every query reports no fix —
/// the same shape as a platform provider with no cached location.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionSource {
    fix: Option<Position>,
}

impl PositionSource {
    /// A source that always reports the given position.
    pub fn fixed(position: Position) -> Self {
        Self { fix: Some(position) }
    }

    /// A source with no fix available.
    pub fn unavailable() -> Self {
        Self { fix: None }
    }
}

/// [`Driver`] implementation over ratatui + crossterm.
pub struct TerminalDriver {
    terminal: DefaultTerminal,
    events: EventStream,
    source: PositionSource,
    tick_rate: Duration,
}

impl TerminalDriver {
    /// Create a driver over an initialized terminal.
    pub fn new(terminal: DefaultTerminal, source: PositionSource, tick_rate: Duration) -> Self {
        Self { terminal, events: EventStream::new(), source, tick_rate }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, TerminalError> {
        match tokio::time::timeout(self.tick_rate, self.events.next()).await {
            // Tick with no input.
            Err(_elapsed) => Ok(Vec::new()),
            // Input stream closed; treat as a request to quit.
            Ok(None) => Ok(vec![AppAction::Quit]),
            Ok(Some(Err(error))) => Err(error.into()),
            Ok(Some(Ok(event))) => Ok(input::handle_event(app, &event)),
        }
    }

    async fn query_position(&mut self) -> Result<Option<Position>, TerminalError> {
        debug!(fix = ?self.source.fix, "position query");
        Ok(self.source.fix)
    }

    fn render(&mut self, app: &App) -> Result<(), TerminalError> {
        self.terminal.draw(|frame| ui::draw(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        // Raw-mode teardown happens in main via ratatui::restore, which must
        // run even when the runtime exits with an error.
    }
}
