//! Terminal UI for parkspot
//!
//! A thin shell over [`parkspot_app::Runtime`] that provides terminal-specific
//! I/O: crossterm input, ratatui rendering, and a configured stand-in for the
//! platform position provider. All orchestration logic lives in the generic
//! runtime.

pub mod icon;
pub mod input;
pub mod terminal;
pub mod ui;

pub use terminal::{PositionSource, TerminalDriver, TerminalError};
