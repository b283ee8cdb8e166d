//! Runtime events
//!
//! Results of driver-executed actions, fed back into the App state machine.

use parkspot_core::Position;

/// Outcome of an [`crate::AppAction::QueryPosition`] action.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The platform returned a best-known position.
    PositionFix(Position),

    /// The query succeeded but no fix is available (the platform analog of a
    /// null last-known location).
    PositionUnavailable,

    /// The query itself failed.
    PositionError(String),
}
