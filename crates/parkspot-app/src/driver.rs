//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use parkspot_core::Position;

use crate::{App, AppAction};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific input, rendering and position
/// lookup while the generic [`crate::Runtime`] handles orchestration logic.
/// This ensures the same orchestration code runs in the production TUI and
/// in scripted tests.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for input and return actions to process.
    ///
    /// The driver maps raw input to state-machine transitions on `app` and
    /// returns the resulting actions. Returns an empty vector when no input
    /// arrived within the driver's tick interval.
    fn poll_event(
        &mut self,
        app: &mut App,
    ) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send;

    /// Query the platform for its best-known device position.
    ///
    /// `Ok(None)` means the query succeeded but no fix is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the position source itself fails.
    fn query_position(
        &mut self,
    ) -> impl Future<Output = Result<Option<Position>, Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release platform resources before shutdown.
    fn stop(&mut self);
}
