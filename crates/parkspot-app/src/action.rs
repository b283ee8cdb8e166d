//! UI actions
//!
//! Actions produced by the App state machine for the runtime to execute.

/// Actions produced by the App state machine.
///
/// The state machine never performs I/O itself; it returns these declarative
/// actions and the [`crate::Runtime`] executes them against a
/// [`crate::Driver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Ask the platform for its best-known device position.
    ///
    /// The outcome comes back to the state machine as an
    /// [`crate::AppEvent`].
    QueryPosition,
}
