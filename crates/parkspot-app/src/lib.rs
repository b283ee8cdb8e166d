//! Application layer for parkspot
//!
//! Pure state machines and a generic runtime for the two-screen UI, enabling
//! deterministic testing with the same code that runs in production.
//!
//! # Components
//!
//! - [`App`]: Application state (screens, cursor, viewport, marker, notices)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver
//!
//! The picker screen writes formatted coordinates into the shared
//! [`parkspot_core::LocationStore`]; the detail screen observes it. All I/O
//! (input polling, position queries, rendering) lives behind [`Driver`], so
//! tests drive the real [`Runtime`] with a scripted driver.

mod action;
mod app;
mod driver;
mod event;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use runtime::Runtime;
pub use state::{AppConfig, DetailState, Marker, MarkerSource, Notice, PickerState, Screen, Viewport};
