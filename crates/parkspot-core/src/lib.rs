//! Parkspot core logic
//!
//! Pure domain logic for the parkspot application, completely decoupled from
//! I/O. This enables deterministic testing of the one stateful component the
//! system has.
//!
//! # Architecture
//!
//! The single piece of shared state is a textual coordinate pair held by
//! [`LocationStore`]. Screens never talk to each other; the picker writes
//! into the store and the detail screen observes it. The store performs no
//! I/O, never blocks, and has no failure modes.
//!
//! # Components
//!
//! - [`store`]: Observable parking-location holder with last-value replay
//! - [`position`]: Geographic positions and the `"<lat>, <lon>"` pair format
//! - [`error`]: Parse error types for the textual boundary

pub mod error;
pub mod position;
pub mod store;

pub use error::ParsePositionError;
pub use position::Position;
pub use store::{LocationStore, WatchHandle};
