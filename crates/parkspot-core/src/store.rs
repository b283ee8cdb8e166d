//! Observable parking-location holder.
//!
//! This module implements the one stateful component of the system: a single
//! optional string value (the formatted coordinate pair) with
//! publish/subscribe semantics and last-value replay for new subscribers.
//!
//! # State machine
//!
//! ```text
//! ┌───────┐  set_location(v)  ┌─────────┐  set_location(v')
//! │ Unset │──────────────────>│ Set(v)  │────────────────┐
//! └───────┘                   └─────────┘<───────────────┘
//! ```
//!
//! There is no transition out of `Set`: a saved location is never cleared,
//! only replaced. The holder lives for the whole session.
//!
//! # Ordering
//!
//! A single mutex serializes value replacement and observer notification, so
//! every observer sees values in exactly the order they were set: no
//! coalescing, no reordering, no drops. Replay on registration happens under
//! the same lock and therefore cannot interleave with a concurrent set.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::debug;

/// Observer callback invoked with each new value.
type Callback = Box<dyn FnMut(&str) + Send>;

struct Registration {
    id: u64,
    callback: Callback,
}

struct Shared {
    current: Option<String>,
    observers: Vec<Registration>,
    next_id: u64,
}

/// Shared holder for the most recently saved parking location.
///
/// Cloning is cheap and every clone refers to the same underlying state, so
/// both screens resolve to the same holder for the lifetime of the session.
///
/// The value is opaque text; the holder performs no validation or
/// transformation. Callers that produce coordinates format them with
/// [`crate::Position::format_pair`] before setting.
#[derive(Clone)]
pub struct LocationStore {
    inner: Arc<Mutex<Shared>>,
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationStore {
    /// Create an empty holder (no location saved yet).
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Shared {
                current: None,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Replace the current value and notify all observers with it.
    ///
    /// Always succeeds. Observers are notified synchronously, in registration
    /// order, before this call returns.
    pub fn set_location(&self, value: impl Into<String>) {
        let value = value.into();
        let mut shared = lock(&self.inner);
        debug!(%value, observers = shared.observers.len(), "parking location updated");
        shared.current = Some(value.clone());
        for registration in &mut shared.observers {
            (registration.callback)(&value);
        }
    }

    /// Register an observer.
    ///
    /// If a value has already been set the callback is invoked with it
    /// immediately, then again on every subsequent [`Self::set_location`]
    /// until the returned handle is cancelled or dropped.
    ///
    /// The callback runs while the holder's internal lock is held; it must
    /// not call back into the same holder.
    pub fn observe(&self, callback: impl FnMut(&str) + Send + 'static) -> WatchHandle {
        let mut callback = callback;
        let mut shared = lock(&self.inner);
        let id = shared.next_id;
        shared.next_id += 1;
        if let Some(value) = &shared.current {
            callback(value);
        }
        shared.observers.push(Registration { id, callback: Box::new(callback) });
        debug!(id, observers = shared.observers.len(), "observer registered");
        WatchHandle { id, store: Arc::downgrade(&self.inner) }
    }

    /// Latest value, or `None` if no location was ever saved.
    pub fn current(&self) -> Option<String> {
        lock(&self.inner).current.clone()
    }

    /// Number of active observer registrations.
    pub fn observer_count(&self) -> usize {
        lock(&self.inner).observers.len()
    }
}

/// Handle for an active observer registration.
///
/// Cancelling (or dropping) the handle removes the registration; the holder
/// never retains a subscription past its owner's teardown.
pub struct WatchHandle {
    id: u64,
    store: Weak<Mutex<Shared>>,
}

impl WatchHandle {
    /// Cancel the registration explicitly. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            let mut shared = lock(&inner);
            shared.observers.retain(|registration| registration.id != self.id);
            debug!(id = self.id, observers = shared.observers.len(), "observer cancelled");
        }
    }
}

/// Lock the shared state, recovering from poisoning.
///
/// The guarded state is a single replaceable value plus a registration list;
/// neither can be left torn by a panicking callback, so the poison flag
/// carries no information here.
fn lock(inner: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(&str) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value: &str| sink.lock().unwrap().push(value.to_string()))
    }

    #[test]
    fn starts_unset() {
        let store = LocationStore::new();
        assert_eq!(store.current(), None);
    }

    #[test]
    fn set_then_current_returns_exact_value() {
        let store = LocationStore::new();
        store.set_location("37.4220, -122.0841");
        assert_eq!(store.current().as_deref(), Some("37.4220, -122.0841"));
    }

    #[test]
    fn set_replaces_value() {
        let store = LocationStore::new();
        store.set_location("1, 2");
        store.set_location("3, 4");
        assert_eq!(store.current().as_deref(), Some("3, 4"));
    }

    #[test]
    fn observer_sees_sets_in_order() {
        let store = LocationStore::new();
        let (seen, callback) = recorder();
        let _watch = store.observe(callback);

        store.set_location("1, 1");
        store.set_location("2, 2");
        store.set_location("3, 3");

        assert_eq!(*seen.lock().unwrap(), vec!["1, 1", "2, 2", "3, 3"]);
    }

    #[test]
    fn late_observer_receives_replay() {
        let store = LocationStore::new();
        store.set_location("37.4220, -122.0841");

        let (seen, callback) = recorder();
        let _watch = store.observe(callback);

        assert_eq!(*seen.lock().unwrap(), vec!["37.4220, -122.0841"]);
    }

    #[test]
    fn early_observer_receives_nothing_before_first_set() {
        let store = LocationStore::new();
        let (seen, callback) = recorder();
        let _watch = store.observe(callback);

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn cancelled_observer_receives_no_further_values() {
        let store = LocationStore::new();
        let (seen, callback) = recorder();
        let watch = store.observe(callback);

        store.set_location("1, 1");
        watch.cancel();
        store.set_location("2, 2");

        assert_eq!(*seen.lock().unwrap(), vec!["1, 1"]);
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn dropping_handle_cancels() {
        let store = LocationStore::new();
        let (_seen, callback) = recorder();
        {
            let _watch = store.observe(callback);
            assert_eq!(store.observer_count(), 1);
        }
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn clones_share_state() {
        let store = LocationStore::new();
        let alias = store.clone();
        store.set_location("5, 6");
        assert_eq!(alias.current().as_deref(), Some("5, 6"));
    }

    #[test]
    fn two_observers_see_identical_sequences() {
        let store = LocationStore::new();
        store.set_location("0, 0");

        let (first, cb1) = recorder();
        let _w1 = store.observe(cb1);
        let (second, cb2) = recorder();
        let _w2 = store.observe(cb2);

        store.set_location("1, 1");
        store.set_location("2, 2");

        assert_eq!(*first.lock().unwrap(), *second.lock().unwrap());
        assert_eq!(*first.lock().unwrap(), vec!["0, 0", "1, 1", "2, 2"]);
    }
}
