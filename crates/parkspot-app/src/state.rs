//! Screen and presentation state types.

use std::sync::{Arc, Mutex, PoisonError};

use parkspot_core::{LocationStore, Position, WatchHandle};

/// Which screen is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Map screen for picking a parking location.
    Picker,
    /// Text screen showing the last saved location.
    Detail,
}

/// Where a marker came from. Affects its label only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSource {
    /// The user confirmed the cursor position.
    Picked,
    /// A device-position query supplied the point.
    DeviceFix,
}

impl MarkerSource {
    /// Human-readable marker title.
    pub fn label(self) -> &'static str {
        match self {
            Self::Picked => "Parked Location",
            Self::DeviceFix => "Current Location",
        }
    }
}

/// The parked-car marker shown on the picker map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Marker position.
    pub position: Position,
    /// Origin of the position, for labelling.
    pub source: MarkerSource,
}

/// Camera over the picker map: a center and a zoom level.
///
/// Zoom level `z` shows `360 / 2^z` degrees of longitude, matching the usual
/// slippy-map convention, so the park zoom constant carries over from the
/// original camera semantics unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Center of the visible region.
    pub center: Position,
    /// Zoom level; larger is closer.
    pub zoom: f64,
}

impl Viewport {
    /// Minimum zoom (whole world visible).
    pub const MIN_ZOOM: f64 = 0.0;
    /// Maximum zoom.
    pub const MAX_ZOOM: f64 = 18.0;

    /// Degrees of longitude spanned by the viewport.
    pub fn lon_span(&self) -> f64 {
        360.0 / 2f64.powf(self.zoom)
    }

    /// Degrees of latitude spanned by the viewport.
    ///
    /// Half the longitude span, matching the 2:1 aspect of an
    /// equirectangular world map.
    pub fn lat_span(&self) -> f64 {
        self.lon_span() * 0.5
    }

    /// Longitude bounds `[west, east]` of the visible region.
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lon_span() / 2.0;
        [self.center.lon - half, self.center.lon + half]
    }

    /// Latitude bounds `[south, north]` of the visible region.
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [self.center.lat - half, self.center.lat + half]
    }

    /// Whether the position is inside the visible region.
    pub fn contains(&self, position: Position) -> bool {
        let [west, east] = self.x_bounds();
        let [south, north] = self.y_bounds();
        position.lon >= west && position.lon <= east && position.lat >= south && position.lat <= north
    }
}

/// Picker screen state: cursor, camera, marker and last-known position.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    /// Crosshair cursor, the tap analog.
    pub cursor: Position,
    /// Camera over the map.
    pub viewport: Viewport,
    /// Current parked-car marker, if any.
    pub marker: Option<Marker>,
    /// Best-known position from the last fix or confirmed pick.
    pub last_known: Option<Position>,
}

/// Transient, non-blocking user notice (toast analog).
///
/// Lifetime is counted in runtime poll ticks rather than wall-clock time so
/// the state machine stays deterministic under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message shown to the user.
    pub text: String,
    pub(crate) ttl_ticks: u16,
}

impl Notice {
    pub(crate) fn new(text: impl Into<String>, ttl_ticks: u16) -> Self {
        Self { text: text.into(), ttl_ticks }
    }
}

/// Detail screen state: the observed value, buffered locally.
///
/// Subscribes to the store while visible and cancels the subscription on
/// teardown, so the store never retains a registration for a hidden screen.
/// Rendering reads the buffer, never the store.
pub struct DetailState {
    latest: Arc<Mutex<Option<String>>>,
    watch: Option<WatchHandle>,
}

impl DetailState {
    pub(crate) fn new() -> Self {
        Self { latest: Arc::new(Mutex::new(None)), watch: None }
    }

    /// Start observing the store. Replays the current value immediately if
    /// one exists.
    pub(crate) fn subscribe(&mut self, store: &LocationStore) {
        let buffer = Arc::clone(&self.latest);
        self.watch = Some(store.observe(move |value| {
            *buffer.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_string());
        }));
    }

    /// Stop observing. Dropping the handle removes the registration.
    pub(crate) fn unsubscribe(&mut self) {
        self.watch = None;
    }

    pub(crate) fn is_subscribed(&self) -> bool {
        self.watch.is_some()
    }

    /// Last value delivered while subscribed, if any.
    pub fn latest(&self) -> Option<String> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Tunable application constants.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Initial cursor and camera center.
    pub start_center: Position,
    /// Initial zoom level.
    pub start_zoom: f64,
    /// Zoom applied when recentering on a freshly dropped marker.
    pub park_zoom: f64,
    /// Cursor step per key press, as a fraction of the visible span.
    pub cursor_step_fraction: f64,
    /// Poll ticks a transient notice stays visible.
    pub notice_ttl_ticks: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_center: Position::new(0.0, 0.0),
            start_zoom: 2.0,
            park_zoom: 15.0,
            cursor_step_fraction: 0.05,
            notice_ttl_ticks: 40,
        }
    }
}
