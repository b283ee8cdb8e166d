//! App state machine.
//!
//! Holds all UI-visible state and implements every transition as a plain
//! method returning declarative [`AppAction`]s. No I/O happens here; the
//! runtime executes the actions and feeds outcomes back through
//! [`App::handle_event`].
//!
//! # Screens
//!
//! ```text
//! ┌────────┐  show_detail / toggle  ┌────────┐
//! │ Picker │───────────────────────>│ Detail │
//! │        │<───────────────────────│        │
//! └────────┘  show_picker / toggle  └────────┘
//! ```
//!
//! Entering Detail subscribes its buffer to the shared store (with replay of
//! the current value); leaving cancels the subscription.

use parkspot_core::{LocationStore, Position};
use tracing::{debug, info, warn};

use crate::{
    AppAction, AppEvent,
    state::{AppConfig, DetailState, Marker, MarkerSource, Notice, PickerState, Screen, Viewport},
};

/// Application state for the two-screen UI.
pub struct App {
    store: LocationStore,
    config: AppConfig,
    screen: Screen,
    picker: PickerState,
    detail: DetailState,
    notice: Option<Notice>,
}

impl App {
    /// Create the app on the picker screen with an empty map.
    pub fn new(store: LocationStore, config: AppConfig) -> Self {
        let picker = PickerState {
            cursor: config.start_center,
            viewport: Viewport { center: config.start_center, zoom: config.start_zoom },
            marker: None,
            last_known: None,
        };
        Self {
            store,
            config,
            screen: Screen::Picker,
            picker,
            detail: DetailState::new(),
            notice: None,
        }
    }

    /// The shared location store this app writes to and observes.
    pub fn store(&self) -> &LocationStore {
        &self.store
    }

    /// Currently visible screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Picker screen state, for rendering.
    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    /// Text the detail screen should display, if any value was observed.
    pub fn detail_text(&self) -> Option<String> {
        self.detail.latest()
    }

    /// Active transient notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|notice| notice.text.as_str())
    }

    // ------------------------------------------------------------------
    // Picker screen transitions
    // ------------------------------------------------------------------

    /// Move the crosshair cursor by whole steps (east/north positive).
    ///
    /// The camera follows the cursor when it leaves the visible region.
    pub fn move_cursor(&mut self, steps_lat: i32, steps_lon: i32) -> Vec<AppAction> {
        if self.screen != Screen::Picker {
            return Vec::new();
        }
        let dlat = self.picker.viewport.lat_span() * self.config.cursor_step_fraction
            * f64::from(steps_lat);
        let dlon = self.picker.viewport.lon_span() * self.config.cursor_step_fraction
            * f64::from(steps_lon);
        self.picker.cursor = self.picker.cursor.offset(dlat, dlon);
        if !self.picker.viewport.contains(self.picker.cursor) {
            self.picker.viewport.center = self.picker.cursor;
        }
        vec![AppAction::Render]
    }

    /// Zoom the camera in or out by one level.
    pub fn zoom(&mut self, delta: f64) -> Vec<AppAction> {
        if self.screen != Screen::Picker {
            return Vec::new();
        }
        let zoom = &mut self.picker.viewport.zoom;
        *zoom = (*zoom + delta).clamp(Viewport::MIN_ZOOM, Viewport::MAX_ZOOM);
        vec![AppAction::Render]
    }

    /// Confirm the cursor position (the tap analog): drop the marker there
    /// and save the formatted pair to the shared store.
    ///
    /// The confirmed point also becomes the last-known position.
    pub fn park_at_cursor(&mut self) -> Vec<AppAction> {
        if self.screen != Screen::Picker {
            return Vec::new();
        }
        let cursor = self.picker.cursor;
        self.picker.last_known = Some(cursor);
        self.park_at(cursor, MarkerSource::Picked);
        vec![AppAction::Render]
    }

    /// "Parked here" shortcut: park at the last-known position if one
    /// exists, otherwise ask the platform for a fix.
    pub fn park_here(&mut self) -> Vec<AppAction> {
        if self.screen != Screen::Picker {
            return Vec::new();
        }
        match self.picker.last_known {
            Some(position) => {
                self.park_at(position, MarkerSource::Picked);
                vec![AppAction::Render]
            },
            None => vec![AppAction::QueryPosition],
        }
    }

    /// Outcome of a position query, delivered by the runtime.
    pub fn handle_event(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::PositionFix(position) => {
                self.picker.last_known = Some(position);
                self.picker.cursor = position.normalized();
                self.park_at(position, MarkerSource::DeviceFix);
            },
            AppEvent::PositionUnavailable => {
                warn!("position query returned no fix");
                self.show_notice("No position fix available");
            },
            AppEvent::PositionError(message) => {
                warn!(%message, "position query failed");
                self.show_notice(format!("Position query failed: {message}"));
            },
        }
        vec![AppAction::Render]
    }

    // ------------------------------------------------------------------
    // Screen switching
    // ------------------------------------------------------------------

    /// Show the detail screen, subscribing it to the store.
    pub fn show_detail(&mut self) -> Vec<AppAction> {
        if self.screen == Screen::Detail {
            return Vec::new();
        }
        debug!("switching to detail screen");
        self.screen = Screen::Detail;
        self.detail.subscribe(&self.store);
        vec![AppAction::Render]
    }

    /// Show the picker screen, cancelling the detail subscription.
    pub fn show_picker(&mut self) -> Vec<AppAction> {
        if self.screen == Screen::Picker {
            return Vec::new();
        }
        debug!("switching to picker screen");
        self.screen = Screen::Picker;
        self.detail.unsubscribe();
        vec![AppAction::Render]
    }

    /// Switch to the other screen.
    pub fn toggle_screen(&mut self) -> Vec<AppAction> {
        match self.screen {
            Screen::Picker => self.show_detail(),
            Screen::Detail => self.show_picker(),
        }
    }

    // ------------------------------------------------------------------
    // Runtime hooks
    // ------------------------------------------------------------------

    /// Advance transient state by one poll tick.
    ///
    /// Returns `true` when the tick changed something visible (a notice
    /// expired) and the UI needs a re-render.
    pub fn tick(&mut self) -> bool {
        match &mut self.notice {
            Some(notice) if notice.ttl_ticks <= 1 => {
                self.notice = None;
                true
            },
            Some(notice) => {
                notice.ttl_ticks -= 1;
                false
            },
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn detail_is_subscribed(&self) -> bool {
        self.detail.is_subscribed()
    }

    fn park_at(&mut self, position: Position, source: MarkerSource) {
        info!(lat = position.lat, lon = position.lon, label = source.label(), "parking marker set");
        self.picker.marker = Some(Marker { position, source });
        self.picker.viewport.center = position;
        self.picker.viewport.zoom = self.config.park_zoom;
        self.store.set_location(position.format_pair());
    }

    fn show_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::new(text, self.config.notice_ttl_ticks));
    }
}
