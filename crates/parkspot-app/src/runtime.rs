//! Generic orchestration loop.
//!
//! [`Runtime`] owns the [`App`] state machine and a [`Driver`], interpreting
//! the declarative [`AppAction`]s the state machine produces. Production and
//! tests run this exact loop; only the driver differs.

use std::collections::VecDeque;

use tracing::debug;

use crate::{App, AppAction, AppEvent, Driver};

/// Orchestrates an [`App`] over a [`Driver`] until the app quits.
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime from a driver and initial app state.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Run until a [`AppAction::Quit`] is processed or the driver fails.
    ///
    /// Each iteration polls the driver once, drains the resulting action
    /// queue (position-query outcomes are fed back into the state machine as
    /// [`AppEvent`]s and may enqueue follow-up actions), then advances
    /// transient state by one tick.
    ///
    /// # Errors
    ///
    /// Propagates the first driver error; the driver is stopped first.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;
        loop {
            let polled = match self.driver.poll_event(&mut self.app).await {
                Ok(actions) => actions,
                Err(error) => {
                    self.driver.stop();
                    return Err(error);
                },
            };
            let mut queue: VecDeque<AppAction> = polled.into();
            while let Some(action) = queue.pop_front() {
                debug!(?action, "executing action");
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => {
                        self.driver.stop();
                        return Ok(());
                    },
                    AppAction::QueryPosition => {
                        let event = match self.driver.query_position().await {
                            Ok(Some(position)) => AppEvent::PositionFix(position),
                            Ok(None) => AppEvent::PositionUnavailable,
                            Err(error) => AppEvent::PositionError(error.to_string()),
                        };
                        queue.extend(self.app.handle_event(event));
                    },
                }
            }
            if self.app.tick() {
                self.driver.render(&self.app)?;
            }
        }
    }
}
