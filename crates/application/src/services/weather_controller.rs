//! Weather controller
//!
//! Owns the display state of the client: the selected city, the user
//! preferences, the latest snapshot and the outfit suggestion. Every change
//! that affects what is fetched issues a [`FetchTicket`]; completing a ticket
//! applies its result only if no newer ticket has been issued since.
//!
//! State is kept behind a `parking_lot::Mutex` and the lock is never held
//! across an `.await`.

use std::sync::Arc;

use domain::{
    AppPreferences, City, DomainError, Percentage, SnapshotFreshness, Theme, UnitPreference,
    WeatherSnapshot, find_city,
};
use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::ports::{NotificationPort, RainAlert, WeatherPort};
use crate::services::outfit_service::OutfitService;

/// Default precipitation probability at which rain alerts fire
pub const DEFAULT_RAIN_ALERT_THRESHOLD: u8 = 50;

/// Permission to run one fetch for a specific selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchTicket {
    generation: u64,
    city: City,
    unit: UnitPreference,
}

impl FetchTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn city(&self) -> City {
        self.city
    }

    #[must_use]
    pub const fn unit(&self) -> UnitPreference {
        self.unit
    }
}

/// What happened to a completed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The snapshot was replaced
    Applied,
    /// The fetch failed; any previous snapshot is kept and marked stale
    Failed(String),
    /// A newer ticket was issued; the result was discarded
    Superseded,
}

/// Outfit suggestion state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutfitState {
    pub loading: bool,
    pub suggestion: Option<String>,
}

/// Read-only view of the controller state
#[derive(Debug, Clone, Serialize)]
pub struct ControllerState {
    pub selected_city: City,
    pub preferences: AppPreferences,
    pub snapshot: Option<WeatherSnapshot>,
    /// City the held snapshot was fetched for; may lag `selected_city`
    pub snapshot_city: Option<City>,
    pub freshness: SnapshotFreshness,
    pub loading: bool,
    pub last_error: Option<String>,
    pub generation: u64,
    pub outfit: OutfitState,
}

impl ControllerState {
    fn new(city: City, preferences: AppPreferences) -> Self {
        Self {
            selected_city: city,
            preferences,
            snapshot: None,
            snapshot_city: None,
            freshness: SnapshotFreshness::Fresh,
            loading: false,
            last_error: None,
            generation: 0,
            outfit: OutfitState::default(),
        }
    }

    fn issue_ticket(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            city: self.selected_city,
            unit: self.preferences.unit,
        }
    }
}

/// Controller coordinating weather fetches, preferences and suggestions
pub struct WeatherController {
    weather: Arc<dyn WeatherPort>,
    outfit: OutfitService,
    notifier: Option<Arc<dyn NotificationPort>>,
    rain_threshold: Percentage,
    state: Mutex<ControllerState>,
}

impl std::fmt::Debug for WeatherController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherController")
            .field("outfit", &self.outfit)
            .field("has_notifier", &self.notifier.is_some())
            .field("rain_threshold", &self.rain_threshold)
            .finish_non_exhaustive()
    }
}

impl WeatherController {
    /// Create a controller for the given initial selection
    ///
    /// No fetch is issued; call [`Self::refresh`] for the initial load.
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        outfit: OutfitService,
        city: City,
        preferences: AppPreferences,
    ) -> Self {
        Self {
            weather,
            outfit,
            notifier: None,
            rain_threshold: Percentage::clamped(DEFAULT_RAIN_ALERT_THRESHOLD),
            state: Mutex::new(ControllerState::new(city, preferences)),
        }
    }

    /// Attach a notifier for rain alerts
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationPort>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Override the precipitation probability that triggers rain alerts
    #[must_use]
    pub const fn with_rain_threshold(mut self, threshold: Percentage) -> Self {
        self.rain_threshold = threshold;
        self
    }

    /// Snapshot of the current state for rendering
    pub fn state(&self) -> ControllerState {
        self.state.lock().clone()
    }

    pub fn selected_city(&self) -> City {
        self.state.lock().selected_city
    }

    /// Select a city; returns a ticket only if the selection changed
    pub fn select_city(&self, city: City) -> Option<FetchTicket> {
        let mut state = self.state.lock();
        if state.selected_city == city {
            debug!(city = city.name, "City already selected");
            return None;
        }
        state.selected_city = city;
        let ticket = state.issue_ticket();
        info!(city = city.name, generation = ticket.generation, "City selected");
        Some(ticket)
    }

    /// Select a catalog city by name
    pub fn select_city_by_name(&self, name: &str) -> Result<Option<FetchTicket>, DomainError> {
        let city = find_city(name)?;
        Ok(self.select_city(city))
    }

    /// Change the unit preference; returns a ticket only if it changed
    pub fn set_unit(&self, unit: UnitPreference) -> Option<FetchTicket> {
        let mut state = self.state.lock();
        if state.preferences.unit == unit {
            return None;
        }
        state.preferences.unit = unit;
        let ticket = state.issue_ticket();
        info!(%unit, generation = ticket.generation, "Unit changed");
        Some(ticket)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.state.lock().preferences.theme = theme;
    }

    /// Flip the rain alert toggle and return its new value
    pub fn toggle_rain_notification(&self) -> bool {
        let mut state = self.state.lock();
        state.preferences.rain_notification = !state.preferences.rain_notification;
        state.preferences.rain_notification
    }

    /// Issue a ticket for the current selection unconditionally
    pub fn refresh(&self) -> FetchTicket {
        let ticket = self.state.lock().issue_ticket();
        debug!(generation = ticket.generation, "Refresh requested");
        ticket
    }

    /// Run the fetch for a ticket and apply the result if still current
    #[instrument(skip(self), fields(city = ticket.city.name, generation = ticket.generation))]
    pub async fn complete(&self, ticket: FetchTicket) -> FetchOutcome {
        let result = self
            .weather
            .fetch_weather(&ticket.city.location, ticket.unit)
            .await;

        let alert = {
            let mut state = self.state.lock();
            if state.generation != ticket.generation {
                debug!(current = state.generation, "Discarding superseded fetch");
                return FetchOutcome::Superseded;
            }

            state.loading = false;
            match result {
                Ok(snapshot) => {
                    let alert = if state.preferences.rain_notification {
                        self.rain_alert(&ticket.city, &snapshot)
                    } else {
                        None
                    };
                    state.snapshot = Some(snapshot);
                    state.snapshot_city = Some(ticket.city);
                    state.freshness = SnapshotFreshness::Fresh;
                    state.last_error = None;
                    alert
                },
                Err(e) => {
                    let message = e.to_string();
                    warn!(error = %message, "Weather fetch failed");
                    if state.snapshot.is_some() {
                        state.freshness = SnapshotFreshness::Stale;
                    }
                    state.last_error = Some(message.clone());
                    return FetchOutcome::Failed(message);
                },
            }
        };

        if let (Some(alert), Some(notifier)) = (alert, &self.notifier) {
            if let Err(e) = notifier.notify_rain(alert).await {
                warn!(error = %e, "Failed to deliver rain alert");
            }
        }

        FetchOutcome::Applied
    }

    /// Run [`Self::complete`] on the runtime without waiting for it
    pub fn spawn(self: &Arc<Self>, ticket: FetchTicket) -> JoinHandle<FetchOutcome> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.complete(ticket).await })
    }

    /// Ask for an outfit suggestion for the current snapshot
    ///
    /// The prompt names the city the snapshot was fetched for, which differs
    /// from the selection while a new city is loading or after its fetch
    /// failed. Returns `None` without side effects when there is nothing to
    /// base a suggestion on.
    pub async fn request_outfit(&self) -> Option<String> {
        let (city, snapshot) = {
            let mut state = self.state.lock();
            let snapshot = state.snapshot.clone()?;
            let city = state.snapshot_city.unwrap_or(state.selected_city);
            state.outfit.loading = true;
            (city, snapshot)
        };

        let suggestion = self.outfit.suggest(&city, &snapshot).await;

        let mut state = self.state.lock();
        state.outfit.loading = false;
        state.outfit.suggestion = Some(suggestion.clone());
        Some(suggestion)
    }

    fn rain_alert(&self, city: &City, snapshot: &WeatherSnapshot) -> Option<RainAlert> {
        let current = snapshot.current();
        let classification = current.classification();
        let wet = current.precipitation_probability >= self.rain_threshold
            || classification.category.is_wet();

        wet.then(|| RainAlert {
            city: city.name.to_string(),
            precipitation_probability: current.precipitation_probability,
            description: classification.description.to_string(),
        })
    }
}
