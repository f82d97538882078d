//! Shared application state for the lunar calendar API.
//!
//! [`AppState`] holds the location, the configured forecast and the
//! in-memory user profile. The profile is the only mutable piece and is
//! guarded by a [`RwLock`]; everything else is fixed at startup.

use chrono::{FixedOffset, NaiveDate};
use lunar_core::calendar::local_today;
use lunar_core::config::{ConfigError, LunarConfig};
use lunar_types::{UserProfile, WeatherDay};
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug)]
pub struct AppState {
    /// Display name of the configured location.
    pub location_name: String,
    /// Offset used to resolve "today".
    pub offset: FixedOffset,
    /// Forecast days served by `GET /api/forecast`.
    pub forecast: Vec<WeatherDay>,
    /// The current user profile, replaced by `PUT /api/profile`.
    pub profile: RwLock<UserProfile>,
    /// Fixed "today", used instead of the system clock when set.
    pinned_today: Option<NaiveDate>,
}

impl AppState {
    /// Create state for a location with an empty forecast and profile.
    pub fn new(location_name: impl Into<String>, offset: FixedOffset) -> Self {
        Self {
            location_name: location_name.into(),
            offset,
            forecast: Vec::new(),
            profile: RwLock::new(UserProfile::default()),
            pinned_today: None,
        }
    }

    /// Build state from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configured UTC offset is out
    /// of range.
    pub fn from_config(config: &LunarConfig) -> Result<Self, ConfigError> {
        let mut state = Self::new(config.location.name.clone(), config.location.offset()?);
        state.forecast.clone_from(&config.forecast);
        state.profile = RwLock::new(config.profile);
        Ok(state)
    }

    /// Replace the forecast.
    #[must_use]
    pub fn with_forecast(mut self, forecast: Vec<WeatherDay>) -> Self {
        self.forecast = forecast;
        self
    }

    /// Replace the initial profile.
    #[must_use]
    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = RwLock::new(profile);
        self
    }

    /// Pin "today" to a fixed date.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    /// The current civil date at the configured location.
    pub fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| local_today(self.offset))
    }
}
