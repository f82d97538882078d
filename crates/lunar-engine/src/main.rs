//! Lunar calendar binary.
//!
//! Loads configuration, reports today's moon phase and serves the HTTP API.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `LUNAR_CONFIG` (default `lunar-config.yaml`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the shared API state
//! 4. Log today's phase at the configured location
//! 5. Serve the API

mod error;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lunar_core::config::{LoggingConfig, LunarConfig};
use lunar_core::phase;
use lunar_observer::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Config file used when `LUNAR_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "lunar-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server cannot
/// bind.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let config_path = resolve_config_path(std::env::var("LUNAR_CONFIG").ok());
    let (config, from_file) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("lunar-engine starting");
    if from_file {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }

    // 3. Build shared state.
    let state = Arc::new(AppState::from_config(&config)?);
    info!(
        location = state.location_name,
        utc_offset_hours = config.location.utc_offset_hours,
        forecast_days = state.forecast.len(),
        profile_complete = config.profile.is_complete(),
        "State initialized"
    );

    // 4. Report today's phase.
    let today = state.today();
    let moon = phase::compute(today);
    info!(
        date = %today,
        phase = moon.name(),
        glyph = moon.glyph(),
        illumination_percent = format!("{:.1}", moon.illumination_percent()),
        synodic_position = format!("{:.3}", moon.synodic_position()),
        "Today's moon"
    );

    // 5. Serve the API.
    lunar_observer::start_server(&config.observer, state).await?;

    info!("lunar-engine stopped");
    Ok(())
}

/// Path from `LUNAR_CONFIG`, or the default file name.
fn resolve_config_path(from_env: Option<String>) -> PathBuf {
    from_env
        .filter(|p| !p.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load configuration, falling back to defaults when the file is absent.
///
/// The flag is `true` when the file was read.
fn load_config(path: &Path) -> Result<(LunarConfig, bool), EngineError> {
    if path.exists() {
        Ok((LunarConfig::from_file(path)?, true))
    } else {
        // Defaults still honour LUNAR_HOST and LUNAR_PORT.
        Ok((LunarConfig::parse("")?, false))
    }
}

/// `RUST_LOG` wins; otherwise the configured level, then `info`.
fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_logging(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_target(true);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
