//! Axum router construction for the lunar calendar API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/phase` -- moon phase for a date
/// - `GET /api/calendar` -- month grid
/// - `GET /api/days/{date}` -- single day details
/// - `GET /api/forecast` -- configured forecast and pressure stats
/// - `GET /api/profile`, `PUT /api/profile` -- in-memory user profile
/// - `GET /api/advisories` -- lunar advisories for a date
/// - `GET /api/holidays` -- public holidays for a year
///
/// CORS allows any origin so the dashboard can be served separately.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // REST API
        .route("/api/phase", get(handlers::get_phase))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/days/{date}", get(handlers::get_day))
        .route("/api/forecast", get(handlers::get_forecast))
        .route(
            "/api/profile",
            get(handlers::get_profile).put(handlers::put_profile),
        )
        .route("/api/advisories", get(handlers::get_advisories))
        .route("/api/holidays", get(handlers::get_holidays))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
