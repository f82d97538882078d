//! REST API endpoint handlers.
//!
//! Every handler is a thin projection of `lunar-core` onto JSON. Dates in
//! paths and query strings are `YYYY-MM-DD`; when a date is omitted the
//! handler uses today at the configured location. Malformed query strings
//! and bodies are answered with the same JSON error body as handler errors.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/phase` | Moon phase for `?date=` |
//! | `GET` | `/api/calendar` | Month grid for `?year=&month=` |
//! | `GET` | `/api/days/{date}` | Phase, pressure and holiday for one day |
//! | `GET` | `/api/forecast` | Configured forecast with pressure stats |
//! | `GET` | `/api/profile` | Current profile with age and BMI |
//! | `PUT` | `/api/profile` | Replace the profile |
//! | `GET` | `/api/advisories` | Advisories for `?date=` and the profile |
//! | `GET` | `/api/holidays` | Public holidays for `?year=` |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use chrono::{Datelike, NaiveDate};
use lunar_core::{advisory, calendar, holidays, phase, profile, weather};
use lunar_types::UserProfile;
use tracing::info;

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for endpoints keyed on a single date.
#[derive(Debug, serde::Deserialize)]
pub struct DateQuery {
    /// `YYYY-MM-DD`; defaults to today.
    pub date: Option<String>,
}

/// Query parameters for the `GET /api/calendar` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct CalendarQuery {
    /// Calendar year; defaults to the current year.
    pub year: Option<i32>,
    /// Month 1-12; defaults to the current month.
    pub month: Option<u32>,
}

/// Query parameters for the `GET /api/holidays` endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct YearQuery {
    /// Calendar year; defaults to the current year.
    pub year: Option<i32>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page with today's phase and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let today = state.today();
    let moon = phase::compute(today);
    let location = &state.location_name;
    let glyph = moon.glyph();
    let name = moon.name();
    let illumination = moon.illumination_percent().round();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Lunar Calendar</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .glyph {{ font-size: 4rem; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
    </style>
</head>
<body>
    <h1>Lunar Calendar</h1>
    <p class="subtitle">{location}, {today}</p>

    <div class="glyph">{glyph}</div>
    <p>{name}, {illumination}% illuminated</p>

    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/api/phase">GET /api/phase</a> -- Moon phase (?date=YYYY-MM-DD)</li>
        <li><a href="/api/calendar">GET /api/calendar</a> -- Month grid (?year=&amp;month=)</li>
        <li><a href="/api/days/{today}">GET /api/days/:date</a> -- Day details</li>
        <li><a href="/api/forecast">GET /api/forecast</a> -- Forecast and pressure</li>
        <li><a href="/api/profile">GET /api/profile</a> -- Profile, age and BMI (PUT to replace)</li>
        <li><a href="/api/advisories">GET /api/advisories</a> -- Lunar advisories (?date=)</li>
        <li><a href="/api/holidays">GET /api/holidays</a> -- Public holidays (?year=)</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/phase -- moon phase for a date
// ---------------------------------------------------------------------------

/// Return the moon phase for `?date=`, or for today.
pub async fn get_phase(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ObserverError> {
    let Query(params) = query?;
    let date = resolve_date(&state, params.date.as_deref())?;
    let moon = phase::compute(date);

    Ok(Json(serde_json::json!({
        "date": date,
        "location": state.location_name,
        "phase": serde_json::to_value(moon)?,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/calendar -- month grid
// ---------------------------------------------------------------------------

/// Return the Monday-first month grid with a phase on every day.
///
/// # Query Parameters
///
/// - `year`: calendar year (default: current year)
/// - `month`: 1-12 (default: current month)
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ObserverError> {
    let Query(params) = query?;
    let today = state.today();
    let year = params.year.unwrap_or_else(|| today.year());
    let month = params.month.unwrap_or_else(|| today.month());

    let grid = calendar::month_grid(year, month, today)?;
    Ok(Json(serde_json::to_value(grid)?))
}

// ---------------------------------------------------------------------------
// GET /api/days/:date -- day details
// ---------------------------------------------------------------------------

/// Return weekday, phase, modelled pressure, waxing flag and holiday.
pub async fn get_day(Path(date_str): Path<String>) -> Result<impl IntoResponse, ObserverError> {
    let date = parse_date(&date_str)?;
    Ok(Json(serde_json::to_value(calendar::day_details(date))?))
}

// ---------------------------------------------------------------------------
// GET /api/forecast -- configured forecast
// ---------------------------------------------------------------------------

/// Return the configured forecast with its pressure summary.
///
/// `stats` is `null` when no forecast is configured.
pub async fn get_forecast(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    Ok(Json(serde_json::json!({
        "location": state.location_name,
        "count": state.forecast.len(),
        "days": serde_json::to_value(&state.forecast)?,
        "stats": serde_json::to_value(weather::pressure_stats(&state.forecast))?,
    })))
}

// ---------------------------------------------------------------------------
// GET/PUT /api/profile -- user profile
// ---------------------------------------------------------------------------

/// Return the current profile with derived age and BMI.
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ObserverError> {
    let current = *state.profile.read().await;
    profile_body(&current, state.today())
}

/// Replace the profile and return it with derived age and BMI.
///
/// Weight and height must be positive when given, and the birth date may
/// not lie in the future.
pub async fn put_profile(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UserProfile>, JsonRejection>,
) -> Result<impl IntoResponse, ObserverError> {
    let Json(update) = body.map_err(|e| ObserverError::InvalidProfile(e.body_text()))?;
    let today = state.today();
    validate_profile(&update, today)?;

    *state.profile.write().await = update;
    info!(complete = update.is_complete(), "Profile updated");

    profile_body(&update, today)
}

// ---------------------------------------------------------------------------
// GET /api/advisories -- lunar advisories
// ---------------------------------------------------------------------------

/// Return advisories for `?date=` (default today) and the stored profile.
///
/// Age is evaluated on the requested date.
pub async fn get_advisories(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ObserverError> {
    let Query(params) = query?;
    let date = resolve_date(&state, params.date.as_deref())?;
    let current = *state.profile.read().await;
    let moon = phase::compute(date);
    let list = advisory::advisories(&moon, &current, date);

    Ok(Json(serde_json::json!({
        "date": date,
        "phase": serde_json::to_value(moon)?,
        "personal": current.is_complete(),
        "count": list.len(),
        "advisories": serde_json::to_value(list)?,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/holidays -- public holidays
// ---------------------------------------------------------------------------

/// Return the public holidays of `?year=` (default current year).
pub async fn get_holidays(
    State(state): State<Arc<AppState>>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ObserverError> {
    let Query(params) = query?;
    let year = params.year.unwrap_or_else(|| state.today().year());
    let list = holidays::holidays_in(year);

    Ok(Json(serde_json::json!({
        "year": year,
        "count": list.len(),
        "holidays": serde_json::to_value(list)?,
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` date, returning an [`ObserverError`] on failure.
fn parse_date(s: &str) -> Result<NaiveDate, ObserverError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| ObserverError::InvalidDate(format!("{s}: {e}")))
}

fn resolve_date(state: &AppState, date: Option<&str>) -> Result<NaiveDate, ObserverError> {
    date.map_or_else(|| Ok(state.today()), parse_date)
}

fn validate_profile(update: &UserProfile, today: NaiveDate) -> Result<(), ObserverError> {
    let positive = |value: Option<f64>| value.is_none_or(|v| v.is_finite() && v > 0.0);

    if !positive(update.weight_kg) {
        return Err(ObserverError::InvalidProfile(
            "weight_kg must be a positive number".to_owned(),
        ));
    }
    if !positive(update.height_cm) {
        return Err(ObserverError::InvalidProfile(
            "height_cm must be a positive number".to_owned(),
        ));
    }
    if let Some(born) = update.birth_date
        && born > today
    {
        return Err(ObserverError::InvalidProfile(format!(
            "birth_date {born} is after {today}"
        )));
    }
    Ok(())
}

fn profile_body(
    current: &UserProfile,
    today: NaiveDate,
) -> Result<Json<serde_json::Value>, ObserverError> {
    Ok(Json(serde_json::json!({
        "profile": serde_json::to_value(current)?,
        "complete": current.is_complete(),
        "metrics": serde_json::to_value(profile::metrics(current, today))?,
    })))
}
