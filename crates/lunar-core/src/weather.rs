//! Surface pressure model and forecast statistics.
//!
//! Forecast data itself is supplied by configuration; this module only
//! derives values from it. For dates outside the forecast, pressure follows
//! a smooth sinusoid around 750 mmHg keyed on the day of the month.

use chrono::{Datelike, NaiveDate};
use lunar_types::{PressureStats, WeatherDay};

/// Baseline surface pressure in millimetres of mercury.
pub const BASELINE_PRESSURE_MM_HG: f64 = 750.0;

/// Peak deviation from the baseline.
pub const PRESSURE_AMPLITUDE_MM_HG: f64 = 10.0;

/// Modelled pressure for a date: `round(750 + sin(day / 5) * 10)`.
pub fn pressure_for_date(date: NaiveDate) -> i32 {
    let variation = (f64::from(date.day()) / 5.0).sin() * PRESSURE_AMPLITUDE_MM_HG;
    round_to_mm(BASELINE_PRESSURE_MM_HG + variation)
}

/// Rounded mean, maximum and minimum pressure across a forecast.
///
/// Returns `None` for an empty forecast.
pub fn pressure_stats(days: &[WeatherDay]) -> Option<PressureStats> {
    let max_mm_hg = days.iter().map(|d| d.pressure_mm_hg).max()?;
    let min_mm_hg = days.iter().map(|d| d.pressure_mm_hg).min()?;

    let count = f64::from(u32::try_from(days.len()).ok()?);
    let total: f64 = days.iter().map(|d| f64::from(d.pressure_mm_hg)).sum();

    Some(PressureStats {
        average_mm_hg: round_to_mm(total / count),
        max_mm_hg,
        min_mm_hg,
    })
}

/// Round to the nearest whole millimetre.
#[allow(clippy::cast_possible_truncation)]
fn round_to_mm(value: f64) -> i32 {
    // Inputs are means or sinusoids of i32 readings, so they fit in i32.
    value.round() as i32
}
