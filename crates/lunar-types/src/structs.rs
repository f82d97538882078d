//! Value structs for the lunar calendar.
//!
//! Covers the [`MoonPhase`] value object, the month grid and day-detail
//! projections built from it, the user profile, forecast days, advisories
//! and holidays.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    AdvisoryKind, AdvisoryStatus, Gender, HolidayKind, LifeArea, PhaseName, WeatherCondition,
};

/// Number of discrete buckets the lunar cycle is divided into.
pub const PHASE_BUCKETS: f64 = 8.0;

// ---------------------------------------------------------------------------
// MoonPhase
// ---------------------------------------------------------------------------

/// Fractional part `x - floor(x)`, always in `[0, 1)`.
///
/// Unlike `%`, this is correct for negative inputs: `-0.25` maps to `0.75`.
/// Non-finite inputs, and tiny negatives whose result rounds up to exactly
/// 1.0, map to 0.0.
pub fn unit_fraction(value: f64) -> f64 {
    let fraction = value - value.floor();
    if (0.0..1.0).contains(&fraction) {
        fraction
    } else {
        0.0
    }
}

/// The phase of the moon on one calendar date.
///
/// Immutable: built only through [`MoonPhase::from_cycle_fraction`], so the
/// phase name and glyph always agree with `floor(synodic_position)` and the
/// illumination always agrees with the cycle fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MoonPhase {
    /// Position within the synodic month, in `[0, 1)`.
    cycle_fraction: f64,
    /// `cycle_fraction` scaled to the eight phase buckets, in `[0, 8)`.
    synodic_position: f64,
    /// Approximate illuminated share of the disk, in `[0, 100]`.
    illumination_percent: f64,
    /// Discrete phase bucket.
    phase: PhaseName,
    /// Display label of `phase`.
    #[ts(type = "string")]
    name: &'static str,
    /// Glyph of `phase`.
    #[ts(type = "string")]
    glyph: &'static str,
}

impl MoonPhase {
    /// Build a phase from a (possibly unnormalized) count of synodic months.
    ///
    /// The fractional part is taken with `x - floor(x)`, so negative counts
    /// from dates before the reference new moon still land in `[0, 1)`.
    /// Illumination is the triangular approximation: 0% at new moon rising
    /// linearly to 100% at `cycle_fraction = 0.5` and back down.
    pub fn from_cycle_fraction(synodic_months: f64) -> Self {
        let cycle_fraction = unit_fraction(synodic_months);
        let synodic_position = cycle_fraction * PHASE_BUCKETS;
        let lit_fraction = if cycle_fraction < 0.5 {
            cycle_fraction
        } else {
            1.0 - cycle_fraction
        };
        let phase = PhaseName::from_position(synodic_position);

        Self {
            cycle_fraction,
            synodic_position,
            illumination_percent: lit_fraction * 200.0,
            phase,
            name: phase.label(),
            glyph: phase.glyph(),
        }
    }

    /// Position within the synodic month, in `[0, 1)`.
    pub const fn cycle_fraction(&self) -> f64 {
        self.cycle_fraction
    }

    /// Position scaled to the eight buckets, in `[0, 8)`.
    pub const fn synodic_position(&self) -> f64 {
        self.synodic_position
    }

    /// Approximate illuminated share of the disk, in `[0, 100]`.
    pub const fn illumination_percent(&self) -> f64 {
        self.illumination_percent
    }

    /// Discrete phase bucket.
    pub const fn phase(&self) -> PhaseName {
        self.phase
    }

    /// Display label, e.g. `"Full Moon"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Glyph, e.g. `"🌕"`.
    pub const fn glyph(&self) -> &'static str {
        self.glyph
    }

    /// Waxing half of the cycle: `synodic_position ∈ [0, 4)`.
    pub fn is_waxing(&self) -> bool {
        self.synodic_position < 4.0
    }

    /// Waning half of the cycle: `synodic_position ∈ [4, 8)`.
    pub fn is_waning(&self) -> bool {
        !self.is_waxing()
    }

    /// Full-moon influence window: `synodic_position ∈ [4, 6)`.
    pub fn is_near_full(&self) -> bool {
        (4.0..6.0).contains(&self.synodic_position)
    }
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// One populated day in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CalendarCell {
    /// Day of month, starting at 1.
    pub day: u32,
    /// The full date.
    pub date: NaiveDate,
    /// Saturday or Sunday column.
    pub weekend: bool,
    /// Whether this is the caller's current date.
    pub today: bool,
    /// Moon phase on this date.
    pub phase: MoonPhase,
}

/// A Monday-first month grid.
///
/// `cells` holds `leading_blanks` empty slots followed by one cell per day,
/// so `cells[i]` sits in column `i % 7`.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MonthGrid {
    /// Calendar year.
    pub year: i32,
    /// Month, 1 through 12.
    pub month: u32,
    /// Empty slots before the 1st of the month.
    pub leading_blanks: u32,
    /// Grid slots in row-major order.
    pub cells: Vec<Option<CalendarCell>>,
}

/// Everything the day-detail view shows for one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DayDetails {
    /// The date.
    pub date: NaiveDate,
    /// Day of the week.
    #[ts(as = "String")]
    pub weekday: Weekday,
    /// Moon phase on this date.
    pub phase: MoonPhase,
    /// Modelled surface pressure in millimetres of mercury.
    pub pressure_mm_hg: i32,
    /// Whether the moon is waxing.
    pub waxing: bool,
    /// Public holiday falling on this date, if any.
    pub holiday: Option<HolidayKind>,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Personal data used to tailor advisories. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UserProfile {
    /// Date of birth.
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Body weight in kilograms.
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Height in centimetres.
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Gender, if given.
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl UserProfile {
    /// Birth date, weight and height are all present.
    ///
    /// Gender is not required for personal advisories.
    pub const fn is_complete(&self) -> bool {
        self.birth_date.is_some() && self.weight_kg.is_some() && self.height_cm.is_some()
    }
}

/// Metrics derived from a [`UserProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ProfileMetrics {
    /// Age in whole years.
    pub age: Option<u32>,
    /// Body mass index rounded to one decimal place.
    pub bmi: Option<f64>,
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// One day of a weather forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WeatherDay {
    /// Forecast date.
    pub date: NaiveDate,
    /// Air temperature in degrees Celsius.
    pub temperature_c: i32,
    /// Sky condition.
    pub condition: WeatherCondition,
    /// Surface pressure in millimetres of mercury.
    pub pressure_mm_hg: i32,
}

/// Summary of pressure across a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PressureStats {
    /// Mean pressure, rounded to the nearest millimetre.
    pub average_mm_hg: i32,
    /// Highest pressure.
    pub max_mm_hg: i32,
    /// Lowest pressure.
    pub min_mm_hg: i32,
}

// ---------------------------------------------------------------------------
// Advisories and holidays
// ---------------------------------------------------------------------------

/// A single lunar-influence advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Advisory {
    /// Area of life.
    pub area: LifeArea,
    /// Selected advice.
    pub kind: AdvisoryKind,
    /// Favourable or cautionary.
    pub status: AdvisoryStatus,
    /// Derived from the user's profile rather than the phase alone.
    pub personal: bool,
}

/// A public holiday occurrence, spanning `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Holiday {
    /// Which holiday.
    pub kind: HolidayKind,
    /// First day off.
    pub start: NaiveDate,
    /// Last day off (equal to `start` for single-day holidays).
    pub end: NaiveDate,
}

impl Holiday {
    /// Whether `date` falls within the holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }
}
