//! Enumeration types for the lunar calendar.
//!
//! The phase enumeration doubles as the bucket lookup table for the phase
//! calculator: bucket index `i` covers synodic positions in `[i, i + 1)`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Moon phases
// ---------------------------------------------------------------------------

/// One of the eight discrete moon phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum PhaseName {
    /// Synodic position `[0, 1)`.
    NewMoon,
    /// Synodic position `[1, 2)`.
    WaxingCrescent,
    /// Synodic position `[2, 3)`.
    FirstQuarter,
    /// Synodic position `[3, 4)`.
    WaxingGibbous,
    /// Synodic position `[4, 5)`.
    FullMoon,
    /// Synodic position `[5, 6)`.
    WaningGibbous,
    /// Synodic position `[6, 7)`.
    LastQuarter,
    /// Synodic position `[7, 8)`.
    WaningCrescent,
}

impl PhaseName {
    /// Bucket lookup table: entry `i` is the phase for positions in `[i, i + 1)`.
    pub const ALL: [Self; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Select the phase at bucket index `floor(position)`.
    ///
    /// Positions below zero fall into the first bucket; positions at or
    /// above 8, and NaN, into the last one. The calculator never produces
    /// any of them.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_position(position: f64) -> Self {
        if position < 0.0 {
            return Self::NewMoon;
        }
        if !position.is_finite() {
            return Self::WaningCrescent;
        }
        // Finite and non-negative; `as` saturates above `usize::MAX`.
        let bucket = position.floor() as usize;
        Self::ALL.get(bucket).copied().unwrap_or(Self::WaningCrescent)
    }

    /// English display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Moon glyph shown in the calendar grid.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::NewMoon => "\u{1F311}",
            Self::WaxingCrescent => "\u{1F312}",
            Self::FirstQuarter => "\u{1F313}",
            Self::WaxingGibbous => "\u{1F314}",
            Self::FullMoon => "\u{1F315}",
            Self::WaningGibbous => "\u{1F316}",
            Self::LastQuarter => "\u{1F317}",
            Self::WaningCrescent => "\u{1F318}",
        }
    }

    /// Whether the phase belongs to the first half of the cycle.
    pub const fn is_waxing(self) -> bool {
        matches!(
            self,
            Self::NewMoon | Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Gender recorded on a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Gender {
    /// Male.
    #[serde(alias = "male")]
    Male,
    /// Female.
    #[serde(alias = "female")]
    Female,
}

// ---------------------------------------------------------------------------
// Advisories
// ---------------------------------------------------------------------------

/// Area of life an advisory applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum LifeArea {
    /// Physical health and body weight.
    Health,
    /// Sleep, blood pressure and general wellbeing.
    Wellbeing,
    /// Hair, skin and nail care.
    Beauty,
    /// Work and projects.
    Career,
    /// Spending and saving.
    Finance,
    /// Family and friends.
    Relationships,
    /// Planting and pruning.
    Gardening,
}

/// How favourable the current phase is for an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum AdvisoryStatus {
    /// Favourable.
    Good,
    /// Proceed with care.
    Caution,
}

/// The specific piece of advice selected by the rule set.
///
/// Callers map each kind to display text in their own locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum AdvisoryKind {
    /// Waxing moon with BMI above 25: start a detox programme.
    DetoxProgram,
    /// Waning moon with BMI below 18.5: increase nutrition.
    BoostNutrition,
    /// Waxing moon: active training and muscle gain.
    ActiveTraining,
    /// Waning moon: cleansing and recovery.
    Cleansing,
    /// Near full moon past age 40: extra rest, watch blood pressure and sleep.
    RestAndSleep,
    /// Waxing moon: masks, hair growth and nail treatments.
    BeautyTreatments,
    /// Waxing moon: start projects and negotiations.
    StartProjects,
    /// Waning moon: finish work and review results.
    FinishProjects,
    /// Waxing moon: plan large purchases.
    PlanPurchases,
    /// Waning moon: avoid impulsive spending.
    SaveMoney,
    /// Near full moon: emotions run high.
    PatienceWithLovedOnes,
    /// Outside the full-moon window: good time to socialise.
    OpenCommunication,
    /// Waxing moon: plant crops that fruit above ground.
    PlantAboveGround,
    /// Waning moon: root crops and pruning.
    RootCropsAndPruning,
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Sky condition for a forecast day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum WeatherCondition {
    /// Clear sky.
    #[serde(alias = "clear")]
    Clear,
    /// Overcast.
    #[serde(alias = "cloudy")]
    Cloudy,
    /// Rain.
    #[serde(alias = "rain")]
    Rain,
    /// Snowfall.
    #[serde(alias = "snow")]
    Snow,
    /// Snow with strong wind.
    #[serde(alias = "blizzard")]
    Blizzard,
}

// ---------------------------------------------------------------------------
// Holidays
// ---------------------------------------------------------------------------

/// Fixed-date public holidays in the production calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum HolidayKind {
    /// January 1 through 6.
    NewYearHolidays,
    /// January 7.
    OrthodoxChristmas,
    /// February 23.
    DefenderOfTheFatherlandDay,
    /// March 8.
    InternationalWomensDay,
    /// May 1.
    SpringAndLabourDay,
    /// May 9.
    VictoryDay,
    /// June 12.
    RussiaDay,
    /// November 4.
    NationalUnityDay,
}
