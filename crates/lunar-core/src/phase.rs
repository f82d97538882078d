//! Moon phase calculator.
//!
//! Maps a calendar date to a [`MoonPhase`] with the classic Julian-Day
//! synodic approximation:
//!
//! 1. Shift January and February into the preceding year (months 13, 14).
//! 2. `JD = floor(365.25 * (y + 4716)) + floor(30.6001 * (m + 1)) + d - 1524.5`
//! 3. `cycle = frac((JD - 2451550.1) / 29.530588853)`
//! 4. `position = cycle * 8`, illumination is triangular in `cycle`.
//!
//! The polynomial carries no Gregorian century correction term. It is kept
//! exactly as is so phases match the values the calendar has always shown.
//!
//! Every function here is pure and total: no I/O, no shared state, and no
//! error path. Time of day is ignored; only the civil date matters.

use chrono::{Datelike, FixedOffset, NaiveDate};
use lunar_types::{MoonPhase, unit_fraction};
use tracing::trace;

use crate::calendar::local_today;

/// Julian Day of the reference new moon.
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_550.1;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Julian Day Number at 00:00 for a year, month (1-12) and day (1-31).
///
/// The year shift for January and February is done in floating point, so
/// `i32::MIN` cannot overflow.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (adjusted_year, adjusted_month) = if month < 3 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    (365.25 * (adjusted_year + 4716.0)).floor() + (30.6001 * (adjusted_month + 1.0)).floor()
        + f64::from(day)
        - 1524.5
}

/// Synodic months elapsed since the reference new moon. Negative before it.
pub fn synodic_months_since_reference(julian_day: f64) -> f64 {
    (julian_day - REFERENCE_NEW_MOON_JD) / SYNODIC_MONTH_DAYS
}

/// Position within the current lunar cycle, in `[0, 1)`.
pub fn cycle_fraction(julian_day: f64) -> f64 {
    unit_fraction(synodic_months_since_reference(julian_day))
}

/// Moon phase for raw date components.
///
/// Components are not validated; any input yields a phase. Use
/// [`compute`] when a checked [`NaiveDate`] is at hand.
pub fn compute_ymd(year: i32, month: u32, day: u32) -> MoonPhase {
    MoonPhase::from_cycle_fraction(cycle_fraction(julian_day(year, month, day)))
}

/// Moon phase for a calendar date.
pub fn compute(date: NaiveDate) -> MoonPhase {
    let phase = compute_ymd(date.year(), date.month(), date.day());
    trace!(
        %date,
        synodic_position = phase.synodic_position(),
        illumination = phase.illumination_percent(),
        phase = phase.name(),
        "Moon phase computed"
    );
    phase
}

/// Moon phase for the current civil date at the given UTC offset.
pub fn today(offset: FixedOffset) -> MoonPhase {
    compute(local_today(offset))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    use chrono::Days;
    use lunar_types::PhaseName;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Distance between two cycle fractions on the unit circle.
    fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(1.0 - d)
    }

    #[test]
    fn julian_day_polynomial_values() {
        assert_eq!(julian_day(2000, 1, 6), 2_451_562.5);
        assert_eq!(julian_day(2025, 12, 1), 2_461_023.5);
        assert_eq!(julian_day(-4712, 1, 1), -0.5);
    }

    #[test]
    fn january_and_february_shift_into_previous_year() {
        // Consecutive days across the year boundary are one day apart.
        assert_eq!(julian_day(2025, 1, 1) - julian_day(2024, 12, 31), 1.0);
        assert_eq!(julian_day(2024, 3, 1) - julian_day(2024, 2, 29), 1.0);
    }

    #[test]
    fn model_new_moon_has_no_light() {
        let phase = compute(date(2024, 9, 20));
        assert_eq!(phase.phase(), PhaseName::NewMoon);
        assert_eq!(phase.name(), "New Moon");
        assert!(phase.illumination_percent() < 0.5);
        assert!(phase.cycle_fraction() < 0.01);
    }

    #[test]
    fn known_december_2025_values() {
        let first = compute(date(2025, 12, 1));
        assert!((first.synodic_position() - 6.396_504).abs() < 1e-5);
        assert_eq!(first.phase(), PhaseName::LastQuarter);
        assert!((first.illumination_percent() - 40.087_394).abs() < 1e-5);

        let mid = compute(date(2025, 12, 15));
        assert!((mid.synodic_position() - 2.189_182).abs() < 1e-5);
        assert_eq!(mid.phase(), PhaseName::FirstQuarter);
        assert!(mid.is_waxing());
    }

    #[test]
    fn adjacent_dates_flip_exactly_at_bucket_boundary() {
        let before = compute(date(2024, 2, 29));
        let after = compute(date(2024, 3, 1));
        assert!(before.synodic_position() < 1.0);
        assert!(after.synodic_position() >= 1.0);
        assert_eq!(before.phase(), PhaseName::NewMoon);
        assert_eq!(after.phase(), PhaseName::WaxingCrescent);
    }

    #[test]
    fn pre_epoch_dates_normalize_into_unit_interval() {
        let ancient = date(1, 1, 1);
        let raw = synodic_months_since_reference(julian_day(1, 1, 1));
        assert!(raw < 0.0);

        let phase = compute(ancient);
        assert!((0.0..1.0).contains(&phase.cycle_fraction()));
        assert!((phase.cycle_fraction() - 0.582_765).abs() < 1e-5);
        assert_eq!(phase.phase(), PhaseName::FullMoon);
    }

    #[test]
    fn far_future_date_is_in_range() {
        let phase = compute(date(9999, 12, 31));
        assert!((0.0..8.0).contains(&phase.synodic_position()));
        assert!((0.0..=100.0).contains(&phase.illumination_percent()));
    }

    #[test]
    fn extreme_components_do_not_fail() {
        let low = compute_ymd(i32::MIN, 1, 1);
        let high = compute_ymd(i32::MAX, 12, 31);
        assert!((0.0..8.0).contains(&low.synodic_position()));
        assert!((0.0..8.0).contains(&high.synodic_position()));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = compute(date(2031, 7, 19));
        let b = compute(date(2031, 7, 19));
        assert_eq!(a, b);
        assert_eq!(
            a.synodic_position().to_bits(),
            b.synodic_position().to_bits()
        );
    }

    #[test]
    fn two_synodic_months_later_returns_to_same_position() {
        // 59 days is within 0.07 days of two synodic months.
        let start = date(2024, 4, 10);
        let later = start.checked_add_days(Days::new(59)).unwrap();
        let a = compute(start);
        let b = compute(later);
        assert!(circular_distance(a.cycle_fraction(), b.cycle_fraction()) < 0.003);
        assert!((a.illumination_percent() - b.illumination_percent()).abs() < 0.6);
    }

    #[test]
    fn today_uses_local_civil_date() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let before = local_today(offset);
        let phase = today(offset);
        let after = local_today(offset);
        assert!(phase == compute(before) || phase == compute(after));
    }

    proptest! {
        #[test]
        fn every_date_stays_in_range(days in -700_000_i64..3_000_000_i64) {
            let base = date(1, 1, 1);
            let day = if days >= 0 {
                base.checked_add_days(Days::new(days.unsigned_abs()))
            } else {
                base.checked_sub_days(Days::new(days.unsigned_abs()))
            };
            if let Some(day) = day {
                let phase = compute(day);
                prop_assert!((0.0..8.0).contains(&phase.synodic_position()));
                prop_assert!((0.0..=100.0).contains(&phase.illumination_percent()));
                prop_assert!((0.0..1.0).contains(&phase.cycle_fraction()));
            }
        }

        #[test]
        fn name_is_a_step_function_of_floor_position(days in 0_u64..100_000) {
            let day = date(1900, 1, 1).checked_add_days(Days::new(days)).unwrap();
            let phase = compute(day);
            let expected = PhaseName::from_position(phase.synodic_position().floor());
            prop_assert_eq!(phase.phase(), expected);
            prop_assert_eq!(phase.glyph(), expected.glyph());
            prop_assert_eq!(phase.is_waxing(), phase.phase().is_waxing());
        }

        #[test]
        fn one_synodic_month_is_nearly_periodic(days in 0_u64..36_000) {
            // 2000-03-01 onward avoids the one-day jump the polynomial
            // makes at non-leap century years until 2100.
            let start = date(2000, 3, 1).checked_add_days(Days::new(days)).unwrap();
            let later = start.checked_add_days(Days::new(30)).unwrap();
            let a = compute(start);
            let b = compute(later);
            // 30 days overshoots one synodic month by 0.47 days.
            prop_assert!(circular_distance(a.cycle_fraction(), b.cycle_fraction()) < 0.02);
            prop_assert!((a.illumination_percent() - b.illumination_percent()).abs() < 4.0);
        }

        #[test]
        fn illumination_is_triangular_in_cycle_fraction(days in 0_u64..50_000) {
            let day = date(1950, 1, 1).checked_add_days(Days::new(days)).unwrap();
            let phase = compute(day);
            let f = phase.cycle_fraction();
            let expected = if f < 0.5 { f * 200.0 } else { (1.0 - f) * 200.0 };
            prop_assert!((phase.illumination_percent() - expected).abs() < 1e-9);
        }
    }
}
