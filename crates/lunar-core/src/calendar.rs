//! Month grid and day-detail assembly.
//!
//! The grid is Monday-first: the month is preceded by one empty slot for
//! every weekday before the 1st, and each populated cell carries the moon
//! phase for its date. Day details combine the phase with the modelled
//! pressure and the holiday table.

use chrono::{Datelike, FixedOffset, NaiveDate, Utc, Weekday};
use lunar_types::{CalendarCell, DayDetails, MonthGrid};
use tracing::debug;

use crate::{holidays, phase, weather};

/// Errors that can occur when building a month grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month outside 1 through 12.
    #[error("invalid month {0}: expected 1-12")]
    InvalidMonth(u32),

    /// The month cannot be represented as a calendar date.
    #[error("month {year}-{month:02} is outside the supported date range")]
    OutOfRange {
        /// Requested year.
        year: i32,
        /// Requested month.
        month: u32,
    },
}

/// Current civil date at a fixed UTC offset.
pub fn local_today(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

/// Build the Monday-first grid for `year`-`month`.
///
/// `today` marks the matching cell; pass any date outside the month to mark
/// none.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for a month outside 1-12 and
/// [`CalendarError::OutOfRange`] when chrono cannot represent the month.
pub fn month_grid(year: i32, month: u32, today: NaiveDate) -> Result<MonthGrid, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::OutOfRange { year, month })?;

    let leading_blanks = first.weekday().num_days_from_monday();
    let mut cells: Vec<Option<CalendarCell>> = (0..leading_blanks).map(|_| None).collect();

    for date in first.iter_days().take_while(|d| d.month() == month) {
        cells.push(Some(CalendarCell {
            day: date.day(),
            date,
            weekend: is_weekend(date),
            today: date == today,
            phase: phase::compute(date),
        }));
    }

    debug!(year, month, slots = cells.len(), "Month grid built");

    Ok(MonthGrid {
        year,
        month,
        leading_blanks,
        cells,
    })
}

/// Phase, pressure, waxing flag and holiday for one date.
pub fn day_details(date: NaiveDate) -> DayDetails {
    let moon = phase::compute(date);
    DayDetails {
        date,
        weekday: date.weekday(),
        phase: moon,
        pressure_mm_hg: weather::pressure_for_date(date),
        waxing: moon.is_waxing(),
        holiday: holidays::holiday_on(date).map(|h| h.kind),
    }
}

/// Saturday and Sunday, the last two grid columns.
fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    use lunar_types::{HolidayKind, PhaseName};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn december_2025_starts_on_monday() {
        let grid = month_grid(2025, 12, date(2025, 12, 9)).unwrap();
        assert_eq!(grid.leading_blanks, 0);
        assert_eq!(grid.cells.len(), 31);
        let first = grid.cells[0].unwrap();
        assert_eq!(first.day, 1);
        assert!(!first.weekend);
    }

    #[test]
    fn leading_blanks_match_weekday_of_first() {
        // 2026-02-01 is a Sunday.
        let grid = month_grid(2026, 2, date(2000, 1, 1)).unwrap();
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.cells.len(), 6 + 28);
        assert!(grid.cells[..6].iter().all(Option::is_none));
        let first = grid.cells[6].unwrap();
        assert_eq!(first.day, 1);
        assert!(first.weekend);
    }

    #[test]
    fn weekend_flags_follow_grid_columns() {
        let grid = month_grid(2025, 3, date(2025, 3, 1)).unwrap();
        for (index, cell) in grid.cells.iter().enumerate() {
            if let Some(cell) = cell {
                assert_eq!(cell.weekend, index % 7 >= 5, "day {}", cell.day);
            }
        }
    }

    #[test]
    fn leap_february_has_29_days() {
        let grid = month_grid(2024, 2, date(2024, 2, 29)).unwrap();
        let populated: Vec<_> = grid.cells.iter().flatten().collect();
        assert_eq!(populated.len(), 29);
        assert!(populated.last().unwrap().today);
        assert_eq!(populated.iter().filter(|c| c.today).count(), 1);
    }

    #[test]
    fn cells_carry_the_phase_for_their_date() {
        let grid = month_grid(2024, 9, date(2024, 9, 1)).unwrap();
        let twentieth = grid
            .cells
            .iter()
            .flatten()
            .find(|c| c.day == 20)
            .unwrap();
        assert_eq!(twentieth.phase.phase(), PhaseName::NewMoon);
        assert_eq!(twentieth.phase, phase::compute(date(2024, 9, 20)));
    }

    #[test]
    fn invalid_month_is_rejected() {
        let today = date(2025, 1, 1);
        assert_eq!(month_grid(2025, 0, today), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(month_grid(2025, 13, today), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn unrepresentable_year_is_out_of_range() {
        let result = month_grid(i32::MAX, 1, date(2025, 1, 1));
        assert_eq!(
            result,
            Err(CalendarError::OutOfRange {
                year: i32::MAX,
                month: 1
            })
        );
    }

    #[test]
    fn day_details_combine_phase_pressure_and_holiday() {
        let details = day_details(date(2025, 5, 9));
        assert_eq!(details.weekday, Weekday::Fri);
        assert_eq!(details.holiday, Some(HolidayKind::VictoryDay));
        assert_eq!(details.pressure_mm_hg, weather::pressure_for_date(details.date));
        assert_eq!(details.waxing, details.phase.is_waxing());
    }

    #[test]
    fn ordinary_day_has_no_holiday() {
        assert_eq!(day_details(date(2025, 5, 10)).holiday, None);
    }
}
