//! Fixed-date public holidays of the production calendar.

use chrono::{Datelike, NaiveDate};
use lunar_types::{Holiday, HolidayKind};

/// `(kind, (start month, start day), (end month, end day))`, in calendar order.
const HOLIDAY_TABLE: [(HolidayKind, (u32, u32), (u32, u32)); 8] = [
    (HolidayKind::NewYearHolidays, (1, 1), (1, 6)),
    (HolidayKind::OrthodoxChristmas, (1, 7), (1, 7)),
    (HolidayKind::DefenderOfTheFatherlandDay, (2, 23), (2, 23)),
    (HolidayKind::InternationalWomensDay, (3, 8), (3, 8)),
    (HolidayKind::SpringAndLabourDay, (5, 1), (5, 1)),
    (HolidayKind::VictoryDay, (5, 9), (5, 9)),
    (HolidayKind::RussiaDay, (6, 12), (6, 12)),
    (HolidayKind::NationalUnityDay, (11, 4), (11, 4)),
];

/// All holidays in `year`, in calendar order.
///
/// Empty when the year is outside chrono's supported range.
pub fn holidays_in(year: i32) -> Vec<Holiday> {
    HOLIDAY_TABLE
        .iter()
        .filter_map(|&(kind, (start_month, start_day), (end_month, end_day))| {
            Some(Holiday {
                kind,
                start: NaiveDate::from_ymd_opt(year, start_month, start_day)?,
                end: NaiveDate::from_ymd_opt(year, end_month, end_day)?,
            })
        })
        .collect()
}

/// The holiday covering `date`, if any.
pub fn holiday_on(date: NaiveDate) -> Option<Holiday> {
    holidays_in(date.year())
        .into_iter()
        .find(|holiday| holiday.contains(date))
}
