//! Week-interval arithmetic over the proleptic Gregorian calendar.
//!
//! All layout positions derive from two quantities: a day's index within its
//! week (relative to a configurable week start) and the number of week
//! boundaries between the start of its calendar year and the day itself.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// Formats a date as its `YYYY-MM-DD` day key.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a `YYYY-MM-DD` day key.
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| Error::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Week start for a 0=Sunday..6=Saturday index.
pub fn weekday_from_index(index: u32) -> Result<Weekday> {
    Ok(match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        _ => return Err(Error::InvalidWeekStart { index }),
    })
}

/// Position of `date` within its week: 0 for the week-start day itself, 6 for
/// the day before the next week start.
pub fn day_of_week_index(date: NaiveDate, week_start: Weekday) -> u32 {
    (date.weekday().num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

/// January 1 of the given year.
pub fn year_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).expect("January 1 exists in every year")
}

/// Number of week boundaries (week-start days) after January 1 of `date`'s
/// year, up to and including `date`.
///
/// This is the day's week column within its year: days preceding the first
/// week boundary share column 0.
pub fn week_of_year(date: NaiveDate, week_start: Weekday) -> i64 {
    let start = year_start(date.year());
    let lead = i64::from(day_of_week_index(start, week_start));
    (date.signed_duration_since(start).num_days() + lead) / 7
}

/// Number of week columns the given calendar year occupies: the week
/// boundaries crossed between January 1 and the next January 1, plus one for
/// the partial leading week.
pub fn weeks_spanned(year: i32, week_start: Weekday) -> i64 {
    let start = year_start(year);
    let next = year_start(year + 1);
    let lead = i64::from(day_of_week_index(start, week_start));
    (next.signed_duration_since(start).num_days() + lead) / 7 + 1
}

/// Every day of the given calendar year, in order.
pub fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    let next = year_start(year + 1);
    year_start(year).iter_days().take_while(move |date| *date < next)
}

/// The first day of each of the twelve months of `year`.
pub fn months_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    (1..=12).map(move |month| {
        NaiveDate::from_ymd_opt(year, month, 1).expect("the first of a month exists in every year")
    })
}

/// Last day of the month that starts at `month_start`.
pub fn month_end(month_start: NaiveDate) -> NaiveDate {
    let next = if month_start.month() == 12 {
        year_start(month_start.year() + 1)
    } else {
        NaiveDate::from_ymd_opt(month_start.year(), month_start.month() + 1, 1)
            .expect("the first of a month exists in every year")
    };
    next.pred_opt().expect("a first-of-month always has a predecessor")
}
