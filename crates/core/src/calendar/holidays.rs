//! The BDEW business-day calendar.
//!
//! A BDEW business day is any weekday that is neither a nationwide German
//! holiday nor Dec 24 / Dec 31, which the BDEW calendar treats as
//! non-working days.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns whether `date` is a BDEW business day.
pub fn is_business_day(date: NaiveDate) -> bool {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    !is_bdew_holiday(date)
}

fn is_bdew_holiday(date: NaiveDate) -> bool {
    let (m, d) = (date.month(), date.day());
    if matches!(
        (m, d),
        // New Year's Day, Labour Day, German Unity Day
        (1, 1) | (5, 1) | (10, 3)
        // Christmas Eve through Boxing Day and New Year's Eve
        | (12, 24) | (12, 25) | (12, 26) | (12, 31)
    ) {
        return true;
    }
    let offset = date
        .signed_duration_since(easter_sunday(date.year()))
        .num_days();
    // Good Friday, Easter Monday, Ascension Thursday, Whit Monday
    matches!(offset, -2 | 1 | 39 | 50)
}

/// Easter Sunday in the Gregorian calendar (anonymous computus).
fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("the computus yields a valid March or April date")
}
