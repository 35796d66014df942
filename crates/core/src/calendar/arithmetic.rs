//! Business-day and calendar-day arithmetic.

use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use super::error::CalendarError;
use super::holidays::is_business_day;

/// Day-counting mode for deadline arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    BusinessDay,
    CalendarDay,
}

/// Whether the end date itself is part of the counted period.
///
/// An exclusive end date extends the period by one day in the direction of
/// travel, following the counting convention of the German market processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndDateType {
    Inclusive,
    Exclusive,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0:?} is not a valid end date type, expected \"inclusive\" or \"exclusive\"")]
pub struct ParseEndDateTypeError(pub String);

impl FromStr for EndDateType {
    type Err = ParseEndDateTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inclusive" => Ok(Self::Inclusive),
            "exclusive" => Ok(Self::Exclusive),
            other => Err(ParseEndDateTypeError(other.to_owned())),
        }
    }
}

/// A request-scoped day offset: count, counting mode and end-date
/// inclusivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub number_of_days: i32,
    pub day_type: DayType,
    pub end_date_type: EndDateType,
}

/// The first business day strictly after `start`.
pub fn next_business_day(start: NaiveDate) -> Result<NaiveDate, CalendarError> {
    step_business_days(start, 1)
}

/// The last business day strictly before `start`.
pub fn previous_business_day(start: NaiveDate) -> Result<NaiveDate, CalendarError> {
    step_business_days(start, -1)
}

/// Adds `period` to `start`.
pub fn add_frist(start: NaiveDate, period: Period) -> Result<NaiveDate, CalendarError> {
    let days = i64::from(period.number_of_days);
    let days = match period.end_date_type {
        EndDateType::Inclusive => days,
        EndDateType::Exclusive if days < 0 => days - 1,
        EndDateType::Exclusive => days + 1,
    };
    match period.day_type {
        DayType::CalendarDay => start
            .checked_add_signed(Duration::days(days))
            .ok_or(CalendarError::DateOutOfRange),
        DayType::BusinessDay => step_business_days(start, days),
    }
}

fn step_business_days(start: NaiveDate, count: i64) -> Result<NaiveDate, CalendarError> {
    let mut current = start;
    let mut remaining = count.unsigned_abs();
    while remaining > 0 {
        current = if count >= 0 {
            current.succ_opt()
        } else {
            current.pred_opt()
        }
        .ok_or(CalendarError::DateOutOfRange)?;
        if is_business_day(current) {
            remaining -= 1;
        }
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn next_business_day_skips_weekend() {
        assert_eq!(
            next_business_day(date(2024, 1, 5)).unwrap(),
            date(2024, 1, 8)
        );
    }

    #[test]
    fn next_business_day_plain_weekday() {
        assert_eq!(
            next_business_day(date(2024, 1, 2)).unwrap(),
            date(2024, 1, 3)
        );
    }

    #[test]
    fn previous_business_day_skips_weekend() {
        assert_eq!(
            previous_business_day(date(2024, 1, 8)).unwrap(),
            date(2024, 1, 5)
        );
    }

    #[test]
    fn previous_business_day_plain_weekday() {
        assert_eq!(
            previous_business_day(date(2024, 1, 3)).unwrap(),
            date(2024, 1, 2)
        );
    }

    #[test]
    fn next_is_strictly_after_previous_strictly_before() {
        for offset in 0..30 {
            let start = date(2023, 12, 15) + Duration::days(offset);
            assert!(next_business_day(start).unwrap() > start);
            assert!(previous_business_day(start).unwrap() < start);
        }
    }

    #[test]
    fn add_calendar_days_exclusive() {
        let period = Period {
            number_of_days: 10,
            day_type: DayType::CalendarDay,
            end_date_type: EndDateType::Exclusive,
        };
        assert_eq!(add_frist(date(2024, 1, 2), period).unwrap(), date(2024, 1, 13));
    }

    #[test]
    fn add_calendar_days_inclusive() {
        let period = Period {
            number_of_days: 10,
            day_type: DayType::CalendarDay,
            end_date_type: EndDateType::Inclusive,
        };
        assert_eq!(add_frist(date(2024, 1, 2), period).unwrap(), date(2024, 1, 12));
    }

    #[test]
    fn add_business_days_exclusive() {
        let period = Period {
            number_of_days: 5,
            day_type: DayType::BusinessDay,
            end_date_type: EndDateType::Exclusive,
        };
        assert_eq!(add_frist(date(2024, 1, 2), period).unwrap(), date(2024, 1, 10));
    }

    #[test]
    fn add_business_days_inclusive() {
        let period = Period {
            number_of_days: 5,
            day_type: DayType::BusinessDay,
            end_date_type: EndDateType::Inclusive,
        };
        assert_eq!(add_frist(date(2024, 1, 2), period).unwrap(), date(2024, 1, 9));
    }

    #[test]
    fn add_negative_calendar_days() {
        let period = Period {
            number_of_days: -10,
            day_type: DayType::CalendarDay,
            end_date_type: EndDateType::Exclusive,
        };
        assert_eq!(add_frist(date(2024, 1, 13), period).unwrap(), date(2024, 1, 2));
    }

    #[test]
    fn add_negative_business_days() {
        let period = Period {
            number_of_days: -3,
            day_type: DayType::BusinessDay,
            end_date_type: EndDateType::Inclusive,
        };
        // back over the weekend: Jan 8 (Mon) -> Jan 5, 4, 3
        assert_eq!(add_frist(date(2024, 1, 8), period).unwrap(), date(2024, 1, 3));
    }

    #[test]
    fn end_date_type_tokens() {
        assert_eq!("inclusive".parse(), Ok(EndDateType::Inclusive));
        assert_eq!("exclusive".parse(), Ok(EndDateType::Exclusive));
        assert!("Inclusive".parse::<EndDateType>().is_err());
        assert!("both".parse::<EndDateType>().is_err());
    }

    #[test]
    fn serialized_tokens_match_the_api_shape() {
        assert_eq!(
            serde_json::to_value(DayType::BusinessDay).unwrap(),
            "business_day"
        );
        assert_eq!(
            serde_json::to_value(EndDateType::Exclusive).unwrap(),
            "exclusive"
        );
    }
}
