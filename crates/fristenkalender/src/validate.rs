//! Parameter validation.
//!
//! Every endpoint funnels its raw path and query strings through these
//! checks, so the same bad input produces the same error no matter which
//! handler it hits. Pure parse/check functions, no side effects.

use std::str::FromStr;

use chrono::NaiveDate;

use fristenkalender_core::calendar::EndDateType;
use fristenkalender_core::fristen::FristenType;

use crate::handlers::ApiError;

/// A year: numeric characters only, not zero.
pub fn year(raw: &str) -> Result<i32, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::MissingParameter("Year"));
    }
    if !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ApiError::InvalidFormat {
            name: "Year",
            value: raw.to_owned(),
            reason: "must be numeric",
        });
    }
    match raw.parse::<i32>() {
        Ok(0) => Err(ApiError::InvalidFormat {
            name: "Year",
            value: raw.to_owned(),
            reason: "must not be zero",
        }),
        Ok(year) => Ok(year),
        Err(_) => Err(ApiError::InvalidFormat {
            name: "Year",
            value: raw.to_owned(),
            reason: "is out of range",
        }),
    }
}

/// A deadline category, upper-cased and matched against the closed set.
pub fn fristen_type(raw: &str) -> Result<FristenType, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::MissingParameter("Fristen type"));
    }
    FristenType::from_str(raw).map_err(|_| ApiError::UnknownEnumValue {
        name: "fristen type",
        value: raw.to_owned(),
    })
}

/// An ISO calendar date.
pub fn date(name: &'static str, raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::from_str(raw).map_err(|_| ApiError::InvalidFormat {
        name,
        value: raw.to_owned(),
        reason: "must be an ISO date (YYYY-MM-DD)",
    })
}

/// A signed day count.
pub fn day_count(raw: &str) -> Result<i32, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::MissingParameter("Number of days"));
    }
    raw.parse().map_err(|_| ApiError::InvalidFormat {
        name: "Number of days",
        value: raw.to_owned(),
        reason: "must be a signed integer",
    })
}

/// A required, non-empty identifier like the filename or the attendee.
pub fn non_empty<'a>(name: &'static str, raw: &'a str) -> Result<&'a str, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::MissingParameter(name));
    }
    Ok(raw)
}

/// The end-date inclusivity token; exclusive when omitted.
pub fn end_date_type(raw: Option<&str>) -> Result<EndDateType, ApiError> {
    match raw {
        None => Ok(EndDateType::Exclusive),
        Some(raw) => EndDateType::from_str(raw).map_err(|_| ApiError::UnknownEnumValue {
            name: "end date type",
            value: raw.to_owned(),
        }),
    }
}
