use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use fristenkalender_core::calendar::{self, DayType, Period};

use crate::models::{
    AddDaysResponse, IsBusinessDayResponse, NextBusinessDayResponse, PreviousBusinessDayResponse,
};
use crate::validate;

use super::ApiError;

/// Query string of the add-days endpoints.
#[derive(Debug, Deserialize)]
pub struct AddDaysQuery {
    end: Option<String>,
}

/// Check a date against the BDEW calendar (GET /businessday/is/{date}).
pub async fn check_business_day(
    Path(date): Path<String>,
) -> Result<Json<IsBusinessDayResponse>, ApiError> {
    let date = validate::date("Date", &date)?;
    Ok(Json(IsBusinessDayResponse {
        date,
        is_business_day: calendar::is_business_day(date),
    }))
}

/// The business day after a date (GET /businessday/next/{date}).
pub async fn next_business_day(
    Path(start_date): Path<String>,
) -> Result<Json<NextBusinessDayResponse>, ApiError> {
    let start_date = validate::date("Start date", &start_date)?;
    Ok(Json(NextBusinessDayResponse {
        start_date,
        next_business_day: calendar::next_business_day(start_date)?,
    }))
}

/// The business day before a date (GET /businessday/previous/{date}).
pub async fn previous_business_day(
    Path(start_date): Path<String>,
) -> Result<Json<PreviousBusinessDayResponse>, ApiError> {
    let start_date = validate::date("Start date", &start_date)?;
    Ok(Json(PreviousBusinessDayResponse {
        start_date,
        previous_business_day: calendar::previous_business_day(start_date)?,
    }))
}

/// Add business days (GET /businessday/add/business/{date}/{count}).
pub async fn add_business_days(
    Path((start_date, number_of_days)): Path<(String, String)>,
    Query(query): Query<AddDaysQuery>,
) -> Result<Json<AddDaysResponse>, ApiError> {
    add_days(DayType::BusinessDay, &start_date, &number_of_days, &query).map(Json)
}

/// Add calendar days (GET /businessday/add/calendar/{date}/{count}).
pub async fn add_calendar_days(
    Path((start_date, number_of_days)): Path<(String, String)>,
    Query(query): Query<AddDaysQuery>,
) -> Result<Json<AddDaysResponse>, ApiError> {
    add_days(DayType::CalendarDay, &start_date, &number_of_days, &query).map(Json)
}

/// The add handlers only assemble the period and echo the engine output;
/// the arithmetic lives in the calendar engine.
fn add_days(
    day_type: DayType,
    raw_start_date: &str,
    raw_number_of_days: &str,
    query: &AddDaysQuery,
) -> Result<AddDaysResponse, ApiError> {
    let start_date = validate::date("Start date", raw_start_date)?;
    let number_of_days = validate::day_count(raw_number_of_days)?;
    let end_date_type = validate::end_date_type(query.end.as_deref())?;

    let period = Period {
        number_of_days,
        day_type,
        end_date_type,
    };
    let result_date = calendar::add_frist(start_date, period)?;

    Ok(AddDaysResponse {
        start_date,
        number_of_days,
        day_type,
        end_date_type,
        result_date,
    })
}
