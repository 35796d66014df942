use chrono::NaiveDate;
use serde::Serialize;

use fristenkalender_core::calendar::{DayType, EndDateType};

/// Response model for the is-business-day endpoint.
#[derive(Debug, Serialize)]
pub struct IsBusinessDayResponse {
    pub date: NaiveDate,
    pub is_business_day: bool,
}

/// Response model for the next-business-day endpoint.
#[derive(Debug, Serialize)]
pub struct NextBusinessDayResponse {
    pub start_date: NaiveDate,
    pub next_business_day: NaiveDate,
}

/// Response model for the previous-business-day endpoint.
#[derive(Debug, Serialize)]
pub struct PreviousBusinessDayResponse {
    pub start_date: NaiveDate,
    pub previous_business_day: NaiveDate,
}

/// Response model for both add-days endpoints.
///
/// Echoes every input next to the engine result.
#[derive(Debug, Serialize)]
pub struct AddDaysResponse {
    pub start_date: NaiveDate,
    pub number_of_days: i32,
    pub day_type: DayType,
    pub end_date_type: EndDateType,
    pub result_date: NaiveDate,
}
