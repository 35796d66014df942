use chrono::NaiveDate;
use serde::Serialize;

use fristenkalender_core::fristen::{Frist, FristenType};

/// One deadline as served by the full-year query.
#[derive(Debug, Serialize)]
pub struct FristResponse {
    pub date: NaiveDate,
    pub label: String,
    pub ref_not_in_the_same_month: Option<u32>,
    pub description: String,
}

/// One deadline as served by the by-category query, carrying its type.
#[derive(Debug, Serialize)]
pub struct TypedFristResponse {
    pub date: NaiveDate,
    pub label: String,
    pub ref_not_in_the_same_month: Option<u32>,
    pub description: String,
    pub fristen_type: FristenType,
}

impl From<Frist> for FristResponse {
    fn from(frist: Frist) -> Self {
        Self {
            date: frist.date,
            label: frist.label,
            ref_not_in_the_same_month: frist.ref_not_in_the_same_month,
            description: frist.description,
        }
    }
}

impl From<Frist> for TypedFristResponse {
    fn from(frist: Frist) -> Self {
        Self {
            date: frist.date,
            label: frist.label,
            ref_not_in_the_same_month: frist.ref_not_in_the_same_month,
            description: frist.description,
            fristen_type: frist.fristen_type,
        }
    }
}
