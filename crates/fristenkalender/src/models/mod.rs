mod business_day;
mod fristen;

pub use business_day::{
    AddDaysResponse, IsBusinessDayResponse, NextBusinessDayResponse, PreviousBusinessDayResponse,
};
pub use fristen::{FristResponse, TypedFristResponse};
