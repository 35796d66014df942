mod arithmetic;
mod error;
mod holidays;

pub use arithmetic::{
    add_frist, next_business_day, previous_business_day, DayType, EndDateType,
    ParseEndDateTypeError, Period,
};
pub use error::CalendarError;
pub use holidays::is_business_day;
