use thiserror::Error;

use crate::calendar::CalendarError;

use super::generator::{MAX_YEAR, MIN_YEAR};

/// Errors signalled by the deadline engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FristenError {
    #[error(
        "Year {year} is not supported, supported years are {min} to {max}",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    UnsupportedYear { year: i32 },
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_year_display() {
        assert_eq!(
            FristenError::UnsupportedYear { year: 42 }.to_string(),
            "Year 42 is not supported, supported years are 2000 to 2100"
        );
    }
}
