use thiserror::Error;

/// Errors that can occur in business-day arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    #[error("The computed date is outside the supported date range")]
    DateOutOfRange,
}
