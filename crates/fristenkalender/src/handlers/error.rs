use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use fristenkalender_core::calendar::CalendarError;
use fristenkalender_core::export::ExportError;
use fristenkalender_core::fristen::FristenError;

/// What went wrong with a request.
///
/// Everything the client can cause maps to a 400, everything else to a 500.
/// Converting into a response emits the single diagnostic log line for the
/// request, so handlers just bubble errors up with `?`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required parameter was absent or empty.
    #[error("{0} should not be empty")]
    MissingParameter(&'static str),
    /// A parameter was present but not parseable into its domain type.
    #[error("{name} {value:?} is not valid: {reason}")]
    InvalidFormat {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
    /// A token outside a closed enumeration.
    #[error("{value:?} is not a valid {name}")]
    UnknownEnumValue {
        name: &'static str,
        value: String,
    },
    /// The rules engine rejected input only it can check.
    #[error("{0}")]
    CollaboratorRejected(String),
    /// Anything unanticipated. Still rendered as a response, never swallowed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            tracing::warn!(error = %self, "Request parameter is invalid");
        } else {
            tracing::error!(error = %self, "Request failed");
        }
        let body = Json(json!({ "error": self.to_string(), "code": status.as_u16() }));
        (status, body).into_response()
    }
}

impl From<FristenError> for ApiError {
    fn from(error: FristenError) -> Self {
        Self::CollaboratorRejected(error.to_string())
    }
}

impl From<CalendarError> for ApiError {
    fn from(error: CalendarError) -> Self {
        Self::CollaboratorRejected(error.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(error: ExportError) -> Self {
        match error {
            ExportError::Fristen(error) => error.into(),
            ExportError::Io(error) => Self::Internal(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_400() {
        assert_eq!(
            ApiError::MissingParameter("Year").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidFormat {
                name: "Year",
                value: "hhhh".to_owned(),
                reason: "must be numeric",
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UnknownEnumValue {
                name: "fristen type",
                value: "mmm".to_owned(),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_engine_rejections_map_to_400() {
        let error = ApiError::from(FristenError::UnsupportedYear { year: 1999 });
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.to_string().contains("1999"));
    }

    #[test]
    fn test_io_failures_map_to_500() {
        let io = std::io::Error::other("disk on fire");
        let error = ApiError::from(ExportError::Io(io));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_messages_carry_the_offending_value() {
        let error = ApiError::UnknownEnumValue {
            name: "fristen type",
            value: "hhhhhh".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "\"hhhhhh\" is not a valid fristen type"
        );
        assert_eq!(
            ApiError::MissingParameter("Attendee").to_string(),
            "Attendee should not be empty"
        );
    }
}
