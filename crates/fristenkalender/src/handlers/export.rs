//! The calendar export pipeline.
//!
//! Generation happens against a uniquely named scratch file that lives
//! exactly as long as the request: the [`NamedTempFile`] guard removes it on
//! every exit path, including failures after creation.

use axum::{
    extract::Path,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tempfile::NamedTempFile;

use fristenkalender_core::export::write_calendar_file;
use fristenkalender_core::fristen::FristenType;

use crate::validate;

use super::ApiError;

/// Export all deadlines of a year as an ics file
/// (GET /calendar/export/{filename}/{attendee}/{year}).
pub async fn export_whole_calendar(
    Path((filename, attendee, year)): Path<(String, String, String)>,
) -> Result<Response, ApiError> {
    export(&filename, &attendee, &year, None).await
}

/// Export the deadlines of one category as an ics file
/// (GET /calendar/export/{filename}/{attendee}/{year}/{category}).
pub async fn export_fristen_for_type(
    Path((filename, attendee, year, fristen_type)): Path<(String, String, String, String)>,
) -> Result<Response, ApiError> {
    export(&filename, &attendee, &year, Some(&fristen_type)).await
}

async fn export(
    filename: &str,
    attendee: &str,
    year: &str,
    fristen_type: Option<&str>,
) -> Result<Response, ApiError> {
    let filename = validate::non_empty("Filename", filename)?;
    let attendee = validate::non_empty("Attendee", attendee)?;
    let year = validate::year(year)?;
    let fristen_type = fristen_type.map(validate::fristen_type).transpose()?;

    tracing::info!(
        filename,
        attendee,
        year,
        ?fristen_type,
        "Generating an ics calendar"
    );

    let body = render_calendar(attendee, year, fristen_type).await?;
    let headers = [
        (CONTENT_TYPE, "text/calendar".to_owned()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}.ics\""),
        ),
    ];
    Ok((headers, body).into_response())
}

/// Generate the calendar into a scratch file and read it back.
async fn render_calendar(
    attendee: &str,
    year: i32,
    fristen_type: Option<FristenType>,
) -> Result<Vec<u8>, ApiError> {
    let scratch = scratch_file()?;
    write_calendar_file(scratch.path(), attendee, year, fristen_type)?;
    let body = tokio::fs::read(scratch.path())
        .await
        .map_err(|error| ApiError::Internal(error.to_string()))?;
    Ok(body)
}

fn scratch_file() -> Result<NamedTempFile, ApiError> {
    tempfile::Builder::new()
        .prefix("fristenkalender-")
        .suffix(".ics")
        .tempfile()
        .map_err(|error| ApiError::Internal(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scratch_file_is_removed_after_success() {
        let path = {
            let scratch = scratch_file().unwrap();
            write_calendar_file(scratch.path(), "bar", 2023, None).unwrap();
            assert!(scratch.path().exists());
            scratch.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn scratch_file_is_removed_after_failure() {
        let path = {
            let scratch = scratch_file().unwrap();
            assert!(write_calendar_file(scratch.path(), "bar", 1999, None).is_err());
            scratch.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn render_produces_a_calendar_body() {
        let body = render_calendar("bar", 2023, Some(FristenType::Gpke))
            .await
            .unwrap();
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("BEGIN:VCALENDAR"));
        assert!(text.contains("3LWT"));
    }

    #[tokio::test]
    async fn render_rejects_unsupported_years() {
        let error = render_calendar("bar", 1999, None).await.unwrap_err();
        assert!(matches!(error, ApiError::CollaboratorRejected(_)));
    }
}
