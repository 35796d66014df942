use axum::{extract::Path, Json};

use fristenkalender_core::fristen::{generate_all_fristen, generate_fristen_for_type};

use crate::models::{FristResponse, TypedFristResponse};
use crate::validate;

use super::ApiError;

/// List all deadlines of a year (GET /deadlines/{year}).
pub async fn all_fristen(Path(year): Path<String>) -> Result<Json<Vec<FristResponse>>, ApiError> {
    let year = validate::year(&year)?;

    tracing::info!(year, "Generating all fristen");

    let fristen = generate_all_fristen(year)?;
    Ok(Json(fristen.into_iter().map(FristResponse::from).collect()))
}

/// List the deadlines of one category (GET /deadlines/{year}/{category}).
pub async fn fristen_for_type(
    Path((year, fristen_type)): Path<(String, String)>,
) -> Result<Json<Vec<TypedFristResponse>>, ApiError> {
    let year = validate::year(&year)?;
    let fristen_type = validate::fristen_type(&fristen_type)?;

    tracing::info!(year, %fristen_type, "Generating fristen for type");

    let fristen = generate_fristen_for_type(year, fristen_type)?;
    Ok(Json(
        fristen.into_iter().map(TypedFristResponse::from).collect(),
    ))
}
