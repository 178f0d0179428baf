//! Query parse handler

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use domain::ExtractionResult;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Parse request body
///
/// A missing `query` field is treated as an empty query, not an error.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Free-text query to interpret
    #[serde(default)]
    pub query: String,
}

/// Parse response body
///
/// `dateFrom` and `dateTo` are always equal or both null; the
/// interpreter resolves a single date, never a genuine range.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    /// Extracted location, if any
    pub location: Option<String>,
    /// Start of the resolved date range, formatted YYYY-MM-DD
    #[serde(rename = "dateFrom")]
    pub date_from: Option<String>,
    /// End of the resolved date range, formatted YYYY-MM-DD
    #[serde(rename = "dateTo")]
    pub date_to: Option<String>,
}

impl From<ExtractionResult> for ParseResponse {
    fn from(result: ExtractionResult) -> Self {
        let date_from = result
            .dates
            .map(|range| range.from().format("%Y-%m-%d").to_string());
        let date_to = result
            .dates
            .map(|range| range.to().format("%Y-%m-%d").to_string());
        Self {
            location: result.location,
            date_from,
            date_to,
        }
    }
}

/// Interpret a free-text query
///
/// POST /parse
///
/// Always responds 200 for well-formed JSON; "nothing found" is a null
/// field, never an error status.
#[instrument(skip(state, payload))]
pub async fn parse_query(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let result = state.interpreter.interpret(&request.query).await;
    Ok(Json(ParseResponse::from(result)))
}
