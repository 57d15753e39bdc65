//! API routes for sift

use crate::error::ApiError;
use crate::server::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sift_core::{AnalyzedString, Error, FilterParams, FilterSet};
use sift_store::{Listing, NaturalLanguageListing};
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

// ============================================================================
// String Routes
// ============================================================================

pub fn string_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/strings", get(list_strings).post(create_string))
        .route(
            "/strings/filter-by-natural-language",
            get(filter_by_natural_language),
        )
        // the catch-all keeps embedded slashes in the value
        .route("/strings/*value", get(get_string).delete(delete_string))
}

/// Fallback for paths no route matches, such as `/strings/`.
pub async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "String does not exist in the system")
}

/// The body must be a JSON object whose `value` is a string. Anything that
/// fails to parse, or lacks `value`, is a 400; a `value` of another JSON type
/// is a 422.
fn extract_value(body: Value) -> Result<String, Error> {
    let Value::Object(mut fields) = body else {
        return Err(Error::InvalidInput("Missing \"value\" field".to_string()));
    };
    match fields.remove("value") {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(Error::InvalidType(
            "Invalid data type for \"value\" (must be string)".to_string(),
        )),
        None => Err(Error::InvalidInput("Missing \"value\" field".to_string())),
    }
}

async fn create_string(
    State(state): State<AppStateArc>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AnalyzedString>), ApiError> {
    let Json(body) = body.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => ApiError::from(rejection),
        _ => ApiError::from(Error::InvalidInput("Missing \"value\" field".to_string())),
    })?;
    let value = extract_value(body)?;

    let record = state.service.create(&value).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_string(
    State(state): State<AppStateArc>,
    Path(value): Path<String>,
) -> Result<Json<AnalyzedString>, ApiError> {
    let record = state.service.retrieve(&value).await?;
    Ok(Json(record))
}

async fn delete_string(
    State(state): State<AppStateArc>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(&value).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_strings(
    State(state): State<AppStateArc>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Listing>, ApiError> {
    let Query(pairs) = pairs?;
    let filters = FilterSet::try_from(pairs.into_iter().collect::<FilterParams>())?;

    let listing = state.service.list(filters).await?;
    info!("Listed {} strings", listing.count);
    Ok(Json(listing))
}

#[derive(Debug, Deserialize)]
struct NaturalLanguageParams {
    query: Option<String>,
}

async fn filter_by_natural_language(
    State(state): State<AppStateArc>,
    params: Result<Query<NaturalLanguageParams>, QueryRejection>,
) -> Result<Json<NaturalLanguageListing>, ApiError> {
    let Query(params) = params?;
    let phrase = params
        .query
        .ok_or_else(|| Error::InvalidInput("Missing query parameter".to_string()))?;

    let listing = state.service.list_by_natural_language(&phrase).await?;
    info!("Natural-language query {:?} matched {}", phrase, listing.count);
    Ok(Json(listing))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/healthz", get(health_check))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    records: usize,
}

async fn health_check(State(state): State<AppStateArc>) -> Result<Json<HealthResponse>, ApiError> {
    let records = state.service.count().await?;
    Ok(Json(HealthResponse {
        status: "ok",
        records,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_value_string() {
        assert_eq!(
            extract_value(json!({"value": "level"})).ok(),
            Some("level".to_string())
        );
    }

    #[test]
    fn test_extract_value_missing() {
        assert!(matches!(
            extract_value(json!({"other": 1})),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            extract_value(json!(["value"])),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_extract_value_wrong_type() {
        for body in [
            json!({"value": 12}),
            json!({"value": null}),
            json!({"value": ["a"]}),
            json!({"value": true}),
        ] {
            assert!(matches!(extract_value(body), Err(Error::InvalidType(_))));
        }
    }
}
