//! HTTP handlers for the strings API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strand_core::{
    FilterSet, InterpretedQuery, PropertyRecord, QueryStore, StoredString, StringStore,
};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::params::FilterParams;
use crate::state::AppState;
use crate::tracing::prefix;

/// A stored string as returned over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringResponse {
    pub id: String,
    pub value: String,
    pub properties: PropertyRecord,
    /// RFC 3339 creation time
    pub created_at: String,
}

impl TryFrom<StoredString> for StringResponse {
    type Error = ApiError;

    fn try_from(record: StoredString) -> Result<Self, ApiError> {
        Ok(Self {
            created_at: render_timestamp(record.created_at)?,
            id: record.id,
            value: record.value,
            properties: record.properties,
        })
    }
}

/// Response for `GET /strings`.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// Response for `GET /strings/filter-by-natural-language`.
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringResponse>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// POST /strings
///
/// Analyzes and stores a new string.
pub async fn create_string(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<StringResponse>), ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let value = body
        .get("value")
        .ok_or_else(|| ApiError::bad_request("missing \"value\" field"))?;
    let record = StoredString::from_json_value(value, Utc::now().timestamp_millis())?;

    let created = state
        .with_store(move |store| {
            store.put(record.clone())?;
            Ok(record)
        })
        .await?;

    info!(id = %created.id, "stored string");
    Ok((StatusCode::CREATED, Json(created.try_into()?)))
}

/// GET /strings/{value}
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<StringResponse>, ApiError> {
    let record = state
        .with_store(move |store| Ok(store.get_by_value(&value)?))
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(record.try_into()?))
}

/// DELETE /strings/{value}
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .with_store(move |store| Ok(store.delete_by_value(&value)?))
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found())
    }
}

/// GET /strings
///
/// Lists stored strings matching explicit filter parameters.
pub async fn list_strings(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let filters = params.into_filters()?;

    let data = query(&state, filters).await?;

    Ok(Json(ListResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

/// GET /strings/filter-by-natural-language
///
/// Translates a free-text query into filters and lists matching strings.
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let query_text = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("missing query param"))?;

    let interpreted = state.translator().translate(&query_text)?;
    debug!(
        "{} '{}' -> {:?}",
        prefix::QUERY,
        interpreted.original,
        interpreted.parsed_filters
    );

    let data = query(&state, interpreted.parsed_filters).await?;

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: interpreted,
    }))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

async fn query(state: &AppState, filters: FilterSet) -> Result<Vec<StringResponse>, ApiError> {
    let records = state
        .with_store(move |store| Ok(store.query(&filters)?))
        .await?;
    records.into_iter().map(StringResponse::try_from).collect()
}

fn render_timestamp(timestamp_ms: i64) -> Result<String, ApiError> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| ApiError::internal(format!("invalid created_at {}", timestamp_ms)))
}
