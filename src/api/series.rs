use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::books::SearchQuery;
use super::mapper::map_all;
use super::{ApiError, ApiResponse, AppState, SeriesViewModel};
use crate::api::validation::{validate_name, validate_search_query};

#[derive(Deserialize)]
pub struct SeriesNameQuery {
    #[serde(rename = "seriesName")]
    pub series_name: Option<String>,
}

pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<SeriesViewModel>>, ApiError> {
    let series = state
        .series_service()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Series", id))?;

    Ok(Json(ApiResponse::success(series.into())))
}

pub async fn get_series_by_name(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeriesNameQuery>,
) -> Result<Json<ApiResponse<SeriesViewModel>>, ApiError> {
    let name = validate_name("seriesName", query.series_name.as_deref())?;

    let series = state
        .series_service()
        .get_by_name(name)
        .await?
        .ok_or_else(|| ApiError::no_match("series", "name", name))?;

    Ok(Json(ApiResponse::success(series.into())))
}

pub async fn search_series(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<SeriesViewModel>>>, ApiError> {
    let text = validate_search_query(query.search_string.as_deref())?;

    let series = state.series_service().search(text).await?;
    if series.is_empty() {
        return Err(ApiError::no_match("series", "search string", text));
    }

    Ok(Json(ApiResponse::success(map_all(series))))
}
