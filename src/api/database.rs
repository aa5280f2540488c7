use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, CoverArtResultDto, MessageDto, SeedResultDto};

#[derive(Deserialize)]
pub struct DropQuery {
    pub secret: Option<String>,
}

pub async fn seed_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SeedResultDto>>, ApiError> {
    let summary = state.database_service().seed_database().await?;
    Ok(Json(ApiResponse::success(summary.into())))
}

pub async fn drop_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DropQuery>,
) -> Result<Json<ApiResponse<MessageDto>>, ApiError> {
    state
        .database_service()
        .clear_database(query.secret.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(MessageDto {
        message: "Database dropped and recreated".to_string(),
    })))
}

pub async fn apply_book_cover_art(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<CoverArtResultDto>>, ApiError> {
    let report = state.database_service().apply_cover_art().await?;
    Ok(Json(ApiResponse::success(report.into())))
}
