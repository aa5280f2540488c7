use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::books::SearchQuery;
use super::mapper::map_all;
use super::{ApiError, ApiResponse, AppState, CharacterViewModel};
use crate::api::validation::{validate_name, validate_search_query};

#[derive(Deserialize)]
pub struct CharacterNameQuery {
    #[serde(rename = "characterName")]
    pub character_name: Option<String>,
}

pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CharacterViewModel>>, ApiError> {
    let character = state
        .character_service()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Character", id))?;

    Ok(Json(ApiResponse::success(character.into())))
}

pub async fn get_character_by_name(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CharacterNameQuery>,
) -> Result<Json<ApiResponse<CharacterViewModel>>, ApiError> {
    let name = validate_name("characterName", query.character_name.as_deref())?;

    let character = state
        .character_service()
        .get_by_name(name)
        .await?
        .ok_or_else(|| ApiError::no_match("character", "name", name))?;

    Ok(Json(ApiResponse::success(character.into())))
}

pub async fn search_characters(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<CharacterViewModel>>>, ApiError> {
    let text = validate_search_query(query.search_string.as_deref())?;

    let characters = state.character_service().search(text).await?;
    if characters.is_empty() {
        return Err(ApiError::no_match("characters", "search string", text));
    }

    Ok(Json(ApiResponse::success(map_all(characters))))
}
