use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::mapper::map_all;
use super::{
    ApiError, ApiResponse, AppState, BaseBookViewModel, BookCoverViewModel, BookViewModel,
};
use crate::api::validation::{validate_name, validate_search_query};

#[derive(Deserialize)]
pub struct BookNameQuery {
    #[serde(rename = "bookName")]
    pub book_name: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "searchString")]
    pub search_string: Option<String>,
}

pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<BookViewModel>>, ApiError> {
    let book = state
        .book_service()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Book", id))?;

    Ok(Json(ApiResponse::success(book.into())))
}

pub async fn get_book_by_ordinal(
    State(state): State<Arc<AppState>>,
    Path(ordinal): Path<i32>,
) -> Result<Json<ApiResponse<BookViewModel>>, ApiError> {
    let book = state
        .book_service()
        .find_by_ordinal(ordinal)
        .await?
        .ok_or_else(|| ApiError::no_match("book", "ordinal", &ordinal.to_string()))?;

    Ok(Json(ApiResponse::success(book.into())))
}

pub async fn get_book_by_name(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookNameQuery>,
) -> Result<Json<ApiResponse<BookViewModel>>, ApiError> {
    let name = validate_name("bookName", query.book_name.as_deref())?;

    let book = state
        .book_service()
        .get_by_name(name)
        .await?
        .ok_or_else(|| ApiError::no_match("book", "name", name))?;

    Ok(Json(ApiResponse::success(book.into())))
}

pub async fn search_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<BookViewModel>>>, ApiError> {
    let text = validate_search_query(query.search_string.as_deref())?;

    let books = state.book_service().search(text).await?;
    if books.is_empty() {
        return Err(ApiError::no_match("books", "search string", text));
    }

    Ok(Json(ApiResponse::success(map_all(books))))
}

pub async fn get_series_books(
    State(state): State<Arc<AppState>>,
    Path(series_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<BaseBookViewModel>>>, ApiError> {
    let books = state.book_service().series(series_id).await?;
    if books.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No books found for series {series_id}"
        )));
    }

    Ok(Json(ApiResponse::success(map_all(books))))
}

pub async fn get_book_cover(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<i32>,
) -> Result<Json<ApiResponse<BookCoverViewModel>>, ApiError> {
    let book = state
        .book_service()
        .get_by_id(book_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Book", book_id))?;

    Ok(Json(ApiResponse::success(book.into())))
}
