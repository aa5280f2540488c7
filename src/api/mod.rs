use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{BookService, CharacterService, DatabaseService, SeriesService};
use crate::state::SharedState;

mod books;
mod characters;
mod database;
mod error;
mod mapper;
mod observability;
mod series;
mod types;
pub mod usage;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        self.shared.config()
    }

    #[must_use]
    pub fn book_service(&self) -> &Arc<dyn BookService> {
        &self.shared.book_service
    }

    #[must_use]
    pub fn series_service(&self) -> &Arc<dyn SeriesService> {
        &self.shared.series_service
    }

    #[must_use]
    pub fn character_service(&self) -> &Arc<dyn CharacterService> {
        &self.shared.character_service
    }

    #[must_use]
    pub fn database_service(&self) -> &Arc<dyn DatabaseService> {
        &self.shared.database_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(usage::root))
        .route("/Version", get(usage::version))
        .route("/metrics", get(observability::get_metrics))
        .merge(book_routes())
        .merge(series_routes())
        .merge(character_routes())
        .merge(database_routes())
        .fallback(usage::fallback)
        .with_state(state)
        .layer(middleware::from_fn(observability::logging_middleware))
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/Books/Get/{id}", get(books::get_book))
        .route(
            "/Books/GetByOrdinal/{ordinal}",
            get(books::get_book_by_ordinal),
        )
        .route("/Books/GetByName", get(books::get_book_by_name))
        .route("/Books/Search", get(books::search_books))
        .route("/Books/Series/{series_id}", get(books::get_series_books))
        .route("/Books/GetBookCover/{book_id}", get(books::get_book_cover))
}

fn series_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/Series/Get/{id}", get(series::get_series))
        .route("/Series/GetByName", get(series::get_series_by_name))
        .route("/Series/Search", get(series::search_series))
}

fn character_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/Characters/Get/{id}", get(characters::get_character))
        .route(
            "/Characters/GetByName",
            get(characters::get_character_by_name),
        )
        .route("/Characters/Search", get(characters::search_characters))
}

fn database_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/Database/SeedData", get(database::seed_data))
        .route("/Database/DropData", delete(database::drop_data))
        .route(
            "/Database/ApplyBookCoverArt",
            get(database::apply_book_cover_art),
        )
}
