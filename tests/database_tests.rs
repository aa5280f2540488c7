use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use dwcheck::config::Config;
use dwcheck::services::{CoverArtError, CoverArtFetcher};
use dwcheck::state::SharedState;
use http_body_util::BodyExt;
use tower::ServiceExt;

const DROP_SECRET: &str = "octarine";

/// Serves a fixed payload, failing for any URL containing `fail_on`.
struct StubFetcher {
    fail_on: &'static str,
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl CoverArtFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CoverArtError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if url.contains(self.fail_on) {
            return Err(CoverArtError::Status(404));
        }
        Ok(b"cover".to_vec())
    }
}

fn test_config(secret: &str) -> Config {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;
    config.database.drop_database_secret_value = secret.to_string();
    config.observability.metrics_enabled = false;
    config
}

async fn spawn_app_with(config: Config, fetcher: Arc<StubFetcher>) -> Router {
    let shared = SharedState::with_cover_fetcher(config, fetcher)
        .await
        .expect("Failed to create shared state");
    let state = dwcheck::api::create_app_state(Arc::new(shared), None);
    dwcheck::api::router(state)
}

fn stub() -> Arc<StubFetcher> {
    Arc::new(StubFetcher {
        fail_on: "0575041714",
        calls: AtomicUsize::new(0),
    })
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let app = spawn_app_with(test_config(DROP_SECRET), stub()).await;

    let (status, body) = send(&app, "GET", "/Database/SeedData").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["series"], 5);
    assert_eq!(body["data"]["books"], 12);
    assert_eq!(body["data"]["characters"], 14);
    assert_eq!(body["data"]["book_characters"], 33);
    assert_eq!(body["data"]["total"], 64);

    let (status, body) = send(&app, "GET", "/Database/SeedData").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 0);
}

#[tokio::test]
async fn test_drop_requires_matching_secret() {
    let shared = Arc::new(
        SharedState::with_cover_fetcher(test_config(DROP_SECRET), stub())
            .await
            .unwrap(),
    );
    let app = dwcheck::api::router(dwcheck::api::create_app_state(shared.clone(), None));
    send(&app, "GET", "/Database/SeedData").await;

    let seeded = shared.store.catalog_counts().await.unwrap();
    assert_eq!(seeded.books, 12);

    for uri in [
        "/Database/DropData?secret=wrong",
        "/Database/DropData?secret=",
        "/Database/DropData?secret=octarin",
        "/Database/DropData",
    ] {
        let (status, body) = send(&app, "DELETE", uri).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["success"], false);
        assert_eq!(shared.store.catalog_counts().await.unwrap(), seeded, "{uri}");
    }

    let (status, body) = send(&app, "DELETE", "/Database/DropData?secret=octarine").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let dropped = shared.store.catalog_counts().await.unwrap();
    assert_eq!(dropped, dwcheck::db::CatalogCounts::default());

    let (status, body) = send(&app, "GET", "/Database/SeedData").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 64);
}

#[tokio::test]
async fn test_drop_disabled_without_configured_secret() {
    let app = spawn_app_with(test_config(""), stub()).await;
    send(&app, "GET", "/Database/SeedData").await;

    let (status, _) = send(&app, "DELETE", "/Database/DropData?secret=").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/Series/Get/1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cover_art_failure_does_not_block_other_books() {
    let fetcher = stub();
    let app = spawn_app_with(test_config(DROP_SECRET), fetcher.clone()).await;
    send(&app, "GET", "/Database/SeedData").await;

    let (status, body) = send(&app, "GET", "/Database/ApplyBookCoverArt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["attempted"], 4);
    assert_eq!(body["data"]["updated"], 3);
    assert_eq!(body["data"]["failed"], 1);
    assert_eq!(body["data"]["failures"][0]["book_name"], "Mort");
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 4);

    let (status, body) = send(&app, "GET", "/Books/GetBookCover/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["book_cover_image"], "Y292ZXI=");
    assert_eq!(body["data"]["book_image_is_base64_string"], true);

    let (_, body) = send(&app, "GET", "/Books/Get/1").await;
    assert_eq!(body["data"]["has_cover_image"], true);

    let (_, body) = send(&app, "GET", "/Books/GetBookCover/4").await;
    assert_eq!(body["data"]["book_image_is_base64_string"], false);

    // Only the failed book is retried
    let (_, body) = send(&app, "GET", "/Database/ApplyBookCoverArt").await;
    assert_eq!(body["data"]["attempted"], 1);
    assert_eq!(body["data"]["updated"], 0);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn test_cover_art_on_empty_store() {
    let fetcher = stub();
    let app = spawn_app_with(test_config(DROP_SECRET), fetcher.clone()).await;

    let (status, body) = send(&app, "GET", "/Database/ApplyBookCoverArt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["attempted"], 0);
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_concurrent_cover_fetches_store_every_success() {
    let mut config = test_config(DROP_SECRET);
    config.cover_art.max_concurrent_fetches = 3;

    let app = spawn_app_with(config, stub()).await;
    send(&app, "GET", "/Database/SeedData").await;

    let (_, body) = send(&app, "GET", "/Database/ApplyBookCoverArt").await;
    assert_eq!(body["data"]["updated"], 3);
    assert_eq!(body["data"]["failed"], 1);
}

#[tokio::test]
async fn test_store_counts_after_seed() {
    let shared = SharedState::with_cover_fetcher(test_config(DROP_SECRET), stub())
        .await
        .unwrap();

    let counts = shared.store.catalog_counts().await.unwrap();
    assert_eq!(counts.books, 0);

    shared.database_service.seed_database().await.unwrap();

    let counts = shared.store.catalog_counts().await.unwrap();
    assert_eq!(counts.series, 5);
    assert_eq!(counts.books, 12);
    assert_eq!(counts.characters, 14);

    let pending = shared.database_service.books_without_cover_bytes().await.unwrap();
    assert_eq!(pending.len(), 4);
}
