//! `SeaORM` implementation of the `DatabaseService` trait.

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::Store;
use crate::models::book::PendingCover;
use crate::models::fixture::SeedSummary;
use crate::services::cover_art::CoverArtFetcher;
use crate::services::database_service::{
    CoverArtFailure, CoverArtReport, DatabaseError, DatabaseService, secrets_match,
};
use crate::services::fixtures;

pub struct SeaOrmDatabaseService {
    store: Arc<Store>,
    fetcher: Arc<dyn CoverArtFetcher>,
    config: Arc<Config>,
}

impl SeaOrmDatabaseService {
    #[must_use]
    pub fn new(store: Arc<Store>, fetcher: Arc<dyn CoverArtFetcher>, config: Arc<Config>) -> Self {
        Self {
            store,
            fetcher,
            config,
        }
    }
}

#[async_trait]
impl DatabaseService for SeaOrmDatabaseService {
    async fn seed_database(&self) -> Result<SeedSummary, DatabaseError> {
        let data =
            fixtures::load_seed_data().map_err(|e| DatabaseError::Fixture(format!("{e:#}")))?;

        let summary = self.store.apply_seed(&data).await?;
        metrics::counter!("dwcheck_seed_rows_total").increment(summary.total());

        Ok(summary)
    }

    async fn clear_database(&self, secret: Option<&str>) -> Result<(), DatabaseError> {
        let configured = &self.config.database.drop_database_secret_value;

        if configured.is_empty() {
            warn!("Drop requested but no drop secret is configured");
            return Err(DatabaseError::Unauthorized);
        }

        if !secrets_match(secret.unwrap_or_default(), configured) {
            warn!("Drop requested with a mismatched secret");
            return Err(DatabaseError::Unauthorized);
        }

        self.store
            .reset_schema()
            .await
            .map_err(|e| DatabaseError::DropFailed(format!("{e:#}")))?;

        info!("Catalog dropped");
        Ok(())
    }

    async fn books_without_cover_bytes(&self) -> Result<Vec<PendingCover>, DatabaseError> {
        Ok(self.store.list_books_without_cover().await?)
    }

    async fn apply_cover_art(&self) -> Result<CoverArtReport, DatabaseError> {
        let pending = self.books_without_cover_bytes().await?;
        let attempted = pending.len();

        if pending.is_empty() {
            info!("Every book already has its cover art");
            return Ok(CoverArtReport::default());
        }

        info!(count = attempted, "Fetching cover art");

        let concurrency = self.config.cover_art.max_concurrent_fetches.max(1);
        let fetcher = Arc::clone(&self.fetcher);

        let results: Vec<(PendingCover, Result<Vec<u8>, String>)> =
            futures::stream::iter(pending)
                .map(|book| {
                    let fetcher = Arc::clone(&fetcher);
                    async move {
                        let outcome = fetcher
                            .fetch(&book.cover_image_url)
                            .await
                            .map_err(|e| e.to_string());
                        (book, outcome)
                    }
                })
                .buffered(concurrency)
                .collect()
                .await;

        let mut covers = Vec::with_capacity(results.len());
        let mut failures = Vec::new();

        for (book, outcome) in results {
            match outcome {
                Ok(bytes) => covers.push((book.book_id, bytes)),
                Err(error) => {
                    warn!(
                        book_id = book.book_id,
                        book = %book.book_name,
                        url = %book.cover_image_url,
                        error = %error,
                        "Cover art download failed"
                    );
                    failures.push(CoverArtFailure {
                        book_id: book.book_id,
                        book_name: book.book_name,
                        url: book.cover_image_url,
                        error,
                    });
                }
            }
        }

        let updated = self.store.set_book_covers(covers).await?;

        metrics::counter!("dwcheck_cover_art_updated_total").increment(updated);
        metrics::counter!("dwcheck_cover_art_failed_total").increment(failures.len() as u64);

        info!(
            attempted,
            updated,
            failed = failures.len(),
            "Cover art pass finished"
        );

        Ok(CoverArtReport {
            attempted,
            updated,
            failures,
        })
    }
}
