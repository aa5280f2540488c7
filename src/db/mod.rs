use crate::models::book::{Book, PendingCover};
use crate::models::character::Character;
use crate::models::fixture::{SeedData, SeedSummary};
use crate::models::series::Series;
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

pub mod migrator;
pub mod repositories;

/// Row counts per catalog table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub series: u64,
    pub books: u64,
    pub characters: u64,
}

/// The record store. Every read returns fully materialized records.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        if !db_url.contains(":memory:") {
            let path_str = db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await.with_context(|| {
                        format!("Failed to create database directory {}", parent.display())
                    })?;
                }
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)
                    .with_context(|| format!("Failed to create database file {path_str}"))?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn book_repo(&self) -> repositories::book::BookRepository {
        repositories::book::BookRepository::new(self.conn.clone())
    }

    fn series_repo(&self) -> repositories::series::SeriesRepository {
        repositories::series::SeriesRepository::new(self.conn.clone())
    }

    fn character_repo(&self) -> repositories::character::CharacterRepository {
        repositories::character::CharacterRepository::new(self.conn.clone())
    }

    fn seed_repo(&self) -> repositories::seed::SeedRepository {
        repositories::seed::SeedRepository::new(self.conn.clone())
    }

    pub async fn get_book(&self, id: i32) -> Result<Option<Book>> {
        self.book_repo().get(id).await
    }

    pub async fn find_book_by_ordinal(&self, ordinal: i32) -> Result<Option<Book>> {
        self.book_repo().find_by_ordinal(ordinal).await
    }

    pub async fn get_book_by_name(&self, name: &str) -> Result<Option<Book>> {
        self.book_repo().get_by_name(name).await
    }

    pub async fn search_books(&self, text: &str) -> Result<Vec<Book>> {
        self.book_repo().search(text).await
    }

    pub async fn list_books_for_series(&self, series_id: i32) -> Result<Vec<Book>> {
        self.book_repo().list_for_series(series_id).await
    }

    pub async fn list_books_without_cover(&self) -> Result<Vec<PendingCover>> {
        self.book_repo().list_pending_covers().await
    }

    pub async fn set_book_covers(&self, covers: Vec<(i32, Vec<u8>)>) -> Result<u64> {
        self.book_repo().set_cover_images(covers).await
    }

    pub async fn get_series(&self, id: i32) -> Result<Option<Series>> {
        self.series_repo().get(id).await
    }

    pub async fn get_series_by_name(&self, name: &str) -> Result<Option<Series>> {
        self.series_repo().get_by_name(name).await
    }

    pub async fn search_series(&self, text: &str) -> Result<Vec<Series>> {
        self.series_repo().search(text).await
    }

    pub async fn get_character(&self, id: i32) -> Result<Option<Character>> {
        self.character_repo().get(id).await
    }

    pub async fn get_character_by_name(&self, name: &str) -> Result<Option<Character>> {
        self.character_repo().get_by_name(name).await
    }

    pub async fn search_characters(&self, text: &str) -> Result<Vec<Character>> {
        self.character_repo().search(text).await
    }

    pub async fn apply_seed(&self, data: &SeedData) -> Result<SeedSummary> {
        self.seed_repo().apply(data).await
    }

    pub async fn catalog_counts(&self) -> Result<CatalogCounts> {
        let (series, books, characters) = self.seed_repo().counts().await?;
        Ok(CatalogCounts {
            series,
            books,
            characters,
        })
    }

    /// Drops every table and re-runs all migrations.
    pub async fn reset_schema(&self) -> Result<()> {
        warn!("Dropping all catalog tables");
        migrator::Migrator::fresh(&self.conn).await?;
        info!("Schema recreated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unusable_database_directory_is_reported() {
        let blocker = std::env::temp_dir().join(format!("dwcheck-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();

        let url = format!("sqlite://{}/nested/dwcheck.db?mode=rwc", blocker.display());
        let err = Store::with_pool_options(&url, 1, 1)
            .await
            .err()
            .expect("connecting under a regular file must fail");

        std::fs::remove_file(&blocker).unwrap();
        assert!(
            format!("{err:#}").contains("Failed to create database directory"),
            "unexpected error: {err:#}"
        );
    }
}
