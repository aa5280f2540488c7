//! Domain service for catalog administration.
//!
//! Seeding from the bundled fixture, dropping every table, and filling in
//! cover art for books that do not have it yet.

use crate::models::book::PendingCover;
use crate::models::fixture::SeedSummary;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("The supplied secret does not match")]
    Unauthorized,

    #[error("Unable to drop the database: {0}")]
    DropFailed(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Seed fixture error: {0}")]
    Fixture(String),
}

impl From<sea_orm::DbErr> for DatabaseError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for DatabaseError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// A single book whose cover could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArtFailure {
    pub book_id: i32,
    pub book_name: String,
    pub url: String,
    pub error: String,
}

/// Outcome of one cover art pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverArtReport {
    pub attempted: usize,
    pub updated: u64,
    pub failures: Vec<CoverArtFailure>,
}

#[async_trait::async_trait]
pub trait DatabaseService: Send + Sync {
    /// Loads the bundled fixture into the store.
    ///
    /// Records already present (matched by name) are left alone, so running
    /// it twice reports zero rows on the second run.
    async fn seed_database(&self) -> Result<SeedSummary, DatabaseError>;

    /// Removes every catalog record when `secret` matches the configured one.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Unauthorized`] on a missing or mismatched
    /// secret, and also when no secret is configured at all. Nothing is
    /// touched in that case.
    async fn clear_database(&self, secret: Option<&str>) -> Result<(), DatabaseError>;

    /// Books with a cover URL but no stored image bytes.
    async fn books_without_cover_bytes(&self) -> Result<Vec<PendingCover>, DatabaseError>;

    /// Downloads and stores cover images for [`Self::books_without_cover_bytes`].
    ///
    /// A failed download is recorded in the report and does not stop the
    /// remaining books from being processed.
    async fn apply_cover_art(&self) -> Result<CoverArtReport, DatabaseError>;
}

/// Compares a supplied secret against the configured one without
/// short-circuiting on the first differing byte.
///
/// An empty configured secret never matches.
#[must_use]
pub fn secrets_match(supplied: &str, configured: &str) -> bool {
    if configured.is_empty() {
        return false;
    }

    let a = supplied.as_bytes();
    let b = configured.as_bytes();

    let mut diff = a.len() ^ b.len();
    for (i, y) in b.iter().enumerate() {
        let x = a.get(i).copied().unwrap_or(0);
        diff |= usize::from(x ^ y);
    }

    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_match() {
        assert!(secrets_match("octarine", "octarine"));
        assert!(!secrets_match("octarinE", "octarine"));
        assert!(!secrets_match("octarin", "octarine"));
        assert!(!secrets_match("octarine!", "octarine"));
        assert!(!secrets_match("", "octarine"));
    }

    #[test]
    fn test_empty_configured_secret_never_matches() {
        assert!(!secrets_match("", ""));
        assert!(!secrets_match("anything", ""));
    }
}
