//! Domain service for book lookups.

use crate::models::book::Book;
use crate::services::CatalogError;

#[async_trait::async_trait]
pub trait BookService: Send + Sync {
    /// Looks a book up by its storage identity.
    async fn get_by_id(&self, id: i32) -> Result<Option<Book>, CatalogError>;

    /// Looks a book up by its release ordinal.
    async fn find_by_ordinal(&self, ordinal: i32) -> Result<Option<Book>, CatalogError>;

    /// Exact, case-insensitive title match. Callers reject blank names.
    async fn get_by_name(&self, name: &str) -> Result<Option<Book>, CatalogError>;

    /// Case-insensitive substring search over title, description and ISBNs.
    /// Blank text matches nothing.
    async fn search(&self, text: &str) -> Result<Vec<Book>, CatalogError>;

    /// All books belonging to a series, in release order.
    async fn series(&self, series_id: i32) -> Result<Vec<Book>, CatalogError>;
}
