//! Domain service for series lookups.

use crate::models::series::Series;
use crate::services::CatalogError;

#[async_trait::async_trait]
pub trait SeriesService: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Option<Series>, CatalogError>;

    /// Exact, case-insensitive name match. Callers reject blank names.
    async fn get_by_name(&self, name: &str) -> Result<Option<Series>, CatalogError>;

    /// Blank text matches nothing.
    async fn search(&self, text: &str) -> Result<Vec<Series>, CatalogError>;
}
