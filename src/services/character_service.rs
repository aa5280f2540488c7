//! Domain service for character lookups.

use crate::models::character::Character;
use crate::services::CatalogError;

#[async_trait::async_trait]
pub trait CharacterService: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<Option<Character>, CatalogError>;

    /// Exact, case-insensitive name match. Callers reject blank names.
    async fn get_by_name(&self, name: &str) -> Result<Option<Character>, CatalogError>;

    /// One entry per matching character, each carrying every book it appears
    /// in. Blank text matches nothing.
    async fn search(&self, text: &str) -> Result<Vec<Character>, CatalogError>;
}
