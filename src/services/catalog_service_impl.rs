//! `SeaORM` implementations of the catalog service traits.

use std::sync::Arc;

use crate::db::Store;
use crate::models::book::Book;
use crate::models::character::Character;
use crate::models::series::Series;
use crate::services::{BookService, CatalogError, CharacterService, SeriesService};

/// Returns the trimmed search text, or `None` when there is nothing to match.
fn search_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub struct SeaOrmBookService {
    store: Arc<Store>,
}

impl SeaOrmBookService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl BookService for SeaOrmBookService {
    async fn get_by_id(&self, id: i32) -> Result<Option<Book>, CatalogError> {
        Ok(self.store.get_book(id).await?)
    }

    async fn find_by_ordinal(&self, ordinal: i32) -> Result<Option<Book>, CatalogError> {
        Ok(self.store.find_book_by_ordinal(ordinal).await?)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Book>, CatalogError> {
        Ok(self.store.get_book_by_name(name).await?)
    }

    async fn search(&self, text: &str) -> Result<Vec<Book>, CatalogError> {
        let Some(text) = search_text(text) else {
            return Ok(Vec::new());
        };
        Ok(self.store.search_books(text).await?)
    }

    async fn series(&self, series_id: i32) -> Result<Vec<Book>, CatalogError> {
        Ok(self.store.list_books_for_series(series_id).await?)
    }
}

pub struct SeaOrmSeriesService {
    store: Arc<Store>,
}

impl SeaOrmSeriesService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl SeriesService for SeaOrmSeriesService {
    async fn get_by_id(&self, id: i32) -> Result<Option<Series>, CatalogError> {
        Ok(self.store.get_series(id).await?)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Series>, CatalogError> {
        Ok(self.store.get_series_by_name(name).await?)
    }

    async fn search(&self, text: &str) -> Result<Vec<Series>, CatalogError> {
        let Some(text) = search_text(text) else {
            return Ok(Vec::new());
        };
        Ok(self.store.search_series(text).await?)
    }
}

pub struct SeaOrmCharacterService {
    store: Arc<Store>,
}

impl SeaOrmCharacterService {
    #[must_use]
    pub const fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl CharacterService for SeaOrmCharacterService {
    async fn get_by_id(&self, id: i32) -> Result<Option<Character>, CatalogError> {
        Ok(self.store.get_character(id).await?)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Character>, CatalogError> {
        Ok(self.store.get_character_by_name(name).await?)
    }

    async fn search(&self, text: &str) -> Result<Vec<Character>, CatalogError> {
        let Some(text) = search_text(text) else {
            return Ok(Vec::new());
        };
        Ok(self.store.search_characters(text).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text() {
        assert_eq!(search_text("  Vimes "), Some("Vimes"));
        assert_eq!(search_text(""), None);
        assert_eq!(search_text("   \t"), None);
    }
}
