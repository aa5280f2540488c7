use std::collections::HashMap;

use super::{contains_text, name_equals};
use crate::entities::{book_characters, books, characters, prelude::*, series};
use crate::models::book::{Book, PendingCover};
use anyhow::Context;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::{debug, info};

pub struct BookRepository {
    conn: DatabaseConnection,
}

impl BookRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Joins series names and cast lists onto a batch of book rows with two
    /// extra queries, whatever the batch size.
    async fn hydrate(&self, rows: Vec<books::Model>) -> anyhow::Result<Vec<Book>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let book_ids: Vec<i32> = rows.iter().map(|b| b.id).collect();
        let mut series_ids: Vec<i32> = rows.iter().map(|b| b.series_id).collect();
        series_ids.sort_unstable();
        series_ids.dedup();

        let series_names: HashMap<i32, String> = Series::find()
            .filter(series::Column::Id.is_in(series_ids))
            .all(&self.conn)
            .await
            .context("Failed to load series for books")?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        let links = BookCharacters::find()
            .filter(book_characters::Column::BookId.is_in(book_ids))
            .find_also_related(Characters)
            .order_by_asc(characters::Column::Name)
            .all(&self.conn)
            .await
            .context("Failed to load characters for books")?;

        let mut casts: HashMap<i32, Vec<String>> = HashMap::new();
        for (link, character) in links {
            if let Some(character) = character {
                casts.entry(link.book_id).or_default().push(character.name);
            }
        }

        Ok(rows
            .into_iter()
            .map(|model| {
                let series_name = series_names
                    .get(&model.series_id)
                    .cloned()
                    .unwrap_or_default();
                let characters = casts.remove(&model.id).unwrap_or_default();
                Self::map_model_to_book(model, series_name, characters)
            })
            .collect())
    }

    fn map_model_to_book(model: books::Model, series_name: String, characters: Vec<String>) -> Book {
        Book {
            id: model.id,
            ordinal: model.ordinal,
            name: model.name,
            description: model.description,
            isbn10: model.isbn10,
            isbn13: model.isbn13,
            cover_image_url: model.cover_image_url,
            cover_image: model.cover_image,
            series_id: model.series_id,
            series_name,
            characters,
        }
    }

    async fn hydrate_one(&self, row: Option<books::Model>) -> anyhow::Result<Option<Book>> {
        match row {
            Some(model) => Ok(self.hydrate(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<Book>> {
        let row = Books::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query book by id")?;

        self.hydrate_one(row).await
    }

    /// Ordinals are only unique within a series; the lowest series id wins.
    pub async fn find_by_ordinal(&self, ordinal: i32) -> anyhow::Result<Option<Book>> {
        let row = Books::find()
            .filter(books::Column::Ordinal.eq(ordinal))
            .order_by_asc(books::Column::SeriesId)
            .one(&self.conn)
            .await
            .context("Failed to query book by ordinal")?;

        self.hydrate_one(row).await
    }

    pub async fn get_by_name(&self, name: &str) -> anyhow::Result<Option<Book>> {
        let row = Books::find()
            .filter(name_equals((Books, books::Column::Name), name))
            .one(&self.conn)
            .await
            .context("Failed to query book by name")?;

        self.hydrate_one(row).await
    }

    /// Substring match over name, description and both ISBNs.
    pub async fn search(&self, text: &str) -> anyhow::Result<Vec<Book>> {
        let rows = Books::find()
            .filter(
                Condition::any()
                    .add(contains_text((Books, books::Column::Name), text))
                    .add(contains_text((Books, books::Column::Description), text))
                    .add(contains_text((Books, books::Column::Isbn10), text))
                    .add(contains_text((Books, books::Column::Isbn13), text)),
            )
            .order_by_asc(books::Column::SeriesId)
            .order_by_asc(books::Column::Ordinal)
            .all(&self.conn)
            .await
            .context("Failed to search books")?;

        debug!(query = %text, matches = rows.len(), "Book search");
        self.hydrate(rows).await
    }

    pub async fn list_for_series(&self, series_id: i32) -> anyhow::Result<Vec<Book>> {
        let rows = Books::find()
            .filter(books::Column::SeriesId.eq(series_id))
            .order_by_asc(books::Column::Ordinal)
            .all(&self.conn)
            .await
            .context("Failed to list books for series")?;

        self.hydrate(rows).await
    }

    /// Books with no cover bytes yet but a URL to fetch them from.
    pub async fn list_pending_covers(&self) -> anyhow::Result<Vec<PendingCover>> {
        let rows = Books::find()
            .filter(books::Column::CoverImage.is_null())
            .filter(books::Column::CoverImageUrl.is_not_null())
            .order_by_asc(books::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list books without cover art")?;

        Ok(rows
            .into_iter()
            .filter_map(|book| {
                let url = book.cover_image_url?;
                if url.trim().is_empty() {
                    return None;
                }
                Some(PendingCover {
                    book_id: book.id,
                    book_name: book.name,
                    cover_image_url: url,
                })
            })
            .collect())
    }

    /// Writes all cover payloads in one transaction and returns the number of
    /// rows changed.
    pub async fn set_cover_images(&self, covers: Vec<(i32, Vec<u8>)>) -> anyhow::Result<u64> {
        if covers.is_empty() {
            return Ok(0);
        }

        let txn = self.conn.begin().await?;
        let mut updated = 0;

        for (book_id, bytes) in covers {
            let result = Books::update_many()
                .col_expr(books::Column::CoverImage, Expr::value(bytes))
                .filter(books::Column::Id.eq(book_id))
                .exec(&txn)
                .await
                .with_context(|| format!("Failed to store cover for book {book_id}"))?;
            updated += result.rows_affected;
        }

        txn.commit().await?;

        info!("Stored cover art for {} books", updated);
        Ok(updated)
    }
}
