use std::collections::HashMap;

use crate::entities::{book_characters, books, characters, prelude::*, series};
use crate::models::fixture::{SeedData, SeedSummary};
use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use tracing::{info, warn};

/// Inserts fixture records that are not stored yet, keyed by name.
pub struct SeedRepository {
    conn: DatabaseConnection,
}

impl SeedRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn apply(&self, data: &SeedData) -> anyhow::Result<SeedSummary> {
        let txn = self.conn.begin().await?;
        let mut summary = SeedSummary::default();

        let mut series_ids: HashMap<&str, i32> = HashMap::new();
        for entry in &data.series {
            let id = Self::ensure_series(&txn, &entry.name, &mut summary).await?;
            series_ids.insert(entry.name.as_str(), id);
        }

        let mut book_ids: HashMap<&str, i32> = HashMap::new();
        for entry in &data.books {
            let series_id = match series_ids.get(entry.series.as_str()) {
                Some(id) => *id,
                None => {
                    let id = Self::ensure_series(&txn, &entry.series, &mut summary).await?;
                    series_ids.insert(entry.series.as_str(), id);
                    id
                }
            };

            let existing = Books::find()
                .filter(books::Column::Name.eq(entry.name.as_str()))
                .one(&txn)
                .await
                .context("Failed to look up book")?;

            let id = if let Some(book) = existing {
                book.id
            } else {
                let model = books::ActiveModel {
                    ordinal: Set(entry.ordinal),
                    name: Set(entry.name.clone()),
                    description: Set(entry.description.clone()),
                    isbn10: Set(entry.isbn10.clone()),
                    isbn13: Set(entry.isbn13.clone()),
                    cover_image_url: Set(entry.cover_image_url.clone()),
                    cover_image: Set(None),
                    series_id: Set(series_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .with_context(|| format!("Failed to insert book '{}'", entry.name))?;
                summary.books += 1;
                model.id
            };
            book_ids.insert(entry.name.as_str(), id);
        }

        for entry in &data.characters {
            let existing = Characters::find()
                .filter(characters::Column::Name.eq(entry.name.as_str()))
                .one(&txn)
                .await
                .context("Failed to look up character")?;

            let character_id = if let Some(character) = existing {
                character.id
            } else {
                let model = characters::ActiveModel {
                    name: Set(entry.name.clone()),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .with_context(|| format!("Failed to insert character '{}'", entry.name))?;
                summary.characters += 1;
                model.id
            };

            for book_name in &entry.books {
                let book_id = match book_ids.get(book_name.as_str()) {
                    Some(id) => *id,
                    None => {
                        let Some(book) = Books::find()
                            .filter(books::Column::Name.eq(book_name.as_str()))
                            .one(&txn)
                            .await?
                        else {
                            warn!(
                                character = %entry.name,
                                book = %book_name,
                                "Fixture links a character to an unknown book, skipping"
                            );
                            continue;
                        };
                        book.id
                    }
                };

                if Self::link(&txn, book_id, character_id).await? {
                    summary.book_characters += 1;
                }
            }
        }

        txn.commit().await?;

        info!(
            series = summary.series,
            books = summary.books,
            characters = summary.characters,
            book_characters = summary.book_characters,
            "Seed applied"
        );
        Ok(summary)
    }

    async fn ensure_series<C: ConnectionTrait>(
        conn: &C,
        name: &str,
        summary: &mut SeedSummary,
    ) -> anyhow::Result<i32> {
        if let Some(existing) = Series::find()
            .filter(series::Column::Name.eq(name))
            .one(conn)
            .await
            .context("Failed to look up series")?
        {
            return Ok(existing.id);
        }

        let model = series::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .with_context(|| format!("Failed to insert series '{name}'"))?;

        summary.series += 1;
        Ok(model.id)
    }

    async fn link<C: ConnectionTrait>(
        conn: &C,
        book_id: i32,
        character_id: i32,
    ) -> anyhow::Result<bool> {
        if BookCharacters::find_by_id((book_id, character_id))
            .one(conn)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        BookCharacters::insert(book_characters::ActiveModel {
            book_id: Set(book_id),
            character_id: Set(character_id),
        })
        .exec_without_returning(conn)
        .await
        .context("Failed to link character to book")?;

        Ok(true)
    }

    pub async fn counts(&self) -> anyhow::Result<(u64, u64, u64)> {
        let series = Series::find().count(&self.conn).await?;
        let books = Books::find().count(&self.conn).await?;
        let characters = Characters::find().count(&self.conn).await?;
        Ok((series, books, characters))
    }
}
