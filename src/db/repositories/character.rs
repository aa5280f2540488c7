use std::collections::HashMap;

use super::{contains_text, name_equals};
use crate::entities::{book_characters, characters, prelude::*};
use crate::models::character::{Character, CharacterAppearance};
use anyhow::Context;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

pub struct CharacterRepository {
    conn: DatabaseConnection,
}

impl CharacterRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    async fn hydrate(&self, rows: Vec<characters::Model>) -> anyhow::Result<Vec<Character>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|c| c.id).collect();

        let links = BookCharacters::find()
            .filter(book_characters::Column::CharacterId.is_in(ids))
            .find_also_related(Books)
            .all(&self.conn)
            .await
            .context("Failed to load book appearances")?;

        let mut appearances: HashMap<i32, Vec<CharacterAppearance>> = HashMap::new();
        for (link, book) in links {
            if let Some(book) = book {
                appearances
                    .entry(link.character_id)
                    .or_default()
                    .push(CharacterAppearance {
                        book_id: book.id,
                        book_ordinal: book.ordinal,
                        book_name: book.name,
                        series_id: book.series_id,
                    });
            }
        }

        Ok(rows
            .into_iter()
            .map(|model| {
                let mut books = appearances.remove(&model.id).unwrap_or_default();
                books.sort_by_key(|a| (a.series_id, a.book_ordinal));
                Character {
                    id: model.id,
                    name: model.name,
                    appearances: books,
                }
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<Character>> {
        let Some(row) = Characters::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query character by id")?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![row]).await?.pop())
    }

    pub async fn get_by_name(&self, name: &str) -> anyhow::Result<Option<Character>> {
        let Some(row) = Characters::find()
            .filter(name_equals((Characters, characters::Column::Name), name))
            .one(&self.conn)
            .await
            .context("Failed to query character by name")?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![row]).await?.pop())
    }

    pub async fn search(&self, text: &str) -> anyhow::Result<Vec<Character>> {
        let rows = Characters::find()
            .filter(contains_text((Characters, characters::Column::Name), text))
            .order_by_asc(characters::Column::Name)
            .all(&self.conn)
            .await
            .context("Failed to search characters")?;

        self.hydrate(rows).await
    }
}
