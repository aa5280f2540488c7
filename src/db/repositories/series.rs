use std::collections::HashMap;

use super::{contains_text, name_equals};
use crate::entities::{books, prelude::*, series};
use crate::models::series::{Series as SeriesRecord, SeriesBook};
use anyhow::Context;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

pub struct SeriesRepository {
    conn: DatabaseConnection,
}

impl SeriesRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    async fn hydrate(&self, rows: Vec<series::Model>) -> anyhow::Result<Vec<SeriesRecord>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|s| s.id).collect();

        let mut books_by_series: HashMap<i32, Vec<SeriesBook>> = HashMap::new();
        for book in Books::find()
            .filter(books::Column::SeriesId.is_in(ids))
            .order_by_asc(books::Column::Ordinal)
            .all(&self.conn)
            .await
            .context("Failed to load books for series")?
        {
            books_by_series
                .entry(book.series_id)
                .or_default()
                .push(SeriesBook {
                    id: book.id,
                    ordinal: book.ordinal,
                    name: book.name,
                });
        }

        Ok(rows
            .into_iter()
            .map(|model| SeriesRecord {
                books: books_by_series.remove(&model.id).unwrap_or_default(),
                id: model.id,
                name: model.name,
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<SeriesRecord>> {
        let Some(row) = Series::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query series by id")?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![row]).await?.pop())
    }

    pub async fn get_by_name(&self, name: &str) -> anyhow::Result<Option<SeriesRecord>> {
        let Some(row) = Series::find()
            .filter(name_equals((Series, series::Column::Name), name))
            .one(&self.conn)
            .await
            .context("Failed to query series by name")?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![row]).await?.pop())
    }

    pub async fn search(&self, text: &str) -> anyhow::Result<Vec<SeriesRecord>> {
        let rows = Series::find()
            .filter(contains_text((Series, series::Column::Name), text))
            .order_by_asc(series::Column::Name)
            .all(&self.conn)
            .await
            .context("Failed to search series")?;

        self.hydrate(rows).await
    }
}
