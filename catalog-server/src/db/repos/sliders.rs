//! Slider repository
//!
//! Stores raw slider rows. The `type` column is read back as text and only
//! interpreted by the resolver, so rows written by older tools with unknown
//! tags still load.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::{SliderFields, SliderKind, SliderTarget};

/// Slider record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SliderEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub ref_id: i64,
    pub position: i64,
}

impl SliderEntry {
    /// The row this entry points at, or `None` for an unrecognized type tag.
    pub fn target(&self) -> Option<SliderTarget> {
        SliderKind::from_tag(&self.kind).map(|kind| SliderTarget::new(kind, self.ref_id))
    }
}

/// Slider repository
pub struct SliderRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SliderRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List slider rows in store order (not sorted by `position`).
    pub async fn list(&self) -> Result<Vec<SliderEntry>, DbError> {
        let rows = sqlx::query_as::<_, SliderEntry>(
            "SELECT id, type AS kind, ref_id, position FROM sliders",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find(&self, id: i64) -> Result<Option<SliderEntry>, DbError> {
        let row = sqlx::query_as::<_, SliderEntry>(
            "SELECT id, type AS kind, ref_id, position FROM sliders WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<SliderEntry, DbError> {
        self.find(id).await?.ok_or(DbError::NotFound {
            resource: "Slider",
            id,
        })
    }

    pub async fn create(&self, fields: &SliderFields) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO sliders (type, ref_id, position) VALUES (?, ?, ?)")
            .bind(fields.kind.as_str())
            .bind(fields.ref_id)
            .bind(fields.position)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn replace(&self, id: i64, fields: &SliderFields) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result =
            sqlx::query("UPDATE sliders SET type = ?, ref_id = ?, position = ? WHERE id = ?")
                .bind(fields.kind.as_str())
                .bind(fields.ref_id)
                .bind(fields.position)
                .bind(id)
                .execute(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM sliders WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
