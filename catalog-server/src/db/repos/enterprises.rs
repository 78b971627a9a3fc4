//! Enterprise repository

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::EnterpriseFields;

/// Enterprise record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Enterprise {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub description: Option<String>,
    pub slug: String,
}

/// Enterprise repository
pub struct EnterpriseRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EnterpriseRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all enterprises in store order.
    pub async fn list(&self) -> Result<Vec<Enterprise>, DbError> {
        let rows = sqlx::query_as::<_, Enterprise>(
            "SELECT id, name, image_url, description, slug FROM enterprises",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Look up an enterprise, `None` when absent.
    pub async fn find(&self, id: i64) -> Result<Option<Enterprise>, DbError> {
        let row = sqlx::query_as::<_, Enterprise>(
            "SELECT id, name, image_url, description, slug FROM enterprises WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Get a single enterprise by id.
    pub async fn get(&self, id: i64) -> Result<Enterprise, DbError> {
        self.find(id).await?.ok_or(DbError::NotFound {
            resource: "Enterprise",
            id,
        })
    }

    /// Insert an enterprise and return its id.
    pub async fn create(&self, fields: &EnterpriseFields) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO enterprises (name, image_url, description, slug) VALUES (?, ?, ?, ?)",
        )
        .bind(&fields.name)
        .bind(&fields.image_url)
        .bind(&fields.description)
        .bind(&fields.slug)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every column of an enterprise. Returns rows affected.
    pub async fn replace(&self, id: i64, fields: &EnterpriseFields) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE enterprises SET name = ?, image_url = ?, description = ?, slug = ? WHERE id = ?",
        )
        .bind(&fields.name)
        .bind(&fields.image_url)
        .bind(&fields.description)
        .bind(&fields.slug)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Delete an enterprise. Products and sliders pointing at it are left alone.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM enterprises WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
