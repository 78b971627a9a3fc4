//! News repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::NewsFields;

/// News record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub short_description: Option<String>,
    pub full_text: Option<String>,
    pub slug: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// News repository
pub struct NewsRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> NewsRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<NewsItem>, DbError> {
        let rows = sqlx::query_as::<_, NewsItem>(
            "SELECT id, title, image_url, short_description, full_text, slug, created_at FROM news",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find(&self, id: i64) -> Result<Option<NewsItem>, DbError> {
        let row = sqlx::query_as::<_, NewsItem>(
            r#"
            SELECT id, title, image_url, short_description, full_text, slug, created_at
            FROM news
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<NewsItem, DbError> {
        self.find(id).await?.ok_or(DbError::NotFound {
            resource: "News item",
            id,
        })
    }

    /// Insert a news item stamped with the current time.
    pub async fn create(&self, fields: &NewsFields) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO news (title, image_url, short_description, full_text, slug, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.image_url)
        .bind(&fields.short_description)
        .bind(&fields.full_text)
        .bind(&fields.slug)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite the editable columns. `created_at` is kept.
    pub async fn replace(&self, id: i64, fields: &NewsFields) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE news
            SET title = ?, image_url = ?, short_description = ?, full_text = ?, slug = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.image_url)
        .bind(&fields.short_description)
        .bind(&fields.full_text)
        .bind(&fields.slug)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    fn opening() -> NewsFields {
        NewsFields {
            title: "Store opening".into(),
            image_url: "open.png".into(),
            short_description: Some("We open on Monday".into()),
            full_text: Some("Doors open at 9.".into()),
            slug: "store-opening".into(),
        }
    }

    #[tokio::test]
    async fn create_stamps_created_at() {
        let pool = create_memory_pool().await.unwrap();
        let repo = NewsRepo::new(&pool);

        let before = Utc::now() - chrono::Duration::seconds(1);
        let id = repo.create(&opening()).await.unwrap();
        let item = repo.get(id).await.unwrap();

        let created_at = item.created_at.expect("created_at set on insert");
        assert!(created_at >= before);
        assert_eq!(item.full_text.as_deref(), Some("Doors open at 9."));
    }

    #[tokio::test]
    async fn replace_keeps_created_at() {
        let pool = create_memory_pool().await.unwrap();
        let repo = NewsRepo::new(&pool);
        let id = repo.create(&opening()).await.unwrap();
        let original = repo.get(id).await.unwrap();

        let updated = repo
            .replace(
                id,
                &NewsFields {
                    full_text: None,
                    ..opening()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated, 1);

        let item = repo.get(id).await.unwrap();
        assert_eq!(item.full_text, None);
        assert_eq!(item.created_at, original.created_at);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = create_memory_pool().await.unwrap();
        let repo = NewsRepo::new(&pool);
        assert!(matches!(
            repo.get(9).await,
            Err(DbError::NotFound { id: 9, .. })
        ));
    }
}
