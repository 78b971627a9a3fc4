//! Product repository

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::ProductFields;

const COLUMNS: &str = "id, name, image_url, slug, enterprise_id, manufacturer, shelf_life, \
                       proteins, fats, carbs, weight, storage, energy, description";

/// Product record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub slug: String,
    pub enterprise_id: Option<i64>,
    pub manufacturer: Option<String>,
    pub shelf_life: Option<String>,
    pub proteins: Option<String>,
    pub fats: Option<String>,
    pub carbs: Option<String>,
    pub weight: Option<String>,
    pub storage: Option<String>,
    pub energy: Option<String>,
    pub description: Option<String>,
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Product>, DbError> {
        let rows = sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products"))
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Product>, DbError> {
        let row =
            sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products WHERE id = ?"))
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(row)
    }

    pub async fn get(&self, id: i64) -> Result<Product, DbError> {
        self.find(id).await?.ok_or(DbError::NotFound {
            resource: "Product",
            id,
        })
    }

    /// Insert a product and return its id.
    ///
    /// `enterprise_id` is stored as given; it is not checked against
    /// the enterprises table.
    pub async fn create(&self, fields: &ProductFields) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO products
                (name, image_url, slug, enterprise_id, manufacturer, shelf_life,
                 proteins, fats, carbs, weight, storage, energy, description)
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.image_url)
        .bind(&fields.slug)
        .bind(fields.enterprise_id)
        .bind(&fields.manufacturer)
        .bind(&fields.shelf_life)
        .bind(&fields.proteins)
        .bind(&fields.fats)
        .bind(&fields.carbs)
        .bind(&fields.weight)
        .bind(&fields.storage)
        .bind(&fields.energy)
        .bind(&fields.description)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every column of a product. Omitted optionals become null.
    pub async fn replace(&self, id: i64, fields: &ProductFields) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name          = ?,
                image_url     = ?,
                slug          = ?,
                enterprise_id = ?,
                manufacturer  = ?,
                shelf_life    = ?,
                proteins      = ?,
                fats          = ?,
                carbs         = ?,
                weight        = ?,
                storage       = ?,
                energy        = ?,
                description   = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.image_url)
        .bind(&fields.slug)
        .bind(fields.enterprise_id)
        .bind(&fields.manufacturer)
        .bind(&fields.shelf_life)
        .bind(&fields.proteins)
        .bind(&fields.fats)
        .bind(&fields.carbs)
        .bind(&fields.weight)
        .bind(&fields.storage)
        .bind(&fields.energy)
        .bind(&fields.description)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
