//! Repository implementations for database access
//!
//! Each repository exposes the same surface:
//! - `list` / `get` / `find` reads
//! - `create` returning the new row id
//! - `replace` (full overwrite) and `delete` returning rows affected

pub mod enterprises;
pub mod products;
pub mod news;
pub mod sliders;

pub use enterprises::{Enterprise, EnterpriseRepo};
pub use products::{Product, ProductRepo};
pub use news::{NewsItem, NewsRepo};
pub use sliders::{SliderEntry, SliderRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}
