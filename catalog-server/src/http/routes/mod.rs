//! Route handlers organized by resource

use serde::Serialize;

pub mod health;
pub mod login;
pub mod enterprises;
pub mod products;
pub mod news;
pub mod sliders;

/// Body of a successful create (201)
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: i64,
}

/// Body of a replace: rows affected, 0 when the id didn't exist
#[derive(Debug, Serialize)]
pub struct Updated {
    pub updated: u64,
}

/// Body of a delete: rows affected, 0 when the id didn't exist
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: u64,
}
