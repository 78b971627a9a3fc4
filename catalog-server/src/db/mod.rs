//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One pool, opened at startup and passed to handlers through state
//! - One repository per table, borrowing the pool
//! - Every write runs in its own transaction
//! - Payload validation happens before a repository is called

pub mod pool;
pub mod repos;

pub use pool::{apply_schema, create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
