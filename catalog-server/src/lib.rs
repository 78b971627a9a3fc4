//! catalog-server: REST backend for the content catalog
//!
//! Serves enterprises, products and news over JSON CRUD endpoints, plus the
//! homepage slider, whose entries point at rows of those three tables and
//! are resolved into one display shape on read.

pub mod db;
pub mod http;
pub mod models;
pub mod resolver;

pub use db::{create_memory_pool, create_pool};
pub use http::{build_router, run_server, AuthConfig, ServerConfig, ServerError};
pub use resolver::{DisplayItem, SliderResolver};
