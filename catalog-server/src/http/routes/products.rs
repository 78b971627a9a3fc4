//! Product endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{Created, Deleted, Updated};
use crate::db::repos::{Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::ProductPayload;

/// GET /products
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list().await?;
    Ok(Json(products))
}

/// GET /products/{id}
async fn get_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(&state.pool).get(id).await?;
    Ok(Json(product))
}

/// POST /products
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let fields = payload.validate()?;
    let id = ProductRepo::new(&state.pool).create(&fields).await?;

    tracing::info!(id, slug = %fields.slug, "product created");
    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// PUT /products/{id} - full overwrite, omitted optionals are cleared
async fn replace_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(payload): JsonBody<ProductPayload>,
) -> Result<Json<Updated>, ApiError> {
    let fields = payload.validate()?;
    let updated = ProductRepo::new(&state.pool).replace(id, &fields).await?;
    Ok(Json(Updated { updated }))
}

/// DELETE /products/{id}
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Deleted>, ApiError> {
    let deleted = ProductRepo::new(&state.pool).delete(id).await?;
    Ok(Json(Deleted { deleted }))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(replace_product).delete(delete_product),
        )
}
