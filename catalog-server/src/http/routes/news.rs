//! News endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{Created, Deleted, Updated};
use crate::db::repos::{NewsItem, NewsRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::NewsPayload;

async fn list_news(State(state): State<Arc<AppState>>) -> Result<Json<Vec<NewsItem>>, ApiError> {
    let items = NewsRepo::new(&state.pool).list().await?;
    Ok(Json(items))
}

async fn get_news(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<NewsItem>, ApiError> {
    let item = NewsRepo::new(&state.pool).get(id).await?;
    Ok(Json(item))
}

async fn create_news(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<NewsPayload>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let fields = payload.validate()?;
    let id = NewsRepo::new(&state.pool).create(&fields).await?;

    tracing::info!(id, slug = %fields.slug, "news item created");
    Ok((StatusCode::CREATED, Json(Created { id })))
}

async fn replace_news(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(payload): JsonBody<NewsPayload>,
) -> Result<Json<Updated>, ApiError> {
    let fields = payload.validate()?;
    let updated = NewsRepo::new(&state.pool).replace(id, &fields).await?;
    Ok(Json(Updated { updated }))
}

async fn delete_news(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Deleted>, ApiError> {
    let deleted = NewsRepo::new(&state.pool).delete(id).await?;
    Ok(Json(Deleted { deleted }))
}

/// News routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/news", get(list_news).post(create_news))
        .route(
            "/news/{id}",
            get(get_news).put(replace_news).delete(delete_news),
        )
}
