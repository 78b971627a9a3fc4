//! Slider endpoints
//!
//! Reads go through the resolver: the list drops entries that can't be
//! resolved, the single fetch reports why.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{Created, Deleted, Updated};
use crate::db::repos::SliderRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::SliderPayload;
use crate::resolver::{DisplayItem, SliderResolver};

/// GET /sliders - every resolvable slider, in store order
async fn list_sliders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DisplayItem>>, ApiError> {
    let entries = SliderRepo::new(&state.pool).list().await?;
    let items = SliderResolver::new(&state.pool)
        .resolve_all(&entries)
        .await?;

    tracing::debug!(stored = entries.len(), resolved = items.len(), "sliders listed");
    Ok(Json(items))
}

/// GET /sliders/{id} - one resolved slider
async fn get_slider(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DisplayItem>, ApiError> {
    let item = SliderResolver::new(&state.pool).resolve_one(id).await?;
    Ok(Json(item))
}

/// POST /sliders
async fn create_slider(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<SliderPayload>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let fields = payload.validate()?;
    let id = SliderRepo::new(&state.pool).create(&fields).await?;

    tracing::info!(id, kind = %fields.kind, ref_id = fields.ref_id, "slider created");
    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// PUT /sliders/{id}
async fn replace_slider(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(payload): JsonBody<SliderPayload>,
) -> Result<Json<Updated>, ApiError> {
    let fields = payload.validate()?;
    let updated = SliderRepo::new(&state.pool).replace(id, &fields).await?;
    Ok(Json(Updated { updated }))
}

/// DELETE /sliders/{id}
async fn delete_slider(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Deleted>, ApiError> {
    let deleted = SliderRepo::new(&state.pool).delete(id).await?;
    Ok(Json(Deleted { deleted }))
}

/// Slider routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sliders", get(list_sliders).post(create_slider))
        .route(
            "/sliders/{id}",
            get(get_slider).put(replace_slider).delete(delete_slider),
        )
}
