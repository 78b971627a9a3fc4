//! Enterprise endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::{Created, Deleted, Updated};
use crate::db::repos::{Enterprise, EnterpriseRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::EnterprisePayload;

/// GET /enterprises - list all enterprises
async fn list_enterprises(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Enterprise>>, ApiError> {
    let enterprises = EnterpriseRepo::new(&state.pool).list().await?;
    Ok(Json(enterprises))
}

/// GET /enterprises/{id} - get a single enterprise
async fn get_enterprise(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Enterprise>, ApiError> {
    let enterprise = EnterpriseRepo::new(&state.pool).get(id).await?;
    Ok(Json(enterprise))
}

/// POST /enterprises - create an enterprise
async fn create_enterprise(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<EnterprisePayload>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let fields = payload.validate()?.with_default_description();
    let id = EnterpriseRepo::new(&state.pool).create(&fields).await?;

    tracing::info!(id, slug = %fields.slug, "enterprise created");
    Ok((StatusCode::CREATED, Json(Created { id })))
}

/// PUT /enterprises/{id} - replace every field of an enterprise
async fn replace_enterprise(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    JsonBody(payload): JsonBody<EnterprisePayload>,
) -> Result<Json<Updated>, ApiError> {
    let fields = payload.validate()?;
    let updated = EnterpriseRepo::new(&state.pool).replace(id, &fields).await?;
    Ok(Json(Updated { updated }))
}

/// DELETE /enterprises/{id}
async fn delete_enterprise(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Deleted>, ApiError> {
    let deleted = EnterpriseRepo::new(&state.pool).delete(id).await?;
    Ok(Json(Deleted { deleted }))
}

/// Enterprise routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/enterprises", get(list_enterprises).post(create_enterprise))
        .route(
            "/enterprises/{id}",
            get(get_enterprise)
                .put(replace_enterprise)
                .delete(delete_enterprise),
        )
}
