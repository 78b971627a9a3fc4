//! API error types with IntoResponse
//!
//! Every error becomes a JSON body of the form `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;
use crate::resolver::SliderLookupError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed field (400)
    Validation(ValidationError),

    /// Request body isn't the JSON we expect (400)
    MalformedBody { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: i64 },

    /// Stored slider type outside the known kinds (400)
    InvalidSliderType { id: i64, tag: String },

    /// Missing or wrong bearer token (403)
    Forbidden,

    /// Database error (500, logged, message surfaced)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::MalformedBody { message } => (StatusCode::BAD_REQUEST, message.clone()),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id, "not found");
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            Self::InvalidSliderType { id, tag } => {
                tracing::warn!(slider = id, tag = %tag, "slider has invalid type");
                (StatusCode::BAD_REQUEST, "Invalid slider type".to_owned())
            }
            Self::Forbidden => (StatusCode::FORBIDDEN, "Unauthorized".to_owned()),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<SliderLookupError> for ApiError {
    fn from(e: SliderLookupError) -> Self {
        match e {
            SliderLookupError::SliderNotFound(id) => Self::NotFound {
                resource: "Slider",
                id,
            },
            SliderLookupError::InvalidType { id, tag } => Self::InvalidSliderType { id, tag },
            SliderLookupError::ReferenceNotFound { target, .. } => Self::NotFound {
                resource: "Referenced item",
                id: target.ref_id(),
            },
            SliderLookupError::Db(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SliderTarget;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Missing {
            fields: vec!["name"],
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Missing required fields: name"})
        );
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            resource: "Enterprise",
            id: 3,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Enterprise not found"})
        );
    }

    #[tokio::test]
    async fn forbidden_is_403() {
        let response = ApiError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn store_failure_surfaces_message() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("database error"));
    }

    #[tokio::test]
    async fn slider_lookup_errors_map_to_distinct_responses() {
        let missing = ApiError::from(SliderLookupError::SliderNotFound(1)).into_response();
        let invalid = ApiError::from(SliderLookupError::InvalidType {
            id: 1,
            tag: "banner".into(),
        })
        .into_response();
        let dangling = ApiError::from(SliderLookupError::ReferenceNotFound {
            id: 1,
            target: SliderTarget::News(8),
        })
        .into_response();

        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(dangling.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(missing).await["error"], "Slider not found");
        assert_eq!(body_json(invalid).await["error"], "Invalid slider type");
        assert_eq!(
            body_json(dangling).await["error"],
            "Referenced item not found"
        );
    }
}
