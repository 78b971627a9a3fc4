//! End-to-end tests driving the router against an in-memory catalog.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use catalog_server::{build_router, create_memory_pool, AuthConfig, ServerConfig};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

async fn app_with(config: ServerConfig) -> (Router, SqlitePool) {
    let pool = create_memory_pool().await.unwrap();
    let app = build_router(pool.clone(), &config).unwrap();
    (app, pool)
}

async fn app() -> (Router, SqlitePool) {
    app_with(ServerConfig::default()).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn insert_raw_slider(pool: &SqlitePool, tag: &str, ref_id: i64) -> i64 {
    sqlx::query("INSERT INTO sliders (type, ref_id, position) VALUES (?, ?, 0)")
        .bind(tag)
        .bind(ref_id)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

#[tokio::test]
async fn enterprise_create_then_get() {
    let (app, _) = app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/enterprises",
            json!({"name": "Acme", "image_url": "x.png", "slug": "acme"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1}));

    let (status, body) = send(&app, get("/enterprises/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Acme", "image_url": "x.png", "description": "", "slug": "acme"})
    );
}

#[tokio::test]
async fn enterprise_missing_fields_is_400() {
    let (app, _) = app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/enterprises", json!({"name": "Acme"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Missing required fields: image_url, slug"})
    );
}

#[tokio::test]
async fn malformed_body_is_400_with_error_field() {
    let (app, _) = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_enterprise_is_404() {
    let (app, _) = app().await;

    let (status, body) = send(&app, get("/enterprises/7")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Enterprise not found"}));
}

#[tokio::test]
async fn product_replace_is_full_overwrite() {
    let (app, _) = app().await;

    send(
        &app,
        json_request(
            "POST",
            "/products",
            json!({
                "name": "Oat bar",
                "image_url": "oat.png",
                "slug": "oat-bar",
                "enterprise_id": 1,
                "manufacturer": "Acme",
                "proteins": 12
            }),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/products/1",
            json!({"name": "Oat bar", "image_url": "oat.png", "slug": "oat-bar"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"updated": 1}));

    let (_, body) = send(&app, get("/products/1")).await;
    assert_eq!(body["enterprise_id"], Value::Null);
    assert_eq!(body["manufacturer"], Value::Null);
    assert_eq!(body["proteins"], Value::Null);
}

#[tokio::test]
async fn replace_and_delete_of_missing_row_report_zero() {
    let (app, _) = app().await;

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/news/5",
            json!({"title": "T", "image_url": "t.png", "slug": "t"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"updated": 0}));

    let (status, body) = send(&app, delete("/news/5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deleted": 0}));
}

#[tokio::test]
async fn news_list_includes_created_at() {
    let (app, _) = app().await;

    send(
        &app,
        json_request(
            "POST",
            "/news",
            json!({"title": "Harvest", "image_url": "h.png", "slug": "harvest"}),
        ),
    )
    .await;

    let (status, body) = send(&app, get("/news")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0]["created_at"].is_string());
}

#[tokio::test]
async fn slider_single_lookup_modes() {
    let (app, pool) = app().await;

    send(
        &app,
        json_request(
            "POST",
            "/news",
            json!({
                "title": "Harvest",
                "image_url": "h.png",
                "short_description": "Short",
                "full_text": "",
                "slug": "harvest"
            }),
        ),
    )
    .await;
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/sliders",
            json!({"type": "news", "ref_id": 1, "position": 0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let news_slider = body["id"].as_i64().unwrap();

    let (status, body) = send(&app, get(&format!("/sliders/{news_slider}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": news_slider,
            "type": "news",
            "ref_id": 1,
            "position": 0,
            "title": "Harvest",
            "imageUrl": "h.png",
            "description": "Short",
            "full_text": "Short"
        })
    );

    let invalid = insert_raw_slider(&pool, "banner", 1).await;
    let (status, body) = send(&app, get(&format!("/sliders/{invalid}"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid slider type"}));

    let dangling = insert_raw_slider(&pool, "enterprise", 404).await;
    let (status, body) = send(&app, get(&format!("/sliders/{dangling}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Referenced item not found"}));

    let (status, body) = send(&app, get("/sliders/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Slider not found"}));
}

#[tokio::test]
async fn slider_list_skips_unresolvable_entries() {
    let (app, pool) = app().await;

    send(
        &app,
        json_request(
            "POST",
            "/enterprises",
            json!({"name": "Acme", "image_url": "x.png", "description": "Makers", "slug": "acme"}),
        ),
    )
    .await;
    send(
        &app,
        json_request(
            "POST",
            "/sliders",
            json!({"type": "enterprise", "ref_id": 1, "position": 2}),
        ),
    )
    .await;
    insert_raw_slider(&pool, "banner", 1).await;
    insert_raw_slider(&pool, "product", 1).await;

    let (status, body) = send(&app, get("/sliders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": 1,
            "type": "enterprise",
            "ref_id": 1,
            "position": 2,
            "title": "Acme",
            "imageUrl": "x.png",
            "description": "Makers"
        }])
    );
}

#[tokio::test]
async fn deleting_target_leaves_slider_dangling() {
    let (app, _) = app().await;

    send(
        &app,
        json_request(
            "POST",
            "/products",
            json!({"name": "Oat bar", "image_url": "oat.png", "slug": "oat-bar"}),
        ),
    )
    .await;
    send(
        &app,
        json_request(
            "POST",
            "/sliders",
            json!({"type": "product", "ref_id": 1, "position": 0}),
        ),
    )
    .await;

    let (status, body) = send(&app, delete("/products/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deleted": 1}));

    let (status, _) = send(&app, get("/products/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/sliders/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Referenced item not found"}));

    let (_, body) = send(&app, get("/sliders")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn slider_write_rejects_unknown_type() {
    let (app, _) = app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/sliders",
            json!({"type": "banner", "ref_id": 1, "position": 0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid type value: 'banner'"}));
}

#[tokio::test]
async fn slider_and_product_ids_accept_numeric_strings() {
    let (app, _) = app().await;

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/products",
            json!({"name": "Oat bar", "image_url": "oat.png", "slug": "oat", "enterprise_id": "3"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, product) = send(&app, get("/products/1")).await;
    assert_eq!(product["enterprise_id"], 3);

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/sliders",
            json!({"type": "product", "ref_id": "1", "position": "0"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1}));
}

#[tokio::test]
async fn news_slider_without_texts_has_null_full_text() {
    let (app, _) = app().await;

    send(
        &app,
        json_request(
            "POST",
            "/news",
            json!({"title": "t", "image_url": "i", "slug": "s"}),
        ),
    )
    .await;
    send(
        &app,
        json_request("POST", "/sliders", json!({"type": "news", "ref_id": 1, "position": 0})),
    )
    .await;

    let (status, item) = send(&app, get("/sliders/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item.get("full_text"), Some(&Value::Null));

    let (_, list) = send(&app, get("/sliders")).await;
    assert_eq!(list[0].get("full_text"), Some(&Value::Null));
}

#[tokio::test]
async fn login_returns_token() {
    let (app, _) = app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/login",
            json!({"username": "admin", "password": "Admin123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "token": "dummy-token-123"}));

    let (status, body) = send(
        &app,
        json_request("POST", "/login", json!({"username": "admin", "password": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body,
        json!({"success": false, "message": "Invalid credentials"})
    );
}

#[tokio::test]
async fn token_gate_protects_catalog_routes() {
    let (app, _) = app_with(ServerConfig {
        auth: AuthConfig {
            require_token: true,
            ..Default::default()
        },
        ..Default::default()
    })
    .await;

    let (status, body) = send(&app, get("/enterprises")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({"error": "Unauthorized"}));

    let wrong = Request::builder()
        .uri("/enterprises")
        .header(header::AUTHORIZATION, "Bearer nope")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, wrong).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let right = Request::builder()
        .uri("/enterprises")
        .header(header::AUTHORIZATION, "Bearer dummy-token-123")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, right).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // Login and health stay open.
    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/login",
            json!({"username": "admin", "password": "Admin123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn open_mode_ignores_tokens() {
    let (app, _) = app().await;

    let (status, _) = send(&app, get("/sliders")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let (app, _) = app_with(ServerConfig {
        cors_origins: vec!["https://shop.example".to_string()],
        ..Default::default()
    })
    .await;

    let request = Request::builder()
        .uri("/enterprises")
        .header(header::ORIGIN, "https://shop.example")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://shop.example"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}
