use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_start_requires_json_body() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/session/start")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Sin content-type JSON el extractor rechaza el request
    assert_ne!(response.status(), StatusCode::OK);
    assert_ne!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_matching_route_rejects_malformed_uuid() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/matching/child/not-a-uuid/vans")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// App de test con la misma forma de rutas que el server real, sin
// base de datos ni Redis detrás.
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/test",
            get(|| async { Json(json!({ "status": "ok" })) }),
        )
        .route(
            "/api/session/start",
            post(|Json(_body): Json<serde_json::Value>| async { Json(json!({ "ok": true })) }),
        )
        .route(
            "/api/matching/child/:child_id/vans",
            get(
                |axum::extract::Path(_id): axum::extract::Path<uuid::Uuid>| async {
                    Json(json!({ "vans": [] }))
                },
            ),
        )
}
