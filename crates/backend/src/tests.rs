//! Router-level tests of the inline-create endpoints.

use crate::routes::configure_routes;
use crate::shared::data::db;
use crate::shared::multipart_form::tests::{multipart_request, Part};
use crate::shared::state::AppState;
use crate::shared::uploads::UploadStore;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_app(max_file_size: usize) -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let conn = db::connect(&dir.path().join("app.db")).await.unwrap();
    let uploads = UploadStore::new(dir.path().join("uploads"), max_file_size);
    (configure_routes(AppState::new(conn, uploads), None), dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_create_customer_returns_id_and_name() {
    let (app, _dir) = test_app(1024).await;

    let (status, body) = send(
        &app,
        multipart_request("/api/customer", &[Part::Text("name", "Acme")]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["name"], "Acme");

    let (status, body) = send(
        &app,
        multipart_request(
            "/api/customer",
            &[
                Part::Text("name", "Beta Corp"),
                Part::Text("email", "sales@beta.test"),
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["id"], 2);
    assert_eq!(body["result"]["email"], "sales@beta.test");

    let (status, options) = send(&app, get("/api/customer/options")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        options,
        json!([
            {"value": "1", "label": "Acme"},
            {"value": "2", "label": "Beta Corp"}
        ])
    );
}

#[tokio::test]
async fn test_invalid_customer_is_rejected_with_field_errors() {
    let (app, _dir) = test_app(1024).await;

    let (status, body) = send(
        &app,
        multipart_request(
            "/api/customer",
            &[Part::Text("name", " "), Part::Text("email", "nope")],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"]["name"][0], "This field is required.");
    assert_eq!(body["errors"]["email"][0], "Enter a valid email address.");

    let (_, list) = send(&app, get("/api/customer")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_customer_logo_is_stored_and_served() {
    let (app, dir) = test_app(1024).await;

    let (status, body) = send(
        &app,
        multipart_request(
            "/api/customer",
            &[
                Part::Text("name", "Gamma"),
                Part::File("logo", "gamma.png", "image/png", b"\x89PNG-data"),
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let logo_url = body["result"]["logoUrl"].as_str().unwrap().to_string();
    assert!(logo_url.starts_with("/uploads/"));

    let stored = logo_url.trim_start_matches("/uploads/");
    assert!(dir.path().join("uploads").join(stored).exists());

    let response = app.clone().oneshot(get(&logo_url)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_oversized_logo_is_rejected() {
    let (app, _dir) = test_app(8).await;
    let (status, body) = send(
        &app,
        multipart_request(
            "/api/customer",
            &[
                Part::Text("name", "Delta"),
                Part::File("logo", "delta.png", "image/png", &[0u8; 64]),
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["logo"][0]
        .as_str()
        .unwrap()
        .starts_with("File is too large"));
}

#[tokio::test]
async fn test_body_over_limit_reports_logo_error() {
    let (app, _dir) = test_app(8).await;
    // Larger than max_file_size plus the form overhead: cut off by the body limit
    let logo = vec![0u8; 96 * 1024];
    let (status, body) = send(
        &app,
        multipart_request(
            "/api/customer",
            &[
                Part::Text("name", "Echo"),
                Part::File("logo", "echo.png", "image/png", &logo),
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["success"], false);
    assert!(body["errors"]["logo"][0]
        .as_str()
        .unwrap()
        .starts_with("File is too large"));

    let (_, customers) = send(&app, get("/api/customer")).await;
    assert!(customers.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_tag_name_is_rejected() {
    let (app, _dir) = test_app(1024).await;

    let (status, _) = send(
        &app,
        multipart_request(
            "/api/tag",
            &[Part::Text("name", "Urgent"), Part::Text("color", "#FF0000")],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        multipart_request("/api/tag", &[Part::Text("name", "urgent")]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["name"][0], "Tag with this name already exists.");

    let (_, tags) = send(&app, get("/api/tag")).await;
    assert_eq!(tags.as_array().unwrap().len(), 1);
    assert_eq!(tags[0]["color"], "#ff0000");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_tag_creates_store_one_row() {
    let (app, _dir) = test_app(1024).await;

    let requests: Vec<_> = (0..8)
        .map(|i| {
            let app = app.clone();
            let name = if i % 2 == 0 { "Urgent" } else { "URGENT" };
            tokio::spawn(async move {
                send(&app, multipart_request("/api/tag", &[Part::Text("name", name)])).await
            })
        })
        .collect();

    let mut created = 0;
    for request in requests {
        let (status, body) = request.await.unwrap();
        if status == StatusCode::OK {
            created += 1;
        } else {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["errors"]["name"][0], "Tag with this name already exists.");
        }
    }
    assert_eq!(created, 1);

    let (_, tags) = send(&app, get("/api/tag")).await;
    assert_eq!(tags.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_memo_references_are_validated() {
    let (app, _dir) = test_app(1024).await;
    send(
        &app,
        multipart_request("/api/customer", &[Part::Text("name", "Acme")]),
    )
    .await;
    send(
        &app,
        multipart_request("/api/tag", &[Part::Text("name", "Urgent")]),
    )
    .await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/memo",
            json!({"title": "Quarterly review", "customerId": 9, "tagIds": [1, 5]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["customerId"].is_array());
    assert_eq!(body["errors"]["tagIds"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        post_json(
            "/api/memo",
            json!({"title": "Quarterly review", "customerId": 1, "tagIds": [1, 1]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["tagIds"], json!([1]));

    let (_, memos) = send(&app, get("/api/memo")).await;
    assert_eq!(memos[0]["title"], "Quarterly review");
    assert_eq!(memos[0]["customerId"], 1);
}

#[tokio::test]
async fn test_health() {
    let (app, _dir) = test_app(1024).await;
    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
