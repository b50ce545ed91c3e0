//! Shared helpers for driving the full router in-process.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use ground_adapters::{JwtIssuer, Pbkdf2Hasher};
use ground_backend::{auth::AuthService, build_router, database, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub const SECRET: &[u8] = b"integration-test-secret";

/// Fresh router over an empty store. Cheap hashing keeps the suite fast.
pub fn app() -> Router {
    let auth = AuthService::new(
        Arc::new(Pbkdf2Hasher::new(1_000)),
        Arc::new(JwtIssuer::new(SECRET, chrono::Duration::days(7))),
    );
    let state = Arc::new(AppState::new(database::init_store(), auth));
    build_router(state, &["http://localhost:3000".to_string()])
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let authorization = token.map(|token| format!("Bearer {}", token));
    send_with_authorization(app, method, uri, authorization.as_deref(), body).await
}

/// Like `send`, but with the raw `Authorization` header value.
pub async fn send_with_authorization(
    app: &Router,
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post(app: &Router, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

/// Signs up a teacher and returns their token.
pub async fn signup(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/signup",
        None,
        Some(json!({
            "email": email,
            "password": "hunter22",
            "name": "Kim",
            "school": "Ground Elementary"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "signup failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

/// Creates a class and returns its id.
pub async fn create_class(app: &Router, token: &str, grade: i64, number: i64) -> String {
    let (status, body) = post(
        app,
        "/api/classes",
        token,
        json!({ "name": format!("{}-{}", grade, number), "grade": grade, "class_number": number }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create class failed: {body}");
    body["id"].as_str().unwrap().to_string()
}

/// Enrolls a student and returns its id.
pub async fn add_student(app: &Router, token: &str, class_id: &str, name: &str, number: i64) -> String {
    let (status, body) = post(
        app,
        &format!("/api/classes/{}/students", class_id),
        token,
        json!({ "name": name, "student_number": number }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "add student failed: {body}");
    body["id"].as_str().unwrap().to_string()
}

pub async fn award(app: &Router, token: &str, student_id: &str, amount: i64, reason: &str) -> Value {
    let (status, body) = post(
        app,
        "/api/points",
        token,
        json!({ "student_id": student_id, "amount": amount, "reason": reason }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "award failed: {body}");
    body
}
