//! Common test utilities: in-memory database and router setup

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use roster_service::config::{ApiConfig, DatabaseConfig};
use roster_service::{module, RosterModule};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

/// Fresh in-memory SQLite database with migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn setup_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: Some("sqlite::memory:".to_string()),
        max_connections: 1,
        ..DatabaseConfig::default()
    };
    let conn = module::connect(&config)
        .await
        .expect("Failed to open in-memory database");
    module::migrate(&conn)
        .await
        .expect("Failed to run migrations");
    conn
}

/// Full router backed by a fresh in-memory database
pub async fn setup_app() -> Router {
    let conn = setup_db().await;
    RosterModule::init(&conn, &ApiConfig::default()).router()
}

/// Send one request through the router and decode the JSON body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}
