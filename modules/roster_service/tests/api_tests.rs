//! REST API tests through the full router

mod common;

use axum::http::StatusCode;
use common::{send, setup_app};
use serde_json::json;

#[tokio::test]
async fn test_group_membership_scenario() {
    let app = setup_app().await;

    println!("\n📝 Stage 1: Create group A");
    let (status, group) = send(&app, "POST", "/groups/", Some(json!({"name": "A"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(group, json!({"id": 1, "name": "A", "students": []}));

    println!("\n📝 Stage 2: Create Bob in group 1");
    let (status, bob) = send(
        &app,
        "POST",
        "/students/?group_id=1",
        Some(json!({"name": "Bob", "email": "bob@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        bob,
        json!({"id": 1, "name": "Bob", "email": "bob@x.com", "group_id": 1})
    );

    println!("\n📝 Stage 3: Group 1 lists Bob");
    let (status, members) = send(&app, "GET", "/groups/1/students/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(members, json!([bob.clone()]));

    let (_, group) = send(&app, "GET", "/groups/1", None).await;
    assert_eq!(group["students"], json!([bob]));

    println!("\n📝 Stage 4: Remove Bob from group 1");
    let (status, cleared) = send(&app, "DELETE", "/groups/1/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cleared["group_id"], serde_json::Value::Null);

    let (status, members) = send(&app, "GET", "/groups/1/students/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(members, json!([]));

    println!("\n📝 Stage 5: Add Bob back");
    let (status, assigned) = send(&app, "POST", "/groups/1/students/?student_id=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assigned["group_id"], 1);
}

#[tokio::test]
async fn test_transfer_scenario() {
    let app = setup_app().await;
    send(&app, "POST", "/groups/", Some(json!({"name": "G1"}))).await;
    send(&app, "POST", "/groups/", Some(json!({"name": "G2"}))).await;
    send(
        &app,
        "POST",
        "/students/?group_id=1",
        Some(json!({"name": "Bob", "email": "bob@x.com"})),
    )
    .await;

    let (status, body) = send(&app, "POST", "/students/1/transfer?new_group_id=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Student 1 transferred to group 2"}));

    let (_, student) = send(&app, "GET", "/students/1", None).await;
    assert_eq!(student["group_id"], 2);

    let (_, old_members) = send(&app, "GET", "/groups/1/students/", None).await;
    assert_eq!(old_members, json!([]));

    let (status, body) = send(&app, "POST", "/students/7/transfer?new_group_id=2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Student not found");

    let (status, body) = send(&app, "POST", "/students/1/transfer?new_group_id=9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Group not found");
}

#[tokio::test]
async fn test_not_found_responses() {
    let app = setup_app().await;

    for (method, uri, detail) in [
        ("GET", "/students/1", "Student not found"),
        ("DELETE", "/students/1", "Student not found"),
        ("GET", "/groups/1", "Group not found"),
        ("DELETE", "/groups/1", "Group not found"),
        ("GET", "/groups/1/students/", "Group not found"),
        ("POST", "/groups/1/students/?student_id=1", "Group not found"),
        ("DELETE", "/groups/1/students/1", "Group not found"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(body["detail"], detail, "{} {}", method, uri);
        assert_eq!(body["status"], 404);
    }

    send(&app, "POST", "/groups/", Some(json!({"name": "A"}))).await;
    let (status, body) = send(&app, "POST", "/groups/1/students/?student_id=5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Student not found");

    let (status, body) = send(
        &app,
        "POST",
        "/students/?group_id=3",
        Some(json!({"name": "Bob", "email": "bob@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Group not found");
}

#[tokio::test]
async fn test_duplicates_are_conflicts() {
    let app = setup_app().await;
    send(&app, "POST", "/groups/", Some(json!({"name": "A"}))).await;

    let (status, body) = send(&app, "POST", "/groups/", Some(json!({"name": "A"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "Group with this name already exists");

    let bob = json!({"name": "Bob", "email": "bob@x.com"});
    let (status, _) = send(&app, "POST", "/students/?group_id=1", Some(bob.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/students/?group_id=1", Some(bob)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "Student with this email already exists");
}

#[tokio::test]
async fn test_malformed_input_is_client_error() {
    let app = setup_app().await;
    send(&app, "POST", "/groups/", Some(json!({"name": "A"}))).await;

    // Missing group_id query parameter
    let (status, _) = send(
        &app,
        "POST",
        "/students/",
        Some(json!({"name": "Bob", "email": "bob@x.com"})),
    )
    .await;
    assert!(status.is_client_error());

    // Body missing a field
    let (status, _) = send(&app, "POST", "/students/?group_id=1", Some(json!({"name": "Bob"}))).await;
    assert!(status.is_client_error());

    // Non-numeric path id
    let (status, _) = send(&app, "GET", "/students/abc", None).await;
    assert!(status.is_client_error());

    // Domain validation
    let (status, body) = send(
        &app,
        "POST",
        "/students/?group_id=1",
        Some(json!({"name": "Bob", "email": "bob"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Validation Error");

    let (status, _) = send(&app, "GET", "/students/?limit=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_skip_beyond_database_offset_is_rejected() {
    let app = setup_app().await;

    for uri in [
        "/students/?skip=18446744073709551615",
        "/groups/?skip=9223372036854775808",
    ] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["title"], "Validation Error");
    }

    let (status, body) = send(&app, "GET", "/students/?skip=9223372036854775807", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_pagination() {
    let app = setup_app().await;
    send(&app, "POST", "/groups/", Some(json!({"name": "A"}))).await;
    for i in 1..=5 {
        send(
            &app,
            "POST",
            "/students/?group_id=1",
            Some(json!({"name": format!("S{}", i), "email": format!("s{}@x.com", i)})),
        )
        .await;
    }

    let (_, all) = send(&app, "GET", "/students/", None).await;
    assert_eq!(all.as_array().map(Vec::len), Some(5));

    let (_, first) = send(&app, "GET", "/students/?skip=0&limit=2", None).await;
    let (_, second) = send(&app, "GET", "/students/?skip=2&limit=2", None).await;
    let ids = |page: &serde_json::Value| {
        page.as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_i64().unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), vec![1, 2]);
    assert_eq!(ids(&second), vec![3, 4]);

    let (_, groups) = send(&app, "GET", "/groups/?limit=1", None).await;
    assert_eq!(groups[0]["students"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn test_delete_endpoints() {
    let app = setup_app().await;
    send(&app, "POST", "/groups/", Some(json!({"name": "A"}))).await;
    send(
        &app,
        "POST",
        "/students/?group_id=1",
        Some(json!({"name": "Bob", "email": "bob@x.com"})),
    )
    .await;
    send(
        &app,
        "POST",
        "/students/?group_id=1",
        Some(json!({"name": "Amy", "email": "amy@x.com"})),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/students/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Student deleted"}));

    let (status, body) = send(&app, "DELETE", "/groups/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Group deleted"}));

    let (status, bob) = send(&app, "GET", "/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bob["group_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_health_and_openapi() {
    let app = setup_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, doc) = send(&app, "GET", "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/students/{id}/transfer"].is_object());
    assert!(doc["components"]["schemas"]["GroupDto"].is_object());
}
