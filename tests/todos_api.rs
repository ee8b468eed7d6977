//! End-to-end tests for the todo endpoints

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use common::{create_todo, register_user, send, test_app};

#[tokio::test]
async fn create_then_get_roundtrip_with_defaults() {
    let app = test_app().await;
    let (token, user) = register_user(&app, "ann").await;

    let todo = create_todo(&app, &token, "Buy milk", "Two liters").await;

    // Server-assigned fields are populated
    assert!(Uuid::parse_str(todo["id"].as_str().unwrap()).is_ok());
    assert_eq!(todo["status"], "pending");
    assert_eq!(todo["priority"], "medium");
    assert!(todo.get("dueDate").is_none());
    assert!(todo.get("createdAt").is_some());
    assert!(todo.get("updatedAt").is_some());
    assert_eq!(todo["owner"], user);

    let uri = format!("/api/todos/{}", todo["id"].as_str().unwrap());
    let (status, body) = send(&app, "GET", &uri, Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todo"]["title"], "Buy milk");
    assert_eq!(body["todo"]["description"], "Two liters");
    assert_eq!(body["todo"]["id"], todo["id"]);
}

#[tokio::test]
async fn create_ignores_owner_in_body() {
    let app = test_app().await;
    let (ann_token, ann) = register_user(&app, "ann").await;
    let (_, bob) = register_user(&app, "bob").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/todos",
        Some(&ann_token),
        Some(json!({
            "title": "Sneaky",
            "description": "try to assign to bob",
            "owner": bob["id"],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["todo"]["owner"]["id"], ann["id"]);
}

#[tokio::test]
async fn create_collects_every_validation_message() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/todos",
        Some(&token),
        Some(json!({
            "status": "done",
            "priority": "urgent",
            "dueDate": "tomorrow",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 5);
    assert!(errors.contains(&json!(
        "Title is required and cannot be longer than 100 characters"
    )));
    assert!(errors.contains(&json!("Invalid status")));
    assert!(errors.contains(&json!("Invalid date format")));
}

#[tokio::test]
async fn list_returns_count_and_newest_first() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;

    create_todo(&app, &token, "first", "one").await;
    create_todo(&app, &token, "second", "two").await;
    create_todo(&app, &token, "third", "three").await;

    let (status, body) = send(&app, "GET", "/api/todos", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    let titles: Vec<&str> = body["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|todo| todo["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn list_filters_by_status_and_priority() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;

    send(
        &app,
        "POST",
        "/api/todos",
        Some(&token),
        Some(json!({
            "title": "Pay rent",
            "description": "monthly",
            "status": "completed",
            "priority": "high",
        })),
    )
    .await;
    create_todo(&app, &token, "Walk dog", "around the block").await;

    let (status, body) = send(
        &app,
        "GET",
        "/api/todos?status=completed&priority=high",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["todos"][0]["title"], "Pay rent");
}

#[tokio::test]
async fn search_matches_title_and_description_case_insensitively() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;

    create_todo(&app, &token, "Buy Groceries", "weekly shop").await;
    create_todo(&app, &token, "Errand", "pick up groceries on the way").await;
    create_todo(&app, &token, "Walk dog", "around the block").await;

    let (status, body) = send(
        &app,
        "GET",
        "/api/todos?search=groceries",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    for todo in body["todos"].as_array().unwrap() {
        let title = todo["title"].as_str().unwrap().to_lowercase();
        let description = todo["description"].as_str().unwrap().to_lowercase();
        assert!(title.contains("groceries") || description.contains("groceries"));
    }
}

#[tokio::test]
async fn list_rejects_invalid_filters() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;

    let (status, body) = send(&app, "GET", "/api/todos?status=done", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]
        .as_array()
        .unwrap()
        .contains(&json!("Invalid status")));
}

#[tokio::test]
async fn get_with_malformed_id_returns_400() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;

    let (status, body) = send(&app, "GET", "/api/todos/not-a-uuid", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid todo ID");
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;

    let uri = format!("/api/todos/{}", Uuid::new_v4());
    let (status, body) = send(&app, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Todo not found");
}

#[tokio::test]
async fn partial_update_changes_only_sent_fields() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;
    let todo = create_todo(&app, &token, "Buy milk", "Two liters").await;

    let uri = format!("/api/todos/{}", todo["id"].as_str().unwrap());
    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({"status": "completed"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo updated successfully");
    assert_eq!(body["todo"]["status"], "completed");
    assert_eq!(body["todo"]["title"], "Buy milk");
    assert_eq!(body["todo"]["description"], "Two liters");
}

#[tokio::test]
async fn update_sets_and_clears_due_date() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;
    let todo = create_todo(&app, &token, "Dated", "has a due date").await;
    let uri = format!("/api/todos/{}", todo["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({"dueDate": "2031-05-20"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["todo"]["dueDate"]
        .as_str()
        .unwrap()
        .starts_with("2031-05-20"));

    // Explicit null clears it
    let (status, body) = send(&app, "PUT", &uri, Some(&token), Some(json!({"dueDate": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["todo"].get("dueDate").is_none());
}

#[tokio::test]
async fn foreign_update_is_indistinguishable_from_missing() {
    let app = test_app().await;
    let (ann_token, _) = register_user(&app, "ann").await;
    let (bob_token, _) = register_user(&app, "bob").await;
    let todo = create_todo(&app, &ann_token, "Ann's todo", "private").await;
    let payload = json!({"title": "hijacked"});

    let foreign_uri = format!("/api/todos/{}", todo["id"].as_str().unwrap());
    let (foreign_status, foreign_body) =
        send(&app, "PUT", &foreign_uri, Some(&bob_token), Some(payload.clone())).await;

    let missing_uri = format!("/api/todos/{}", Uuid::new_v4());
    let (missing_status, missing_body) =
        send(&app, "PUT", &missing_uri, Some(&bob_token), Some(payload)).await;

    // No existence leak: both cases answer identically
    assert_eq!(foreign_status, StatusCode::NOT_FOUND);
    assert_eq!(foreign_status, missing_status);
    assert_eq!(foreign_body, missing_body);

    // Ann's todo is untouched
    let (_, body) = send(&app, "GET", &foreign_uri, Some(&ann_token), None).await;
    assert_eq!(body["todo"]["title"], "Ann's todo");
}

#[tokio::test]
async fn update_rejects_blank_supplied_title() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;
    let todo = create_todo(&app, &token, "Buy milk", "Two liters").await;

    let uri = format!("/api/todos/{}", todo["id"].as_str().unwrap());
    let (status, body) = send(&app, "PUT", &uri, Some(&token), Some(json!({"title": "   "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]
        .as_array()
        .unwrap()
        .contains(&json!("Title cannot be empty")));
}

#[tokio::test]
async fn delete_succeeds_once_then_404s() {
    let app = test_app().await;
    let (token, _) = register_user(&app, "ann").await;
    let todo = create_todo(&app, &token, "Remove me", "soon").await;
    let uri = format!("/api/todos/{}", todo["id"].as_str().unwrap());

    let (status, body) = send(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo deleted successfully");

    // Idempotence: the second delete is a 404, not an error
    let (status, body) = send(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "Todo not found or you do not have permission to delete it"
    );

    let (status, _) = send(&app, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn foreign_delete_is_indistinguishable_from_missing() {
    let app = test_app().await;
    let (ann_token, _) = register_user(&app, "ann").await;
    let (bob_token, _) = register_user(&app, "bob").await;
    let todo = create_todo(&app, &ann_token, "Ann's todo", "private").await;

    let foreign_uri = format!("/api/todos/{}", todo["id"].as_str().unwrap());
    let (foreign_status, foreign_body) =
        send(&app, "DELETE", &foreign_uri, Some(&bob_token), None).await;

    let missing_uri = format!("/api/todos/{}", Uuid::new_v4());
    let (missing_status, missing_body) =
        send(&app, "DELETE", &missing_uri, Some(&bob_token), None).await;

    assert_eq!(foreign_status, StatusCode::NOT_FOUND);
    assert_eq!(foreign_status, missing_status);
    assert_eq!(foreign_body, missing_body);

    // Still there for its owner
    let (status, _) = send(&app, "GET", &foreign_uri, Some(&ann_token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn todo_routes_require_authentication() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/api/todos", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/todos",
        None,
        Some(json!({"title": "t", "description": "d"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
