//! Route-level tests for rejected requests and their error bodies.

use crate::http_api::helpers::{
    app, create_task, days_from_now, send_empty, send_json, send_raw, task_body,
};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

const BAD_SYNTAX: &str = "The request cannot be fulfilled due to bad syntax.";

fn assert_error(body: Option<Value>, error: &str, message: &str) {
    let body = body.expect("error responses carry a body");
    assert_eq!(body["error"], error);
    assert_eq!(body["message"], message);
}

#[rstest]
#[case::yesterday(-1)]
#[case::long_ago(-400)]
#[tokio::test]
async fn post_with_past_expiration_is_unprocessable(app: Router, #[case] days: i64) {
    let response = send_json(
        &app,
        Method::POST,
        "/tasks",
        &task_body("Too late", days_from_now(days)),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.body.clone();
    assert_error(
        response.body,
        "Unprocessable Entity",
        "Expiration date must be in the future.",
    );
    assert_eq!(
        body.expect("body")["details"],
        json!(["expirationDate: Expiration date must be in the future."])
    );
}

#[rstest]
#[tokio::test]
async fn post_with_blank_title_is_unprocessable(app: Router) {
    let response = send_json(
        &app,
        Method::POST,
        "/tasks",
        &task_body("   ", days_from_now(1)),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(response.body, "Unprocessable Entity", "Title is required.");
}

#[rstest]
#[tokio::test]
async fn post_with_existing_title_conflicts(app: Router) {
    create_task(&app, "Buy milk", 1).await;

    let response = send_json(
        &app,
        Method::POST,
        "/tasks",
        &task_body("Buy milk", days_from_now(5)),
    )
    .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    let body = response.body.clone();
    assert_error(
        response.body,
        "Conflict",
        "A task with the given title already exists.",
    );
    assert_eq!(body.expect("body")["details"], Value::Null);
}

#[rstest]
#[case::not_json(Some("title=Buy milk".to_owned()))]
#[case::missing_expiration(Some(json!({"title": "Buy milk"}).to_string()))]
#[case::bad_timestamp(Some(json!({"title": "Buy milk", "expirationDate": "soon"}).to_string()))]
#[case::no_body(None)]
#[tokio::test]
async fn post_with_malformed_body_is_bad_request(app: Router, #[case] body: Option<String>) {
    let response = send_raw(&app, Method::POST, "/tasks", body).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error(response.body, "Bad Request", BAD_SYNTAX);
}

#[rstest]
#[tokio::test]
async fn unknown_ids_are_not_found(app: Router) {
    let uri = format!("/tasks/{}", Uuid::new_v4());

    let get = send_empty(&app, Method::GET, &uri).await;
    let put = send_json(&app, Method::PUT, &uri, &task_body("Ghost", days_from_now(1))).await;
    let delete = send_empty(&app, Method::DELETE, &uri).await;

    for response in [get, put, delete] {
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        let body = response.body.expect("error responses carry a body");
        assert_eq!(body["error"], "Not Found");
    }
}

#[rstest]
#[tokio::test]
async fn non_uuid_ids_are_bad_requests(app: Router) {
    let response = send_empty(&app, Method::GET, "/tasks/not-a-uuid").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error(response.body, "Bad Request", BAD_SYNTAX);
}

#[rstest]
#[tokio::test]
async fn put_with_expiration_before_creation_is_unprocessable_and_leaves_task(app: Router) {
    let created = create_task(&app, "Report", 1).await;
    let uri = format!("/tasks/{}", created.id);

    let response = send_json(&app, Method::PUT, &uri, &task_body("Report", days_from_now(-1))).await;
    let fetched = send_empty(&app, Method::GET, &uri).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(
        response.body,
        "Unprocessable Entity",
        "Expiration date cannot be before creation date.",
    );
    assert_eq!(fetched.task(), created);
}

#[rstest]
#[tokio::test]
async fn put_onto_another_tasks_title_conflicts(app: Router) {
    create_task(&app, "First", 1).await;
    let second = create_task(&app, "Second", 1).await;

    let response = send_json(
        &app,
        Method::PUT,
        &format!("/tasks/{}", second.id),
        &task_body("First", days_from_now(2)),
    )
    .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}
