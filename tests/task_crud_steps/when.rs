//! When steps for task CRUD BDD scenarios.

use super::world::{TaskApiWorld, days_from_now};
use axum::http::{Method, StatusCode};
use chrono::Utc;
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#"a task titled "{title}" with expiration day offset {days:i64} is created"#)]
fn create_task(world: &mut TaskApiWorld, title: String, days: i64) -> Result<(), eyre::Report> {
    let expiration = days_from_now(days);
    let body = json!({
        "title": title,
        "expirationDate": expiration.to_rfc3339(),
    });

    let start = Utc::now();
    world.send(Method::POST, "/tasks", Some(&body))?;
    let end = Utc::now();

    world.create_window = Some((start, end));
    world.requested_expiration = Some(expiration);
    if world.last_status == Some(StatusCode::CREATED) {
        world.created_task = Some(world.last_task()?);
    }
    Ok(())
}

#[when("the created task is requested")]
fn request_created_task(world: &mut TaskApiWorld) -> Result<(), eyre::Report> {
    let uri = world.created_task_uri()?;
    world.send(Method::GET, &uri, None)
}

#[when(r#"the created task is updated with title "{title}" with expiration day offset {days:i64}"#)]
fn update_created_task(
    world: &mut TaskApiWorld,
    title: String,
    days: i64,
) -> Result<(), eyre::Report> {
    let uri = world.created_task_uri()?;
    let expiration = days_from_now(days);
    let body = json!({
        "title": title,
        "expirationDate": expiration.to_rfc3339(),
    });
    world.requested_expiration = Some(expiration);
    world.send(Method::PUT, &uri, Some(&body))
}

#[when("the created task is deleted")]
fn delete_created_task(world: &mut TaskApiWorld) -> Result<(), eyre::Report> {
    let uri = world.created_task_uri()?;
    world.send(Method::DELETE, &uri, None)
}

#[when("all tasks are listed")]
fn list_tasks(world: &mut TaskApiWorld) -> Result<(), eyre::Report> {
    world.send(Method::GET, "/tasks", None)
}
