//! Task route handlers.

use super::{
    ApiError,
    dto::{TaskPayload, TaskResponse},
    extract::{ApiJson, ApiPath},
};
use crate::task::{domain::TaskId, ports::TaskRepository, services::TaskService};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mockable::Clock;

/// POST /tasks - Create a task
///
/// # Errors
///
/// Returns [`ApiError`] for malformed bodies, rule violations and duplicate
/// titles.
pub async fn create_task<R, C>(
    State(service): State<TaskService<R, C>>,
    ApiJson(payload): ApiJson<TaskPayload>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// GET /tasks - List all tasks
///
/// Answers `204 No Content` instead of an empty array.
///
/// # Errors
///
/// Returns [`ApiError`] when the store fails.
pub async fn list_tasks<R, C>(
    State(service): State<TaskService<R, C>>,
) -> Result<Response, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = service.list().await?;
    if tasks.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<TaskResponse> = tasks.iter().map(TaskResponse::from).collect();
    Ok(Json(body).into_response())
}

/// GET /tasks/:id - Get a specific task
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown identifiers.
pub async fn get_task<R, C>(
    State(service): State<TaskService<R, C>>,
    ApiPath(task_id): ApiPath<TaskId>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = service.get(task_id).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// PUT /tasks/:id - Replace a task's details
///
/// # Errors
///
/// Returns [`ApiError`] for unknown identifiers, malformed bodies and rule
/// violations.
pub async fn update_task<R, C>(
    State(service): State<TaskService<R, C>>,
    ApiPath(task_id): ApiPath<TaskId>,
    ApiJson(payload): ApiJson<TaskPayload>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = service.update(task_id, payload.into()).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// DELETE /tasks/:id - Delete a task
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown identifiers.
pub async fn delete_task<R, C>(
    State(service): State<TaskService<R, C>>,
    ApiPath(task_id): ApiPath<TaskId>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    service.delete(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health - Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
