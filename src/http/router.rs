//! Route table and middleware stack.

use super::handlers::{create_task, delete_task, get_task, health, list_tasks, update_task};
use crate::task::{ports::TaskRepository, services::TaskService};
use axum::{Router, extract::Request, middleware::Next, response::Response, routing::get};
use mockable::Clock;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Builds the application router around a task service.
pub fn router<R, C>(service: TaskService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(
            "/tasks",
            get(list_tasks::<R, C>).post(create_task::<R, C>),
        )
        .route(
            "/tasks/:id",
            get(get_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Tags each request with a generated ID and logs its outcome.
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!("request", request_id = %request_id, method = %method, uri = %uri);
    let response = next.run(request).instrument(span).await;

    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "request completed"
    );
    response
}
