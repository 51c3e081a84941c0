//! HTTP API for the task board.
//!
//! Four routes over the board service:
//!
//! - `POST /api/tasks`: create (201)
//! - `GET /api/tasks`: list grouped by status
//! - `PUT /api/tasks/{id}`: partial update
//! - `DELETE /api/tasks/{id}`: delete
//!
//! Failures map to the board's wire contract: validation → 400, unresolved
//! id → 404, anything else → logged 500.

pub mod error;
pub mod handlers;

use axum::{
    Router,
    routing::{get, put},
};
use mockable::Clock;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub use error::ApiError;

use crate::task::{ports::TaskRepository, services::TaskBoardService};

/// Builds the API router over the given board service.
///
/// CORS is permissive: the board client is served from a different origin
/// in development, as the original deployment was.
pub fn router<R, C>(service: Arc<TaskBoardService<R, C>>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/tasks",
            get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>),
        )
        .route(
            "/api/tasks/{id}",
            put(handlers::update_task::<R, C>).delete(handlers::delete_task::<R, C>),
        )
        .layer(cors)
        .with_state(service)
}
