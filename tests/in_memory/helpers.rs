//! Shared fixtures for end-to-end tests.

use std::sync::Arc;

use mockable::DefaultClock;

use corkboard::api;
use corkboard::task::{
    adapters::memory::InMemoryTaskRepository, services::TaskBoardService,
};

/// Service type used by every end-to-end test.
pub type TestService = TaskBoardService<InMemoryTaskRepository, DefaultClock>;

/// Builds a board service over a fresh in-memory repository.
pub fn test_service() -> Arc<TestService> {
    Arc::new(TaskBoardService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    ))
}

/// Serves the API for the given service on an ephemeral local port and
/// returns the base URL.
///
/// The serve task is detached; it dies with the test runtime.
pub async fn spawn_server(service: Arc<TestService>) -> eyre::Result<String> {
    let app = api::router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, app).await {
            tracing::error!(error = %err, "test server stopped");
        }
    });
    Ok(format!("http://{address}"))
}
