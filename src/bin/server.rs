//! Corkboard API server.
//!
//! Wires environment configuration, the `PostgreSQL` connection pool, the
//! board service, and the axum router, then serves `/api/tasks` until the
//! process is stopped.

use std::net::Ipv4Addr;
use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use tracing_subscriber::EnvFilter;

use corkboard::api;
use corkboard::config::ServerConfig;
use corkboard::task::{adapters::postgres::PostgresTaskRepository, services::TaskBoardService};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;

    let manager = ConnectionManager::<PgConnection>::new(config.database.url());
    let pool = Pool::builder().build(manager)?;
    let repository = PostgresTaskRepository::new(pool);
    repository.ensure_schema().await?;

    let service = Arc::new(TaskBoardService::new(
        Arc::new(repository),
        Arc::new(DefaultClock),
    ));
    let app = api::router(service);

    let listener =
        tokio::net::TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.listen_port)).await?;
    tracing::info!(port = config.listen_port, "corkboard API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
