//! Shared fixtures for the `PostgreSQL` repository tests.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use corkboard::task::adapters::postgres::PostgresTaskRepository;

/// Connects to the database named by `TEST_DATABASE_URL` and bootstraps the
/// schema. Returns `None` when the variable is unset, which skips the test.
pub async fn repository() -> eyre::Result<Option<PostgresTaskRepository>> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        return Ok(None);
    };
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool = Pool::builder().max_size(2).build(manager)?;
    let repository = PostgresTaskRepository::new(pool);
    repository.ensure_schema().await?;
    Ok(Some(repository))
}
