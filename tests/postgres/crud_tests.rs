//! CRUD coverage for the `PostgreSQL`-backed repository.

use mockable::DefaultClock;

use corkboard::task::domain::{Task, TaskId, TaskPatch, TaskStatus, TaskTitle};
use corkboard::task::ports::{TaskRepository, TaskRepositoryError};

use super::helpers::repository;

fn sample_task(title: &str, description: Option<&str>) -> eyre::Result<Task> {
    Ok(Task::new(
        TaskTitle::new(title)?,
        description.map(ToOwned::to_owned),
        &DefaultClock,
    ))
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_then_find_round_trips_every_field() -> eyre::Result<()> {
    let Some(repository) = repository().await? else {
        return Ok(());
    };
    let task = sample_task("Persisted task", Some("Survives the round trip"))?;

    repository.insert(&task).await?;
    let found = repository.find_by_id(task.id()).await?;

    let stored = found.ok_or_else(|| eyre::eyre!("task not stored"))?;
    assert_eq!(stored.id(), task.id());
    assert_eq!(stored.title(), "Persisted task");
    assert_eq!(stored.description(), Some("Survives the round trip"));
    assert_eq!(stored.status(), TaskStatus::ToDo);
    // TIMESTAMPTZ keeps microseconds; the in-memory clock has nanoseconds.
    assert_eq!(
        stored.created_at().timestamp_micros(),
        task.created_at().timestamp_micros()
    );
    assert_eq!(
        stored.updated_at().timestamp_micros(),
        task.updated_at().timestamp_micros()
    );

    repository.delete(task.id()).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn find_unknown_id_is_none() -> eyre::Result<()> {
    let Some(repository) = repository().await? else {
        return Ok(());
    };

    assert_eq!(repository.find_by_id(TaskId::new()).await?, None);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn update_persists_changes_and_clears_description() -> eyre::Result<()> {
    let Some(repository) = repository().await? else {
        return Ok(());
    };
    let mut task = sample_task("Moving on", Some("About to be cleared"))?;
    repository.insert(&task).await?;

    task.apply(
        TaskPatch::new()
            .with_status(TaskStatus::Done)
            .with_description(None),
        &DefaultClock,
    );
    repository.update(&task).await?;

    let found = repository.find_by_id(task.id()).await?;
    let stored = found.ok_or_else(|| eyre::eyre!("task vanished"))?;
    assert_eq!(stored.status(), TaskStatus::Done);
    assert_eq!(stored.description(), None);
    assert_eq!(stored.title(), "Moving on");

    repository.delete(task.id()).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_row_is_not_found() -> eyre::Result<()> {
    let Some(repository) = repository().await? else {
        return Ok(());
    };
    let task = sample_task("Never inserted", None)?;

    let result = repository.update(&task).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == task.id()
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_row_exactly_once() -> eyre::Result<()> {
    let Some(repository) = repository().await? else {
        return Ok(());
    };
    let task = sample_task("Deleted soon", None)?;
    repository.insert(&task).await?;

    repository.delete(task.id()).await?;
    assert_eq!(repository.find_by_id(task.id()).await?, None);

    let second = repository.delete(task.id()).await;
    assert!(matches!(
        second,
        Err(TaskRepositoryError::NotFound(id)) if id == task.id()
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn listing_keeps_creation_order() -> eyre::Result<()> {
    let Some(repository) = repository().await? else {
        return Ok(());
    };
    let first = sample_task("Ordering first", None)?;
    let second = sample_task("Ordering second", None)?;
    repository.insert(&first).await?;
    repository.insert(&second).await?;

    let all = repository.list_all().await?;
    // The database is shared; only the relative order of our rows matters.
    let position_of = |id: TaskId| all.iter().position(|task| task.id() == id);
    let first_at = position_of(first.id()).ok_or_else(|| eyre::eyre!("first row missing"))?;
    let second_at = position_of(second.id()).ok_or_else(|| eyre::eyre!("second row missing"))?;
    assert!(first_at < second_at);

    repository.delete(first.id()).await?;
    repository.delete(second.id()).await?;
    Ok(())
}
