//! End-to-end flows through the client cache and drag controller.
//!
//! These tests stand in for the browser: the cache talks to a live server
//! through the HTTP adapter (or to the service directly through the local
//! adapter), and drag gestures drive the same status updates a user would.

use std::sync::Arc;

use eyre::OptionExt;
use mockable::DefaultClock;

use corkboard::board::adapters::{HttpBoardApi, LocalBoardApi};
use corkboard::board::ports::BoardApi;
use corkboard::board::{DragController, DropOutcome, MutationOutcome, TaskCache};
use corkboard::task::domain::{TaskId, TaskPatch, TaskStatus};

use super::helpers::{spawn_server, test_service};

fn http_cache(base_url: &str) -> TaskCache<HttpBoardApi, DefaultClock> {
    TaskCache::new(
        Arc::new(HttpBoardApi::new(base_url)),
        Arc::new(DefaultClock),
    )
}

fn only_task_id(
    cache: &TaskCache<impl BoardApi, DefaultClock>,
    status: TaskStatus,
) -> eyre::Result<TaskId> {
    Ok(cache
        .columns()
        .column(status)
        .first()
        .ok_or_eyre("expected a cached task")?
        .id())
}

#[tokio::test(flavor = "multi_thread")]
async fn create_lands_in_the_cache_via_full_refresh() -> eyre::Result<()> {
    let base_url = spawn_server(test_service()).await?;
    let mut cache = http_cache(&base_url);

    cache.create("Ship the board", Some("End to end".to_owned())).await;

    let to_do = cache.columns().column(TaskStatus::ToDo);
    assert_eq!(to_do.len(), 1);
    let task = to_do.first().ok_or_eyre("cached task")?;
    assert_eq!(task.title(), "Ship the board");
    assert_eq!(task.description(), Some("End to end"));
    assert!(!cache.is_loading());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn drag_to_another_column_commits_on_the_server() -> eyre::Result<()> {
    let base_url = spawn_server(test_service()).await?;
    let mut cache = http_cache(&base_url);
    cache.create("Drag me", None).await;
    let id = only_task_id(&cache, TaskStatus::ToDo)?;

    // The gesture layer hands over raw strings; the controller resolves
    // them against the cached board.
    let mut controller = DragController::new();
    assert!(controller.begin(&id.to_string(), cache.columns()));
    let outcome = controller.drop_on(Some("In Progress"), cache.columns());
    let DropOutcome::Move { id: moved, to } = outcome else {
        eyre::bail!("expected a move, got {outcome:?}");
    };

    let committed = cache.update(moved, TaskPatch::new().with_status(to)).await;
    assert_eq!(committed, MutationOutcome::Committed);
    assert_eq!(only_task_id(&cache, TaskStatus::InProgress)?, id);

    // A second, independent client sees the move.
    let mut fresh = http_cache(&base_url);
    fresh.refresh().await;
    assert_eq!(only_task_id(&fresh, TaskStatus::InProgress)?, id);
    assert!(fresh.columns().column(TaskStatus::ToDo).is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_update_rolls_the_cache_back() -> eyre::Result<()> {
    let base_url = spawn_server(test_service()).await?;
    let mut cache = http_cache(&base_url);
    cache.create("Doomed", None).await;
    let id = only_task_id(&cache, TaskStatus::ToDo)?;

    // Another client deletes the task behind this cache's back.
    let other = HttpBoardApi::new(&base_url);
    other
        .delete(id)
        .await
        .map_err(|err| eyre::eyre!("delete failed: {err}"))?;

    let outcome = cache
        .update(id, TaskPatch::new().with_status(TaskStatus::Done))
        .await;

    assert_eq!(outcome, MutationOutcome::RolledBack);
    // The snapshot restores the pre-move view; the stale entry stays until
    // the next refresh.
    assert_eq!(only_task_id(&cache, TaskStatus::ToDo)?, id);
    assert!(cache.columns().column(TaskStatus::Done).is_empty());

    cache.refresh().await;
    assert!(cache.columns().is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_through_the_cache_empties_the_server() -> eyre::Result<()> {
    let base_url = spawn_server(test_service()).await?;
    let mut cache = http_cache(&base_url);
    cache.create("Short lived", None).await;
    let id = only_task_id(&cache, TaskStatus::ToDo)?;

    let outcome = cache.delete(id).await;

    assert_eq!(outcome, MutationOutcome::Committed);
    assert!(cache.columns().is_empty());

    let mut fresh = http_cache(&base_url);
    fresh.refresh().await;
    assert!(fresh.columns().is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn local_adapter_drives_the_same_flow_without_http() -> eyre::Result<()> {
    let service = test_service();
    let api = Arc::new(LocalBoardApi::new(Arc::clone(&service)));
    let mut cache = TaskCache::new(api, Arc::new(DefaultClock));

    cache.create("In process", None).await;
    let id = only_task_id(&cache, TaskStatus::ToDo)?;

    let moved = cache
        .update(id, TaskPatch::new().with_status(TaskStatus::Done))
        .await;
    assert_eq!(moved, MutationOutcome::Committed);
    assert_eq!(only_task_id(&cache, TaskStatus::Done)?, id);

    // The service sees the same board the cache does.
    let board = service.board().await?;
    assert_eq!(board.column(TaskStatus::Done).len(), 1);
    assert!(board.column(TaskStatus::ToDo).is_empty());

    let deleted = cache.delete(id).await;
    assert_eq!(deleted, MutationOutcome::Committed);
    assert!(service.board().await?.is_empty());
    Ok(())
}
