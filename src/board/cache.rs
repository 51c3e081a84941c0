//! Client task cache with optimistic mutations and snapshot rollback.

use crate::board::ports::{BoardApi, BoardApiError};
use crate::task::domain::{BoardColumns, TaskId, TaskPatch};
use mockable::Clock;
use std::future::Future;
use std::sync::Arc;

/// How a tentative mutation ended.
///
/// This is the hook for a future user-facing error surface: failures are
/// recovered locally (rollback plus a log line) and reported here instead
/// of being re-thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MutationOutcome {
    /// The local change stood and the server confirmed it.
    Committed,
    /// The server call failed; the cache was restored to its pre-mutation
    /// snapshot.
    RolledBack,
    /// The mutation did not apply locally (task absent from the cache);
    /// no server call was issued.
    Skipped,
}

/// In-memory mirror of the server board, keyed by status.
///
/// Explicitly constructed and injected wherever the UI needs it; there is
/// no process-wide instance. One cache per browser-session equivalent.
pub struct TaskCache<A, C>
where
    A: BoardApi,
    C: Clock + Send + Sync,
{
    api: Arc<A>,
    clock: Arc<C>,
    columns: BoardColumns,
    is_loading: bool,
}

impl<A, C> TaskCache<A, C>
where
    A: BoardApi,
    C: Clock + Send + Sync,
{
    /// Creates an empty cache over the given API port.
    #[must_use]
    pub const fn new(api: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            api,
            clock,
            columns: BoardColumns::new(),
            is_loading: false,
        }
    }

    /// Returns the cached board.
    #[must_use]
    pub const fn columns(&self) -> &BoardColumns {
        &self.columns
    }

    /// Returns `true` while a refresh round-trip is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Replaces the whole cache with the server's board.
    ///
    /// The loading flag is set for the duration of the call and cleared on
    /// completion, success or failure. A failed refresh leaves the cached
    /// columns untouched.
    pub async fn refresh(&mut self) {
        self.is_loading = true;
        match self.api.list_all().await {
            Ok(columns) => self.columns = columns,
            Err(err) => tracing::warn!(error = %err, "failed to fetch tasks"),
        }
        self.is_loading = false;
    }

    /// Creates a task and refreshes the whole cache on success.
    ///
    /// No optimistic insert: a full refresh is the simplest strategy that
    /// keeps the cache consistent with server-assigned ids and timestamps.
    pub async fn create(&mut self, title: impl Into<String>, description: Option<String>) {
        match self.api.create(title.into(), description).await {
            Ok(_) => self.refresh().await,
            Err(err) => tracing::warn!(error = %err, "failed to create task"),
        }
    }

    /// Optimistically applies a partial update.
    ///
    /// The merged record moves to its (possibly new) column immediately;
    /// the server call runs afterwards and a failure restores the
    /// pre-mutation snapshot. Unknown ids are a no-op.
    pub async fn update(&mut self, id: TaskId, patch: TaskPatch) -> MutationOutcome {
        let api = Arc::clone(&self.api);
        let clock = Arc::clone(&self.clock);
        let call_patch = patch.clone();
        self.tentative(
            move |columns| {
                let Some(mut task) = columns.remove(id) else {
                    return false;
                };
                task.apply(patch, &*clock);
                columns.push(task);
                true
            },
            async move { api.update(id, call_patch).await.map(|_| ()) },
        )
        .await
    }

    /// Optimistically deletes a task from every column.
    ///
    /// The removal is immediate; a failed server call restores the
    /// snapshot. The call is issued even when the task is absent locally,
    /// mirroring the server-authoritative delete.
    pub async fn delete(&mut self, id: TaskId) -> MutationOutcome {
        let api = Arc::clone(&self.api);
        self.tentative(
            move |columns| {
                columns.remove(id);
                true
            },
            async move { api.delete(id).await },
        )
        .await
    }

    /// Snapshot, apply, commit-or-revert.
    ///
    /// `apply` mutates the cached columns and reports whether anything
    /// changed; when it declines, no server call is issued. On a failed
    /// call the whole-columns snapshot is restored, which stays consistent
    /// even if `apply` touched several columns.
    async fn tentative<F, Fut>(&mut self, apply: F, call: Fut) -> MutationOutcome
    where
        F: FnOnce(&mut BoardColumns) -> bool,
        Fut: Future<Output = Result<(), BoardApiError>>,
    {
        let snapshot = self.columns.clone();
        if !apply(&mut self.columns) {
            return MutationOutcome::Skipped;
        }
        match call.await {
            Ok(()) => MutationOutcome::Committed,
            Err(err) => {
                tracing::warn!(error = %err, "mutation rejected, rolling back");
                self.columns = snapshot;
                MutationOutcome::RolledBack
            }
        }
    }
}
