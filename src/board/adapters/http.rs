//! HTTP adapter implementing the board API port over reqwest.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::board::ports::{BoardApi, BoardApiError, BoardApiResult};
use crate::task::domain::{BoardColumns, Task, TaskId, TaskPatch};

/// Board API client speaking JSON over HTTP to the task server.
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    client: reqwest::Client,
    base_url: String,
}

/// Create request body mirrored from the server's contract.
#[derive(Debug, Serialize)]
struct CreateBody {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Error body shape shared by every non-success response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpBoardApi {
    /// Creates a client against the given base URL (no trailing slash
    /// required).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Folds a non-success response into [`BoardApiError::Rejected`],
    /// keeping the server's `error` message when the body parses.
    async fn check(response: reqwest::Response) -> BoardApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .map_or_else(|_| status.to_string(), |body| body.error);
        Err(BoardApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn list_all(&self) -> BoardApiResult<BoardColumns> {
        let response = self
            .client
            .get(self.url("/api/tasks"))
            .send()
            .await
            .map_err(BoardApiError::transport)?;
        Self::check(response)
            .await?
            .json::<BoardColumns>()
            .await
            .map_err(BoardApiError::transport)
    }

    async fn create(&self, title: String, description: Option<String>) -> BoardApiResult<Task> {
        let response = self
            .client
            .post(self.url("/api/tasks"))
            .json(&CreateBody { title, description })
            .send()
            .await
            .map_err(BoardApiError::transport)?;
        Self::check(response)
            .await?
            .json::<Task>()
            .await
            .map_err(BoardApiError::transport)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> BoardApiResult<Task> {
        let response = self
            .client
            .put(self.url(&format!("/api/tasks/{id}")))
            .json(&patch)
            .send()
            .await
            .map_err(BoardApiError::transport)?;
        Self::check(response)
            .await?
            .json::<Task>()
            .await
            .map_err(BoardApiError::transport)
    }

    async fn delete(&self, id: TaskId) -> BoardApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/tasks/{id}")))
            .send()
            .await
            .map_err(BoardApiError::transport)?;
        Self::check(response).await?;
        Ok(())
    }
}
