//! HTTP client for the project tracker REST API.
//!
//! Every endpoint answers with a `{ success, data?, message? }` envelope.
//! A `success: false` envelope becomes [`ClientError::Api`] carrying the
//! server's message verbatim, falling back to a per-operation default when
//! the server sent none (or sent something that is not an envelope).

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use tracker_core::types::DbId;

use crate::error::ClientError;
use crate::model::{CreateProjectData, Health, Project, UpdateProjectData};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

/// HTTP client for one project tracker server.
#[derive(Debug, Clone)]
pub struct ProjectClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProjectClient {
    /// Create a client.
    ///
    /// * `base_url` - API root including the `/api` prefix, e.g.
    ///   `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /projects`, newest first.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response = self.client.get(self.url("/projects")).send().await?;
        Self::expect_data(response, "Failed to fetch projects").await
    }

    /// `GET /projects/{id}`.
    pub async fn fetch_project(&self, id: DbId) -> Result<Project, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/projects/{id}")))
            .send()
            .await?;
        Self::expect_data(response, "Failed to fetch project").await
    }

    /// `POST /projects`. Returns the stored project.
    pub async fn create_project(&self, data: &CreateProjectData) -> Result<Project, ClientError> {
        let response = self
            .client
            .post(self.url("/projects"))
            .json(data)
            .send()
            .await?;
        Self::expect_data(response, "Failed to create project").await
    }

    /// `PUT /projects/{id}`. The server returns no data; re-fetch to see
    /// the new state.
    pub async fn update_project(
        &self,
        id: DbId,
        data: &UpdateProjectData,
    ) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/projects/{id}")))
            .json(data)
            .send()
            .await?;
        Self::expect_success(response, "Failed to update project").await
    }

    /// `DELETE /projects/{id}`.
    pub async fn delete_project(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/projects/{id}")))
            .send()
            .await?;
        Self::expect_success(response, "Failed to delete project").await
    }

    /// `GET /health`. Not enveloped.
    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<Health>().await?)
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Decode the envelope, turning `success: false` (or a non-envelope
    /// error body) into [`ClientError::Api`].
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
        default_message: &str,
    ) -> Result<Envelope<T>, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<Envelope<T>>(&bytes) {
            Ok(envelope) if envelope.success => Ok(envelope),
            Ok(envelope) => Err(ClientError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| default_message.to_string()),
            }),
            Err(err) if status.is_success() => Err(ClientError::Decode(err)),
            Err(err) => {
                tracing::debug!(status = status.as_u16(), error = %err, "Non-envelope error body");
                Err(ClientError::Api {
                    status: status.as_u16(),
                    message: default_message.to_string(),
                })
            }
        }
    }

    /// Successful envelope that must carry `data`.
    async fn expect_data<T: DeserializeOwned>(
        response: reqwest::Response,
        default_message: &str,
    ) -> Result<T, ClientError> {
        let status = response.status().as_u16();
        let envelope = Self::read_envelope::<T>(response, default_message).await?;
        envelope.data.ok_or_else(|| ClientError::Api {
            status,
            message: envelope
                .message
                .unwrap_or_else(|| default_message.to_string()),
        })
    }

    /// Successful envelope; any `data` is ignored.
    async fn expect_success(
        response: reqwest::Response,
        default_message: &str,
    ) -> Result<(), ClientError> {
        Self::read_envelope::<IgnoredAny>(response, default_message).await?;
        Ok(())
    }
}
