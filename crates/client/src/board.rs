//! Cached project list with reload-after-mutation semantics.

use tracker_core::listing::{ProjectFilter, StatusCounts};
use tracker_core::types::{DbId, Timestamp};

use crate::api::ProjectClient;
use crate::error::ClientError;
use crate::model::{CreateProjectData, Project, UpdateProjectData};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this project?";

/// Interactive yes/no confirmation, asked before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined; no request was sent.
    Declined,
}

/// Local, non-authoritative copy of the server's project list.
///
/// Every successful mutation is followed by a full reload rather than an
/// in-place patch, so the cache is never more than one round trip behind
/// the store.
#[derive(Debug)]
pub struct ProjectBoard {
    client: ProjectClient,
    projects: Vec<Project>,
    error: Option<String>,
}

impl ProjectBoard {
    pub fn new(client: ProjectClient) -> Self {
        Self {
            client,
            projects: Vec::new(),
            error: None,
        }
    }

    pub fn client(&self) -> &ProjectClient {
        &self.client
    }

    /// The cached list, in server order (newest first).
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Message from the last failed load, cleared by the next successful one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the cache with the server's current list.
    ///
    /// A failure is recorded in [`error`](Self::error) and leaves the
    /// previous cache in place.
    pub async fn refresh(&mut self) {
        match self.client.fetch_projects().await {
            Ok(projects) => {
                self.projects = projects;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load projects");
                self.error = Some(err.user_message());
            }
        }
    }

    pub async fn create(&mut self, data: &CreateProjectData) -> Result<Project, ClientError> {
        let project = self.client.create_project(data).await?;
        self.refresh().await;
        Ok(project)
    }

    pub async fn update(&mut self, id: DbId, data: &UpdateProjectData) -> Result<(), ClientError> {
        self.client.update_project(id, data).await?;
        self.refresh().await;
        Ok(())
    }

    /// Delete after asking `confirm`. A declined confirmation sends nothing
    /// and leaves the cache untouched.
    pub async fn delete<C: Confirm>(
        &mut self,
        id: DbId,
        confirm: &C,
    ) -> Result<DeleteOutcome, ClientError> {
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Declined);
        }

        self.client.delete_project(id).await?;
        self.refresh().await;
        Ok(DeleteOutcome::Deleted)
    }

    /// Projects passing `filter`, in cache order.
    pub fn visible(&self, filter: &ProjectFilter) -> Vec<&Project> {
        filter.apply(&self.projects)
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.projects)
    }

    pub fn overdue(&self, now: Timestamp) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.is_overdue(now)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Nothing listens here, so any request fails fast.
    fn unreachable_board() -> ProjectBoard {
        ProjectBoard::new(ProjectClient::new("http://127.0.0.1:1/api"))
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let mut board = unreachable_board();
        let asked = Cell::new(None::<String>);

        let outcome = board
            .delete(7, &|prompt: &str| {
                asked.set(Some(prompt.to_string()));
                false
            })
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(asked.take().as_deref(), Some(DELETE_PROMPT));
        assert!(board.projects().is_empty());
        assert!(board.error().is_none());
    }

    #[tokio::test]
    async fn failed_refresh_records_error() {
        let mut board = unreachable_board();
        board.refresh().await;
        assert!(board.error().is_some());
        assert!(board.projects().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_surfaces_request_failure() {
        let mut board = unreachable_board();
        let result = board.delete(7, &|_: &str| true).await;
        assert!(matches!(result, Err(ClientError::Request(_))));
    }
}
