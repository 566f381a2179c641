//! Wire types exchanged with the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracker_core::listing::{self, ProjectView};
use tracker_core::project::ProjectStatus;
use tracker_core::types::{DbId, Timestamp};

/// A project as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub due_date: NaiveDate,
    pub created_at: Timestamp,
}

impl Project {
    /// Recomputed on every call; never stored.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        listing::is_overdue(self.due_date, self.status, now)
    }

    pub fn display_due_date(&self) -> String {
        listing::format_due_date(self.due_date)
    }
}

impl ProjectView for Project {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn status(&self) -> ProjectStatus {
        self.status
    }

    fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateProjectData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    pub due_date: NaiveDate,
}

impl CreateProjectData {
    pub fn new(name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            description: None,
            status: None,
            due_date,
        }
    }
}

/// Body of an update request. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateProjectData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Payload of `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub db_healthy: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_data_omits_absent_fields() {
        let data = UpdateProjectData {
            status: Some(ProjectStatus::InProgress),
            ..Default::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({"status": "In Progress"}));
    }

    #[test]
    fn create_data_serializes_due_date_as_iso() {
        let data = CreateProjectData::new("Launch", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Launch", "due_date": "2025-01-01"}));
    }

    #[test]
    fn project_decodes_server_row() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Launch",
            "description": null,
            "status": "Completed",
            "due_date": "2025-01-01",
            "created_at": "2025-01-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);
        assert_eq!(project.display_due_date(), "Jan 1, 2025");
        assert!(!project.is_overdue(chrono::Utc::now()));
    }
}
