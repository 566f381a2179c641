//! Project status, request validation, and partial-update field mapping.
//!
//! Incoming request bodies are deserialized into loosely-typed request
//! structs (every field optional, every value a string) so that a missing
//! or malformed field yields a descriptive validation error rather than a
//! generic deserialization failure. Validation turns them into
//! [`NewProject`] and [`ProjectChanges`], which are what the repository
//! layer accepts.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_COMPLETED: &str = "Completed";

/// All status strings accepted on the wire and persisted in the store.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_COMPLETED];

/// Wire and storage format of `due_date`.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

pub const MSG_NAME_AND_DUE_DATE_REQUIRED: &str = "Project name and due date are required";
pub const MSG_NAME_EMPTY: &str = "Project name cannot be empty";
pub const MSG_NO_FIELDS: &str = "No fields to update";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
        }
    }

    /// Parse a wire/database status string. Matching is exact.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            _ => Err(CoreError::Validation(format!(
                "Invalid status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_value(s)
    }
}

/// Used by `sqlx::FromRow` to decode the `status` TEXT column.
impl TryFrom<String> for ProjectStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` due date.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), DUE_DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "Invalid due date '{value}'. Expected format YYYY-MM-DD"
        ))
    })
}

/// A project name must contain at least one non-whitespace character.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(MSG_NAME_EMPTY.to_string()));
    }
    Ok(())
}

/// Blank descriptions are stored as NULL.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Body of `POST /api/projects` as received on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
}

/// A validated project ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub due_date: NaiveDate,
}

impl CreateProjectRequest {
    /// Validate the request.
    ///
    /// `name` and `due_date` must be present and non-blank. An omitted or
    /// empty `status` defaults to [`ProjectStatus::Pending`].
    pub fn validate(self) -> Result<NewProject, CoreError> {
        let name = self.name.filter(|n| !n.trim().is_empty());
        let due_date = self.due_date.filter(|d| !d.trim().is_empty());

        let (Some(name), Some(due_date)) = (name, due_date) else {
            return Err(CoreError::Validation(
                MSG_NAME_AND_DUE_DATE_REQUIRED.to_string(),
            ));
        };

        let due_date = parse_due_date(&due_date)?;
        let status = match self.status.as_deref() {
            None | Some("") => ProjectStatus::default(),
            Some(s) => ProjectStatus::from_str_value(s)?,
        };

        Ok(NewProject {
            name,
            description: normalize_description(self.description),
            status,
            due_date,
        })
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Body of `PUT /api/projects/{id}` as received on the wire.
///
/// A `null` value is treated the same as an absent key. Unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
}

/// The closed set of columns an update may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
    Name,
    Description,
    Status,
    DueDate,
}

impl ProjectField {
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Status => "status",
            Self::DueDate => "due_date",
        }
    }
}

/// New value for a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    OptionalText(Option<String>),
    Status(ProjectStatus),
    Date(NaiveDate),
}

/// Ordered mapping from field to new value, restricted to the fields
/// present in an update request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    entries: Vec<(ProjectField, FieldValue)>,
}

impl ProjectChanges {
    /// Set `field` to `value`, replacing any earlier value for the same field.
    pub fn set(&mut self, field: ProjectField, value: FieldValue) {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn get(&self, field: ProjectField) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ProjectField, FieldValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl UpdateProjectRequest {
    /// Validate the request into the set of column changes it describes.
    ///
    /// Fails with `No fields to update` when nothing is present.
    pub fn validate(self) -> Result<ProjectChanges, CoreError> {
        let mut changes = ProjectChanges::default();

        if let Some(name) = self.name {
            validate_name(&name)?;
            changes.set(ProjectField::Name, FieldValue::Text(name));
        }
        if let Some(description) = self.description {
            changes.set(
                ProjectField::Description,
                FieldValue::OptionalText(normalize_description(Some(description))),
            );
        }
        if let Some(status) = self.status {
            let status = ProjectStatus::from_str_value(&status)?;
            changes.set(ProjectField::Status, FieldValue::Status(status));
        }
        if let Some(due_date) = self.due_date {
            let due_date = parse_due_date(&due_date)?;
            changes.set(ProjectField::DueDate, FieldValue::Date(due_date));
        }

        if changes.is_empty() {
            return Err(CoreError::Validation(MSG_NO_FIELDS.to_string()));
        }
        Ok(changes)
    }
}
