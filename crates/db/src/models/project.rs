//! Project row model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use tracker_core::project::ProjectStatus;
use tracker_core::types::{DbId, Timestamp};

/// A row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub due_date: NaiveDate,
    pub created_at: Timestamp,
}
