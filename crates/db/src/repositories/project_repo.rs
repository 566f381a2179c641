//! Repository for the `projects` table.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracker_core::project::{FieldValue, NewProject, ProjectChanges};
use tracker_core::types::DbId;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, status, due_date, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the stored row (including the
    /// store-assigned `id` and `created_at`).
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, status, due_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status.as_str())
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first. Rows sharing a
    /// `created_at` fall back to descending `id`, i.e. insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Apply `changes` to a project. Only the columns present in `changes`
    /// are written; column names come from the closed `ProjectField` set
    /// and every value is bound as a parameter.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &ProjectChanges,
    ) -> Result<bool, sqlx::Error> {
        if changes.is_empty() {
            return Ok(Self::find_by_id(pool, id).await?.is_some());
        }

        let mut query = QueryBuilder::<Postgres>::new("UPDATE projects SET ");
        let mut assignments = query.separated(", ");
        for (field, value) in changes.iter() {
            assignments.push(field.column()).push_unseparated(" = ");
            match value {
                FieldValue::Text(text) => assignments.push_bind_unseparated(text.clone()),
                FieldValue::OptionalText(text) => assignments.push_bind_unseparated(text.clone()),
                FieldValue::Status(status) => assignments.push_bind_unseparated(status.as_str()),
                FieldValue::Date(date) => assignments.push_bind_unseparated(*date),
            };
        }
        query.push(" WHERE id = ").push_bind(id);

        let result = query.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of stored projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
