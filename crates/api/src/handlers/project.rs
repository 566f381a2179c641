//! Handlers for the `/projects` resource.
//!
//! Each handler validates its input before touching the store, runs exactly
//! one repository call, and converts store failures into a 500 carrying a
//! fixed per-operation message. The underlying error is only logged.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracker_core::error::CoreError;
use tracker_core::project::{CreateProjectRequest, UpdateProjectRequest};
use tracker_core::types::DbId;
use tracker_db::models::project::Project;
use tracker_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ProjectId};
use crate::response::ApiResponse;
use crate::state::AppState;

pub const MSG_FETCH_ALL_FAILED: &str = "Failed to fetch projects";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch project";
pub const MSG_CREATE_FAILED: &str = "Failed to create project";
pub const MSG_UPDATE_FAILED: &str = "Failed to update project";
pub const MSG_DELETE_FAILED: &str = "Failed to delete project";

pub const MSG_CREATED: &str = "Project created successfully";
pub const MSG_UPDATED: &str = "Project updated successfully";
pub const MSG_DELETED: &str = "Project deleted successfully";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool)
        .await
        .map_err(AppError::store(MSG_FETCH_ALL_FAILED))?;
    Ok(Json(ApiResponse::data(projects)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> AppResult<Json<ApiResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::store(MSG_FETCH_FAILED))?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::data(project)))
}

/// POST /api/projects
///
/// Responds with the stored row, so the body includes `created_at` and the
/// defaulted `status`.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Project>>)> {
    let input = input.validate()?;

    let project = ProjectRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::store(MSG_CREATE_FAILED))?;

    tracing::info!(
        project_id = project.id,
        status = %project.status,
        "Project created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data_with_message(project, MSG_CREATED)),
    ))
}

/// PUT /api/projects/{id}
///
/// Partial update. The response carries no data; callers re-fetch to see
/// the new state.
pub async fn update(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
    ApiJson(input): ApiJson<UpdateProjectRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let changes = input.validate()?;

    let updated = ProjectRepo::update(&state.pool, id, &changes)
        .await
        .map_err(AppError::store(MSG_UPDATE_FAILED))?;
    if !updated {
        return Err(not_found(id));
    }

    tracing::info!(project_id = id, fields = changes.len(), "Project updated");

    Ok(Json(ApiResponse::message(MSG_UPDATED)))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ProjectRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::store(MSG_DELETE_FAILED))?;
    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(project_id = id, "Project deleted");

    Ok(Json(ApiResponse::message(MSG_DELETED)))
}
