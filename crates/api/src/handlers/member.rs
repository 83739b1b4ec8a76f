//! Handlers for project membership.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sitebook_core::error::CoreError;
use sitebook_core::types::DbId;
use sitebook_db::models::member::{CreateProjectMember, ProjectMember};
use sitebook_db::repositories::{ProjectMemberRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_project_exists(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(())
}

/// POST /api/v1/projects/{id}/members
pub async fn create(
    State(state): State<AppState>,
    AppPath(project_id): AppPath<DbId>,
    AppJson(input): AppJson<CreateProjectMember>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectMember>>)> {
    ensure_project_exists(&state, project_id).await?;

    let member = ProjectMemberRepo::create(&state.pool, project_id, &input).await?;

    tracing::info!(
        project_id,
        member_id = member.id,
        user_id = member.user_id,
        role = %member.role,
        "Project member added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// GET /api/v1/projects/{id}/members
pub async fn list_by_project(
    State(state): State<AppState>,
    AppPath(project_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<ProjectMember>>>> {
    ensure_project_exists(&state, project_id).await?;

    let members = ProjectMemberRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: members }))
}
