//! Handlers for the daily activity log.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sitebook_core::error::CoreError;
use sitebook_core::types::DbId;
use sitebook_db::models::activity::{ActivityPhoto, CreateDailyActivity, DailyActivity};
use sitebook_db::repositories::{DailyActivityRepo, ProjectRepo, UserRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::actor::ActingUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/activities
///
/// Records the activity for the acting user, with one photo per URL.
pub async fn create(
    State(state): State<AppState>,
    actor: ActingUser,
    AppJson(input): AppJson<CreateDailyActivity>,
) -> AppResult<(StatusCode, Json<DataResponse<DailyActivity>>)> {
    input.validate()?;

    ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id,
        }))?;

    UserRepo::find_by_id(&state.pool, actor.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: actor.user_id,
        }))?;

    let activity = DailyActivityRepo::create(&state.pool, actor.user_id, &input).await?;

    tracing::info!(
        activity_id = activity.id,
        project_id = activity.project_id,
        user_id = actor.user_id,
        photos = input.photo_urls.len(),
        "Daily activity recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: activity })))
}

/// GET /api/v1/projects/{id}/activities
pub async fn list_by_project(
    State(state): State<AppState>,
    AppPath(project_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<DailyActivity>>>> {
    let activities = DailyActivityRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: activities }))
}

/// GET /api/v1/activities/{id}/photos
pub async fn list_photos(
    State(state): State<AppState>,
    AppPath(activity_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<ActivityPhoto>>>> {
    DailyActivityRepo::find_by_id(&state.pool, activity_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DailyActivity",
            id: activity_id,
        }))?;

    let photos = DailyActivityRepo::list_photos(&state.pool, activity_id).await?;
    Ok(Json(DataResponse { data: photos }))
}
