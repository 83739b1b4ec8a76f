//! Handlers for the meeting scheduler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sitebook_core::error::CoreError;
use sitebook_core::types::DbId;
use sitebook_db::models::meeting::{CreateMeeting, Meeting, MeetingAttendee};
use sitebook_db::repositories::MeetingRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::actor::ActingUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/meetings
pub async fn create(
    State(state): State<AppState>,
    actor: ActingUser,
    AppJson(input): AppJson<CreateMeeting>,
) -> AppResult<(StatusCode, Json<DataResponse<Meeting>>)> {
    input.validate()?;

    let meeting = MeetingRepo::create(&state.pool, actor.user_id, &input).await?;

    tracing::info!(
        meeting_id = meeting.id,
        project_id = meeting.project_id,
        attendees = input.attendee_ids.len(),
        user_id = actor.user_id,
        "Meeting scheduled",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: meeting })))
}

/// GET /api/v1/projects/{id}/meetings
pub async fn list_by_project(
    State(state): State<AppState>,
    AppPath(project_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Meeting>>>> {
    let meetings = MeetingRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: meetings }))
}

/// GET /api/v1/meetings/{id}/attendees
pub async fn list_attendees(
    State(state): State<AppState>,
    AppPath(meeting_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<MeetingAttendee>>>> {
    MeetingRepo::find_by_id(&state.pool, meeting_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id: meeting_id,
        }))?;

    let attendees = MeetingRepo::list_attendees(&state.pool, meeting_id).await?;
    Ok(Json(DataResponse { data: attendees }))
}
