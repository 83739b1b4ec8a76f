//! Handlers for the `/users` directory.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sitebook_db::models::user::{CreateUser, User};
use sitebook_db::repositories::UserRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    input.validate()?;

    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}
