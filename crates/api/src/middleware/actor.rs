//! Acting-user extractor for write handlers.
//!
//! Identity is established upstream (gateway or session service) and
//! forwarded in the `x-user-id` header. This service does not authenticate;
//! it only refuses to guess who is acting.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sitebook_core::error::CoreError;
use sitebook_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the acting user's id.
pub const ACTING_USER_HEADER: &str = "x-user-id";

/// The user on whose behalf a write is performed.
///
/// Use this as an extractor parameter in any handler that records who did
/// something:
///
/// ```ignore
/// async fn my_handler(actor: ActingUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = actor.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ActingUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for ActingUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(ACTING_USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(format!(
                    "Missing {ACTING_USER_HEADER} header"
                )))
            })?;

        let user_id = raw.trim().parse::<DbId>().map_err(|_| {
            AppError::Core(CoreError::Unauthorized(format!(
                "Invalid {ACTING_USER_HEADER} header: expected a numeric user id"
            )))
        })?;

        Ok(ActingUser { user_id })
    }
}
