//! Route definitions for the `/meetings` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::meeting;
use crate::state::AppState;

/// Routes mounted at `/meetings`.
///
/// ```text
/// POST   /                 -> create
/// GET    /{id}/attendees   -> list_attendees
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(meeting::create))
        .route("/{id}/attendees", get(meeting::list_attendees))
}
