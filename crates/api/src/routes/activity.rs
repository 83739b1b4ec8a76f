//! Route definitions for the `/activities` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// POST   /                 -> create
/// GET    /{id}/photos      -> list_photos
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(activity::create))
        .route("/{id}/photos", get(activity::list_photos))
}
