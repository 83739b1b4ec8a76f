//! Route definitions for the `/documents` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::document;
use crate::state::AppState;

/// Routes mounted at `/documents`.
///
/// ```text
/// POST   /                 -> create
/// POST   /approve          -> approve
/// GET    /{id}/approvals   -> list_approvals
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(document::create))
        .route("/approve", post(document::approve))
        .route("/{id}/approvals", get(document::list_approvals))
}
