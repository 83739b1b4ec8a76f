//! Route definitions for the `/projects` resource.
//!
//! Also mounts the project-scoped listings of activities, documents,
//! payment applications, meetings, and members.

use axum::routing::get;
use axum::Router;

use crate::handlers::{activity, dashboard, document, meeting, member, payment, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// GET    /{id}/dashboard                    -> dashboard::get_project_dashboard
/// GET    /{id}/activities                   -> activity::list_by_project
/// GET    /{id}/documents                    -> document::list_by_project
/// GET    /{id}/payment-applications         -> payment::list_by_project
/// GET    /{id}/meetings                     -> meeting::list_by_project
/// GET    /{id}/members                      -> member::list_by_project
/// POST   /{id}/members                      -> member::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/dashboard", get(dashboard::get_project_dashboard))
        .route("/{id}/activities", get(activity::list_by_project))
        .route("/{id}/documents", get(document::list_by_project))
        .route("/{id}/payment-applications", get(payment::list_by_project))
        .route("/{id}/meetings", get(meeting::list_by_project))
        .route(
            "/{id}/members",
            get(member::list_by_project).post(member::create),
        )
}
