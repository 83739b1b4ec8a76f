pub mod activity;
pub mod directory;
pub mod document;
pub mod health;
pub mod meeting;
pub mod payment;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                   list, create
/// /projects/{id}                              get (null when missing)
/// /projects/{id}/dashboard                    dashboard metrics
/// /projects/{id}/activities                   daily activities
/// /projects/{id}/documents                    documents
/// /projects/{id}/payment-applications         payment applications (termin)
/// /projects/{id}/meetings                     meetings
/// /projects/{id}/members                      list, add
///
/// /activities                                 create (actor)
/// /activities/{id}/photos                     photos of an activity
///
/// /documents                                  create (actor)
/// /documents/approve                          review decision (actor)
/// /documents/{id}/approvals                   review history
///
/// /payment-applications                       create (actor)
///
/// /meetings                                   create (actor)
/// /meetings/{id}/attendees                    invitees
///
/// /users                                      list, create
/// /companies                                  list, create
/// ```
///
/// Routes marked "actor" require the `x-user-id` header.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Projects plus every project-scoped listing and the dashboard.
        .nest("/projects", project::router())
        // Daily site activity log.
        .nest("/activities", activity::router())
        // Documents and the approval workflow.
        .nest("/documents", document::router())
        // Contractor payment applications.
        .nest("/payment-applications", payment::router())
        // Meeting scheduler.
        .nest("/meetings", meeting::router())
        // User and company directory.
        .nest("/users", directory::user_router())
        .nest("/companies", directory::company_router())
}
