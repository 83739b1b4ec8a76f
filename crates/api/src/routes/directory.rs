//! Route definitions for the `/users` and `/companies` directories.

use axum::routing::get;
use axum::Router;

use crate::handlers::{company, user};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new().route("/", get(user::list).post(user::create))
}

/// Routes mounted at `/companies`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// ```
pub fn company_router() -> Router<AppState> {
    Router::new().route("/", get(company::list).post(company::create))
}
