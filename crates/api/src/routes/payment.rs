//! Route definitions for the `/payment-applications` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payment-applications`.
///
/// ```text
/// POST   /                 -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(payment::create))
}
