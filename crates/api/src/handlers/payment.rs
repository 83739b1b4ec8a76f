//! Handlers for payment applications (termin).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sitebook_core::types::DbId;
use sitebook_db::models::payment::{CreatePaymentApplication, PaymentApplication};
use sitebook_db::repositories::PaymentApplicationRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::actor::ActingUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/payment-applications
pub async fn create(
    State(state): State<AppState>,
    actor: ActingUser,
    AppJson(input): AppJson<CreatePaymentApplication>,
) -> AppResult<(StatusCode, Json<DataResponse<PaymentApplication>>)> {
    input.validate()?;

    let application = PaymentApplicationRepo::create(&state.pool, actor.user_id, &input).await?;

    tracing::info!(
        payment_application_id = application.id,
        project_id = application.project_id,
        term_number = application.term_number,
        user_id = actor.user_id,
        "Payment application drafted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}

/// GET /api/v1/projects/{id}/payment-applications
pub async fn list_by_project(
    State(state): State<AppState>,
    AppPath(project_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<PaymentApplication>>>> {
    let applications = PaymentApplicationRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: applications }))
}
