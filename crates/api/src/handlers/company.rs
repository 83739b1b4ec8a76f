//! Handlers for the `/companies` directory.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sitebook_db::models::company::{Company, CreateCompany};
use sitebook_db::repositories::CompanyRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/companies
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCompany>,
) -> AppResult<(StatusCode, Json<DataResponse<Company>>)> {
    input.validate()?;

    let company = CompanyRepo::create(&state.pool, &input).await?;

    tracing::info!(company_id = company.id, name = %company.name, "Company created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: company })))
}

/// GET /api/v1/companies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Company>>>> {
    let companies = CompanyRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: companies }))
}
