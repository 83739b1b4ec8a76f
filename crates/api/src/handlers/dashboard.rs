//! Handler for the project dashboard.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use sitebook_core::types::DbId;
use sitebook_db::models::dashboard::ProjectDashboard;
use sitebook_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/dashboard
///
/// Unknown projects report zero for every metric.
pub async fn get_project_dashboard(
    State(state): State<AppState>,
    AppPath(project_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<ProjectDashboard>>> {
    let dashboard = DashboardRepo::project_dashboard(&state.pool, project_id, Utc::now()).await?;
    Ok(Json(DataResponse { data: dashboard }))
}
