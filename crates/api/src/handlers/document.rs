//! Handlers for documents and their approval workflow.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sitebook_core::error::CoreError;
use sitebook_core::types::DbId;
use sitebook_db::models::document::{ApproveDocument, CreateDocument, Document, DocumentApproval};
use sitebook_db::repositories::DocumentRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::actor::ActingUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/documents
///
/// New documents always start `pending`.
pub async fn create(
    State(state): State<AppState>,
    actor: ActingUser,
    AppJson(input): AppJson<CreateDocument>,
) -> AppResult<(StatusCode, Json<DataResponse<Document>>)> {
    input.validate()?;

    let document = DocumentRepo::create(&state.pool, actor.user_id, &input).await?;

    tracing::info!(
        document_id = document.id,
        project_id = document.project_id,
        user_id = actor.user_id,
        "Document uploaded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: document })))
}

/// GET /api/v1/projects/{id}/documents
pub async fn list_by_project(
    State(state): State<AppState>,
    AppPath(project_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<Document>>>> {
    let documents = DocumentRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: documents }))
}

/// POST /api/v1/documents/approve
///
/// Records a review decision and overwrites the document's status.
pub async fn approve(
    State(state): State<AppState>,
    actor: ActingUser,
    AppJson(input): AppJson<ApproveDocument>,
) -> AppResult<(StatusCode, Json<DataResponse<DocumentApproval>>)> {
    let approval = DocumentRepo::approve(&state.pool, actor.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id: input.document_id,
        }))?;

    tracing::info!(
        document_id = input.document_id,
        approval_id = approval.id,
        user_id = actor.user_id,
        status = %approval.status,
        "Document reviewed",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: approval })))
}

/// GET /api/v1/documents/{id}/approvals
pub async fn list_approvals(
    State(state): State<AppState>,
    AppPath(document_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<DocumentApproval>>>> {
    DocumentRepo::find_by_id(&state.pool, document_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id: document_id,
        }))?;

    let approvals = DocumentRepo::list_approvals(&state.pool, document_id).await?;
    Ok(Json(DataResponse { data: approvals }))
}
