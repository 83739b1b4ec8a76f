//! Project documents and their approval history.

use serde::{Deserialize, Serialize};
use sitebook_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::{ApprovalStatus, DocumentType};

/// A row from the `documents` table.
///
/// `approval_status` always mirrors the newest row in `document_approvals`,
/// or `pending` before the first review.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub file_url: String,
    pub version: String,
    pub uploaded_by: DbId,
    pub approval_status: ApprovalStatus,
    pub created_at: Timestamp,
}

/// A row from the `document_approvals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentApproval {
    pub id: DbId,
    pub document_id: DbId,
    pub approver_id: DbId,
    pub status: ApprovalStatus,
    pub comments: Option<String>,
    /// Set only for `approved` decisions.
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for registering a document. It always starts as `pending`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDocument {
    pub project_id: DbId,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    #[validate(length(min = 1, message = "File URL cannot be empty"))]
    pub file_url: String,
    #[validate(length(min = 1, message = "Version cannot be empty"))]
    pub version: String,
}

/// Request body for a review decision on a document.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveDocument {
    pub document_id: DbId,
    pub status: ApprovalStatus,
    pub comments: Option<String>,
}
