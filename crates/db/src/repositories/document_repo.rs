//! Repository for the `documents` and `document_approvals` tables.

use chrono::Utc;
use sitebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::{ApproveDocument, CreateDocument, Document, DocumentApproval};
use crate::models::status::ApprovalStatus;

const COLUMNS: &str =
    "id, project_id, title, type, file_url, version, uploaded_by, approval_status, created_at";

const APPROVAL_COLUMNS: &str =
    "id, document_id, approver_id, status, comments, approved_at, created_at";

pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a document uploaded by `uploaded_by`. Status starts as `pending`.
    pub async fn create(
        pool: &PgPool,
        uploaded_by: DbId,
        input: &CreateDocument,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (project_id, title, type, file_url, version, uploaded_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(input.document_type)
            .bind(&input.file_url)
            .bind(&input.version)
            .bind(uploaded_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's documents in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Document>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Record a review decision and make it the document's current status.
    ///
    /// Returns `None` when the document does not exist. The document row is
    /// locked first, so reviews of one document commit one at a time and its
    /// `approval_status` always equals the newest approval row. `approved_at`
    /// is stamped only for `approved` decisions. Any prior status may be
    /// reviewed again; every decision is kept in the history.
    pub async fn approve(
        pool: &PgPool,
        approver_id: DbId,
        input: &ApproveDocument,
    ) -> Result<Option<DocumentApproval>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM documents WHERE id = $1 FOR UPDATE")
                .bind(input.document_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let approved_at = (input.status == ApprovalStatus::Approved).then(Utc::now);

        let insert_query = format!(
            "INSERT INTO document_approvals (document_id, approver_id, status, comments, approved_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {APPROVAL_COLUMNS}"
        );
        let approval = sqlx::query_as::<_, DocumentApproval>(&insert_query)
            .bind(input.document_id)
            .bind(approver_id)
            .bind(input.status)
            .bind(&input.comments)
            .bind(approved_at)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE documents SET approval_status = $2 WHERE id = $1")
            .bind(input.document_id)
            .bind(input.status)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(approval))
    }

    /// List a document's review history, oldest first.
    pub async fn list_approvals(
        pool: &PgPool,
        document_id: DbId,
    ) -> Result<Vec<DocumentApproval>, sqlx::Error> {
        let query = format!(
            "SELECT {APPROVAL_COLUMNS} FROM document_approvals WHERE document_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, DocumentApproval>(&query)
            .bind(document_id)
            .fetch_all(pool)
            .await
    }
}
