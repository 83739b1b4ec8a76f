//! Repository for the `payment_applications` table.

use sitebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment::{CreatePaymentApplication, PaymentApplication};

const COLUMNS: &str = "id, project_id, contractor_id, term_number, amount, work_progress, \
    status, submitted_by, submitted_at, created_at";

pub struct PaymentApplicationRepo;

impl PaymentApplicationRepo {
    /// Insert a `draft` application raised by `submitted_by`.
    pub async fn create(
        pool: &PgPool,
        submitted_by: DbId,
        input: &CreatePaymentApplication,
    ) -> Result<PaymentApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO payment_applications \
                (project_id, contractor_id, term_number, amount, work_progress, submitted_by) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaymentApplication>(&query)
            .bind(input.project_id)
            .bind(input.contractor_id)
            .bind(input.term_number)
            .bind(input.amount)
            .bind(input.work_progress)
            .bind(submitted_by)
            .fetch_one(pool)
            .await
    }

    /// List a project's applications in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<PaymentApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payment_applications WHERE project_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, PaymentApplication>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
