//! Payment applications (termin) raised by contractors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sitebook_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::PaymentStatus;

/// A row from the `payment_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PaymentApplication {
    pub id: DbId,
    pub project_id: DbId,
    pub contractor_id: DbId,
    pub term_number: i32,
    /// Amount in IDR, `NUMERIC(15,2)`.
    pub amount: Decimal,
    pub work_progress: Decimal,
    pub status: PaymentStatus,
    pub submitted_by: DbId,
    pub submitted_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for a new application. Stored as `draft` with no submission time.
///
/// `term_number` is not sequenced by the server; duplicates are accepted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePaymentApplication {
    pub project_id: DbId,
    pub contractor_id: DbId,
    #[validate(range(min = 1, message = "Term number must be at least 1"))]
    pub term_number: i32,
    #[validate(custom(function = "sitebook_core::validation::validate_money"))]
    pub amount: Decimal,
    #[validate(custom(function = "sitebook_core::validation::validate_percentage"))]
    pub work_progress: Decimal,
}
