//! Daily site activity log and its photos.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sitebook_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `daily_activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyActivity {
    pub id: DbId,
    pub project_id: DbId,
    /// The user who recorded the activity.
    pub user_id: DbId,
    pub date: Timestamp,
    pub work_description: String,
    pub worker_count: i32,
    pub materials_used: Option<String>,
    pub progress_percentage: Decimal,
    pub weather: Option<String>,
    /// Safety (K3) observations for the day.
    pub k3_notes: Option<String>,
    pub created_at: Timestamp,
}

/// A row from the `activity_photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityPhoto {
    pub id: DbId,
    pub activity_id: DbId,
    pub photo_url: String,
    pub caption: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for logging an activity. The recording user is supplied separately.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDailyActivity {
    pub project_id: DbId,
    pub date: Timestamp,
    #[validate(length(min = 1, message = "Work description cannot be empty"))]
    pub work_description: String,
    #[validate(range(min = 0, message = "Worker count cannot be negative"))]
    pub worker_count: i32,
    pub materials_used: Option<String>,
    #[validate(custom(function = "sitebook_core::validation::validate_percentage"))]
    pub progress_percentage: Decimal,
    pub weather: Option<String>,
    pub k3_notes: Option<String>,
    /// Opaque URLs of already-uploaded photos, stored in this order.
    #[serde(default)]
    pub photo_urls: Vec<String>,
}
