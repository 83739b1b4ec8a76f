//! Project entity model and DTO.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sitebook_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::ProjectStatus;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub status: ProjectStatus,
    /// `NUMERIC(15,2)`, serialized as a decimal string.
    pub budget: Option<Decimal>,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub status: ProjectStatus,
    #[validate(custom(function = "sitebook_core::validation::validate_money"))]
    pub budget: Option<Decimal>,
}
