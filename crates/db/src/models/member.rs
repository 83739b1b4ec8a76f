//! Project membership: which user, from which company, in which role.

use serde::{Deserialize, Serialize};
use sitebook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::status::ProjectRole;

/// A row from the `project_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectMember {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub company_id: DbId,
    pub role: ProjectRole,
    pub work_package: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for adding a member. The project comes from the request path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectMember {
    pub user_id: DbId,
    pub company_id: DbId,
    pub role: ProjectRole,
    pub work_package: Option<String>,
}
