//! Repository for the `project_members` table.

use sitebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::{CreateProjectMember, ProjectMember};

const COLUMNS: &str = "id, project_id, user_id, company_id, role, work_package, created_at";

pub struct ProjectMemberRepo;

impl ProjectMemberRepo {
    /// Attach a user (from a company) to a project in the given role.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateProjectMember,
    ) -> Result<ProjectMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_members (project_id, user_id, company_id, role, work_package)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .bind(input.user_id)
            .bind(input.company_id)
            .bind(input.role)
            .bind(&input.work_package)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_members WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, ProjectMember>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
