//! Read-only aggregates behind the project dashboard.

use sitebook_core::dashboard::recent_cutoff;
use sitebook_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::dashboard::{DashboardAggregates, ProjectDashboard};

/// Every sub-select is keyed on the project id, so an unknown project
/// yields zero counts and NULL sums rather than an error.
const AGGREGATES_QUERY: &str = "SELECT \
    (SELECT COUNT(*) FROM daily_activities WHERE project_id = $1) AS total_activities, \
    (SELECT COUNT(*) FROM daily_activities WHERE project_id = $1 AND date >= $2) AS recent_activities, \
    (SELECT COUNT(*) FROM documents WHERE project_id = $1 AND approval_status = 'pending') AS pending_approvals, \
    (SELECT COUNT(*) FROM meetings WHERE project_id = $1 AND status = 'scheduled') AS active_meetings, \
    (SELECT AVG(progress_percentage) FROM daily_activities WHERE project_id = $1) AS average_progress, \
    (SELECT SUM(amount) FROM payment_applications \
        WHERE project_id = $1 AND status IN ('approved', 'paid')) AS approved_spend, \
    (SELECT budget FROM projects WHERE id = $1) AS budget, \
    (SELECT COUNT(*) FROM project_members \
        WHERE project_id = $1 AND role = 'main_contractor') AS active_contractors, \
    (SELECT COUNT(*) FROM daily_activities \
        WHERE project_id = $1 AND k3_notes IS NOT NULL) AS k3_incidents";

pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute a project's dashboard as of `now`.
    pub async fn project_dashboard(
        pool: &PgPool,
        project_id: DbId,
        now: Timestamp,
    ) -> Result<ProjectDashboard, sqlx::Error> {
        let aggregates = sqlx::query_as::<_, DashboardAggregates>(AGGREGATES_QUERY)
            .bind(project_id)
            .bind(recent_cutoff(now))
            .fetch_one(pool)
            .await?;
        Ok(ProjectDashboard::from_aggregates(project_id, aggregates))
    }
}
