//! Project dashboard metrics.

use rust_decimal::Decimal;
use serde::Serialize;
use sitebook_core::dashboard::{budget_utilization, overall_progress};
use sitebook_core::types::DbId;
use sqlx::FromRow;

/// Whole-number KPIs for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDashboard {
    pub project_id: DbId,
    pub total_activities: i64,
    pub recent_activities: i64,
    pub pending_approvals: i64,
    /// Meetings still in `scheduled` state.
    pub active_meetings: i64,
    pub overall_progress: i64,
    pub budget_utilization: i64,
    /// Members with the `main_contractor` role.
    pub active_contractors: i64,
    /// Activities carrying K3 notes. Counts notes, not verified incidents.
    pub k3_incidents: i64,
}

/// Raw aggregates read in a single statement, before rounding.
#[derive(Debug, Clone, FromRow)]
pub struct DashboardAggregates {
    pub total_activities: i64,
    pub recent_activities: i64,
    pub pending_approvals: i64,
    pub active_meetings: i64,
    pub average_progress: Option<Decimal>,
    pub approved_spend: Option<Decimal>,
    pub budget: Option<Decimal>,
    pub active_contractors: i64,
    pub k3_incidents: i64,
}

impl ProjectDashboard {
    /// Turn raw aggregates into the rounded dashboard metrics.
    pub fn from_aggregates(project_id: DbId, agg: DashboardAggregates) -> Self {
        Self {
            project_id,
            total_activities: agg.total_activities,
            recent_activities: agg.recent_activities,
            pending_approvals: agg.pending_approvals,
            active_meetings: agg.active_meetings,
            overall_progress: overall_progress(agg.average_progress),
            budget_utilization: budget_utilization(agg.approved_spend, agg.budget),
            active_contractors: agg.active_contractors,
            k3_incidents: agg.k3_incidents,
        }
    }
}
