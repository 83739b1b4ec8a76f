//! Project meetings and invited attendees.

use serde::{Deserialize, Serialize};
use sitebook_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::MeetingStatus;

/// A row from the `meetings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meeting {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: Timestamp,
    /// Physical location or online platform.
    pub location: Option<String>,
    pub status: MeetingStatus,
    pub meeting_notes: Option<String>,
    pub created_by: DbId,
    pub created_at: Timestamp,
}

/// A row from the `meeting_attendees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MeetingAttendee {
    pub id: DbId,
    pub meeting_id: DbId,
    pub user_id: DbId,
    pub attended: bool,
    pub created_at: Timestamp,
}

/// DTO for scheduling a meeting together with its invitees.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMeeting {
    pub project_id: DbId,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: Timestamp,
    pub location: Option<String>,
    #[serde(default)]
    pub attendee_ids: Vec<DbId>,
}
