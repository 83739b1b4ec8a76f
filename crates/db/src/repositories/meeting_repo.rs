//! Repository for the `meetings` and `meeting_attendees` tables.

use sitebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::meeting::{CreateMeeting, Meeting, MeetingAttendee};

const COLUMNS: &str = "id, project_id, title, description, scheduled_at, location, status, \
    meeting_notes, created_by, created_at";

const ATTENDEE_COLUMNS: &str = "id, meeting_id, user_id, attended, created_at";

pub struct MeetingRepo;

impl MeetingRepo {
    /// Insert a `scheduled` meeting and one not-yet-attended row per invitee.
    ///
    /// Runs in a transaction: an unknown attendee id rolls back the meeting.
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateMeeting,
    ) -> Result<Meeting, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO meetings (project_id, title, description, scheduled_at, location, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let meeting = sqlx::query_as::<_, Meeting>(&insert_query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.scheduled_at)
            .bind(&input.location)
            .bind(created_by)
            .fetch_one(&mut *tx)
            .await?;

        for user_id in &input.attendee_ids {
            sqlx::query("INSERT INTO meeting_attendees (meeting_id, user_id) VALUES ($1, $2)")
                .bind(meeting.id)
                .bind(*user_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(meeting)
    }

    /// List a project's meetings in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Meeting>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings WHERE id = $1");
        sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_attendees(
        pool: &PgPool,
        meeting_id: DbId,
    ) -> Result<Vec<MeetingAttendee>, sqlx::Error> {
        let query = format!(
            "SELECT {ATTENDEE_COLUMNS} FROM meeting_attendees WHERE meeting_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, MeetingAttendee>(&query)
            .bind(meeting_id)
            .fetch_all(pool)
            .await
    }
}
