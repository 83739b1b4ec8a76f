//! Repository for the `daily_activities` and `activity_photos` tables.

use sitebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::{ActivityPhoto, CreateDailyActivity, DailyActivity};

const COLUMNS: &str = "id, project_id, user_id, date, work_description, worker_count, \
    materials_used, progress_percentage, weather, k3_notes, created_at";

const PHOTO_COLUMNS: &str = "id, activity_id, photo_url, caption, created_at";

pub struct DailyActivityRepo;

impl DailyActivityRepo {
    /// Insert an activity recorded by `user_id`, plus one photo row per URL.
    ///
    /// The activity and its photos commit together. Photos keep the order of
    /// `photo_urls` and start without a caption.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateDailyActivity,
    ) -> Result<DailyActivity, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO daily_activities \
                (project_id, user_id, date, work_description, worker_count, \
                 materials_used, progress_percentage, weather, k3_notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        let activity = sqlx::query_as::<_, DailyActivity>(&insert_query)
            .bind(input.project_id)
            .bind(user_id)
            .bind(input.date)
            .bind(&input.work_description)
            .bind(input.worker_count)
            .bind(&input.materials_used)
            .bind(input.progress_percentage)
            .bind(&input.weather)
            .bind(&input.k3_notes)
            .fetch_one(&mut *tx)
            .await?;

        for url in &input.photo_urls {
            sqlx::query("INSERT INTO activity_photos (activity_id, photo_url) VALUES ($1, $2)")
                .bind(activity.id)
                .bind(url)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        tracing::debug!(
            activity_id = activity.id,
            photos = input.photo_urls.len(),
            "Daily activity committed"
        );
        Ok(activity)
    }

    /// List a project's activities in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<DailyActivity>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM daily_activities WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, DailyActivity>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DailyActivity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM daily_activities WHERE id = $1");
        sqlx::query_as::<_, DailyActivity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the photos attached to an activity, in upload order.
    pub async fn list_photos(
        pool: &PgPool,
        activity_id: DbId,
    ) -> Result<Vec<ActivityPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {PHOTO_COLUMNS} FROM activity_photos WHERE activity_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, ActivityPhoto>(&query)
            .bind(activity_id)
            .fetch_all(pool)
            .await
    }
}
