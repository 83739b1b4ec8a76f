//! HTTP-level tests for the daily activity log.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, create_user, get, post_json, post_json_as};
use serde_json::{json, Value};
use sqlx::PgPool;

fn activity_body(project_id: i64) -> Value {
    json!({
        "project_id": project_id,
        "date": "2026-03-01T07:30:00Z",
        "work_description": "Pemasangan bekisting balok",
        "worker_count": 8,
        "progress_percentage": 45.5,
        "weather": "hujan ringan",
        "photo_urls": ["https://cdn/p1.jpg", "https://cdn/p2.jpg"],
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_activity_with_photos(pool: PgPool) {
    let project_id = create_project(&pool, None).await;
    let user_id = create_user(&pool, "se@example.com").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_as(app, "/api/v1/activities", user_id, activity_body(project_id)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user_id"], user_id);
    assert_eq!(json["data"]["progress_percentage"], "45.50");
    assert!(json["data"]["k3_notes"].is_null());
    let activity_id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/activities/{activity_id}/photos")).await).await;
    let photos = json["data"].as_array().unwrap();
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0]["photo_url"], "https://cdn/p1.jpg");
    assert_eq!(photos[1]["photo_url"], "https://cdn/p2.jpg");
    assert!(photos[0]["caption"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_activity_without_actor_returns_401(pool: PgPool) {
    let project_id = create_project(&pool, None).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/activities", activity_body(project_id)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_activity_for_missing_project_returns_404(pool: PgPool) {
    let user_id = create_user(&pool, "se@example.com").await;

    let app = common::build_test_app(pool);
    let response = post_json_as(app, "/api/v1/activities", user_id, activity_body(31337)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Project with id 31337 not found"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_activity_for_missing_user_returns_404(pool: PgPool) {
    let project_id = create_project(&pool, None).await;

    let app = common::build_test_app(pool);
    let response = post_json_as(app, "/api/v1/activities", 8080, activity_body(project_id)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "User with id 8080 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_above_hundred_returns_400(pool: PgPool) {
    let project_id = create_project(&pool, None).await;
    let user_id = create_user(&pool, "se@example.com").await;

    let mut body = activity_body(project_id);
    body["progress_percentage"] = json!(120);

    let app = common::build_test_app(pool);
    let response = post_json_as(app, "/api/v1/activities", user_id, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("progress_percentage:"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_activities_for_project(pool: PgPool) {
    let project_id = create_project(&pool, None).await;
    let other_project = create_project(&pool, None).await;
    let user_id = create_user(&pool, "se@example.com").await;

    for pid in [project_id, other_project, project_id] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_as(app, "/api/v1/activities", user_id, activity_body(pid)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/projects/{project_id}/activities")).await).await;
    let activities = json["data"].as_array().unwrap();
    assert_eq!(activities.len(), 2);
    assert!(activities.iter().all(|a| a["project_id"] == project_id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_photos_of_missing_activity_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/activities/5/photos").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
