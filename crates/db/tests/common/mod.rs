//! Fixtures shared by the repository integration tests.

#![allow(dead_code)]

use std::str::FromStr;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use sitebook_core::types::{DbId, Timestamp};
use sitebook_db::models::company::CreateCompany;
use sitebook_db::models::project::CreateProject;
use sitebook_db::models::status::ProjectStatus;
use sitebook_db::models::user::CreateUser;
use sitebook_db::repositories::{CompanyRepo, ProjectRepo, UserRepo};
use sqlx::PgPool;

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn at(y: i32, m: u32, d: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap()
}

pub fn new_project(name: &str, budget: Option<Decimal>) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: None,
        location: "Jakarta".to_string(),
        start_date: at(2026, 1, 5),
        end_date: None,
        status: ProjectStatus::Active,
        budget,
    }
}

pub async fn seed_project(pool: &PgPool, budget: Option<Decimal>) -> DbId {
    ProjectRepo::create(pool, &new_project("Gedung Kantor", budget))
        .await
        .unwrap()
        .id
}

pub async fn seed_user(pool: &PgPool, email: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            name: "Site Engineer".to_string(),
            phone: None,
            avatar_url: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_company(pool: &PgPool, name: &str) -> DbId {
    CompanyRepo::create(
        pool,
        &CreateCompany {
            name: name.to_string(),
            address: None,
            phone: None,
            email: None,
            registration_number: None,
        },
    )
    .await
    .unwrap()
    .id
}
