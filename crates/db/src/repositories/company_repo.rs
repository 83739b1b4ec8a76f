//! Repository for the `companies` table.

use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany};

const COLUMNS: &str = "id, name, address, phone, email, registration_number, created_at";

pub struct CompanyRepo;

impl CompanyRepo {
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, address, phone, email, registration_number)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.registration_number)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies ORDER BY id");
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }
}
