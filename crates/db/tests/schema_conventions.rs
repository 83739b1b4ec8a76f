//! Structural checks over the migrated schema.

use sqlx::PgPool;

/// Every table (except _sqlx_migrations) uses a bigint `id` and a timestamptz `created_at`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_bigint_id_and_created_at(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name::text
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for (col, expected) in [("id", "bigint"), ("created_at", "timestamp with time zone")] {
            let result: Option<(String,)> = sqlx::query_as(
                "SELECT data_type::text
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name::text = $1
                   AND column_name::text = $2",
            )
            .bind(table)
            .bind(col)
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, expected,
                "Table {table}.{col} should be {expected}, got {data_type}"
            );
        }
    }
}

/// Schema-only tables still reference their parents through named foreign keys.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_schema_only_tables_have_named_foreign_keys(pool: PgPool) {
    let expected = [
        ("rabs", "fk_rabs_project"),
        ("rabs", "fk_rabs_contractor"),
        ("rabs", "fk_rabs_uploaded_by"),
        ("forms", "fk_forms_project"),
        ("forms", "fk_forms_created_by"),
        ("form_submissions", "fk_form_submissions_form"),
        ("form_submissions", "fk_form_submissions_submitted_by"),
    ];

    for (table, constraint) in expected {
        let found: Option<(String,)> = sqlx::query_as(
            "SELECT constraint_name::text
             FROM information_schema.table_constraints
             WHERE table_schema = 'public'
               AND table_name::text = $1
               AND constraint_name::text = $2
               AND constraint_type = 'FOREIGN KEY'",
        )
        .bind(table)
        .bind(constraint)
        .fetch_optional(&pool)
        .await
        .unwrap();

        assert!(found.is_some(), "Table {table} is missing {constraint}");
    }
}

/// A form submission cannot point at a form that does not exist.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_form_submission_requires_existing_form(pool: PgPool) {
    let err = sqlx::query(
        "INSERT INTO form_submissions (form_id, submitted_by, responses)
         VALUES (12345, 12345, '{}'::jsonb)",
    )
    .execute(&pool)
    .await
    .unwrap_err();

    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}
