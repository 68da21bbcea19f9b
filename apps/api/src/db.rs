use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the interviews table if it does not exist yet.
/// Runs once at startup; schema evolution beyond this is an ops concern.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query("CREATE EXTENSION IF NOT EXISTS pgcrypto")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS interviews (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            resume_filename TEXT NOT NULL,
            resume_content TEXT NOT NULL,
            job_description_filename TEXT NOT NULL,
            job_description_content TEXT NOT NULL,
            questions_answers JSONB,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Schema ready");
    Ok(())
}
