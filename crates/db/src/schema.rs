use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create businesses table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS businesses (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            owner_id UUID NOT NULL,
            name VARCHAR(255) NOT NULL,
            location VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create padel_courts table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS padel_courts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            business_id UUID NOT NULL REFERENCES businesses(id),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT uq_padel_court UNIQUE (business_id, name)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create available_matches table; the unique constraint is what keeps two
    // slots off the same court hour
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS available_matches (
            id BIGSERIAL PRIMARY KEY,
            resource_id UUID NOT NULL REFERENCES padel_courts(id) ON DELETE CASCADE,
            business_id UUID NOT NULL REFERENCES businesses(id),
            date DATE NOT NULL,
            hour INTEGER NOT NULL,
            reserved BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_hour CHECK (hour BETWEEN 0 AND 23),
            CONSTRAINT uq_available_match UNIQUE (resource_id, business_id, date, hour)
        );
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
