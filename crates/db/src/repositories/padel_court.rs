use crate::models::DbPadelCourt;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a court, or returns `None` when the business already has one with
/// that name.
pub async fn create_padel_court(
    pool: &Pool<Postgres>,
    business_id: Uuid,
    name: &str,
) -> Result<Option<DbPadelCourt>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let court = sqlx::query_as::<_, DbPadelCourt>(
        r#"
        INSERT INTO padel_courts (id, business_id, name, created_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (business_id, name) DO NOTHING
        RETURNING id, business_id, name, created_at
        "#,
    )
    .bind(id)
    .bind(business_id)
    .bind(name)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    Ok(court)
}

pub async fn get_padel_court_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
    business_id: Uuid,
) -> Result<Option<DbPadelCourt>> {
    let court = sqlx::query_as::<_, DbPadelCourt>(
        r#"
        SELECT id, business_id, name, created_at
        FROM padel_courts
        WHERE id = $1 AND business_id = $2
        "#,
    )
    .bind(id)
    .bind(business_id)
    .fetch_optional(pool)
    .await?;

    Ok(court)
}

pub async fn get_padel_court_by_name(
    pool: &Pool<Postgres>,
    name: &str,
    business_id: Uuid,
) -> Result<Option<DbPadelCourt>> {
    let court = sqlx::query_as::<_, DbPadelCourt>(
        r#"
        SELECT id, business_id, name, created_at
        FROM padel_courts
        WHERE name = $1 AND business_id = $2
        "#,
    )
    .bind(name)
    .bind(business_id)
    .fetch_optional(pool)
    .await?;

    Ok(court)
}

pub async fn get_padel_courts_by_business(
    pool: &Pool<Postgres>,
    business_id: Uuid,
) -> Result<Vec<DbPadelCourt>> {
    let courts = sqlx::query_as::<_, DbPadelCourt>(
        r#"
        SELECT id, business_id, name, created_at
        FROM padel_courts
        WHERE business_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?;

    Ok(courts)
}

/// Renames a court. Returns `None` when the new name is taken by another
/// court of the same business.
pub async fn update_padel_court(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: &str,
) -> Result<Option<DbPadelCourt>> {
    let result = sqlx::query_as::<_, DbPadelCourt>(
        r#"
        UPDATE padel_courts
        SET name = $2
        WHERE id = $1
        RETURNING id, business_id, name, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .fetch_one(pool)
    .await;

    match result {
        Ok(court) => Ok(Some(court)),
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => Ok(None),
        Err(err) => Err(err.into()),
    }
}
