//! Queries over the `available_matches` table.
//!
//! Batch inserts and reservations each run in a single transaction so
//! callers never observe a half-applied operation.

use crate::models::DbAvailableMatch;
use chrono::Utc;
use eyre::Result;
use padelbook_core::models::slot::{Slot, SlotScope};
use padelbook_core::reservation;
use padelbook_core::store::StoreError;
use sqlx::{Pool, Postgres};

/// Inserts all slots in one transaction. A unique violation on any of them
/// rolls the whole batch back.
pub async fn create_available_matches(
    pool: &Pool<Postgres>,
    slots: &[Slot],
) -> Result<Vec<DbAvailableMatch>, StoreError> {
    let now = Utc::now();
    let mut tx = pool.begin().await.map_err(backend)?;
    let mut created = Vec::with_capacity(slots.len());

    for slot in slots {
        let row = sqlx::query_as::<_, DbAvailableMatch>(
            r#"
            INSERT INTO available_matches (resource_id, business_id, date, hour, reserved, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, resource_id, business_id, date, hour, reserved, created_at
            "#,
        )
        .bind(slot.resource_id)
        .bind(slot.business_id)
        .bind(slot.date)
        .bind(i32::from(slot.hour))
        .bind(slot.reserved)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::DuplicateSlot
            } else {
                backend(e)
            }
        })?;

        created.push(row);
    }

    tx.commit().await.map_err(backend)?;
    Ok(created)
}

pub async fn get_available_matches(
    pool: &Pool<Postgres>,
    scope: &SlotScope,
) -> Result<Vec<DbAvailableMatch>> {
    let matches = sqlx::query_as::<_, DbAvailableMatch>(
        r#"
        SELECT id, resource_id, business_id, date, hour, reserved, created_at
        FROM available_matches
        WHERE resource_id = $1 AND business_id = $2 AND date = $3
        ORDER BY hour ASC
        "#,
    )
    .bind(scope.resource_id)
    .bind(scope.business_id)
    .bind(scope.date)
    .fetch_all(pool)
    .await?;

    Ok(matches)
}

pub async fn get_available_match(
    pool: &Pool<Postgres>,
    scope: &SlotScope,
    hour: u8,
) -> Result<Option<DbAvailableMatch>> {
    let available_match = sqlx::query_as::<_, DbAvailableMatch>(
        r#"
        SELECT id, resource_id, business_id, date, hour, reserved, created_at
        FROM available_matches
        WHERE resource_id = $1 AND business_id = $2 AND date = $3 AND hour = $4
        "#,
    )
    .bind(scope.resource_id)
    .bind(scope.business_id)
    .bind(scope.date)
    .bind(i32::from(hour))
    .fetch_optional(pool)
    .await?;

    Ok(available_match)
}

/// Returns how many rows were removed; zero is not an error.
pub async fn delete_available_matches(pool: &Pool<Postgres>, scope: &SlotScope) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM available_matches
        WHERE resource_id = $1 AND business_id = $2 AND date = $3
        "#,
    )
    .bind(scope.resource_id)
    .bind(scope.business_id)
    .bind(scope.date)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Locks the row with `FOR UPDATE`, applies the reservation transition and
/// writes it back before releasing the lock. A concurrent caller on the same
/// row waits for the commit and then sees the slot already reserved.
pub async fn reserve_available_match(
    pool: &Pool<Postgres>,
    scope: &SlotScope,
    hour: u8,
) -> Result<DbAvailableMatch, StoreError> {
    let mut tx = pool.begin().await.map_err(backend)?;

    let row = sqlx::query_as::<_, DbAvailableMatch>(
        r#"
        SELECT id, resource_id, business_id, date, hour, reserved, created_at
        FROM available_matches
        WHERE resource_id = $1 AND business_id = $2 AND date = $3 AND hour = $4
        FOR UPDATE
        "#,
    )
    .bind(scope.resource_id)
    .bind(scope.business_id)
    .bind(scope.date)
    .bind(i32::from(hour))
    .fetch_optional(&mut *tx)
    .await
    .map_err(backend)?
    .ok_or(StoreError::NotFound)?;

    let id = row.id;
    let mut slot = row.into_slot()?;
    reservation::reserve(&mut slot)?;

    let updated = sqlx::query_as::<_, DbAvailableMatch>(
        r#"
        UPDATE available_matches
        SET reserved = $2
        WHERE id = $1
        RETURNING id, resource_id, business_id, date, hour, reserved, created_at
        "#,
    )
    .bind(id)
    .bind(slot.reserved)
    .fetch_one(&mut *tx)
    .await
    .map_err(backend)?;

    tx.commit().await.map_err(backend)?;
    Ok(updated)
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.into())
}
