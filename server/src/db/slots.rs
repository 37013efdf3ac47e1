//! Slot/capacity store operations

use shared::error::{AppError, ErrorCode};
use shared::models::{DEFAULT_CAPACITY, Slot};
use sqlx::PgPool;

use crate::error::ServiceResult;

/// List all stored slots ordered by label
pub async fn list_slots(pool: &PgPool) -> ServiceResult<Vec<Slot>> {
    let slots: Vec<Slot> = sqlx::query_as("SELECT time, capacity FROM slots ORDER BY time")
        .fetch_all(pool)
        .await?;
    Ok(slots)
}

/// Reconcile the stored slot set with a freshly generated grid
///
/// Labels missing from storage are inserted with the default capacity;
/// stored labels no longer in the grid are deleted. Capacity edits on
/// surviving slots are preserved, and reservations are never touched,
/// so bookings at removed labels become display-only orphans.
/// Idempotent.
pub async fn sync_slots(pool: &PgPool, grid: &[String]) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;

    for time in grid {
        sqlx::query(
            r#"
            INSERT INTO slots (time, capacity)
            VALUES ($1, $2)
            ON CONFLICT (time) DO NOTHING
            "#,
        )
        .bind(time)
        .bind(DEFAULT_CAPACITY)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query("DELETE FROM slots WHERE time <> ALL($1)")
        .bind(grid)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Delete every stored slot; a following sync re-creates the grid
/// with default capacities
pub async fn delete_all(pool: &PgPool) -> ServiceResult<()> {
    sqlx::query("DELETE FROM slots").execute(pool).await?;
    Ok(())
}

/// Overwrite the capacity of one slot
pub async fn set_capacity(pool: &PgPool, time: &str, capacity: i32) -> ServiceResult<()> {
    if capacity <= 0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidCapacity,
            "Kapacita musí být kladné číslo.",
        )
        .into());
    }

    let result = sqlx::query("UPDATE slots SET capacity = $1 WHERE time = $2")
        .bind(capacity)
        .bind(time)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(
            AppError::with_message(ErrorCode::SlotNotFound, "Časový slot neexistuje.").into(),
        );
    }
    Ok(())
}
