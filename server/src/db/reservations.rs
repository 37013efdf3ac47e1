//! Reservation store operations
//!
//! The write path runs in one transaction with the slot row locked
//! `FOR UPDATE`, so two concurrent submissions for the same slot
//! serialize on the capacity check. The unique index on `name`
//! backstops the global name-uniqueness rule.

use shared::error::{AppError, ErrorCode};
use shared::models::{DEFAULT_CAPACITY, Reservation};
use sqlx::PgPool;

use crate::error::{ServiceError, ServiceResult};

/// User-facing message when a slot is fully booked
pub const MSG_CAPACITY_FULL: &str = "Kapacita pro tento čas je již plná.";

/// User-facing message when the name already holds a reservation
pub const MSG_DUPLICATE_NAME: &str = "Rezervace pro toto jméno již existuje! \
    V případě shody jmen napište za jméno dítěte do závorek jméno rodiče! \
    Pokud jste jméno nezadávali vy, tak se obraťte na školku!";

/// User-facing message for a missing name
pub const MSG_NAME_REQUIRED: &str = "Jméno je povinné.";

/// Create a reservation, enforcing capacity and name uniqueness
///
/// Checks run in order; the first failing one wins:
/// 1. trimmed-empty name
/// 2. slot capacity reached (missing slot row defaults to capacity 6)
/// 3. a reservation with this name already exists anywhere
pub async fn create(pool: &PgPool, name: &str, time: &str) -> ServiceResult<Reservation> {
    let name = name.trim();
    if name.is_empty() {
        return Err(
            AppError::with_message(ErrorCode::ValidationFailed, MSG_NAME_REQUIRED).into(),
        );
    }

    let mut tx = pool.begin().await?;

    // Lock the slot row so concurrent submissions serialize per slot.
    // A missing row means the slot was never stored; default capacity
    // applies and there is nothing to lock.
    let capacity: Option<i32> =
        sqlx::query_scalar("SELECT capacity FROM slots WHERE time = $1 FOR UPDATE")
            .bind(time)
            .fetch_optional(&mut *tx)
            .await?;
    let capacity = capacity.unwrap_or(DEFAULT_CAPACITY);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE time = $1")
        .bind(time)
        .fetch_one(&mut *tx)
        .await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE name = $1")
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

    check_admission(count, capacity, existing > 0)?;

    let reservation: Reservation = sqlx::query_as(
        r#"
        INSERT INTO reservations (name, time)
        VALUES ($1, $2)
        RETURNING id, name, time
        "#,
    )
    .bind(name)
    .bind(time)
    .fetch_one(&mut *tx)
    .await
    .map_err(map_unique_violation)?;

    tx.commit().await?;
    Ok(reservation)
}

/// Admission decision for one submission given the current counts
///
/// A full slot is reported before a duplicate name, even when both
/// rules reject.
fn check_admission(reserved: i64, capacity: i32, name_taken: bool) -> Result<(), AppError> {
    if reserved >= i64::from(capacity) {
        return Err(AppError::with_message(
            ErrorCode::CapacityExceeded,
            MSG_CAPACITY_FULL,
        ));
    }
    if name_taken {
        return Err(AppError::with_message(
            ErrorCode::DuplicateName,
            MSG_DUPLICATE_NAME,
        ));
    }
    Ok(())
}

/// The unique index can still fire when two submissions race past the
/// pre-check; surface it as the same duplicate-name rejection.
fn map_unique_violation(e: sqlx::Error) -> ServiceError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return AppError::with_message(ErrorCode::DuplicateName, MSG_DUPLICATE_NAME).into();
        }
    }
    e.into()
}

/// Delete one reservation by its name
pub async fn delete_by_name(pool: &PgPool, name: &str) -> ServiceResult<()> {
    let result = sqlx::query("DELETE FROM reservations WHERE name = $1")
        .bind(name)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(AppError::with_message(
            ErrorCode::ReservationNotFound,
            "Rezervace pro toto jméno neexistuje.",
        )
        .into());
    }
    Ok(())
}

/// Delete every reservation at a given slot label
pub async fn delete_at(pool: &PgPool, time: &str) -> ServiceResult<u64> {
    let result = sqlx::query("DELETE FROM reservations WHERE time = $1")
        .bind(time)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Delete every reservation
pub async fn delete_all(pool: &PgPool) -> ServiceResult<u64> {
    let result = sqlx::query("DELETE FROM reservations").execute(pool).await?;
    Ok(result.rows_affected())
}

/// All reservations ordered by slot label, then name
///
/// Reads the reservations table directly so orphaned bookings (labels
/// removed from the grid) stay visible in exports and history.
pub async fn list_ordered(pool: &PgPool) -> ServiceResult<Vec<Reservation>> {
    let mut rows: Vec<Reservation> = sqlx::query_as("SELECT id, name, time FROM reservations")
        .fetch_all(pool)
        .await?;
    sort_roster(&mut rows);
    Ok(rows)
}

/// Byte-wise sort by time then name, independent of the database
/// collation
fn sort_roster(rows: &mut [Reservation]) {
    rows.sort_unstable_by(|a, b| a.time.cmp(&b.time).then_with(|| a.name.cmp(&b.name)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_slot_rejected_before_duplicate_name() {
        let err = check_admission(2, 2, true).unwrap_err();
        assert_eq!(err.code, ErrorCode::CapacityExceeded);
        assert_eq!(err.message, MSG_CAPACITY_FULL);
    }

    #[test]
    fn test_duplicate_name_rejected_when_slot_has_room() {
        let err = check_admission(1, 2, true).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateName);
        assert_eq!(err.message, MSG_DUPLICATE_NAME);
    }

    #[test]
    fn test_admission_granted_with_room_and_fresh_name() {
        assert!(check_admission(0, 2, false).is_ok());
        assert!(check_admission(5, 6, false).is_ok());
    }

    // Capacity 2 slot: two admissions fill it, a third bounces, and
    // an admitted name cannot book a second slot.
    #[test]
    fn test_slot_fills_then_rejects_and_names_stay_unique() {
        // Alice, then Bob
        assert!(check_admission(0, 2, false).is_ok());
        assert!(check_admission(1, 2, false).is_ok());
        // Carol finds the slot full
        assert_eq!(
            check_admission(2, 2, false).unwrap_err().code,
            ErrorCode::CapacityExceeded
        );
        // Alice tries an empty slot under her existing name
        assert_eq!(
            check_admission(0, 2, true).unwrap_err().code,
            ErrorCode::DuplicateName
        );
    }

    #[test]
    fn test_roster_sorts_ordinally_within_time() {
        let mut rows = vec![
            Reservation {
                id: 1,
                name: "alice".into(),
                time: "09:00".into(),
            },
            Reservation {
                id: 2,
                name: "Bob".into(),
                time: "09:00".into(),
            },
            Reservation {
                id: 3,
                name: "Adam".into(),
                time: "08:45".into(),
            },
        ];
        sort_roster(&mut rows);
        let order: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.time.as_str(), r.name.as_str()))
            .collect();
        // Times first, then names in byte order (uppercase before lowercase)
        assert_eq!(
            order,
            vec![("08:45", "Adam"), ("09:00", "Bob"), ("09:00", "alice")]
        );
    }
}
