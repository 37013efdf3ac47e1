//! Availability reads: reservation counts joined against capacities

use std::collections::HashMap;

use shared::models::{SlotDetail, capacity_or_default};
use sqlx::PgPool;

use crate::error::ServiceResult;

/// Build the admin availability view for the current grid
///
/// Every grid label gets an entry, with capacity defaulted when the
/// slot row is missing and an empty name list when nothing is booked.
pub async fn load_details(pool: &PgPool, grid: &[String]) -> ServiceResult<Vec<SlotDetail>> {
    let reservations: Vec<(String, String)> =
        sqlx::query_as("SELECT time, name FROM reservations")
            .fetch_all(pool)
            .await?;

    let capacities: Vec<(String, i32)> =
        sqlx::query_as("SELECT time, capacity FROM slots").fetch_all(pool).await?;

    Ok(build_details(grid, reservations, capacities))
}

/// Assemble per-slot details, sorting names byte-wise
///
/// Sorting happens here rather than in SQL so the order stays a
/// case-sensitive ordinal compare regardless of the database's
/// collation ("Bob" before "alice").
fn build_details(
    grid: &[String],
    reservations: Vec<(String, String)>,
    capacities: Vec<(String, i32)>,
) -> Vec<SlotDetail> {
    let mut names_by_time: HashMap<String, Vec<String>> = HashMap::new();
    for (time, name) in reservations {
        names_by_time.entry(time).or_default().push(name);
    }
    for names in names_by_time.values_mut() {
        names.sort_unstable();
    }
    let capacity_by_time: HashMap<String, i32> = capacities.into_iter().collect();

    grid.iter()
        .map(|time| SlotDetail {
            time: time.clone(),
            capacity: capacity_or_default(capacity_by_time.get(time).copied()),
            names: names_by_time.remove(time).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_names_sorted_ordinally_not_by_locale() {
        let details = build_details(
            &grid(&["09:00"]),
            vec![
                ("09:00".into(), "alice".into()),
                ("09:00".into(), "Bob".into()),
                ("09:00".into(), "Adam".into()),
            ],
            vec![("09:00".into(), 6)],
        );
        // Uppercase sorts before lowercase in byte order
        assert_eq!(details[0].names, vec!["Adam", "Bob", "alice"]);
    }

    #[test]
    fn test_missing_slot_row_defaults_capacity() {
        let details = build_details(&grid(&["09:00", "09:15"]), vec![], vec![("09:15".into(), 3)]);
        assert_eq!(details[0].capacity, 6);
        assert!(details[0].names.is_empty());
        assert_eq!(details[1].capacity, 3);
    }

    #[test]
    fn test_every_grid_label_gets_an_entry() {
        let details = build_details(
            &grid(&["09:00", "09:15", "09:30"]),
            vec![("09:15".into(), "Eva".into())],
            vec![],
        );
        assert_eq!(details.len(), 3);
        assert_eq!(details[1].names, vec!["Eva"]);
    }
}
