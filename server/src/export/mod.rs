//! Roster export to xlsx

mod layout;
mod xlsx;

use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use sqlx::PgPool;

use crate::db;
use crate::error::{ServiceError, ServiceResult};

pub use layout::{PAGE_BODY_ROWS, PAGE_BREAK_THRESHOLD, SheetPlan, SheetRow, TimeBlock, plan_sheet};

/// Fixed download filename
pub const EXPORT_FILENAME: &str = "rezervace.xlsx";

/// User-facing message when there is nothing to export
pub const MSG_NO_RESERVATIONS: &str = "Žádné rezervace k exportu.";

/// Produce the xlsx roster for a target date
///
/// Reads every reservation ordered by time then name, including
/// bookings whose label fell out of the current grid. Fails with
/// [`ErrorCode::NoReservations`] when the table is empty.
pub async fn export_roster(pool: &PgPool, date: NaiveDate) -> ServiceResult<Vec<u8>> {
    let reservations = db::reservations::list_ordered(pool).await?;
    if reservations.is_empty() {
        return Err(
            AppError::with_message(ErrorCode::NoReservations, MSG_NO_RESERVATIONS).into(),
        );
    }

    let plan = plan_sheet(&reservations);
    xlsx::render(&plan, date).map_err(|e| {
        tracing::error!(error = %e, "xlsx rendering failed");
        ServiceError::App(AppError::new(ErrorCode::ExportFailed))
    })
}
