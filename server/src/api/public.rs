//! Public availability and submission endpoints

use axum::{Json, extract::State};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{PublicAvailability, ReservationCreate, summarize};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// User-facing message after a successful submission
pub const MSG_RESERVATION_CREATED: &str = "Rezervace byla úspěšně provedena!";

/// GET /api/slots
///
/// Returns the open slot list with remaining-seat labels, or the
/// closed notice when booking is disabled.
pub async fn get_slots(
    State(state): State<AppState>,
) -> Result<Json<PublicAvailability>, ServiceError> {
    let config = db::settings::load_config(&state.pool).await?;
    if !config.reservations_enabled {
        let notice = if config.hide_closed_notice {
            None
        } else {
            Some(config.closed_notice_text)
        };
        return Ok(Json(PublicAvailability::Closed { notice }));
    }

    let range = db::settings::load_time_range(&state.pool).await?;
    let grid = shared::timegrid::generate_grid(&range)?;
    let details = db::availability::load_details(&state.pool, &grid).await?;

    Ok(Json(PublicAvailability::Open {
        slots: summarize(&details),
    }))
}

/// POST /api/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(req): Json<ReservationCreate>,
) -> Result<Json<ApiResponse<()>>, ServiceError> {
    let config = db::settings::load_config(&state.pool).await?;
    if !config.reservations_enabled {
        return Err(AppError::with_message(
            ErrorCode::ReservationsClosed,
            config.closed_notice_text,
        )
        .into());
    }

    let time = shared::timegrid::normalize_label(&req.time)?;
    db::reservations::create(&state.pool, &req.name, &time).await?;

    Ok(Json(ApiResponse::ok_with_message(MSG_RESERVATION_CREATED)))
}
