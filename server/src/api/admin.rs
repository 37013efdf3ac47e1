//! Admin management API endpoints
//!
//! Everything here sits behind the admin JWT middleware except
//! `login`. Mutating handlers additionally demand a per-action
//! anti-forgery token in `X-Action-Token`.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{BookingConfig, CapacityUpdate, SlotDetail, TimeRangeSettings};

use crate::auth::{action_token, admin};
use crate::db;
use crate::error::ServiceError;
use crate::export;
use crate::state::AppState;

pub const MSG_CAPACITY_UPDATED: &str = "Kapacita byla úspěšně změněna.";
pub const MSG_RESERVATION_DELETED: &str = "Rezervace byla úspěšně odstraněna.";
pub const MSG_SLOT_CLEARED: &str = "Všechny rezervace pro tento čas byly úspěšně odstraněny.";
pub const MSG_ALL_CLEARED: &str = "Všechny rezervace byly úspěšně odstraněny.";
pub const MSG_CONFIG_SAVED: &str = "Nastavení bylo úspěšně aktualizováno.";
pub const MSG_TIME_RANGE_SAVED: &str = "Časové nastavení bylo úspěšně aktualizováno.";
pub const MSG_SYSTEM_RESET: &str = "Systém byl úspěšně resetován do výchozího nastavení.";

type ApiResult<T> = Result<Json<ApiResponse<T>>, ServiceError>;

/// POST /api/admin/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    if !admin::verify_password(&req.password, &state.admin_password_hash) {
        return Err(AppError::invalid_credentials().into());
    }

    let token = admin::create_token(&state.jwt_secret).map_err(|e| {
        tracing::error!("JWT creation failed: {e}");
        ServiceError::App(AppError::new(ErrorCode::InternalError))
    })?;

    Ok(Json(ApiResponse::success(LoginResponse { token })))
}

/// GET /api/admin/csrf/{action}
#[derive(Serialize)]
pub struct ActionTokenResponse {
    pub token: String,
}

pub async fn issue_action_token(
    State(state): State<AppState>,
    Path(action): Path<String>,
) -> ApiResult<ActionTokenResponse> {
    let token = action_token::issue(&action, &state.jwt_secret).map_err(|reason| {
        tracing::error!(reason, "Action token minting failed");
        ServiceError::App(AppError::new(ErrorCode::InternalError))
    })?;
    Ok(Json(ApiResponse::success(ActionTokenResponse { token })))
}

/// GET /api/admin/overview
#[derive(Serialize)]
pub struct Overview {
    pub config: BookingConfig,
    pub time_range: TimeRangeSettings,
    pub slots: Vec<SlotDetail>,
}

pub async fn overview(State(state): State<AppState>) -> ApiResult<Overview> {
    let config = db::settings::load_config(&state.pool).await?;
    let time_range = db::settings::load_time_range(&state.pool).await?;
    let grid = shared::timegrid::generate_grid(&time_range)?;
    let slots = db::availability::load_details(&state.pool, &grid).await?;

    Ok(Json(ApiResponse::success(Overview {
        config,
        time_range,
        slots,
    })))
}

/// PUT /api/admin/slots/{time}/capacity
pub async fn set_capacity(
    State(state): State<AppState>,
    Path(time): Path<String>,
    headers: HeaderMap,
    Json(req): Json<CapacityUpdate>,
) -> ApiResult<()> {
    admin::require_action_token(&headers, "set_capacity", &state.jwt_secret)?;
    db::slots::set_capacity(&state.pool, &time, req.capacity).await?;
    Ok(Json(ApiResponse::ok_with_message(MSG_CAPACITY_UPDATED)))
}

/// DELETE /api/admin/reservations/{name}
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> ApiResult<()> {
    admin::require_action_token(&headers, "delete_reservation", &state.jwt_secret)?;
    db::reservations::delete_by_name(&state.pool, &name).await?;
    Ok(Json(ApiResponse::ok_with_message(MSG_RESERVATION_DELETED)))
}

/// DELETE /api/admin/slots/{time}/reservations
pub async fn clear_slot(
    State(state): State<AppState>,
    Path(time): Path<String>,
    headers: HeaderMap,
) -> ApiResult<()> {
    admin::require_action_token(&headers, "clear_slot", &state.jwt_secret)?;
    let deleted = db::reservations::delete_at(&state.pool, &time).await?;
    tracing::info!(time, deleted, "Cleared slot reservations");
    Ok(Json(ApiResponse::ok_with_message(MSG_SLOT_CLEARED)))
}

/// DELETE /api/admin/reservations
pub async fn clear_all(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    admin::require_action_token(&headers, "clear_all", &state.jwt_secret)?;
    let deleted = db::reservations::delete_all(&state.pool).await?;
    tracing::info!(deleted, "Cleared all reservations");
    Ok(Json(ApiResponse::ok_with_message(MSG_ALL_CLEARED)))
}

/// PUT /api/admin/config
pub async fn save_config(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(config): Json<BookingConfig>,
) -> ApiResult<()> {
    admin::require_action_token(&headers, "save_config", &state.jwt_secret)?;
    db::settings::save_config(&state.pool, &config).await?;
    Ok(Json(ApiResponse::ok_with_message(MSG_CONFIG_SAVED)))
}

/// PUT /api/admin/time-range
///
/// Persists the range and reconciles the stored slot set with the new
/// grid. Reservations are never touched; bookings at removed labels
/// become display-only orphans.
pub async fn save_time_range(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(range): Json<TimeRangeSettings>,
) -> ApiResult<()> {
    admin::require_action_token(&headers, "save_time_range", &state.jwt_secret)?;

    // Validate before persisting anything
    let grid = shared::timegrid::generate_grid(&range)?;

    db::settings::save_time_range(&state.pool, &range).await?;
    db::slots::sync_slots(&state.pool, &grid).await?;

    Ok(Json(ApiResponse::ok_with_message(MSG_TIME_RANGE_SAVED)))
}

/// POST /api/admin/reset
///
/// Wipes reservations, slots, and settings, then rebuilds the slot
/// set from the default grid.
pub async fn reset(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    admin::require_action_token(&headers, "reset", &state.jwt_secret)?;

    db::settings::delete_all(&state.pool).await?;
    db::reservations::delete_all(&state.pool).await?;
    db::slots::delete_all(&state.pool).await?;

    let grid = shared::timegrid::generate_grid(&TimeRangeSettings::default())?;
    db::slots::sync_slots(&state.pool, &grid).await?;

    tracing::info!("System reset to defaults");
    Ok(Json(ApiResponse::ok_with_message(MSG_SYSTEM_RESET)))
}

/// GET /api/admin/export?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct ExportQuery {
    pub date: chrono::NaiveDate,
}

pub async fn export_roster(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ServiceError> {
    let bytes = export::export_roster(&state.pool, query.date).await?;

    let headers = [
        (
            http::header::CONTENT_TYPE,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
        ),
        (
            http::header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export::EXPORT_FILENAME),
        ),
    ];
    Ok((headers, bytes).into_response())
}
