//! API routes for the reservation server

pub mod admin;
pub mod health;
pub mod public;

use axum::routing::{delete, get, post, put};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::admin::admin_auth_middleware;
use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Public booking surface (no auth)
    let public = Router::new()
        .route("/api/slots", get(public::get_slots))
        .route("/api/reservations", post(public::create_reservation));

    // Admin management (JWT authenticated)
    let admin = Router::new()
        .route("/api/admin/csrf/{action}", get(admin::issue_action_token))
        .route("/api/admin/overview", get(admin::overview))
        .route("/api/admin/slots/{time}/capacity", put(admin::set_capacity))
        .route(
            "/api/admin/reservations/{name}",
            delete(admin::delete_reservation),
        )
        .route(
            "/api/admin/slots/{time}/reservations",
            delete(admin::clear_slot),
        )
        .route("/api/admin/reservations", delete(admin::clear_all))
        .route("/api/admin/config", put(admin::save_config))
        .route("/api/admin/time-range", put(admin::save_time_range))
        .route("/api/admin/reset", post(admin::reset))
        .route("/api/admin/export", get(admin::export_roster))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ));

    // Login stays outside the auth layer
    let login = Router::new().route("/api/admin/login", post(admin::login));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(public)
        .merge(login)
        .merge(admin)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
