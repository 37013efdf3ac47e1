//! Shared types for the reservation service
//!
//! Common types used across crates: error codes and the unified API
//! response envelope, domain models, time-grid generation, and Czech
//! pluralization for availability labels.

pub mod error;
pub mod models;
pub mod plural;
pub mod timegrid;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
