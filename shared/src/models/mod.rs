//! Data models
//!
//! Shared between the server and any API consumer.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.

pub mod availability;
pub mod reservation;
pub mod settings;
pub mod slot;

// Re-exports
pub use availability::*;
pub use reservation::*;
pub use settings::*;
pub use slot::*;
