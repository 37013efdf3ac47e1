//! Database access layer

pub mod availability;
pub mod reservations;
pub mod settings;
pub mod slots;
