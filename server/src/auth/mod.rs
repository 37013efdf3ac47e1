//! Admin authentication and anti-forgery tokens

pub mod action_token;
pub mod admin;
