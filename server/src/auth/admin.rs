//! Admin JWT authentication
//!
//! Login verifies the password against the configured argon2 hash and
//! issues a session JWT. The middleware gates every `/api/admin` route
//! except login itself.

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};

use crate::state::AppState;

/// JWT claims for the admin session
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Fixed subject, there is a single admin role
    pub sub: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

const JWT_EXPIRY_HOURS: i64 = 24;
const ADMIN_SUBJECT: &str = "admin";

/// Create a session JWT after a successful login
pub fn create_token(secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = AdminClaims {
        sub: ADMIN_SUBJECT.to_string(),
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Check a login password against the stored argon2 PHC hash
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::error!(error = %e, "Stored admin password hash is not a valid PHC string");
            false
        }
    }
}

/// Middleware that verifies the admin session JWT from the Authorization header
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::NotAuthenticated, "Missing Authorization header")
                .into_response()
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::with_message(ErrorCode::NotAuthenticated, "Invalid Authorization format")
            .into_response()
    })?;

    let validation = Validation::default();
    jsonwebtoken::decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!("Admin JWT validation failed: {e}");
        AppError::invalid_token("Invalid or expired token").into_response()
    })?;

    Ok(next.run(request).await)
}

/// Verify the `X-Action-Token` header against an action name
///
/// Mutating admin routes call this before touching storage.
pub fn require_action_token(
    request_headers: &http::HeaderMap,
    action: &str,
    secret: &str,
) -> Result<(), AppError> {
    let token = request_headers
        .get("X-Action-Token")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| action_token_rejection("Missing X-Action-Token header"))?;

    super::action_token::verify(token, action, secret).map_err(|reason| {
        tracing::debug!(action, reason, "Action token rejected");
        action_token_rejection("Neplatný bezpečnostní token.")
    })
}

fn action_token_rejection(message: &str) -> AppError {
    AppError::with_message(ErrorCode::ActionTokenInvalid, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{SaltString, rand_core::OsRng};
    use argon2::PasswordHasher;

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_password_round_trip() {
        let stored = hash("tajne-heslo");
        assert!(verify_password("tajne-heslo", &stored));
        assert!(!verify_password("spatne-heslo", &stored));
    }

    #[test]
    fn test_invalid_stored_hash_rejects() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_token_decodes_with_same_secret() {
        let token = create_token("secret").unwrap();
        let decoded = jsonwebtoken::decode::<AdminClaims>(
            &token,
            &DecodingKey::from_secret(b"secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, "admin");
        // Session lasts a day
        assert_eq!(decoded.claims.exp - decoded.claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_token_rejected_with_other_secret() {
        let token = create_token("secret").unwrap();
        let result = jsonwebtoken::decode::<AdminClaims>(
            &token,
            &DecodingKey::from_secret(b"other"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
