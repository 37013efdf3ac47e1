//! Application state for the reservation server

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};
use sqlx::PgPool;

use crate::config::Config;
use crate::db;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Secret for admin session tokens and action tokens
    pub jwt_secret: String,
    /// Argon2 PHC hash of the admin password
    pub admin_password_hash: String,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let admin_password_hash = match &config.admin_password_hash {
            Some(hash) => hash.clone(),
            None => {
                // Development only; Config rejects the unset case elsewhere
                tracing::warn!("ADMIN_PASSWORD_HASH not set, using development password \"admin\"");
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(b"admin", &salt)
                    .map_err(|e| format!("failed to hash development password: {e}"))?
                    .to_string()
            }
        };

        // Reconcile stored slots with the configured grid on startup
        let range = db::settings::load_time_range(&pool).await?;
        let grid = shared::timegrid::generate_grid(&range)?;
        db::slots::sync_slots(&pool, &grid).await?;
        tracing::info!(slots = grid.len(), "Slot grid ready");

        Ok(Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            admin_password_hash,
        })
    }
}
