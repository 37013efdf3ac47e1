//! Key-value settings store
//!
//! Both settings records (booking config, time range) are stored as
//! JSONB rows keyed by name. Reads fall back to defaults when the row
//! is absent; saves overwrite the record wholesale; reset deletes
//! everything so the defaults apply again.

use serde::Serialize;
use serde_json::Value;
use shared::error::{AppError, ErrorCode};
use shared::models::{BookingConfig, TimeRangeSettings};
use sqlx::PgPool;

use crate::error::{ServiceError, ServiceResult};

const CONFIG_KEY: &str = "config";
const TIME_RANGE_KEY: &str = "time_range";

async fn load_value(pool: &PgPool, key: &str) -> ServiceResult<Option<Value>> {
    let row: Option<(Value,)> = sqlx::query_as("SELECT value FROM settings WHERE key = $1")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(v,)| v))
}

async fn save_value<T: Serialize>(pool: &PgPool, key: &str, value: &T) -> ServiceResult<()> {
    let json = serde_json::to_value(value).map_err(|e| {
        tracing::error!(error = %e, key, "Failed to serialize settings value");
        ServiceError::App(AppError::new(ErrorCode::InternalError))
    })?;
    sqlx::query(
        r#"
        INSERT INTO settings (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
        "#,
    )
    .bind(key)
    .bind(json)
    .execute(pool)
    .await?;
    Ok(())
}

fn decode<T: serde::de::DeserializeOwned + Default>(key: &str, value: Option<Value>) -> T {
    match value {
        Some(v) => serde_json::from_value(v).unwrap_or_else(|e| {
            // A malformed record behaves like a missing one
            tracing::warn!(error = %e, key, "Malformed settings record, using defaults");
            T::default()
        }),
        None => T::default(),
    }
}

/// Load the booking configuration, defaulting when absent
pub async fn load_config(pool: &PgPool) -> ServiceResult<BookingConfig> {
    Ok(decode(CONFIG_KEY, load_value(pool, CONFIG_KEY).await?))
}

/// Overwrite the booking configuration
pub async fn save_config(pool: &PgPool, config: &BookingConfig) -> ServiceResult<()> {
    save_value(pool, CONFIG_KEY, config).await
}

/// Load the time range settings, defaulting when absent
pub async fn load_time_range(pool: &PgPool) -> ServiceResult<TimeRangeSettings> {
    Ok(decode(TIME_RANGE_KEY, load_value(pool, TIME_RANGE_KEY).await?))
}

/// Overwrite the time range settings
pub async fn save_time_range(pool: &PgPool, range: &TimeRangeSettings) -> ServiceResult<()> {
    save_value(pool, TIME_RANGE_KEY, range).await
}

/// Delete every settings record (full reset)
pub async fn delete_all(pool: &PgPool) -> ServiceResult<()> {
    sqlx::query("DELETE FROM settings").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_missing_yields_defaults() {
        let config: BookingConfig = decode(CONFIG_KEY, None);
        assert!(!config.reservations_enabled);
    }

    #[test]
    fn test_decode_malformed_yields_defaults() {
        let range: TimeRangeSettings =
            decode(TIME_RANGE_KEY, Some(Value::String("not an object".into())));
        assert_eq!(range.interval, 15);
    }

    #[test]
    fn test_decode_round_trip() {
        let config = BookingConfig {
            reservations_enabled: true,
            closed_notice_text: "Zavřeno.".into(),
            hide_closed_notice: true,
        };
        let value = serde_json::to_value(&config).unwrap();
        let decoded: BookingConfig = decode(CONFIG_KEY, Some(value));
        assert!(decoded.reservations_enabled);
        assert_eq!(decoded.closed_notice_text, "Zavřeno.");
        assert!(decoded.hide_closed_notice);
    }
}
