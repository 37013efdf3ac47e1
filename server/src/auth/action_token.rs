//! Per-action anti-forgery tokens
//!
//! Every mutating admin endpoint requires a short-lived token bound to
//! the action name, fetched via `GET /api/admin/csrf/{action}` and sent
//! back in the `X-Action-Token` header. The token is an HMAC-SHA256 of
//! `"{action}:{exp}"` keyed by the server secret, serialized as
//! `"{exp}.{hex_mac}"`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Token lifetime in seconds
const ACTION_TOKEN_TTL_SECS: i64 = 12 * 60 * 60;

fn sign(action: &str, exp: i64, secret: &str) -> Result<Vec<u8>, &'static str> {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).map_err(|_| "HMAC key error")?;
    mac.update(format!("{action}:{exp}").as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Issue a token authorizing one named action until expiry
pub fn issue(action: &str, secret: &str) -> Result<String, &'static str> {
    let exp = chrono::Utc::now().timestamp() + ACTION_TOKEN_TTL_SECS;
    let mac = sign(action, exp, secret)?;
    Ok(format!("{exp}.{}", hex::encode(mac)))
}

/// Verify a token against an action name
///
/// Fails on wrong format, expiry, or a MAC minted for another action
/// or with another secret. Comparison is constant-time.
pub fn verify(token: &str, action: &str, secret: &str) -> Result<(), &'static str> {
    let (exp_str, sig_hex) = token.split_once('.').ok_or("Invalid token format")?;
    let exp: i64 = exp_str.parse().map_err(|_| "Invalid token format")?;

    if chrono::Utc::now().timestamp() > exp {
        return Err("Token expired");
    }

    let sig_bytes = hex::decode(sig_hex).map_err(|_| "Invalid token hex")?;
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).map_err(|_| "HMAC key error")?;
    mac.update(format!("{action}:{exp}").as_bytes());
    mac.verify_slice(&sig_bytes).map_err(|_| "Signature mismatch")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_round_trip() {
        let token = issue("delete_reservation", SECRET).unwrap();
        assert!(verify(&token, "delete_reservation", SECRET).is_ok());
    }

    #[test]
    fn test_rejects_other_action() {
        let token = issue("delete_reservation", SECRET).unwrap();
        assert!(verify(&token, "reset_system", SECRET).is_err());
    }

    #[test]
    fn test_rejects_other_secret() {
        let token = issue("save_config", SECRET).unwrap();
        assert!(verify(&token, "save_config", "other-secret").is_err());
    }

    #[test]
    fn test_rejects_expired() {
        let exp = chrono::Utc::now().timestamp() - 1;
        let mac = sign("save_config", exp, SECRET).unwrap();
        let token = format!("{exp}.{}", hex::encode(mac));
        assert_eq!(verify(&token, "save_config", SECRET), Err("Token expired"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(verify("not-a-token", "save_config", SECRET).is_err());
        assert!(verify("123.zzzz", "save_config", SECRET).is_err());
        assert!(verify("", "save_config", SECRET).is_err());
    }

    #[test]
    fn test_rejects_tampered_expiry() {
        let token = issue("save_config", SECRET).unwrap();
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("{}.{sig}", i64::MAX);
        assert!(verify(&forged, "save_config", SECRET).is_err());
    }
}
