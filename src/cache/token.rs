//! User-id extraction from a bearer token, for per-user cache key scoping.
//!
//! The payload is decoded without signature verification. This is not a
//! security boundary: the id only partitions local cache keys, it never
//! authorizes anything.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::Value;

/// Extract a user id from a JWT-shaped bearer token. Returns `None` on any
/// failure (wrong shape, bad base64, bad JSON, no usable claim), which leaves
/// cache keys unscoped.
pub fn user_id_from_token(token: &str) -> Option<String> {
    let payload = decode_payload(token)?;
    let claim = payload.get("sub").or_else(|| payload.get("userId"))?;
    match claim {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decode the second segment of a three-segment token as base64url JSON.
fn decode_payload(token: &str) -> Option<Value> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let decoded = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    serde_json::from_slice(&decoded).ok()
}
