//! Signature check for incoming webhook deliveries.
//!
//! Each delivery carries `X-Hmac-Sha256: base64(HMAC-SHA256(secret, body))`.
//! The body is only borrowed, so callers can still decode it afterwards.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Header carrying the delivery signature.
pub const SIGNATURE_HEADER: &str = "X-Hmac-Sha256";

type HmacSha256 = Hmac<Sha256>;

/// Base64 HMAC-SHA256 of `body` keyed with `secret`.
pub fn sign(body: &[u8], secret: &str) -> String {
    let mut mac = keyed(secret);
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// True when `signature` (the header value) matches `body` under `secret`.
/// The comparison runs in constant time.
pub fn verify_signature(body: &[u8], signature: &str, secret: &str) -> bool {
    let Ok(expected) = STANDARD.decode(signature.trim()) else {
        return false;
    };
    let mut mac = keyed(secret);
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

/// Look up the signature header in `headers` and verify `body` against it.
pub fn verify_request(headers: &[(String, String)], body: &[u8], secret: &str) -> bool {
    headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(SIGNATURE_HEADER))
        .is_some_and(|(_, value)| verify_signature(body, value, secret))
}

fn keyed(secret: &str) -> HmacSha256 {
    <HmacSha256 as Mac>::new_from_slice(secret.as_bytes())
        .unwrap_or_else(|_| unreachable!("hmac accepts keys of any length"))
}
