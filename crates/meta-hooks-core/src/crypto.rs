//! Cryptographic utilities for webhook verification.
//!
//! Meta signs every delivery with the app secret and sends the digest in
//! `X-Hub-Signature` (HMAC-SHA1) and `X-Hub-Signature-256` (HMAC-SHA256).
//! Header values are the algorithm prefix followed by the lowercase hex digest,
//! e.g. `sha1=5d4f...`.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// Digest used to sign a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// HMAC-SHA1, sent in `X-Hub-Signature`.
    Sha1,
    /// HMAC-SHA256, sent in `X-Hub-Signature-256`.
    Sha256,
}

impl SignatureAlgorithm {
    /// Prefix in front of the hex digest in the header value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1=",
            Self::Sha256 => "sha256=",
        }
    }

    /// Header carrying this signature (lowercase).
    #[must_use]
    pub const fn header_name(self) -> &'static str {
        match self {
            Self::Sha1 => "x-hub-signature",
            Self::Sha256 => "x-hub-signature-256",
        }
    }
}

/// Compute an HMAC over `message` and return it hex-encoded.
///
/// # Panics
///
/// This function will never panic in practice. HMAC accepts keys of any size
/// per RFC 2104.
#[must_use]
pub fn hmac_hex(algorithm: SignatureAlgorithm, secret: &[u8], message: &[u8]) -> String {
    // INVARIANT: HMAC accepts keys of any size per RFC 2104, so
    // `new_from_slice` only fails if the Hmac implementation is broken.
    match algorithm {
        SignatureAlgorithm::Sha1 => {
            let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC-SHA1 accepts any key size");
            mac.update(message);
            hex::encode(mac.finalize().into_bytes())
        }
        SignatureAlgorithm::Sha256 => {
            let mut mac =
                HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 accepts any key size");
            mac.update(message);
            hex::encode(mac.finalize().into_bytes())
        }
    }
}

/// Build the full header value (`sha1=<hex>` or `sha256=<hex>`) for a body.
#[must_use]
pub fn sign(algorithm: SignatureAlgorithm, secret: &str, body: &[u8]) -> String {
    format!(
        "{}{}",
        algorithm.prefix(),
        hmac_hex(algorithm, secret.as_bytes(), body)
    )
}

/// Check an `X-Hub-Signature` header value against the raw request body.
///
/// Returns `false` when the secret is missing or empty, when the header is
/// missing, or when the header is not exactly `sha1=` plus the lowercase hex
/// HMAC-SHA1 of the body.
#[must_use]
pub fn verify(raw_body: &[u8], secret: Option<&str>, provided_signature: Option<&str>) -> bool {
    verify_signature(
        SignatureAlgorithm::Sha1,
        raw_body,
        secret,
        provided_signature,
    )
}

/// Check a signature header value for the given algorithm.
///
/// Same rules as [`verify`], with the prefix and digest taken from `algorithm`.
#[must_use]
pub fn verify_signature(
    algorithm: SignatureAlgorithm,
    raw_body: &[u8],
    secret: Option<&str>,
    provided_signature: Option<&str>,
) -> bool {
    let Some(secret) = secret.filter(|s| !s.is_empty()) else {
        return false;
    };
    let Some(provided) = provided_signature else {
        return false;
    };

    constant_time_eq(&sign(algorithm, secret, raw_body), provided)
}

/// Constant-time string comparison to prevent timing attacks.
///
/// Length is not hidden; only the position of the first differing byte is.
#[must_use]
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
