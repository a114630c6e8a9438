//! Certificate fingerprint (digest) computation.

use crate::util;
use crate::SigprintError;
use digest::Digest;
use serde::Serialize;

/// Digest algorithm for fingerprint computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = SigprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(DigestAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            other => Err(SigprintError::UnknownDigest(other.to_string())),
        }
    }
}

/// The fingerprints of one signing certificate.
///
/// Constructed once per [`compute_fingerprint`] call and never mutated.
/// Serializes with the external key names (`packageName`, `sha1`, `sha256`)
/// expected by bridge consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FingerprintResult {
    /// Package identifier, passed through from the caller unmodified.
    #[serde(rename = "packageName")]
    pub package_name: String,
    /// SHA-1 fingerprint as colon-separated uppercase hex (20 pairs).
    pub sha1: String,
    /// SHA-256 fingerprint as colon-separated uppercase hex (32 pairs).
    pub sha256: String,
}

/// Compute the fingerprint of certificate bytes with a single algorithm.
///
/// Returns a colon-separated uppercase hex string (e.g., "AB:CD:EF:...").
pub fn digest_hex(cert: &[u8], algorithm: DigestAlgorithm) -> String {
    let hash_bytes: Vec<u8> = match algorithm {
        DigestAlgorithm::Sha1 => sha1::Sha1::digest(cert).to_vec(),
        DigestAlgorithm::Sha256 => sha2::Sha256::digest(cert).to_vec(),
    };
    util::hex_colon_upper(&hash_bytes)
}

/// Compute the SHA-1 and SHA-256 fingerprints of a signing certificate.
///
/// `package_name` is copied into the result unmodified; `cert` is the raw
/// DER bytes of the one signer the caller selected. Pure and deterministic:
/// identical inputs always produce identical output, no I/O is performed,
/// and each call instantiates its own digest state, so concurrent calls
/// never interfere.
///
/// Fails with [`SigprintError::EmptyCertificate`] when `cert` is empty.
pub fn compute_fingerprint(
    package_name: &str,
    cert: &[u8],
) -> Result<FingerprintResult, SigprintError> {
    if cert.is_empty() {
        return Err(SigprintError::EmptyCertificate);
    }

    Ok(FingerprintResult {
        package_name: package_name.to_string(),
        sha1: digest_hex(cert, DigestAlgorithm::Sha1),
        sha256: digest_hex(cert, DigestAlgorithm::Sha256),
    })
}
