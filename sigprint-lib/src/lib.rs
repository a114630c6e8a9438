//! sigprint-lib: Library for computing signing-certificate fingerprints.
//!
//! Provides a high-level API for computing the SHA-1 and SHA-256
//! fingerprints of a DER-encoded signing certificate, rendering them as
//! colon-separated uppercase hex, and answering the `getSigning`
//! call/response contract used by host-application bridges.
//!
//! The library never resolves certificates itself: callers (or a
//! [`SignerResolver`] implementation) supply the raw bytes of the signer
//! they selected. Chain validation and trust decisions are out of scope.

mod bridge;
mod convert;
mod display;
mod fingerprint;
mod util;

pub use bridge::{
    handle_call, CallResponse, SignerResolver, CODE_ERR, CODE_NO_SIGNATURE, METHOD_GET_SIGNING,
};
pub use convert::{is_pem, pem_to_der};
pub use display::{display_text, to_json};
pub use fingerprint::{compute_fingerprint, digest_hex, DigestAlgorithm, FingerprintResult};
pub use util::hex_colon_upper;

/// Errors returned by sigprint-lib.
#[derive(Debug, thiserror::Error)]
pub enum SigprintError {
    /// Certificate bytes were missing or empty. Retrying with the same
    /// input cannot succeed; the caller must resolve a usable signer first.
    #[error("No certificate bytes provided")]
    EmptyCertificate,

    /// A digest algorithm this build does not provide was requested.
    /// Fatal for the process; never retried.
    #[error("Digest algorithm unavailable: {0}")]
    UnknownDigest(String),

    /// The upstream platform lookup for the package's signing info failed.
    /// Produced by [`SignerResolver`] implementations, not by this crate.
    #[error("Failed to resolve signing certificate: {0}")]
    Lookup(String),

    #[error("Invalid PEM format: {0}")]
    Pem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
