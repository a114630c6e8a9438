//! Call/response contract for host-application bridges.
//!
//! The host side of the bridge (a mobile method channel, an IPC endpoint)
//! resolves the package identifier and the first signer's certificate
//! bytes using whatever platform lookup applies, then hands both to
//! [`handle_call`] through a [`SignerResolver`]. Platform-version
//! branching lives entirely behind that trait; this module only owns the
//! response semantics.
//!
//! Every failure is recovered here into a structured [`CallResponse`];
//! nothing panics or escapes to the host process.

use crate::fingerprint::{compute_fingerprint, FingerprintResult};
use crate::SigprintError;

/// The one method this bridge answers.
pub const METHOD_GET_SIGNING: &str = "getSigning";

/// Error code for a package with no resolvable signing certificate.
pub const CODE_NO_SIGNATURE: &str = "NO_SIGNATURE";

/// Error code for any other failure; the message carries the detail.
pub const CODE_ERR: &str = "ERR";

/// Supplies the package identifier and the selected signer's certificate.
///
/// Implementations own the platform lookup, including any OS-version
/// specific code paths. Only the first signer is ever inspected; selecting
/// among multiple signers is inherited caller policy.
pub trait SignerResolver {
    /// The identifier of the package being fingerprinted.
    fn package_name(&self) -> Result<String, SigprintError>;

    /// Raw DER bytes of the first signer's certificate, or `None` when the
    /// package has no resolvable signature.
    fn first_signer(&self) -> Result<Option<Vec<u8>>, SigprintError>;
}

/// Structured outcome of a bridge call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallResponse {
    /// The `{packageName, sha1, sha256}` mapping.
    Success(FingerprintResult),
    /// Tagged failure: `code` is [`CODE_NO_SIGNATURE`] or [`CODE_ERR`].
    Failure {
        code: &'static str,
        message: String,
    },
    /// The method name is not recognized.
    NotImplemented,
}

/// Answer one bridge call.
///
/// Unknown methods yield [`CallResponse::NotImplemented`]. For
/// [`METHOD_GET_SIGNING`], resolver errors and digest failures are
/// converted into [`CallResponse::Failure`] rather than propagated:
/// an absent or empty certificate maps to [`CODE_NO_SIGNATURE`], anything
/// else to [`CODE_ERR`] with the error's message attached.
pub fn handle_call(method: &str, resolver: &dyn SignerResolver) -> CallResponse {
    if method != METHOD_GET_SIGNING {
        return CallResponse::NotImplemented;
    }

    let package_name = match resolver.package_name() {
        Ok(name) => name,
        Err(e) => return failure(e),
    };

    match resolver.first_signer() {
        Ok(Some(cert)) => match compute_fingerprint(&package_name, &cert) {
            Ok(result) => CallResponse::Success(result),
            Err(e) => failure(e),
        },
        Ok(None) => failure(SigprintError::EmptyCertificate),
        Err(e) => failure(e),
    }
}

fn failure(err: SigprintError) -> CallResponse {
    let code = match err {
        SigprintError::EmptyCertificate => CODE_NO_SIGNATURE,
        _ => CODE_ERR,
    };
    CallResponse::Failure {
        code,
        message: err.to_string(),
    }
}
