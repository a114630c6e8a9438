//! Human-readable and JSON formatting of fingerprint results.

use crate::fingerprint::FingerprintResult;
use crate::SigprintError;

/// Format a fingerprint result as human-readable text.
pub fn display_text(result: &FingerprintResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Package: {}\n", result.package_name));
    out.push_str(&format!("  Fingerprint (SHA-1):   {}\n", result.sha1));
    out.push_str(&format!("  Fingerprint (SHA-256): {}\n", result.sha256));
    out
}

/// Format a fingerprint result as pretty-printed JSON.
///
/// Keys are the external mapping names: `packageName`, `sha1`, `sha256`.
pub fn to_json(result: &FingerprintResult) -> Result<String, SigprintError> {
    Ok(serde_json::to_string_pretty(result)?)
}
