//! PEM input decoding.
//!
//! Certificates arrive either as raw DER bytes or wrapped in PEM armor.
//! This module only strips the armor; it never interprets the DER inside.

use crate::SigprintError;
use base64::Engine;

/// Check whether input looks like PEM (begins with `-----BEGIN` after
/// leading whitespace).
pub fn is_pem(input: &[u8]) -> bool {
    let trimmed = input
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .map(|pos| &input[pos..])
        .unwrap_or(&[]);
    trimmed.starts_with(b"-----BEGIN ")
}

/// Extract the DER bytes from a PEM-armored certificate.
///
/// Accepts a single `CERTIFICATE` (or `TRUSTED CERTIFICATE` / `X509
/// CERTIFICATE`) block and base64-decodes its body. Anything before the
/// `BEGIN` line is ignored, matching the common `openssl x509 -text` dump
/// format where the PEM block follows a textual preamble.
pub fn pem_to_der(pem: &[u8]) -> Result<Vec<u8>, SigprintError> {
    let text = std::str::from_utf8(pem)
        .map_err(|_| SigprintError::Pem("input is not valid UTF-8".into()))?;

    let mut body = String::new();
    let mut in_block = false;
    let mut label = None;
    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("-----BEGIN ") {
            if in_block {
                return Err(SigprintError::Pem("nested BEGIN line".into()));
            }
            label = Some(rest.trim_end_matches('-').trim().to_string());
            in_block = true;
        } else if line.starts_with("-----END ") {
            if !in_block {
                return Err(SigprintError::Pem("END line without BEGIN".into()));
            }
            in_block = false;
            break;
        } else if in_block {
            body.push_str(line);
        }
    }

    let label = label.ok_or_else(|| SigprintError::Pem("no BEGIN line found".into()))?;
    if in_block {
        return Err(SigprintError::Pem(format!("unterminated {} block", label)));
    }
    if label != "CERTIFICATE" && label != "TRUSTED CERTIFICATE" && label != "X509 CERTIFICATE" {
        return Err(SigprintError::Pem(format!(
            "expected CERTIFICATE, got {}",
            label
        )));
    }

    let der = base64::engine::general_purpose::STANDARD
        .decode(body.as_bytes())
        .map_err(|e| SigprintError::Pem(format!("invalid base64 body: {}", e)))?;
    if der.is_empty() {
        return Err(SigprintError::Pem("empty certificate body".into()));
    }
    Ok(der)
}
