//! sigprint: Command-line tool for signing-certificate fingerprints.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use sigprint_lib::DigestAlgorithm;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "sigprint",
    about = "A fast, memory-safe tool for computing signing-certificate fingerprints",
    long_about = "sigprint computes the SHA-1 and SHA-256 fingerprints of signing\n\
                  certificates (colon-separated uppercase hex), the same rendering\n\
                  platforms use to identify an application package's signer.\n\n\
                  Input format (PEM vs DER) is auto-detected unless --pem or --der\n\
                  is specified. All commands read from stdin when no file is given.",
    after_help = "EXAMPLES:\n\
                  \n  sigprint fingerprint cert.der\
                  \n  sigprint fingerprint --package com.example.app cert.der\
                  \n  sigprint fingerprint --json cert.pem\
                  \n  sigprint fingerprint certs/ --recurse\
                  \n  sigprint check 03:90:58:C6:... cert.der\
                  \n  cat cert.pem | sigprint fingerprint"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute SHA-1 and SHA-256 fingerprints of signing certificates
    #[command(after_help = "EXAMPLES:\n\
                      \n  sigprint fingerprint cert.der\
                      \n  sigprint fingerprint --package com.example.app cert.der\
                      \n  sigprint fingerprint --json cert.pem\
                      \n  sigprint fingerprint certs/ --recurse\
                      \n  cat cert.pem | sigprint fingerprint")]
    Fingerprint {
        /// Certificate files or directories (PEM or DER). Reads from stdin
        /// if omitted.
        paths: Vec<PathBuf>,
        /// Package identifier to attach to the result (default: file stem)
        #[arg(long, value_name = "NAME")]
        package: Option<String>,
        /// Force DER input parsing (default: auto-detect)
        #[arg(long)]
        der: bool,
        /// Force PEM input parsing (default: auto-detect)
        #[arg(long)]
        pem: bool,
        /// Output in JSON format (single input only)
        #[arg(long)]
        json: bool,
        /// Recurse into subdirectories (directory mode)
        #[arg(short, long)]
        recurse: bool,
    },
    /// Compare a certificate's fingerprint (exit code 0 = match, 1 = mismatch)
    #[command(after_help = "EXPECTED may use any mix of case and colon separators:\n\
                      \n  sigprint check 039058C6F2C0... cert.der\
                      \n  sigprint check 03:90:58:c6:f2:c0:... cert.der\
                      \n  sigprint check --digest sha1 70:37:80:71:... cert.der")]
    Check {
        /// Expected fingerprint in hex (colons and case ignored)
        expected: String,
        /// Certificate file. Reads from stdin if omitted.
        file: Option<PathBuf>,
        /// Force DER input parsing (default: auto-detect)
        #[arg(long)]
        der: bool,
        /// Force PEM input parsing (default: auto-detect)
        #[arg(long)]
        pem: bool,
        /// Hash algorithm: sha256 or sha1
        #[arg(long, default_value = "sha256")]
        digest: String,
    },
}

/// Maximum file size for certificate inputs (10 MiB).
const MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            let meta = std::fs::metadata(path)
                .with_context(|| format!("Failed to stat file: {}", path.display()))?;
            if meta.len() > MAX_INPUT_BYTES {
                anyhow::bail!(
                    "File too large ({} bytes, max {} bytes): {}",
                    meta.len(),
                    MAX_INPUT_BYTES,
                    path.display()
                );
            }
            std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .take(MAX_INPUT_BYTES)
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Decode input into raw DER certificate bytes.
///
/// PEM armor is stripped when forced with --pem or auto-detected; otherwise
/// the bytes are taken as DER verbatim.
fn decode_input(input: &[u8], der: bool, pem: bool) -> Result<Vec<u8>> {
    if der {
        Ok(input.to_vec())
    } else if pem || sigprint_lib::is_pem(input) {
        Ok(sigprint_lib::pem_to_der(input)?)
    } else {
        Ok(input.to_vec())
    }
}

/// Default package identifier for a certificate file: its file stem.
fn default_package(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Normalize an expected fingerprint for comparison: strip colons and
/// whitespace, uppercase the rest.
fn normalize_expected(s: &str) -> Result<String> {
    let cleaned: String = s
        .chars()
        .filter(|c| *c != ':' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("Invalid fingerprint: '{}'", s);
    }
    Ok(cleaned.to_ascii_uppercase())
}

/// Check if a path has a certificate file extension (.pem, .der, .crt, .cer).
fn is_cert_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("pem") || ext.eq_ignore_ascii_case("der")
            || ext.eq_ignore_ascii_case("crt") || ext.eq_ignore_ascii_case("cer")
    )
}

/// Find all certificate files (.pem, .der, .crt, .cer) in a directory.
fn find_cert_files(dir: &Path, recurse: bool) -> Vec<PathBuf> {
    let walker = if recurse {
        walkdir::WalkDir::new(dir)
    } else {
        walkdir::WalkDir::new(dir).max_depth(1)
    };
    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_cert_file(e.path()))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Expand file and directory arguments into the list of certificate files
/// to process.
fn collect_inputs(paths: &[PathBuf], recurse: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = find_cert_files(path, recurse);
            if found.is_empty() {
                anyhow::bail!("No certificate files found in {}", path.display());
            }
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// A single result from batch processing.
struct BatchResult {
    path: String,
    pass: bool,
    detail: String,
}

/// Fingerprint one file for batch mode.
fn fingerprint_to_batch(path: &Path, der: bool, pem: bool) -> BatchResult {
    let label = path.display().to_string();
    let outcome = read_input(Some(&path.to_path_buf()))
        .and_then(|input| decode_input(&input, der, pem))
        .and_then(|cert| {
            Ok(sigprint_lib::compute_fingerprint(
                &default_package(path),
                &cert,
            )?)
        });
    match outcome {
        Ok(result) => BatchResult {
            path: label,
            pass: true,
            detail: format!("SHA1={} SHA256={}", result.sha1, result.sha256),
        },
        Err(e) => BatchResult {
            path: label,
            pass: false,
            detail: format!("FAIL ({})", e),
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Fingerprint {
            paths,
            package,
            der,
            pem,
            json,
            recurse,
        } => {
            if paths.is_empty() {
                let input = read_input(None)?;
                let cert = decode_input(&input, *der, *pem)?;
                let name = package.as_deref().unwrap_or("stdin");
                let result = sigprint_lib::compute_fingerprint(name, &cert)?;
                if *json {
                    println!("{}", sigprint_lib::to_json(&result)?);
                } else {
                    print!("{}", sigprint_lib::display_text(&result));
                }
                return Ok(());
            }

            let files = collect_inputs(paths, *recurse)?;

            if files.len() == 1 {
                let file = &files[0];
                let input = read_input(Some(file))?;
                let cert = decode_input(&input, *der, *pem)?;
                let name = package
                    .clone()
                    .unwrap_or_else(|| default_package(file));
                let result = sigprint_lib::compute_fingerprint(&name, &cert)?;
                if *json {
                    println!("{}", sigprint_lib::to_json(&result)?);
                } else {
                    print!("{}", sigprint_lib::display_text(&result));
                }
                return Ok(());
            }

            if *json {
                anyhow::bail!("--json requires a single input");
            }
            if package.is_some() {
                anyhow::bail!("--package requires a single input");
            }

            let results: Vec<BatchResult> = files
                .par_iter()
                .map(|f| fingerprint_to_batch(f, *der, *pem))
                .collect();

            let mut failures = 0;
            for r in &results {
                if r.pass {
                    println!("{}: {}", r.path, r.detail);
                } else {
                    eprintln!("{}: {}", r.path, r.detail);
                    failures += 1;
                }
            }
            if failures > 0 {
                std::process::exit(1);
            }
        }

        Commands::Check {
            expected,
            file,
            der,
            pem,
            digest,
        } => {
            let algorithm: DigestAlgorithm = digest.parse()?;
            let expected = normalize_expected(expected)?;

            let input = read_input(file.as_ref())?;
            let cert = decode_input(&input, *der, *pem)?;
            if cert.is_empty() {
                return Err(sigprint_lib::SigprintError::EmptyCertificate.into());
            }
            let actual = sigprint_lib::digest_hex(&cert, algorithm);
            let actual_plain: String = actual.chars().filter(|c| *c != ':').collect();

            if actual_plain == expected {
                println!("OK ({})", digest.to_ascii_lowercase());
            } else {
                eprintln!("MISMATCH: expected {}, got {}", expected, actual_plain);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ---- normalize_expected ----

    #[test]
    fn normalize_strips_colons_and_uppercases() {
        assert_eq!(
            normalize_expected("ab:cd:ef").unwrap(),
            "ABCDEF".to_string()
        );
    }

    #[test]
    fn normalize_accepts_plain_hex() {
        assert_eq!(
            normalize_expected("039058C6F2C0").unwrap(),
            "039058C6F2C0".to_string()
        );
    }

    #[test]
    fn normalize_ignores_whitespace() {
        assert_eq!(normalize_expected(" ab cd ").unwrap(), "ABCD".to_string());
    }

    #[test]
    fn normalize_rejects_non_hex() {
        assert!(normalize_expected("zz:yy").is_err());
    }

    #[test]
    fn normalize_rejects_empty() {
        assert!(normalize_expected("::").is_err());
    }

    // ---- default_package ----

    #[test]
    fn package_from_file_stem() {
        assert_eq!(
            default_package(Path::new("certs/com.example.app.der")),
            "com.example.app"
        );
    }

    #[test]
    fn package_from_bare_name() {
        assert_eq!(default_package(Path::new("cert.pem")), "cert");
    }

    // ---- decode_input ----

    #[test]
    fn decode_der_passthrough() {
        let der = vec![0x30, 0x03, 0x01, 0x02, 0x03];
        assert_eq!(decode_input(&der, false, false).unwrap(), der);
    }

    #[test]
    fn decode_forced_der_ignores_pem_marker() {
        let data = b"-----BEGIN CERTIFICATE-----";
        assert_eq!(decode_input(data, true, false).unwrap(), data.to_vec());
    }

    #[test]
    fn decode_auto_detects_pem() {
        let pem = b"-----BEGIN CERTIFICATE-----\nAQID\n-----END CERTIFICATE-----\n";
        assert_eq!(decode_input(pem, false, false).unwrap(), vec![1, 2, 3]);
    }

    // ---- is_cert_file ----

    #[test]
    fn cert_extensions_recognized() {
        assert!(is_cert_file(Path::new("a.pem")));
        assert!(is_cert_file(Path::new("a.DER")));
        assert!(is_cert_file(Path::new("a.crt")));
        assert!(is_cert_file(Path::new("a.cer")));
        assert!(!is_cert_file(Path::new("a.txt")));
        assert!(!is_cert_file(Path::new("pem")));
    }
}
