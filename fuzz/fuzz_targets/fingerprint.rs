//! Fuzz fingerprint computation: must never panic, and non-empty input
//! must always produce well-formed colon-hex output.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match sigprint_lib::compute_fingerprint("fuzz", data) {
        Ok(result) => {
            assert_eq!(result.sha1.split(':').count(), 20);
            assert_eq!(result.sha256.split(':').count(), 32);
        }
        Err(sigprint_lib::SigprintError::EmptyCertificate) => assert!(data.is_empty()),
        Err(e) => panic!("unexpected error: {}", e),
    }
});
