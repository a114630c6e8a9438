//! Fuzz PEM armor decoding: arbitrary bytes must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = sigprint_lib::pem_to_der(data);
    let _ = sigprint_lib::is_pem(data);
});
