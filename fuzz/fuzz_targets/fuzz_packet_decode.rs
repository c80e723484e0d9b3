//! Fuzzes the SimDisplay packet decoder and status validation.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_packet_decode
#![no_main]
use libfuzzer_sys::fuzz_target;
use simdisplay_protocol::{decode, status_or_off, validate};

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary bytes; errors are expected, panics are not.
    if let Ok(packet) = decode(data) {
        let _ = validate(&packet);
        let _ = status_or_off(packet.status);
    }
});
