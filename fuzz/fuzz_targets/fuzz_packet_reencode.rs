//! Checks that every successfully decoded packet re-encodes to its input.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_packet_reencode
#![no_main]
use libfuzzer_sys::fuzz_target;
use simdisplay_protocol::{decode, encode};

fuzz_target!(|data: &[u8]| {
    if let Ok(packet) = decode(data) {
        assert_eq!(&encode(&packet)[..], data);
    }
});
