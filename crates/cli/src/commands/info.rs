//! Static protocol information commands.

use simdisplay_protocol::{version, FIELD_LAYOUT, PACKET_LEN};

use crate::output;

pub fn layout(json: bool) {
    output::print_layout(&FIELD_LAYOUT, PACKET_LEN, json);
}

pub fn protocol_version(json: bool) {
    output::print_version(version(), json);
}
