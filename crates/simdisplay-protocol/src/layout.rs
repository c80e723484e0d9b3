//! Static description of the packet's wire layout.

use crate::codec::PACKET_LEN;

/// Position and width of one field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as used on the wire and in serde output.
    pub name: &'static str,
    /// Byte offset from the start of the packet.
    pub offset: usize,
    /// Width in bytes.
    pub width: usize,
}

impl FieldSpec {
    const fn new(name: &'static str, offset: usize, width: usize) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }
}

/// Every packet field in wire order.
pub const FIELD_LAYOUT: [FieldSpec; 16] = [
    FieldSpec::new("status", 0, 1),
    FieldSpec::new("rpm", 1, 2),
    FieldSpec::new("optrpm", 3, 2),
    FieldSpec::new("shftrpm", 5, 2),
    FieldSpec::new("pitlim", 7, 1),
    FieldSpec::new("gear", 8, 1),
    FieldSpec::new("tc", 9, 1),
    FieldSpec::new("tcc", 10, 1),
    FieldSpec::new("tcact", 11, 1),
    FieldSpec::new("abs", 12, 1),
    FieldSpec::new("absact", 13, 1),
    FieldSpec::new("bb", 14, 2),
    FieldSpec::new("remlaps", 16, 1),
    FieldSpec::new("map", 17, 1),
    FieldSpec::new("airt", 18, 1),
    FieldSpec::new("roadt", 19, 1),
];

/// Look up a field by its protocol name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELD_LAYOUT.iter().find(|spec| spec.name == name)
}

// Layout must cover the packet exactly.
const _: () = {
    let mut i = 0;
    let mut end = 0;
    while i < FIELD_LAYOUT.len() {
        assert!(FIELD_LAYOUT[i].offset == end);
        end += FIELD_LAYOUT[i].width;
        i += 1;
    }
    assert!(end == PACKET_LEN);
};
