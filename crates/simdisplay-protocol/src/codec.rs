//! Wire encoding of [`SimDisplayPacket`].
//!
//! # Packet layout
//! | Offset | Size | Field   | Encoding            |
//! |--------|------|---------|---------------------|
//! | 0      | u8   | status  | raw status byte     |
//! | 1–2    | u16  | rpm     | LE                  |
//! | 3–4    | u16  | optrpm  | LE                  |
//! | 5–6    | u16  | shftrpm | LE                  |
//! | 7      | u8   | pitlim  | 0/1                 |
//! | 8      | u8   | gear    | producer-defined    |
//! | 9      | u8   | tc      | level               |
//! | 10     | u8   | tcc     | level               |
//! | 11     | u8   | tcact   | 0/1                 |
//! | 12     | u8   | abs     | level               |
//! | 13     | u8   | absact  | 0/1                 |
//! | 14–15  | u16  | bb      | LE, opaque          |
//! | 16     | u8   | remlaps | count               |
//! | 17     | u8   | map     | level               |
//! | 18     | u8   | airt    | opaque              |
//! | 19     | u8   | roadt   | opaque              |
//!
//! Multi-byte fields are little-endian, the native order of the AVR display
//! target. There is no padding, framing, or checksum.

use tracing::{debug, trace};

use crate::error::ProtocolError;
use crate::packet::SimDisplayPacket;

/// Encoded packet length in bytes.
pub const PACKET_LEN: usize = 20;

/// Encode a packet into its 20-byte wire form.
///
/// # Examples
/// ```
/// use simdisplay_protocol::{encode, SimDisplayPacket, PACKET_LEN};
/// let bytes = encode(&SimDisplayPacket { rpm: 0x1234, ..Default::default() });
/// assert_eq!(bytes.len(), PACKET_LEN);
/// assert_eq!(&bytes[1..3], &[0x34, 0x12]);
/// ```
pub fn encode(packet: &SimDisplayPacket) -> [u8; PACKET_LEN] {
    let [rpm_lo, rpm_hi] = packet.rpm.to_le_bytes();
    let [optrpm_lo, optrpm_hi] = packet.optrpm.to_le_bytes();
    let [shftrpm_lo, shftrpm_hi] = packet.shftrpm.to_le_bytes();
    let [bb_lo, bb_hi] = packet.bb.to_le_bytes();

    [
        packet.status,
        rpm_lo,
        rpm_hi,
        optrpm_lo,
        optrpm_hi,
        shftrpm_lo,
        shftrpm_hi,
        packet.pitlim,
        packet.gear,
        packet.tc,
        packet.tcc,
        packet.tcact,
        packet.abs,
        packet.absact,
        bb_lo,
        bb_hi,
        packet.remlaps,
        packet.map,
        packet.airt,
        packet.roadt,
    ]
}

/// Encode a packet into the first [`PACKET_LEN`] bytes of `buf`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`ProtocolError::BufferTooSmall`] if `buf` is shorter than
/// [`PACKET_LEN`]. The buffer is left untouched in that case.
pub fn encode_into(packet: &SimDisplayPacket, buf: &mut [u8]) -> Result<usize, ProtocolError> {
    let got = buf.len();
    let Some(head) = buf.get_mut(..PACKET_LEN) else {
        debug!(got, need = PACKET_LEN, "encode buffer too small");
        return Err(ProtocolError::BufferTooSmall {
            got,
            need: PACKET_LEN,
        });
    };
    head.copy_from_slice(&encode(packet));
    Ok(PACKET_LEN)
}

/// Decode a packet from exactly [`PACKET_LEN`] bytes.
///
/// The status byte is copied as-is; use [`crate::validate_status`] to check it.
///
/// # Errors
///
/// Returns [`ProtocolError::MalformedPacket`] for any other input length.
pub fn decode(data: &[u8]) -> Result<SimDisplayPacket, ProtocolError> {
    let Ok(bytes) = <&[u8; PACKET_LEN]>::try_from(data) else {
        debug!(got = data.len(), need = PACKET_LEN, "rejecting malformed packet");
        return Err(ProtocolError::MalformedPacket {
            got: data.len(),
            need: PACKET_LEN,
        });
    };

    let [
        status,
        rpm_lo,
        rpm_hi,
        optrpm_lo,
        optrpm_hi,
        shftrpm_lo,
        shftrpm_hi,
        pitlim,
        gear,
        tc,
        tcc,
        tcact,
        abs,
        absact,
        bb_lo,
        bb_hi,
        remlaps,
        map,
        airt,
        roadt,
    ] = *bytes;

    let packet = SimDisplayPacket {
        status,
        rpm: u16::from_le_bytes([rpm_lo, rpm_hi]),
        optrpm: u16::from_le_bytes([optrpm_lo, optrpm_hi]),
        shftrpm: u16::from_le_bytes([shftrpm_lo, shftrpm_hi]),
        pitlim,
        gear,
        tc,
        tcc,
        tcact,
        abs,
        absact,
        bb: u16::from_le_bytes([bb_lo, bb_hi]),
        remlaps,
        map,
        airt,
        roadt,
    };
    trace!(status = packet.status, rpm = packet.rpm, "decoded packet");
    Ok(packet)
}

/// Check the semantic ranges a consumer relies on.
///
/// Only the status byte is constrained by the protocol.
///
/// # Errors
///
/// Returns [`ProtocolError::UnrecognizedStatus`] for an unknown status byte.
pub fn validate(packet: &SimDisplayPacket) -> Result<(), ProtocolError> {
    packet.status_kind().map(|_| ())
}
