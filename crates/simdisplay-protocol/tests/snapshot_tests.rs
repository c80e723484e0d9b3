//! Snapshot tests for the SimDisplay wire format.
//!
//! These tests lock in the byte layout to catch accidental protocol regressions.

use insta::assert_snapshot;
use simdisplay_protocol::{self as sdp, SimDisplayPacket, SimDisplayStatus};

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn race_sample() -> SimDisplayPacket {
    SimDisplayPacket {
        status: sdp::STATUS_LIVE,
        rpm: 6500,
        optrpm: 7000,
        shftrpm: 7200,
        pitlim: 0,
        gear: 4,
        tc: 3,
        tcc: 2,
        tcact: 0,
        abs: 4,
        absact: 1,
        bb: 5600,
        remlaps: 12,
        map: 3,
        airt: 28,
        roadt: 34,
    }
}

#[test]
fn test_snapshot_encode_race_sample() {
    let bytes = sdp::encode(&race_sample());
    assert_snapshot!(hex(&bytes), @"02 64 19 58 1b 20 1c 00 04 03 02 00 04 01 e0 15 0c 03 1c 22");
}

#[test]
fn test_snapshot_encode_default() {
    let bytes = sdp::encode(&SimDisplayPacket::default());
    assert_snapshot!(hex(&bytes), @"00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00");
}

#[test]
fn test_snapshot_encode_saturated() {
    let packet = SimDisplayPacket {
        status: u8::MAX,
        rpm: u16::MAX,
        optrpm: u16::MAX,
        shftrpm: u16::MAX,
        pitlim: u8::MAX,
        gear: u8::MAX,
        tc: u8::MAX,
        tcc: u8::MAX,
        tcact: u8::MAX,
        abs: u8::MAX,
        absact: u8::MAX,
        bb: u16::MAX,
        remlaps: u8::MAX,
        map: u8::MAX,
        airt: u8::MAX,
        roadt: u8::MAX,
    };
    let bytes = sdp::encode(&packet);
    assert_snapshot!(hex(&bytes), @"ff ff ff ff ff ff ff ff ff ff ff ff ff ff ff ff ff ff ff ff");
}

#[test]
fn test_snapshot_encode_pit_lane_pause() {
    let packet = SimDisplayPacket {
        rpm: 2500,
        pitlim: 1,
        gear: 2,
        ..SimDisplayPacket::default()
    }
    .with_status(SimDisplayStatus::Pause);
    let bytes = sdp::encode(&packet);
    assert_snapshot!(hex(&bytes), @"03 c4 09 00 00 00 00 01 02 00 00 00 00 00 00 00 00 00 00 00");
}

#[test]
fn test_snapshot_decode_race_sample() -> Result<(), sdp::ProtocolError> {
    let bytes = [
        0x02, 0x64, 0x19, 0x58, 0x1b, 0x20, 0x1c, 0x00, 0x04, 0x03, 0x02, 0x00, 0x04, 0x01, 0xe0,
        0x15, 0x0c, 0x03, 0x1c, 0x22,
    ];
    let packet = sdp::decode(&bytes)?;
    assert_eq!(packet, race_sample());
    assert_snapshot!(
        format!(
            "status={} rpm={} optrpm={} shftrpm={} gear={} bb={} remlaps={} airt={} roadt={}",
            sdp::status_or_off(packet.status),
            packet.rpm,
            packet.optrpm,
            packet.shftrpm,
            packet.gear,
            packet.bb,
            packet.remlaps,
            packet.airt,
            packet.roadt,
        ),
        @"status=LIVE rpm=6500 optrpm=7000 shftrpm=7200 gear=4 bb=5600 remlaps=12 airt=28 roadt=34"
    );
    Ok(())
}

#[test]
fn test_snapshot_decode_error_message() {
    let err = sdp::decode(&[0u8; 7]).expect_err("7-byte input must be rejected");
    assert_snapshot!(err.to_string(), @"malformed packet: got 7 bytes, need 20");
}

#[test]
fn test_snapshot_field_layout() {
    let layout = sdp::FIELD_LAYOUT
        .iter()
        .map(|f| format!("{}@{}+{}", f.name, f.offset, f.width))
        .collect::<Vec<_>>()
        .join(",");
    assert_snapshot!(
        layout,
        @"status@0+1,rpm@1+2,optrpm@3+2,shftrpm@5+2,pitlim@7+1,gear@8+1,tc@9+1,tcc@10+1,tcact@11+1,abs@12+1,absact@13+1,bb@14+2,remlaps@16+1,map@17+1,airt@18+1,roadt@19+1"
    );
}
