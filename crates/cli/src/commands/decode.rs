//! Packet decoding and validation commands.

use anyhow::Result;
use simdisplay_protocol::{decode, validate, SimDisplayPacket};

use crate::commands::PacketSource;
use crate::error::CliError;
use crate::input::read_packet_bytes;
use crate::output;

fn load(source: &PacketSource) -> Result<SimDisplayPacket, CliError> {
    let bytes = read_packet_bytes(source.hex.as_deref(), source.file.as_deref())?;
    Ok(decode(&bytes)?)
}

/// Execute the decode command. Unknown status bytes are reported, not rejected.
pub fn execute(source: &PacketSource, json: bool) -> Result<()> {
    let packet = load(source)?;
    output::print_packet(&packet, json);
    Ok(())
}

/// Execute the validate command.
pub fn validate_packet(source: &PacketSource, json: bool) -> Result<()> {
    let packet = load(source)?;
    validate(&packet).map_err(CliError::from)?;
    output::print_valid(&packet, json);
    Ok(())
}
