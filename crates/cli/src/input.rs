//! Reading packet descriptions and wire bytes from the command line.

use std::fs;
use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use simdisplay_protocol::{SimDisplayPacket, SimDisplayStatus};
use tracing::debug;

use crate::error::CliError;

/// Serialization format of a packet description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DescriptionFormat {
    Json,
    Yaml,
}

impl DescriptionFormat {
    /// Infer the format from a file extension; anything unrecognised is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DescriptionFormat::Yaml
            }
            _ => DescriptionFormat::Json,
        }
    }
}

/// Status as written in a description: a raw byte or a protocol name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StatusField {
    Raw(u8),
    Named(SimDisplayStatus),
}

impl Default for StatusField {
    fn default() -> Self {
        StatusField::Named(SimDisplayStatus::Off)
    }
}

impl StatusField {
    fn raw(self) -> u8 {
        match self {
            StatusField::Raw(raw) => raw,
            StatusField::Named(status) => status.as_raw(),
        }
    }
}

/// Human-authored packet description. Omitted fields are zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacketDescription {
    pub status: StatusField,
    pub rpm: u16,
    pub optrpm: u16,
    pub shftrpm: u16,
    pub pitlim: u8,
    pub gear: u8,
    pub tc: u8,
    pub tcc: u8,
    pub tcact: u8,
    pub abs: u8,
    pub absact: u8,
    pub bb: u16,
    pub remlaps: u8,
    pub map: u8,
    pub airt: u8,
    pub roadt: u8,
}

impl From<PacketDescription> for SimDisplayPacket {
    fn from(desc: PacketDescription) -> Self {
        SimDisplayPacket {
            status: desc.status.raw(),
            rpm: desc.rpm,
            optrpm: desc.optrpm,
            shftrpm: desc.shftrpm,
            pitlim: desc.pitlim,
            gear: desc.gear,
            tc: desc.tc,
            tcc: desc.tcc,
            tcact: desc.tcact,
            abs: desc.abs,
            absact: desc.absact,
            bb: desc.bb,
            remlaps: desc.remlaps,
            map: desc.map,
            airt: desc.airt,
            roadt: desc.roadt,
        }
    }
}

/// Parse a packet description from text.
pub fn parse_description(
    text: &str,
    format: DescriptionFormat,
) -> Result<SimDisplayPacket, CliError> {
    let desc: PacketDescription = match format {
        DescriptionFormat::Json => serde_json::from_str(text)?,
        DescriptionFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(desc.into())
}

/// Load a packet description from `path`, or from stdin when `path` is `-`.
pub fn load_description(
    path: &Path,
    format: Option<DescriptionFormat>,
) -> Result<SimDisplayPacket, CliError> {
    let (text, inferred) = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        (text, DescriptionFormat::Json)
    } else {
        (fs::read_to_string(path)?, DescriptionFormat::from_path(path))
    };
    let format = format.unwrap_or(inferred);
    debug!(path = %path.display(), ?format, "loading packet description");
    parse_description(&text, format)
}

/// Parse hex text into bytes.
///
/// ASCII whitespace anywhere and a leading `0x`/`0X` are ignored.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, CliError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    hex::decode(digits).map_err(|e| CliError::InvalidHex(e.to_string()))
}

/// Wire bytes from either a hex argument or a raw binary file.
pub fn read_packet_bytes(hex: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match (hex, file) {
        (Some(text), None) => parse_hex(text),
        (None, Some(path)) => {
            let bytes = fs::read(path)?;
            debug!(path = %path.display(), len = bytes.len(), "read packet file");
            Ok(bytes)
        }
        _ => Err(CliError::InvalidInput(
            "provide either a hex string or --file".to_string(),
        )),
    }
}

/// Lowercase hex rendering of wire bytes.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
