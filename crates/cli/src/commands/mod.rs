//! Command implementations for sdpctl

pub mod decode;
pub mod encode;
pub mod info;

use std::path::PathBuf;

use clap::Args;

use crate::input::DescriptionFormat;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Packet description file (JSON or YAML), or `-` for stdin
    pub input: PathBuf,

    /// Description format (inferred from the file extension by default)
    #[arg(long, value_enum)]
    pub format: Option<DescriptionFormat>,

    /// Write raw packet bytes to this file instead of printing hex
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Reject status values outside OFF/REPLAY/LIVE/PAUSE
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct PacketSource {
    /// Packet bytes as hex (whitespace and a 0x prefix are ignored)
    #[arg(conflicts_with = "file", required_unless_present = "file")]
    pub hex: Option<String>,

    /// Read raw packet bytes from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
