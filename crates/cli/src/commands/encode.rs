//! Packet encoding command.

use std::fs;

use anyhow::{Context, Result};
use simdisplay_protocol::{encode, validate};
use tracing::info;

use crate::commands::EncodeArgs;
use crate::error::CliError;
use crate::input::{load_description, to_hex};
use crate::output;

/// Execute the encode command.
pub fn execute(args: &EncodeArgs, json: bool) -> Result<()> {
    let packet = load_description(&args.input, args.format).with_context(|| {
        format!(
            "Failed to load packet description from {}",
            args.input.display()
        )
    })?;

    if args.strict {
        validate(&packet).map_err(CliError::from)?;
    }

    let bytes = encode(&packet);

    if let Some(path) = &args.out {
        fs::write(path, bytes)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to write packet to {}", path.display()))?;
        info!(path = %path.display(), "wrote packet");
    }

    output::print_encoded(&to_hex(&bytes), args.out.as_deref(), json);
    Ok(())
}
