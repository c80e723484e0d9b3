//! Error types for sdpctl

use simdisplay_protocol::ProtocolError;
use thiserror::Error;

/// Exit code for invalid input, including command-line usage errors.
pub const USAGE_EXIT_CODE: u8 = 4;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Invalid hex input: {0}")]
    InvalidHex(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("YAML error")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Protocol(ProtocolError::MalformedPacket { .. })
            | CliError::Protocol(ProtocolError::BufferTooSmall { .. }) => 2,
            CliError::Protocol(ProtocolError::UnrecognizedStatus(_)) => 3,
            CliError::InvalidHex(_)
            | CliError::InvalidInput(_)
            | CliError::Json(_)
            | CliError::Yaml(_) => USAGE_EXIT_CODE,
            CliError::Io(_) => 1,
        }
    }

    /// Short machine-readable name used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Protocol(ProtocolError::MalformedPacket { .. }) => "malformed_packet",
            CliError::Protocol(ProtocolError::UnrecognizedStatus(_)) => "unrecognized_status",
            CliError::Protocol(ProtocolError::BufferTooSmall { .. }) => "buffer_too_small",
            CliError::InvalidHex(_) => "invalid_hex",
            CliError::InvalidInput(_) => "invalid_input",
            CliError::Io(_) => "io",
            CliError::Json(_) => "json",
            CliError::Yaml(_) => "yaml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn exit_codes() {
        assert_eq!(
            CliError::from(ProtocolError::MalformedPacket { got: 1, need: 20 }).exit_code(),
            2
        );
        assert_eq!(
            CliError::from(ProtocolError::UnrecognizedStatus(9)).exit_code(),
            3
        );
        assert_eq!(CliError::InvalidHex("zz".to_string()).exit_code(), 4);
        assert_eq!(
            CliError::from(std::io::Error::other("boom")).exit_code(),
            1
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(
            CliError::from(ProtocolError::UnrecognizedStatus(4)).kind(),
            "unrecognized_status"
        );
        assert_eq!(CliError::InvalidInput(String::new()).kind(), "invalid_input");
    }

    #[test]
    fn protocol_errors_are_not_repeated_in_the_chain() {
        let err = CliError::from(ProtocolError::MalformedPacket { got: 2, need: 20 });
        assert_eq!(err.to_string(), "malformed packet: got 2 bytes, need 20");
        assert!(err.source().is_none());
    }

    #[test]
    fn wrapped_errors_leave_detail_to_the_source() -> Result<(), Box<dyn std::error::Error>> {
        let json_err = serde_json::from_str::<u8>("x").err().ok_or("expected a JSON error")?;
        let detail = json_err.to_string();
        let err = CliError::from(json_err);
        assert_eq!(err.to_string(), "JSON error");
        assert_eq!(err.source().map(|s| s.to_string()), Some(detail));
        Ok(())
    }
}
