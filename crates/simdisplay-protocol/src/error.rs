//! Error types for the SimDisplay packet codec.

/// Errors produced by the codec and its validation helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The byte sequence handed to `decode` was not exactly one packet long.
    #[error("malformed packet: got {got} bytes, need {need}")]
    MalformedPacket {
        /// Length of the rejected input.
        got: usize,
        /// Required packet length.
        need: usize,
    },

    /// A status byte outside the enumerated set.
    ///
    /// Only raised by validation helpers. `decode` accepts any status byte.
    #[error("unrecognized status value {0}")]
    UnrecognizedStatus(u8),

    /// The destination buffer passed to `encode_into` is too short.
    #[error("buffer too small: got {got} bytes, need {need}")]
    BufferTooSmall {
        /// Length of the caller's buffer.
        got: usize,
        /// Bytes required to hold one packet.
        need: usize,
    },
}
