//! Protocol version tag.
//!
//! Producer and display agree on this tag out of band (at build time or in a
//! connection handshake owned by the transport). The codec does not negotiate.

/// Current protocol revision.
pub const PROTOCOL_VERSION: &str = "1";

/// Returns [`PROTOCOL_VERSION`].
pub const fn version() -> &'static str {
    PROTOCOL_VERSION
}

/// `true` if a peer's announced version tag matches this crate's revision.
///
/// Surrounding ASCII whitespace is ignored, so a tag read from a serial line
/// with its trailing newline still compares equal.
///
/// # Examples
/// ```
/// use simdisplay_protocol::is_compatible;
/// assert!(is_compatible("1\r\n"));
/// assert!(!is_compatible("2"));
/// ```
pub fn is_compatible(peer: &str) -> bool {
    peer.trim_matches(|c: char| c.is_ascii_whitespace()) == PROTOCOL_VERSION
}
