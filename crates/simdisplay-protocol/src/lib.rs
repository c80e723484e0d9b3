//! SimDisplay dashboard telemetry packet codec.
//!
//! A simulator-side producer fills a [`SimDisplayPacket`] once per telemetry
//! sample and sends its 20-byte wire form to an Arduino dashboard over a
//! serial line. This crate defines that wire form and nothing else: the
//! telemetry source, the transport, and the display renderer live elsewhere.
//!
//! # Wire format
//! - 16 fixed-width fields, 20 bytes, no padding (see [`codec`] for offsets)
//! - multi-byte fields little-endian
//! - no framing, length prefix, or checksum
//!
//! # Status handling
//! [`decode`] accepts any status byte so that displays tolerate newer
//! producers. Consumers validate with [`validate_status`] or fall back with
//! [`status_or_off`].
//!
//! # Example
//! ```
//! use simdisplay_protocol::{decode, encode, SimDisplayPacket, SimDisplayStatus};
//!
//! let packet = SimDisplayPacket { rpm: 6500, gear: 4, ..Default::default() }
//!     .with_status(SimDisplayStatus::Live);
//! let bytes = encode(&packet);
//! assert_eq!(decode(&bytes)?, packet);
//! # Ok::<(), simdisplay_protocol::ProtocolError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod codec;
pub mod error;
pub mod layout;
pub mod packet;
pub mod status;
pub mod version;

pub use codec::{decode, encode, encode_into, validate, PACKET_LEN};
pub use error::ProtocolError;
pub use layout::{field, FieldSpec, FIELD_LAYOUT};
pub use packet::SimDisplayPacket;
pub use status::{
    status_or_off, validate_status, SimDisplayStatus, STATUS_LIVE, STATUS_OFF, STATUS_PAUSE,
    STATUS_REPLAY,
};
pub use version::{is_compatible, version, PROTOCOL_VERSION};
