//! Session status carried in the first byte of every packet.
//!
//! The status tells the display how to interpret the rest of the packet. The
//! set is closed for protocol version `"1"`, but `decode` keeps the raw byte so
//! that a newer producer does not break an older display. Consumers call
//! [`validate_status`] or [`status_or_off`] to interpret it.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Telemetry session not active.
pub const STATUS_OFF: u8 = 0;

/// Data comes from a replay.
pub const STATUS_REPLAY: u8 = 1;

/// Data comes from a live session.
pub const STATUS_LIVE: u8 = 2;

/// The live session is paused.
pub const STATUS_PAUSE: u8 = 3;

/// Typed view of the packet status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum SimDisplayStatus {
    /// Display/telemetry session not active.
    #[default]
    Off = STATUS_OFF,
    /// Replay playback.
    Replay = STATUS_REPLAY,
    /// Active live session.
    Live = STATUS_LIVE,
    /// Live session paused.
    Pause = STATUS_PAUSE,
}

impl SimDisplayStatus {
    /// Every status in wire order.
    pub const ALL: [Self; 4] = [Self::Off, Self::Replay, Self::Live, Self::Pause];

    /// Map a raw status byte, returning `None` for values outside the set.
    ///
    /// # Examples
    /// ```
    /// use simdisplay_protocol::SimDisplayStatus;
    /// assert_eq!(SimDisplayStatus::from_raw(2), Some(SimDisplayStatus::Live));
    /// assert_eq!(SimDisplayStatus::from_raw(4), None);
    /// ```
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            STATUS_OFF => Some(Self::Off),
            STATUS_REPLAY => Some(Self::Replay),
            STATUS_LIVE => Some(Self::Live),
            STATUS_PAUSE => Some(Self::Pause),
            _ => None,
        }
    }

    /// Wire value of this status.
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Upper-case protocol name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Replay => "REPLAY",
            Self::Live => "LIVE",
            Self::Pause => "PAUSE",
        }
    }

    /// `true` while a live session exists, paused or not.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Live | Self::Pause)
    }
}

impl fmt::Display for SimDisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SimDisplayStatus> for u8 {
    fn from(status: SimDisplayStatus) -> Self {
        status.as_raw()
    }
}

impl TryFrom<u8> for SimDisplayStatus {
    type Error = ProtocolError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        validate_status(raw)
    }
}

/// Validate a raw status byte.
///
/// # Errors
///
/// Returns [`ProtocolError::UnrecognizedStatus`] when `raw` is not one of the
/// four enumerated values.
pub fn validate_status(raw: u8) -> Result<SimDisplayStatus, ProtocolError> {
    SimDisplayStatus::from_raw(raw).ok_or(ProtocolError::UnrecognizedStatus(raw))
}

/// Interpret a raw status byte, treating anything unknown as [`SimDisplayStatus::Off`].
///
/// This is the fallback a display should use when it receives a packet from a
/// newer producer.
pub fn status_or_off(raw: u8) -> SimDisplayStatus {
    SimDisplayStatus::from_raw(raw).unwrap_or(SimDisplayStatus::Off)
}
