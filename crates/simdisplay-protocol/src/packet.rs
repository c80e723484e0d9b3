//! The `SimDisplayPacket` value type.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::ProtocolError;
use crate::status::{validate_status, SimDisplayStatus};

/// One telemetry snapshot sent from the producer to the dashboard.
///
/// Field names follow the wire protocol. `bb`, `airt` and `roadt` are opaque
/// encoded integers: the producer owns their scale and offset, and this crate
/// performs no unit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SimDisplayPacket {
    /// Raw session status byte, see [`SimDisplayStatus`].
    pub status: u8,
    /// Current engine RPM.
    pub rpm: u16,
    /// Optimal shift-point RPM.
    pub optrpm: u16,
    /// RPM at which the shift light activates.
    pub shftrpm: u16,
    /// Pit limiter engaged (0/1).
    pub pitlim: u8,
    /// Current gear, as encoded by the producer.
    pub gear: u8,
    /// Traction control level.
    pub tc: u8,
    /// Traction control cut setting.
    pub tcc: u8,
    /// Traction control currently intervening (0/1).
    pub tcact: u8,
    /// ABS level.
    pub abs: u8,
    /// ABS currently intervening (0/1).
    pub absact: u8,
    /// Brake bias, encoded.
    pub bb: u16,
    /// Remaining laps in the session.
    pub remlaps: u8,
    /// Engine map.
    pub map: u8,
    /// Air temperature, encoded.
    pub airt: u8,
    /// Road temperature, encoded.
    pub roadt: u8,
}

impl SimDisplayPacket {
    /// Set the status byte from a typed status.
    #[must_use]
    pub fn with_status(mut self, status: SimDisplayStatus) -> Self {
        self.status = status.as_raw();
        self
    }

    /// Typed status of this packet.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnrecognizedStatus`] if the status byte is
    /// outside the enumerated set.
    pub fn status_kind(&self) -> Result<SimDisplayStatus, ProtocolError> {
        validate_status(self.status)
    }

    /// Pit limiter is engaged.
    pub fn pit_limiter_engaged(&self) -> bool {
        self.pitlim != 0
    }

    /// Traction control is intervening right now.
    pub fn traction_control_active(&self) -> bool {
        self.tcact != 0
    }

    /// ABS is intervening right now.
    pub fn abs_active(&self) -> bool {
        self.absact != 0
    }

    /// Encode to wire bytes. See [`codec::encode`].
    pub fn encode(&self) -> [u8; codec::PACKET_LEN] {
        codec::encode(self)
    }

    /// Decode from wire bytes. See [`codec::decode`].
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MalformedPacket`] if `data` is not exactly
    /// [`codec::PACKET_LEN`] bytes long.
    pub fn decode(data: &[u8]) -> Result<Self, ProtocolError> {
        codec::decode(data)
    }
}
