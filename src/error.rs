//! Decode failure taxonomy.
//!
//! Every failure in this subsystem is local, recoverable and silent from
//! the caller's perspective: `decode()` simply returns false and the next
//! infrared burst naturally re-triggers decoding. Malformed signals (noise,
//! partial button presses) are expected input, not exceptional conditions,
//! and must never corrupt subsequent decoding state.

use core::fmt;

/// Why a burst was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DecodeError {
    /// Burst too short to carry a frame.
    InsufficientData = 0,

    /// Lead mark/space pair did not resemble a command frame start.
    InvalidStartSequence = 1,

    /// A pair below the one/zero threshold failed the zero timing check.
    InvalidZeroBit = 2,

    /// A pair above the one/zero threshold failed the one timing check.
    InvalidOneBit = 3,

    /// Repeat burst did not match the NEC repeat frame timing.
    InvalidRepeatFrame = 4,
}

impl DecodeError {
    /// Short name for log output.
    pub fn as_str(self) -> &'static str {
        match self {
            DecodeError::InsufficientData => "insufficient data",
            DecodeError::InvalidStartSequence => "invalid start sequence",
            DecodeError::InvalidZeroBit => "invalid zero bit",
            DecodeError::InvalidOneBit => "invalid one bit",
            DecodeError::InvalidRepeatFrame => "invalid repeat frame",
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
