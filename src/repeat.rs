//! Repeat frame validation.
//!
//! While a button stays held, an NEC remote stops resending the command
//! frame and emits a short repeat marker every ~108 ms: a 9 ms lead mark
//! followed by a 2.25 ms space. Validation only establishes that the burst
//! is such a marker; what the marker does to the command code is policy,
//! applied by the decoder facade.

use crate::burst::REPEAT_BURST_PULSES;
use crate::error::DecodeError;
use crate::timing::{matches, LEAD_MARK_US, REPEAT_SPACE_US};

/// Validate a repeat burst against the NEC repeat frame timing.
pub fn validate_repeat(burst: &[u32]) -> Result<(), DecodeError> {
    if burst.len() < REPEAT_BURST_PULSES {
        return Err(DecodeError::InsufficientData);
    }

    if matches(burst[0], LEAD_MARK_US) && matches(burst[1], REPEAT_SPACE_US) {
        Ok(())
    } else {
        Err(DecodeError::InvalidRepeatFrame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_repeat_valid() {
        assert_eq!(validate_repeat(&[9000, 2250]), Ok(()));
    }

    #[test]
    fn test_jittered_repeat_valid() {
        // As produced by the 256 kHz tick conversion
        assert_eq!(validate_repeat(&[9000, 2242]), Ok(()));
        assert_eq!(validate_repeat(&[8900, 2300]), Ok(()));
    }

    #[test]
    fn test_command_lead_is_not_repeat() {
        // 4500 µs space belongs to a command frame
        assert_eq!(
            validate_repeat(&[9000, 4500]),
            Err(DecodeError::InvalidRepeatFrame)
        );
    }

    #[test]
    fn test_bad_mark_rejected() {
        assert_eq!(
            validate_repeat(&[560, 2250]),
            Err(DecodeError::InvalidRepeatFrame)
        );
    }

    #[test]
    fn test_short_burst_rejected() {
        assert_eq!(validate_repeat(&[]), Err(DecodeError::InsufficientData));
        assert_eq!(validate_repeat(&[9000]), Err(DecodeError::InsufficientData));
    }
}
