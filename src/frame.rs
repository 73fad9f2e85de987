//! Command frame decoding.
//!
//! Turns one finalized command burst into a 32-bit code. The walk is
//! length-driven: each mark/space pair after the lead pair contributes one
//! bit, most significant first. A 16-pair frame fills bits 31..16; the
//! full 32-pair frame of the reference remote fills all 32 bits.
//!
//! Two validation details are deliberate (see DESIGN.md):
//!
//! - The lead pair is rejected only when *both* halves mismatch. A frame
//!   with a bad lead mark but a plausible lead space passes this step and
//!   stands or falls on its data pairs.
//! - The pair's one/zero expectation comes from the pair *sum* crossing
//!   three data-pulse widths; the matching predicate then revalidates both
//!   halves.

use crate::burst::MAX_BURST_PULSES;
use crate::error::DecodeError;
use crate::timing::{is_one_pair, is_zero_pair, matches, LEAD_MARK_US, LEAD_SPACE_US, ONE_SPACE_US};

/// Decode a command burst of microsecond durations into a 32-bit code.
///
/// `burst` must not exceed [`MAX_BURST_PULSES`] values; the acquisition
/// stage guarantees this, and it keeps the computed bit index within range.
pub fn decode_frame(burst: &[u32]) -> Result<u32, DecodeError> {
    debug_assert!(burst.len() <= MAX_BURST_PULSES);

    if burst.len() < 2 {
        return Err(DecodeError::InsufficientData);
    }

    // Only a doubly-bad lead pair aborts; one plausible half keeps the
    // frame alive for the data-pair checks
    if !matches(burst[0], LEAD_MARK_US) && !matches(burst[1], LEAD_SPACE_US) {
        return Err(DecodeError::InvalidStartSequence);
    }

    let mut code: u32 = 0;
    let mut i = 2;
    while i + 1 < burst.len() {
        let (p1, p2) = (burst[i], burst[i + 1]);

        if p1 as u64 + p2 as u64 > ONE_SPACE_US as u64 {
            if !is_one_pair(p1, p2) {
                return Err(DecodeError::InvalidOneBit);
            }
            // First data pair is bit 31, counting down from there
            let pair_index = i / 2;
            code |= 1 << (31 - (pair_index - 1));
        } else if !is_zero_pair(p1, p2) {
            return Err(DecodeError::InvalidZeroBit);
        }

        i += 2;
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::DATA_PULSE_US;

    /// Build a burst for `code`, emitting `pairs` data pairs from bit 31 down.
    fn encode(code: u32, pairs: usize) -> Vec<u32> {
        let mut burst = vec![9000, 4500];
        for pair in 0..pairs {
            let bit = 31 - pair;
            burst.push(DATA_PULSE_US);
            if code & (1 << bit) != 0 {
                burst.push(ONE_SPACE_US);
            } else {
                burst.push(DATA_PULSE_US);
            }
        }
        burst
    }

    #[test]
    fn test_full_frame_decodes_all_bits() {
        // Key "0" on the reference remote
        let burst = encode(0x00FF_9867, 32);
        assert_eq!(decode_frame(&burst), Ok(0x00FF_9867));
    }

    #[test]
    fn test_half_frame_fills_high_bits_only() {
        let burst = encode(0xA5C3_0000, 16);
        let code = decode_frame(&burst).unwrap();
        assert_eq!(code, 0xA5C3_0000);
        assert_eq!(code & 0xFFFF, 0);
    }

    #[test]
    fn test_all_zero_bits() {
        let burst = encode(0, 32);
        assert_eq!(decode_frame(&burst), Ok(0));
    }

    #[test]
    fn test_all_one_bits() {
        let burst = encode(0xFFFF_FFFF, 32);
        assert_eq!(decode_frame(&burst), Ok(0xFFFF_FFFF));
    }

    #[test]
    fn test_empty_and_single_value_fail() {
        assert_eq!(decode_frame(&[]), Err(DecodeError::InsufficientData));
        assert_eq!(decode_frame(&[9000]), Err(DecodeError::InsufficientData));
    }

    #[test]
    fn test_lead_pair_both_bad_rejected() {
        let mut burst = encode(0x00FF_9867, 32);
        burst[0] = 1000;
        burst[1] = 1000;
        assert_eq!(decode_frame(&burst), Err(DecodeError::InvalidStartSequence));
    }

    #[test]
    fn test_lead_mark_bad_space_good_passes() {
        // One plausible half keeps the frame alive
        let mut burst = encode(0x00FF_9867, 32);
        burst[0] = 1000;
        assert_eq!(decode_frame(&burst), Ok(0x00FF_9867));
    }

    #[test]
    fn test_lead_space_bad_mark_good_passes() {
        let mut burst = encode(0x00FF_9867, 32);
        burst[1] = 1000;
        assert_eq!(decode_frame(&burst), Ok(0x00FF_9867));
    }

    #[test]
    fn test_bad_one_bit_rejected() {
        let mut burst = encode(0x8000_0000, 32);
        // First data pair is a one; stretch its mark beyond tolerance
        burst[2] = 900;
        assert_eq!(decode_frame(&burst), Err(DecodeError::InvalidOneBit));
    }

    #[test]
    fn test_bad_zero_bit_rejected() {
        let mut burst = encode(0, 32);
        // Shrink a zero pair's space below tolerance without crossing the
        // one/zero sum threshold
        burst[5] = 300;
        assert_eq!(decode_frame(&burst), Err(DecodeError::InvalidZeroBit));
    }

    #[test]
    fn test_jittered_frame_within_tolerance() {
        // Durations as produced by the 256 kHz tick conversion
        let mut burst = vec![9000, 4500];
        for pair in 0..32 {
            let bit = 31 - pair;
            burst.push(562);
            if 0x00FF_9867u32 & (1 << bit) != 0 {
                burst.push(1679);
            } else {
                burst.push(562);
            }
        }
        assert_eq!(decode_frame(&burst), Ok(0x00FF_9867));
    }

    #[test]
    fn test_trailing_odd_value_ignored() {
        // A dangling final mark with no space pairs with nothing
        let mut burst = encode(0xA5C3_0000, 16);
        burst.push(DATA_PULSE_US);
        assert_eq!(decode_frame(&burst), Ok(0xA5C3_0000));
    }

    #[test]
    fn test_failure_reports_first_bad_pair() {
        let mut burst = encode(0xFFFF_FFFF, 32);
        burst[4] = 5000; // second data pair: sum crosses threshold, not a one
        assert_eq!(decode_frame(&burst), Err(DecodeError::InvalidOneBit));
    }
}
