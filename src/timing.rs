//! NEC protocol timing and bit classification.
//!
//! NEC uses pulse-distance modulation: a fixed-length mark followed by a
//! variable-length space whose duration encodes the bit. Nominal timings:
//!
//! ```text
//! lead mark   9000 µs      logical 0:  560 µs mark + 560 µs space
//! lead space  4500 µs      logical 1:  560 µs mark + 1680 µs space
//! repeat space 2250 µs
//! ```
//!
//! Receiver and oscillator jitter make exact comparison useless, so every
//! check goes through [`matches`] with a 20% relative tolerance. The
//! tolerance window scales with the *observed* value, not the expected one,
//! so acceptance is asymmetric: up to 25% of nominal on the high side,
//! ~17% on the low side (see DESIGN.md).

/// Nominal data pulse width in microseconds.
pub const DATA_PULSE_US: u32 = 560;

/// Nominal space width of a logical one (3x the data pulse).
pub const ONE_SPACE_US: u32 = DATA_PULSE_US * 3;

/// Nominal lead mark width.
pub const LEAD_MARK_US: u32 = 9000;

/// Nominal lead space width of a command frame.
pub const LEAD_SPACE_US: u32 = 4500;

/// Nominal lead space width of a repeat frame.
pub const REPEAT_SPACE_US: u32 = 2250;

/// Check an observed duration against an expected one.
///
/// True iff `|observed - expected| < observed * 0.20`, evaluated in integer
/// form as `5 * |observed - expected| < observed` so the comparison is exact
/// and float-free. Strict: a deviation landing exactly on the window edge
/// does not match.
#[inline]
pub fn matches(observed: u32, expected: u32) -> bool {
    (observed.abs_diff(expected) as u64) * 5 < observed as u64
}

/// Does this mark/space pair plausibly encode a logical zero?
#[inline]
pub fn is_zero_pair(p1: u32, p2: u32) -> bool {
    matches(p1, DATA_PULSE_US) && matches(p2, DATA_PULSE_US)
}

/// Does this mark/space pair plausibly encode a logical one?
#[inline]
pub fn is_one_pair(p1: u32, p2: u32) -> bool {
    matches(p1, DATA_PULSE_US) && matches(p2, ONE_SPACE_US)
}
