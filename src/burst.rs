//! Burst storage and tick-to-microsecond conversion.
//!
//! A burst is one complete group of measured pulse durations between the
//! remote's start marker and the source's timeout marker. Two shapes occur
//! in practice:
//!
//! - **command burst**: lead mark/space pair followed by data pairs.
//!   A full NEC frame from the reference hardware is 66 values
//!   (lead pair + 32 data pairs); shorter frames fill fewer bits.
//! - **repeat burst**: exactly 2 values, sent while a button is held.
//!
//! Storage is a fixed-capacity `heapless::Vec`, so a burst can be copied
//! through the latch and onto the stack without allocation.

/// Maximum pulses in one burst: lead pair + 32 data pairs.
///
/// Also bounds the decoder's bit-index arithmetic: with at most 32 data
/// pairs the computed bit position stays within 0..=31.
pub const MAX_BURST_PULSES: usize = 66;

/// Exact length of a repeat burst.
pub const REPEAT_BURST_PULSES: usize = 2;

/// An ordered sequence of pulse durations, in microseconds once converted.
pub type PulseBurst = heapless::Vec<u32, MAX_BURST_PULSES>;

/// Convert a raw tick count to microseconds.
///
/// The source's state machine spends two clock cycles per counted tick,
/// hence the factor `2_000_000 / source_freq_hz`. Widened to u64 so large
/// counts cannot overflow mid-multiply.
#[inline]
pub fn ticks_to_micros(ticks: u32, source_freq_hz: u32) -> u32 {
    (ticks as u64 * 2_000_000 / source_freq_hz as u64) as u32
}
