//! Pulse acquisition: periodic drain of the pulse source.
//!
//! Runs on every tick of a fixed high-frequency timer (nominally 4 kHz)
//! inside interrupt context. Each tick drains every value the source has
//! ready, accumulates raw tick counts, and on the timeout marker converts
//! the accumulated counts to microseconds and hands the finished burst to
//! the matching latch:
//!
//! - exactly 2 values  → repeat burst
//! - more than 2 values → command burst
//! - 0 or 1 values      → stray noise, discarded
//!
//! # Rules
//!
//! - Never blocks: bounded time proportional to the source's queue depth
//! - Never waits on the decoder; publishing overwrites stale bursts
//! - No allocation, no formatting on this path

use crate::burst::{ticks_to_micros, PulseBurst, REPEAT_BURST_PULSES};
use crate::latch::BurstLatch;
use crate::pulse::{PulseSource, PULSE_TIMEOUT_MARKER};

/// Accumulates raw pulse ticks and publishes finished bursts.
pub struct PulseAcquisition<'a> {
    /// Raw tick counts accumulated since the last timeout marker.
    ticks: PulseBurst,

    /// Capture clock of the pulse source, for tick-to-µs conversion.
    source_freq_hz: u32,

    /// Latch for finished command bursts.
    command: &'a BurstLatch,

    /// Latch for finished repeat bursts.
    repeat: &'a BurstLatch,

    /// Pulses dropped because a burst outgrew the accumulator.
    overflow_pulses: u32,

    /// Bursts discarded for being too short to classify.
    stray_bursts: u32,
}

impl<'a> PulseAcquisition<'a> {
    /// Create an acquisition stage publishing into the given latches.
    ///
    /// `source_freq_hz` is the pulse source's state-machine clock; the
    /// reference hardware runs at 256 kHz. Must be non-zero.
    pub fn new(source_freq_hz: u32, command: &'a BurstLatch, repeat: &'a BurstLatch) -> Self {
        debug_assert!(source_freq_hz > 0);
        Self {
            ticks: PulseBurst::new(),
            source_freq_hz,
            command,
            repeat,
            overflow_pulses: 0,
            stray_bursts: 0,
        }
    }

    /// Drain everything the source currently holds.
    ///
    /// Call from the periodic timer tick. Completes in time proportional to
    /// the source's queue depth; never blocks, never waits on the decoder.
    #[inline]
    pub fn poll_source(&mut self, source: &mut impl PulseSource) {
        while let Some(value) = source.try_next() {
            if value == PULSE_TIMEOUT_MARKER {
                self.finalize();
            } else {
                self.accumulate(value);
            }
        }
    }

    /// Pulses dropped due to accumulator overflow since construction.
    pub fn overflow_pulses(&self) -> u32 {
        self.overflow_pulses
    }

    /// Bursts discarded as stray noise (fewer than 2 pulses).
    pub fn stray_bursts(&self) -> u32 {
        self.stray_bursts
    }

    fn accumulate(&mut self, ticks: u32) {
        if self.ticks.push(ticks).is_err() {
            // Longer than any valid NEC frame: keep the prefix, drop the
            // rest. Frame validation rejects the truncated burst downstream.
            self.overflow_pulses = self.overflow_pulses.saturating_add(1);
        }
    }

    fn finalize(&mut self) {
        let mut micros = PulseBurst::new();
        for &ticks in self.ticks.iter() {
            // Same capacity as the accumulator: push cannot fail
            let _ = micros.push(ticks_to_micros(ticks, self.source_freq_hz));
        }

        if micros.len() == REPEAT_BURST_PULSES {
            self.repeat.publish(&micros);
        } else if micros.len() > REPEAT_BURST_PULSES {
            self.command.publish(&micros);
        } else {
            self.stray_bursts = self.stray_bursts.saturating_add(1);
        }

        self.ticks.clear();
    }
}
