//! Lock-free single-slot burst handoff.
//!
//! One latch per burst kind connects the interrupt-context producer
//! (acquisition) to the polling-context consumer (decoder facade):
//!
//! ```text
//! PulseAcquisition ──publish──▶ BurstLatch ──take──▶ NecDecoder
//! (interrupt tick)              (lock-free)          (app poll)
//! ```
//!
//! Semantics are "overwrite stale, never block producer": at most one
//! unconsumed burst exists per latch, a newer publish replaces it, and the
//! producer never waits on the consumer.
//!
//! # Memory Ordering
//!
//! - Producer bumps the slot sequence with `Release` around the copy and
//!   publishes the ready flag with `Release`.
//! - Consumer claims the ready flag with `AcqRel` and reads the sequence
//!   with `Acquire` before and after copying the slot.
//! - A sequence mismatch means the producer overwrote the slot mid-copy;
//!   the torn copy is discarded and reported as "nothing ready" (the
//!   overwriting publish re-raises the flag, so the newer burst is seen on
//!   the next poll).

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::burst::PulseBurst;

/// Single-slot latch carrying the most recent burst of one kind.
///
/// # Safety
///
/// This type uses `UnsafeCell` internally but is safe to use because:
/// - Single producer (the acquisition tick) is enforced by design
/// - The consumer copies the slot out and validates the copy against the
///   sequence counter, never holding a reference across a publish
/// - All coordination goes through atomic operations
pub struct BurstLatch {
    /// Most recently published burst.
    slot: UnsafeCell<PulseBurst>,

    /// Slot sequence: odd while a publish is in progress, even when stable.
    seq: AtomicU32,

    /// True when an unconsumed burst is latched.
    ready: AtomicBool,
}

// SAFETY: Single producer, single consumer, atomic coordination. Torn slot
// reads are detected via the sequence counter and discarded.
unsafe impl Sync for BurstLatch {}
unsafe impl Send for BurstLatch {}

impl BurstLatch {
    /// Create an empty latch.
    pub const fn new() -> Self {
        Self {
            slot: UnsafeCell::new(PulseBurst::new()),
            seq: AtomicU32::new(0),
            ready: AtomicBool::new(false),
        }
    }

    /// Publish a burst, overwriting any unconsumed one.
    ///
    /// Producer side only. Completes in bounded time, never blocks.
    #[inline]
    pub fn publish(&self, burst: &PulseBurst) {
        let seq = self.seq.load(Ordering::Relaxed);

        // Odd sequence marks the slot as in-flux for the consumer
        self.seq.store(seq.wrapping_add(1), Ordering::Release);

        // SAFETY: single producer; the consumer never dereferences the slot
        // without validating the sequence around its copy
        unsafe {
            (*self.slot.get()).clone_from(burst);
        }

        self.seq.store(seq.wrapping_add(2), Ordering::Release);
        self.ready.store(true, Ordering::Release);
    }

    /// Take the latched burst, clearing the ready flag.
    ///
    /// Consumer side only. Returns `None` when nothing is latched or when
    /// the producer overwrote the slot during the copy (the replacement
    /// burst stays latched for the next poll).
    #[inline]
    pub fn take(&self) -> Option<PulseBurst> {
        if !self.ready.swap(false, Ordering::AcqRel) {
            return None;
        }

        let before = self.seq.load(Ordering::Acquire);
        if before & 1 != 0 {
            // Publish in progress: the newer burst will re-raise the flag
            return None;
        }

        // SAFETY: the copy may race a publish; the sequence re-check below
        // detects that and the torn copy is dropped without being observed
        let copy = unsafe { (*self.slot.get()).clone() };

        let after = self.seq.load(Ordering::Acquire);
        if before != after {
            return None;
        }

        Some(copy)
    }

    /// Check whether a burst is latched without consuming it.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Drop any latched burst without reading it.
    ///
    /// Used by the decoder facade when a repeat marker supersedes an unread
    /// command burst (last-writer-wins between the two signal kinds).
    #[inline]
    pub fn dismiss(&self) {
        self.ready.store(false, Ordering::Release);
    }
}

impl Default for BurstLatch {
    fn default() -> Self {
        Self::new()
    }
}
