//! Pulse source abstraction.
//!
//! The hardware side of the pipeline is an opaque producer of raw `u32`
//! tick values: one low-duration count and one high-duration count per
//! detected signal burst edge pair, plus a distinguished timeout marker
//! once no further edges arrive within the capture window. On the
//! reference hardware this is a PIO/timer state machine draining into a
//! FIFO; on the host it is a test fixture.
//!
//! The acquisition layer only needs non-blocking access to the next ready
//! value, so the contract is a single `try_next()`.

use heapless::spsc::Consumer;

/// Sentinel the pulse source emits when the capture window times out.
///
/// Marks the end of one burst. Everything accumulated since the previous
/// marker is one logical frame (command or repeat).
pub const PULSE_TIMEOUT_MARKER: u32 = 0xFFFF_FFFF;

/// Non-blocking producer of raw pulse tick values.
///
/// Implementations must never block: return `None` when no value is ready.
/// The acquisition tick drains the source to empty on every invocation, so
/// `try_next` is called in a tight loop from interrupt context and must be
/// O(1).
pub trait PulseSource {
    /// Take the next ready tick value, if any.
    fn try_next(&mut self) -> Option<u32>;
}

/// An SPSC queue consumer half is the canonical pulse source: the hardware
/// FIFO drain enqueues on one side, acquisition dequeues on the other.
impl<const N: usize> PulseSource for Consumer<'_, u32, N> {
    #[inline]
    fn try_next(&mut self) -> Option<u32> {
        self.dequeue()
    }
}
