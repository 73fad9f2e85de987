//! # nec-remote-decoder
//!
//! NEC infrared remote decoder with a lock-free pulse acquisition pipeline.
//!
//! ## Architecture
//!
//! ```text
//! Pulse Source ──▶ PulseAcquisition ──▶ BurstLatch ──▶ NecDecoder ──▶ app
//! (HW FIFO)        (timer tick, ISR)    (lock-free)    (polled)
//! ```
//!
//! Data flows strictly upward. The acquisition side runs in a periodic
//! interrupt context and never blocks; the decoder side is polled from the
//! application loop at any cadence. The only shared state is the pair of
//! [`BurstLatch`] slots, one per burst kind, with overwrite-stale semantics:
//! an unconsumed burst is silently replaced by a newer one of the same kind.

#![cfg_attr(not(test), no_std)]

pub mod acquire;
pub mod burst;
pub mod decoder;
pub mod error;
pub mod frame;
pub mod latch;
pub mod pulse;
pub mod remote;
pub mod repeat;
pub mod timing;

pub use acquire::PulseAcquisition;
pub use burst::{PulseBurst, MAX_BURST_PULSES, REPEAT_BURST_PULSES};
pub use decoder::{DecoderConfig, NecDecoder, REPEAT_CODE};
pub use error::DecodeError;
pub use latch::BurstLatch;
pub use pulse::{PulseSource, PULSE_TIMEOUT_MARKER};
pub use remote::Button;
