//! Decoder facade: the public polling surface.
//!
//! Holds the latest decoded command code and exposes a single non-blocking
//! [`NecDecoder::decode`] poll. A poll services at most one burst: the
//! command latch is checked first, the repeat latch only when no command
//! burst is pending. All failures are silent (`false`); the next infrared
//! burst re-triggers decoding, so there is no retry machinery.
//!
//! # Example
//!
//! ```ignore
//! static COMMAND: BurstLatch = BurstLatch::new();
//! static REPEAT: BurstLatch = BurstLatch::new();
//!
//! // interrupt context, 4 kHz timer:
//! acquisition.poll_source(&mut fifo);
//!
//! // application loop:
//! let mut decoder = NecDecoder::new(DecoderConfig::default(), &COMMAND, &REPEAT);
//! loop {
//!     if decoder.decode() {
//!         dispatch(decoder.command_code());
//!     }
//!     delay_ms(100);
//! }
//! ```

use log::{debug, trace};

use crate::error::DecodeError;
use crate::frame::decode_frame;
use crate::latch::BurstLatch;
use crate::repeat::validate_repeat;

/// Command code reported for a repeat when repeats do not reproduce the
/// previous code: the caller sees "a key is held" without learning which.
pub const REPEAT_CODE: u32 = 0xFFFF_FFFF;

/// Capture clock of the reference pulse source.
pub const DEFAULT_SOURCE_FREQ_HZ: u32 = 256_000;

/// Decoder construction parameters.
#[derive(Clone, Copy, Debug)]
pub struct DecoderConfig {
    /// GPIO identifier of the IR receiver, carried for the hardware layer
    /// that wires up the pulse source.
    pub pin: u8,

    /// Repeat policy: `true` reproduces the previous command code on a
    /// repeat frame, `false` reports [`REPEAT_CODE`] instead.
    pub command_repeat: bool,

    /// Pulse source capture clock in Hz.
    pub source_freq_hz: u32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            pin: 2,
            command_repeat: false,
            source_freq_hz: DEFAULT_SOURCE_FREQ_HZ,
        }
    }
}

impl DecoderConfig {
    /// Config for a given receiver pin with default policy.
    pub fn with_pin(pin: u8) -> Self {
        Self {
            pin,
            ..Default::default()
        }
    }
}

/// NEC decoder facade.
///
/// Owns the command code exclusively; the acquisition side only ever
/// touches the latches. Construct one per receiver.
pub struct NecDecoder<'a> {
    config: DecoderConfig,

    /// Latest successfully decoded code. Overwritten on every success,
    /// untouched by every failure.
    command_code: u32,

    command: &'a BurstLatch,
    repeat: &'a BurstLatch,

    // Diagnostics, not part of the decode contract
    decoded_frames: u32,
    rejected_frames: u32,
}

impl<'a> NecDecoder<'a> {
    /// Create a decoder reading from the given latches.
    pub fn new(config: DecoderConfig, command: &'a BurstLatch, repeat: &'a BurstLatch) -> Self {
        Self {
            config,
            command_code: 0,
            command,
            repeat,
            decoded_frames: 0,
            rejected_frames: 0,
        }
    }

    /// Poll for a newly decoded code.
    ///
    /// Non-blocking, callable at any cadence. Returns true when the command
    /// code was refreshed: a command burst decoded, or a valid repeat frame
    /// arrived. Returns false otherwise, leaving the code untouched.
    pub fn decode(&mut self) -> bool {
        if let Some(burst) = self.command.take() {
            return match decode_frame(&burst) {
                Ok(code) => {
                    self.command_code = code;
                    self.decoded_frames = self.decoded_frames.wrapping_add(1);
                    trace!("decoded command {:#010x}", code);
                    true
                }
                Err(err) => self.reject("command", err),
            };
        }

        if let Some(burst) = self.repeat.take() {
            // A repeat marker supersedes any command burst latched since
            // the check above (last-writer-wins between the two kinds)
            self.command.dismiss();

            return match validate_repeat(&burst) {
                Ok(()) => {
                    if !self.config.command_repeat {
                        self.command_code = REPEAT_CODE;
                    }
                    trace!("repeat frame, code {:#010x}", self.command_code);
                    true
                }
                Err(err) => self.reject("repeat", err),
            };
        }

        false
    }

    /// Latest decoded 32-bit command code.
    pub fn command_code(&self) -> u32 {
        self.command_code
    }

    /// Construction parameters.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Frames decoded successfully since construction.
    pub fn decoded_frames(&self) -> u32 {
        self.decoded_frames
    }

    /// Bursts rejected since construction.
    pub fn rejected_frames(&self) -> u32 {
        self.rejected_frames
    }

    fn reject(&mut self, kind: &str, err: DecodeError) -> bool {
        self.rejected_frames = self.rejected_frames.wrapping_add(1);
        debug!("{} burst rejected: {}", kind, err.as_str());
        false
    }
}
