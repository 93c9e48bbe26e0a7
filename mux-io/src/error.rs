//! Error taxonomy for context construction and checked accessors.
//!
//! Three classes of failure exist in this layer:
//!
//! - **range** — a frame or channel index outside the domain's bounds
//!   ([`Error::FrameOutOfRange`], [`Error::ChannelOutOfRange`]). Recoverable;
//!   the caller decides whether to skip the access or abandon the block.
//! - **configuration** — buffer lengths inconsistent with the declared block
//!   geometry ([`Error::BufferShape`], [`Error::DigitalBufferLen`]). Surfaced
//!   once, by [`crate::context::RenderContext::new`], never per access.
//! - **invalid mode** — a raw pin-mode word outside the
//!   `{Input, Output}` encoding ([`Error::InvalidPinMode`]).
//!
//! Every failure is reported before any buffer is touched, so a failed
//! operation never leaves a block partially written. None of these abort the
//! render thread; the driver owns the diagnostic channel they are reported
//! through.

use core::fmt;

use thiserror::Error;

/// The five addressable buffer domains, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalDomain {
    AudioIn,
    AudioOut,
    AnalogIn,
    AnalogOut,
    Digital,
}

impl SignalDomain {
    const fn as_str(self) -> &'static str {
        match self {
            SignalDomain::AudioIn => "audio input",
            SignalDomain::AudioOut => "audio output",
            SignalDomain::AnalogIn => "analog input",
            SignalDomain::AnalogOut => "analog output",
            SignalDomain::Digital => "digital",
        }
    }
}

impl fmt::Display for SignalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure raised by context construction or a checked accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Frame index at or past the domain's frame count.
    #[error("frame {frame} out of range for {domain}: block has {frames} frames")]
    FrameOutOfRange {
        domain: SignalDomain,
        frame: usize,
        frames: usize,
    },

    /// Channel index at or past the domain's channel count.
    #[error("channel {channel} out of range for {domain}: block has {channels} channels")]
    ChannelOutOfRange {
        domain: SignalDomain,
        channel: usize,
        channels: usize,
    },

    /// A float buffer's length disagrees with `frames * channels`.
    #[error("{domain} buffer holds {len} samples, layout requires {frames} frames x {channels} channels")]
    BufferShape {
        domain: SignalDomain,
        len: usize,
        frames: usize,
        channels: usize,
    },

    /// The digital word buffer's length disagrees with the digital frame count.
    #[error("digital buffer holds {len} words, layout requires {frames} frames")]
    DigitalBufferLen { len: usize, frames: usize },

    /// A raw pin-mode value outside the direction-bit encoding.
    #[error("invalid pin mode {0}: expected 0 (output) or 1 (input)")]
    InvalidPinMode(u32),
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_names_the_domain() {
        let err = Error::ChannelOutOfRange {
            domain: SignalDomain::AnalogOut,
            channel: 8,
            channels: 8,
        };
        assert_eq!(
            err.to_string(),
            "channel 8 out of range for analog output: block has 8 channels"
        );
    }

    #[test]
    fn errors_compare_by_payload() {
        let a = Error::InvalidPinMode(7);
        let b = Error::InvalidPinMode(7);
        assert_eq!(a, b);
        assert_ne!(a, Error::InvalidPinMode(2));
    }
}
