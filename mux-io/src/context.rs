//! The per-block render context: buffers, geometry, behavior flags.
//!
//! A [`RenderContext`] is built by the platform driver once per block, from
//! buffers the driver exclusively owns for the duration of that block, and
//! handed to the render callback. Construction validates every buffer length
//! against the declared [`BlockLayout`] — the configuration-error class is
//! raised here, once, so the per-access operations in [`crate::io`] only
//! ever have to check frame and channel indices.
//!
//! The context borrows; it never allocates, and nothing carries over from
//! one block to the next. Persisted output values live in the buffers
//! themselves (see the write-forward operations in [`crate::io`]).

use core::ops::BitOr;

use crate::constants::DIGITAL_CHANNELS;
use crate::error::{Error, SignalDomain};

/// Frame and channel counts for one block, per signal domain.
///
/// The three domains run on independent clocks: `analog_frames` and
/// `digital_frames` usually differ from `audio_frames` by a fixed per-block
/// ratio that this layer does not interpret. Distinct in/out channel counts
/// are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub audio_frames: usize,
    pub audio_in_channels: usize,
    pub audio_out_channels: usize,
    pub analog_frames: usize,
    pub analog_in_channels: usize,
    pub analog_out_channels: usize,
    pub digital_frames: usize,
}

/// Behavior flag word for one block.
///
/// Stored as a plain `u32` so the driver boundary stays a single word.
/// Compose with `|`, query with [`ContextFlags::contains`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContextFlags(u32);

impl ContextFlags {
    /// No flags set.
    pub const NONE: Self = ContextFlags(0);

    /// Analog writes persist: `analog_write` forward-fills its value to the
    /// end of the block instead of touching one frame. Digital writes always
    /// persist; no flag gates them.
    pub const ANALOG_OUTPUTS_PERSIST: Self = ContextFlags(1 << 0);

    /// Wrap a raw flag word from the driver.
    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Self {
        ContextFlags(bits)
    }

    /// The raw flag word.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// `true` if every flag in `other` is set in `self`.
    #[inline(always)]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ContextFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        ContextFlags(self.0 | rhs.0)
    }
}

/// One block's I/O state: borrowed buffers plus their geometry.
///
/// Float buffers are interleaved by channel within each frame
/// (`frame * channels + channel`); the digital buffer holds one packed
/// [`crate::pins::DigitalWord`]-shaped `u32` per frame. Buffer borrows are
/// valid for exactly one render invocation; the driver refills and drains
/// them between blocks.
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub(crate) audio_in: &'a [f32],
    pub(crate) audio_out: &'a mut [f32],
    pub(crate) analog_in: &'a [f32],
    pub(crate) analog_out: &'a mut [f32],
    pub(crate) digital: &'a mut [u32],
    layout: BlockLayout,
    flags: ContextFlags,
}

impl<'a> RenderContext<'a> {
    /// Build a context over the driver's buffers for one block.
    ///
    /// Every buffer length is checked against the layout before the context
    /// exists: float buffers must hold exactly `frames * channels` samples
    /// for their domain, the digital buffer exactly `digital_frames` words.
    /// A mismatch fails with the offending domain named and no buffer is
    /// touched.
    pub fn new(
        layout: BlockLayout,
        flags: ContextFlags,
        audio_in: &'a [f32],
        audio_out: &'a mut [f32],
        analog_in: &'a [f32],
        analog_out: &'a mut [f32],
        digital: &'a mut [u32],
    ) -> Result<Self, Error> {
        check_shape(
            SignalDomain::AudioIn,
            audio_in.len(),
            layout.audio_frames,
            layout.audio_in_channels,
        )?;
        check_shape(
            SignalDomain::AudioOut,
            audio_out.len(),
            layout.audio_frames,
            layout.audio_out_channels,
        )?;
        check_shape(
            SignalDomain::AnalogIn,
            analog_in.len(),
            layout.analog_frames,
            layout.analog_in_channels,
        )?;
        check_shape(
            SignalDomain::AnalogOut,
            analog_out.len(),
            layout.analog_frames,
            layout.analog_out_channels,
        )?;
        if digital.len() != layout.digital_frames {
            return Err(Error::DigitalBufferLen {
                len: digital.len(),
                frames: layout.digital_frames,
            });
        }

        Ok(RenderContext {
            audio_in,
            audio_out,
            analog_in,
            analog_out,
            digital,
            layout,
            flags,
        })
    }

    /// The block geometry this context was built with.
    #[inline(always)]
    pub fn layout(&self) -> BlockLayout {
        self.layout
    }

    /// The behavior flags this context was built with.
    #[inline(always)]
    pub fn flags(&self) -> ContextFlags {
        self.flags
    }

    /// Audio frames in this block.
    #[inline(always)]
    pub fn audio_frames(&self) -> usize {
        self.layout.audio_frames
    }

    /// Audio input channels.
    #[inline(always)]
    pub fn audio_in_channels(&self) -> usize {
        self.layout.audio_in_channels
    }

    /// Audio output channels.
    #[inline(always)]
    pub fn audio_out_channels(&self) -> usize {
        self.layout.audio_out_channels
    }

    /// Analog frames in this block.
    #[inline(always)]
    pub fn analog_frames(&self) -> usize {
        self.layout.analog_frames
    }

    /// Analog input channels.
    #[inline(always)]
    pub fn analog_in_channels(&self) -> usize {
        self.layout.analog_in_channels
    }

    /// Analog output channels.
    #[inline(always)]
    pub fn analog_out_channels(&self) -> usize {
        self.layout.analog_out_channels
    }

    /// Digital frames in this block.
    #[inline(always)]
    pub fn digital_frames(&self) -> usize {
        self.layout.digital_frames
    }

    /// Digital channels per frame — fixed by the word packing.
    #[inline(always)]
    pub fn digital_channels(&self) -> usize {
        DIGITAL_CHANNELS
    }

    /// The whole interleaved audio input buffer, for loops that walk frames
    /// directly instead of going through the per-coordinate accessors.
    #[inline(always)]
    pub fn audio_in(&self) -> &[f32] {
        self.audio_in
    }

    /// The whole interleaved audio output buffer.
    #[inline(always)]
    pub fn audio_out(&mut self) -> &mut [f32] {
        self.audio_out
    }

    /// The whole interleaved analog input buffer.
    #[inline(always)]
    pub fn analog_in(&self) -> &[f32] {
        self.analog_in
    }

    /// The whole interleaved analog output buffer.
    #[inline(always)]
    pub fn analog_out(&mut self) -> &mut [f32] {
        self.analog_out
    }

    /// The whole digital word buffer, one packed word per frame.
    #[inline(always)]
    pub fn digital(&mut self) -> &mut [u32] {
        self.digital
    }
}

fn check_shape(
    domain: SignalDomain,
    len: usize,
    frames: usize,
    channels: usize,
) -> Result<(), Error> {
    if len != frames * channels {
        return Err(Error::BufferShape {
            domain,
            len,
            frames,
            channels,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BlockLayout {
        BlockLayout {
            audio_frames: 16,
            audio_in_channels: 2,
            audio_out_channels: 2,
            analog_frames: 4,
            analog_in_channels: 8,
            analog_out_channels: 8,
            digital_frames: 16,
        }
    }

    #[test]
    fn new_accepts_matching_buffers() {
        let audio_in = [0.0f32; 32];
        let mut audio_out = [0.0f32; 32];
        let analog_in = [0.0f32; 32];
        let mut analog_out = [0.0f32; 32];
        let mut digital = [0u32; 16];

        let context = RenderContext::new(
            layout(),
            ContextFlags::NONE,
            &audio_in,
            &mut audio_out,
            &analog_in,
            &mut analog_out,
            &mut digital,
        )
        .unwrap();

        assert_eq!(context.audio_frames(), 16);
        assert_eq!(context.analog_in_channels(), 8);
        assert_eq!(context.digital_channels(), 16);
    }

    #[test]
    fn new_rejects_short_audio_out() {
        let audio_in = [0.0f32; 32];
        let mut audio_out = [0.0f32; 31];
        let analog_in = [0.0f32; 32];
        let mut analog_out = [0.0f32; 32];
        let mut digital = [0u32; 16];

        let err = RenderContext::new(
            layout(),
            ContextFlags::NONE,
            &audio_in,
            &mut audio_out,
            &analog_in,
            &mut analog_out,
            &mut digital,
        )
        .unwrap_err();

        assert_eq!(
            err,
            Error::BufferShape {
                domain: SignalDomain::AudioOut,
                len: 31,
                frames: 16,
                channels: 2,
            }
        );
    }

    #[test]
    fn new_rejects_wrong_digital_len() {
        let audio_in = [0.0f32; 32];
        let mut audio_out = [0.0f32; 32];
        let analog_in = [0.0f32; 32];
        let mut analog_out = [0.0f32; 32];
        let mut digital = [0u32; 15];

        let err = RenderContext::new(
            layout(),
            ContextFlags::NONE,
            &audio_in,
            &mut audio_out,
            &analog_in,
            &mut analog_out,
            &mut digital,
        )
        .unwrap_err();

        assert_eq!(err, Error::DigitalBufferLen { len: 15, frames: 16 });
    }

    #[test]
    fn new_accepts_channelless_domains() {
        // A board variant without analog I/O presents zero channels and
        // empty buffers.
        let mut empty_layout = layout();
        empty_layout.analog_in_channels = 0;
        empty_layout.analog_out_channels = 0;

        let audio_in = [0.0f32; 32];
        let mut audio_out = [0.0f32; 32];
        let analog_in = [0.0f32; 0];
        let mut analog_out = [0.0f32; 0];
        let mut digital = [0u32; 16];

        assert!(RenderContext::new(
            empty_layout,
            ContextFlags::NONE,
            &audio_in,
            &mut audio_out,
            &analog_in,
            &mut analog_out,
            &mut digital,
        )
        .is_ok());
    }

    #[test]
    fn flags_compose_and_query() {
        let flags = ContextFlags::NONE | ContextFlags::ANALOG_OUTPUTS_PERSIST;
        assert!(flags.contains(ContextFlags::ANALOG_OUTPUTS_PERSIST));
        assert!(!ContextFlags::NONE.contains(ContextFlags::ANALOG_OUTPUTS_PERSIST));
        assert_eq!(flags.bits(), 1);
        assert_eq!(ContextFlags::from_bits(1), flags);
    }
}
