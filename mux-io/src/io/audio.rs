//! Audio domain accessors.
//!
//! Audio samples are nominally in `[-1, 1]`; that range is the converter's
//! contract and is not enforced or clamped here.

use crate::context::RenderContext;
use crate::error::{Error, SignalDomain};

use super::check_coordinate;

impl RenderContext<'_> {
    /// Read an audio input at the given frame.
    pub fn audio_read(&self, frame: usize, channel: usize) -> Result<f32, Error> {
        check_coordinate(
            SignalDomain::AudioIn,
            frame,
            self.layout().audio_frames,
            channel,
            self.layout().audio_in_channels,
        )?;
        // SAFETY: coordinate validated against the layout, and construction
        // validated the buffer against the layout.
        Ok(unsafe { self.audio_read_unchecked(frame, channel) })
    }

    /// Read an audio input without bounds checking.
    ///
    /// # Safety
    /// `frame < audio_frames` and `channel < audio_in_channels`.
    #[inline(always)]
    pub unsafe fn audio_read_unchecked(&self, frame: usize, channel: usize) -> f32 {
        debug_assert!(frame < self.layout().audio_frames);
        debug_assert!(channel < self.layout().audio_in_channels);
        unsafe {
            *self
                .audio_in
                .get_unchecked(frame * self.layout().audio_in_channels + channel)
        }
    }

    /// Write an audio output at the given frame. Audio writes never persist;
    /// exactly one sample is stored.
    pub fn audio_write(&mut self, frame: usize, channel: usize, value: f32) -> Result<(), Error> {
        check_coordinate(
            SignalDomain::AudioOut,
            frame,
            self.layout().audio_frames,
            channel,
            self.layout().audio_out_channels,
        )?;
        // SAFETY: coordinate validated against the layout.
        unsafe { self.audio_write_unchecked(frame, channel, value) };
        Ok(())
    }

    /// Write an audio output without bounds checking.
    ///
    /// # Safety
    /// `frame < audio_frames` and `channel < audio_out_channels`.
    #[inline(always)]
    pub unsafe fn audio_write_unchecked(&mut self, frame: usize, channel: usize, value: f32) {
        debug_assert!(frame < self.layout().audio_frames);
        debug_assert!(channel < self.layout().audio_out_channels);
        let channels = self.layout().audio_out_channels;
        unsafe {
            *self.audio_out.get_unchecked_mut(frame * channels + channel) = value;
        }
    }
}
