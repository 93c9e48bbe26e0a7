//! Digital domain accessors: pin values and pin directions.
//!
//! Both facts live in the frame's packed word (see [`crate::pins`]), so a
//! write is a single-word read-modify-write that touches exactly one bit.
//! Digital writes and direction changes always persist to the end of the
//! block — a pin set high stays high until rewritten, matching how the
//! hardware latches pin state between updates. No flag gates this.

use crate::constants::DIGITAL_CHANNELS;
use crate::context::RenderContext;
use crate::error::{Error, SignalDomain};
use crate::pins::{DigitalWord, PinMode};

use super::check_coordinate;

impl RenderContext<'_> {
    /// Read the value bit of a digital pin at the given frame: `true` =
    /// high, `false` = low.
    pub fn digital_read(&self, frame: usize, channel: usize) -> Result<bool, Error> {
        check_coordinate(
            SignalDomain::Digital,
            frame,
            self.layout().digital_frames,
            channel,
            DIGITAL_CHANNELS,
        )?;
        // SAFETY: coordinate validated against the layout.
        Ok(unsafe { self.digital_read_unchecked(frame, channel) })
    }

    /// Read a pin's value bit without bounds checking.
    ///
    /// # Safety
    /// `frame < digital_frames` and `channel < DIGITAL_CHANNELS`.
    #[inline(always)]
    pub unsafe fn digital_read_unchecked(&self, frame: usize, channel: usize) -> bool {
        debug_assert!(frame < self.layout().digital_frames);
        debug_assert!(channel < DIGITAL_CHANNELS);
        DigitalWord::from_bits(unsafe { *self.digital.get_unchecked(frame) }).value(channel)
    }

    /// Read the direction of a digital pin at the given frame.
    pub fn pin_direction(&self, frame: usize, channel: usize) -> Result<PinMode, Error> {
        check_coordinate(
            SignalDomain::Digital,
            frame,
            self.layout().digital_frames,
            channel,
            DIGITAL_CHANNELS,
        )?;
        let word = DigitalWord::from_bits(self.digital[frame]);
        Ok(word.direction(channel))
    }

    /// Set a pin's value bit at the given frame and every later frame of
    /// the block. Digital writes always persist.
    pub fn digital_write(&mut self, frame: usize, channel: usize, value: bool) -> Result<(), Error> {
        check_coordinate(
            SignalDomain::Digital,
            frame,
            self.layout().digital_frames,
            channel,
            DIGITAL_CHANNELS,
        )?;
        // SAFETY: coordinate validated against the layout.
        unsafe { self.digital_write_unchecked(frame, channel, value) };
        Ok(())
    }

    /// Forward-filling value write without bounds checking.
    ///
    /// # Safety
    /// `frame < digital_frames` and `channel < DIGITAL_CHANNELS`.
    #[inline(always)]
    pub unsafe fn digital_write_unchecked(&mut self, frame: usize, channel: usize, value: bool) {
        debug_assert!(frame < self.layout().digital_frames);
        debug_assert!(channel < DIGITAL_CHANNELS);
        for f in frame..self.layout().digital_frames {
            // SAFETY: f stays below digital_frames.
            let word = unsafe { self.digital.get_unchecked_mut(f) };
            let mut state = DigitalWord::from_bits(*word);
            state.set_value(channel, value);
            *word = state.bits();
        }
    }

    /// Set a pin's value bit at exactly one frame.
    pub fn digital_write_once(
        &mut self,
        frame: usize,
        channel: usize,
        value: bool,
    ) -> Result<(), Error> {
        check_coordinate(
            SignalDomain::Digital,
            frame,
            self.layout().digital_frames,
            channel,
            DIGITAL_CHANNELS,
        )?;
        // SAFETY: coordinate validated against the layout.
        unsafe { self.digital_write_once_unchecked(frame, channel, value) };
        Ok(())
    }

    /// Single-frame value write without bounds checking.
    ///
    /// # Safety
    /// `frame < digital_frames` and `channel < DIGITAL_CHANNELS`.
    #[inline(always)]
    pub unsafe fn digital_write_once_unchecked(
        &mut self,
        frame: usize,
        channel: usize,
        value: bool,
    ) {
        debug_assert!(frame < self.layout().digital_frames);
        debug_assert!(channel < DIGITAL_CHANNELS);
        let word = unsafe { self.digital.get_unchecked_mut(frame) };
        let mut state = DigitalWord::from_bits(*word);
        state.set_value(channel, value);
        *word = state.bits();
    }

    /// Set a pin's direction at the given frame and every later frame of
    /// the block.
    pub fn pin_mode(&mut self, frame: usize, channel: usize, mode: PinMode) -> Result<(), Error> {
        check_coordinate(
            SignalDomain::Digital,
            frame,
            self.layout().digital_frames,
            channel,
            DIGITAL_CHANNELS,
        )?;
        // SAFETY: coordinate validated against the layout.
        unsafe { self.pin_mode_unchecked(frame, channel, mode) };
        Ok(())
    }

    /// Forward-filling direction write without bounds checking.
    ///
    /// # Safety
    /// `frame < digital_frames` and `channel < DIGITAL_CHANNELS`.
    #[inline(always)]
    pub unsafe fn pin_mode_unchecked(&mut self, frame: usize, channel: usize, mode: PinMode) {
        debug_assert!(frame < self.layout().digital_frames);
        debug_assert!(channel < DIGITAL_CHANNELS);
        for f in frame..self.layout().digital_frames {
            // SAFETY: f stays below digital_frames.
            let word = unsafe { self.digital.get_unchecked_mut(f) };
            let mut state = DigitalWord::from_bits(*word);
            state.set_direction(channel, mode);
            *word = state.bits();
        }
    }

    /// Set a pin's direction at exactly one frame.
    pub fn pin_mode_once(
        &mut self,
        frame: usize,
        channel: usize,
        mode: PinMode,
    ) -> Result<(), Error> {
        check_coordinate(
            SignalDomain::Digital,
            frame,
            self.layout().digital_frames,
            channel,
            DIGITAL_CHANNELS,
        )?;
        // SAFETY: coordinate validated against the layout.
        unsafe { self.pin_mode_once_unchecked(frame, channel, mode) };
        Ok(())
    }

    /// Single-frame direction write without bounds checking.
    ///
    /// # Safety
    /// `frame < digital_frames` and `channel < DIGITAL_CHANNELS`.
    #[inline(always)]
    pub unsafe fn pin_mode_once_unchecked(&mut self, frame: usize, channel: usize, mode: PinMode) {
        debug_assert!(frame < self.layout().digital_frames);
        debug_assert!(channel < DIGITAL_CHANNELS);
        let word = unsafe { self.digital.get_unchecked_mut(frame) };
        let mut state = DigitalWord::from_bits(*word);
        state.set_direction(channel, mode);
        *word = state.bits();
    }
}
