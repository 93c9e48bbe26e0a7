//! Analog domain accessors.
//!
//! Analog samples are in `[0, 1]`, mapping to the converters' voltage range;
//! as with audio, the range is a hardware contract and is not clamped here.
//! Analog output persistence is block-configurable: with
//! [`ContextFlags::ANALOG_OUTPUTS_PERSIST`] set, `analog_write` holds its
//! value for the rest of the block, which suits control voltages updated
//! sparsely; without it every write is single-frame, which suits outputs
//! regenerated every frame.

use crate::context::{ContextFlags, RenderContext};
use crate::error::{Error, SignalDomain};

use super::check_coordinate;

impl RenderContext<'_> {
    /// Read an analog input at the given frame.
    pub fn analog_read(&self, frame: usize, channel: usize) -> Result<f32, Error> {
        check_coordinate(
            SignalDomain::AnalogIn,
            frame,
            self.layout().analog_frames,
            channel,
            self.layout().analog_in_channels,
        )?;
        // SAFETY: coordinate validated against the layout.
        Ok(unsafe { self.analog_read_unchecked(frame, channel) })
    }

    /// Read an analog input without bounds checking.
    ///
    /// # Safety
    /// `frame < analog_frames` and `channel < analog_in_channels`.
    #[inline(always)]
    pub unsafe fn analog_read_unchecked(&self, frame: usize, channel: usize) -> f32 {
        debug_assert!(frame < self.layout().analog_frames);
        debug_assert!(channel < self.layout().analog_in_channels);
        unsafe {
            *self
                .analog_in
                .get_unchecked(frame * self.layout().analog_in_channels + channel)
        }
    }

    /// Write an analog output at the given frame.
    ///
    /// With [`ContextFlags::ANALOG_OUTPUTS_PERSIST`] set, the value is also
    /// written to every later frame of the block; otherwise this is
    /// [`Self::analog_write_once`]. Validation happens before the fill, so a
    /// failed call has written nothing.
    pub fn analog_write(&mut self, frame: usize, channel: usize, value: f32) -> Result<(), Error> {
        check_coordinate(
            SignalDomain::AnalogOut,
            frame,
            self.layout().analog_frames,
            channel,
            self.layout().analog_out_channels,
        )?;
        // SAFETY: coordinate validated against the layout.
        unsafe { self.analog_write_unchecked(frame, channel, value) };
        Ok(())
    }

    /// Write an analog output without bounds checking, honoring the
    /// persistence flag.
    ///
    /// # Safety
    /// `frame < analog_frames` and `channel < analog_out_channels`.
    #[inline(always)]
    pub unsafe fn analog_write_unchecked(&mut self, frame: usize, channel: usize, value: f32) {
        if self.flags().contains(ContextFlags::ANALOG_OUTPUTS_PERSIST) {
            debug_assert!(frame < self.layout().analog_frames);
            debug_assert!(channel < self.layout().analog_out_channels);
            let channels = self.layout().analog_out_channels;
            for f in frame..self.layout().analog_frames {
                // SAFETY: f and channel are in bounds per the caller's
                // contract; each later frame's own slot is filled.
                unsafe {
                    *self.analog_out.get_unchecked_mut(f * channels + channel) = value;
                }
            }
        } else {
            unsafe { self.analog_write_once_unchecked(frame, channel, value) };
        }
    }

    /// Write an analog output at exactly one frame, regardless of the
    /// persistence flag.
    pub fn analog_write_once(
        &mut self,
        frame: usize,
        channel: usize,
        value: f32,
    ) -> Result<(), Error> {
        check_coordinate(
            SignalDomain::AnalogOut,
            frame,
            self.layout().analog_frames,
            channel,
            self.layout().analog_out_channels,
        )?;
        // SAFETY: coordinate validated against the layout.
        unsafe { self.analog_write_once_unchecked(frame, channel, value) };
        Ok(())
    }

    /// Single-frame analog write without bounds checking.
    ///
    /// # Safety
    /// `frame < analog_frames` and `channel < analog_out_channels`.
    #[inline(always)]
    pub unsafe fn analog_write_once_unchecked(&mut self, frame: usize, channel: usize, value: f32) {
        debug_assert!(frame < self.layout().analog_frames);
        debug_assert!(channel < self.layout().analog_out_channels);
        let channels = self.layout().analog_out_channels;
        unsafe {
            *self.analog_out.get_unchecked_mut(frame * channels + channel) = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::context::{BlockLayout, ContextFlags, RenderContext};
    use crate::error::{Error, SignalDomain};

    const LAYOUT: BlockLayout = BlockLayout {
        audio_frames: 8,
        audio_in_channels: 2,
        audio_out_channels: 2,
        analog_frames: 4,
        analog_in_channels: 8,
        analog_out_channels: 8,
        digital_frames: 8,
    };

    struct Buffers {
        audio_in: [f32; 16],
        audio_out: [f32; 16],
        analog_in: [f32; 32],
        analog_out: [f32; 32],
        digital: [u32; 8],
    }

    impl Buffers {
        fn new() -> Self {
            Buffers {
                audio_in: [0.0; 16],
                audio_out: [0.0; 16],
                analog_in: [0.0; 32],
                analog_out: [0.0; 32],
                digital: [0; 8],
            }
        }

        fn context(&mut self, flags: ContextFlags) -> RenderContext<'_> {
            RenderContext::new(
                LAYOUT,
                flags,
                &self.audio_in,
                &mut self.audio_out,
                &self.analog_in,
                &mut self.analog_out,
                &mut self.digital,
            )
            .unwrap()
        }
    }

    #[test]
    fn read_uses_interleaved_offset() {
        let mut buffers = Buffers::new();
        // frame 2, channel 5 → offset 2 * 8 + 5 = 21
        buffers.analog_in[21] = 0.625;
        let context = buffers.context(ContextFlags::NONE);
        assert_eq!(context.analog_read(2, 5).unwrap(), 0.625);
    }

    #[test]
    fn persistent_write_fills_to_block_end() {
        let mut buffers = Buffers::new();
        let mut context = buffers.context(ContextFlags::ANALOG_OUTPUTS_PERSIST);
        context.analog_write(1, 3, 0.9).unwrap();

        // Frames 1..4 read the value back; frame 0 is untouched.
        drop(context);
        for frame in 0..4 {
            let expected = if frame >= 1 { 0.9 } else { 0.0 };
            assert_eq!(buffers.analog_out[frame * 8 + 3], expected, "frame {frame}");
        }
        // No other channel was written.
        for (offset, &sample) in buffers.analog_out.iter().enumerate() {
            if offset % 8 != 3 {
                assert_eq!(sample, 0.0, "offset {offset}");
            }
        }
    }

    #[test]
    fn later_persistent_write_overrides_tail() {
        let mut buffers = Buffers::new();
        let mut context = buffers.context(ContextFlags::ANALOG_OUTPUTS_PERSIST);
        context.analog_write(0, 0, 0.2).unwrap();
        context.analog_write(2, 0, 0.8).unwrap();
        drop(context);
        assert_eq!(buffers.analog_out[0], 0.2);
        assert_eq!(buffers.analog_out[8], 0.2);
        assert_eq!(buffers.analog_out[16], 0.8);
        assert_eq!(buffers.analog_out[24], 0.8);
    }

    #[test]
    fn write_without_flag_is_single_frame() {
        let mut buffers = Buffers::new();
        let mut context = buffers.context(ContextFlags::NONE);
        context.analog_write(1, 0, 0.5).unwrap();
        drop(context);
        assert_eq!(buffers.analog_out[8], 0.5);
        assert_eq!(buffers.analog_out[16], 0.0);
        assert_eq!(buffers.analog_out[24], 0.0);
    }

    #[test]
    fn write_once_ignores_persistence_flag() {
        let mut buffers = Buffers::new();
        let mut context = buffers.context(ContextFlags::ANALOG_OUTPUTS_PERSIST);
        context.analog_write_once(1, 7, 0.4).unwrap();
        drop(context);
        assert_eq!(buffers.analog_out[15], 0.4);
        assert_eq!(buffers.analog_out[23], 0.0);
        assert_eq!(buffers.analog_out[31], 0.0);
        assert_eq!(buffers.analog_out[7], 0.0);
    }

    #[test]
    fn out_of_range_is_error_and_no_op() {
        let mut buffers = Buffers::new();
        let mut context = buffers.context(ContextFlags::ANALOG_OUTPUTS_PERSIST);
        assert_eq!(
            context.analog_write(4, 0, 1.0),
            Err(Error::FrameOutOfRange {
                domain: SignalDomain::AnalogOut,
                frame: 4,
                frames: 4
            })
        );
        assert_eq!(
            context.analog_write(0, 8, 1.0),
            Err(Error::ChannelOutOfRange {
                domain: SignalDomain::AnalogOut,
                channel: 8,
                channels: 8
            })
        );
        assert!(matches!(
            context.analog_read(0, 8),
            Err(Error::ChannelOutOfRange { .. })
        ));
        drop(context);
        assert!(buffers.analog_out.iter().all(|&s| s == 0.0));
    }
}
