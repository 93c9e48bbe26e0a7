//! The lifecycle seam between the platform driver and render code.
//!
//! The driver calls these three entry points in order: [`setup`] once before
//! streaming starts, [`render`] once per block for as long as streaming
//! runs, and [`cleanup`] once after the last block. Each call receives that
//! block's [`RenderContext`]; how the driver schedules the calls, and on
//! which thread, is the driver's contract.
//!
//! [`setup`]: RenderHandler::setup
//! [`render`]: RenderHandler::render
//! [`cleanup`]: RenderHandler::cleanup

use crate::context::RenderContext;
use crate::error::Error;

/// Render code hosted by a platform driver.
pub trait RenderHandler {
    /// Called once before the first block. Claim pins, set initial output
    /// state, reject unusable block geometry. A failure here stops the
    /// driver before streaming starts.
    fn setup(&mut self, context: &mut RenderContext) -> Result<(), Error>;

    /// Called once per block on the render thread. Must complete without
    /// blocking or allocating; accessor failures are recoverable and belong
    /// on the driver's diagnostic channel, not in an unwind.
    fn render(&mut self, context: &mut RenderContext);

    /// Called once after the final block, with that block's context still
    /// valid for reading.
    fn cleanup(&mut self, context: &mut RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{BlockLayout, ContextFlags};

    /// A handler that copies audio input to output and counts its calls.
    struct Passthrough {
        setups: usize,
        renders: usize,
        cleanups: usize,
    }

    impl RenderHandler for Passthrough {
        fn setup(&mut self, context: &mut RenderContext) -> Result<(), Error> {
            self.setups += 1;
            if context.audio_out_channels() == 0 {
                // Nothing to drive; report the geometry as unusable.
                return Err(Error::ChannelOutOfRange {
                    domain: crate::error::SignalDomain::AudioOut,
                    channel: 0,
                    channels: 0,
                });
            }
            Ok(())
        }

        fn render(&mut self, context: &mut RenderContext) {
            self.renders += 1;
            for frame in 0..context.audio_frames() {
                let sample = context.audio_read(frame, 0).unwrap_or(0.0);
                let _ = context.audio_write(frame, 0, sample);
            }
        }

        fn cleanup(&mut self, _context: &mut RenderContext) {
            self.cleanups += 1;
        }
    }

    #[test]
    fn driver_shaped_invocation() {
        const LAYOUT: BlockLayout = BlockLayout {
            audio_frames: 4,
            audio_in_channels: 1,
            audio_out_channels: 1,
            analog_frames: 0,
            analog_in_channels: 0,
            analog_out_channels: 0,
            digital_frames: 4,
        };

        let audio_in = [0.1f32, 0.2, 0.3, 0.4];
        let mut audio_out = [0.0f32; 4];
        let analog_in = [0.0f32; 0];
        let mut analog_out = [0.0f32; 0];
        let mut digital = [0x0000_FFFFu32; 4];

        let mut handler = Passthrough {
            setups: 0,
            renders: 0,
            cleanups: 0,
        };

        // The driver builds a fresh context for every call.
        for step in 0..3 {
            let mut context = RenderContext::new(
                LAYOUT,
                ContextFlags::NONE,
                &audio_in,
                &mut audio_out,
                &analog_in,
                &mut analog_out,
                &mut digital,
            )
            .unwrap();
            match step {
                0 => handler.setup(&mut context).unwrap(),
                1 => handler.render(&mut context),
                _ => handler.cleanup(&mut context),
            }
        }

        assert_eq!(
            (handler.setups, handler.renders, handler.cleanups),
            (1, 1, 1)
        );
        assert_eq!(audio_out, audio_in);
    }
}
