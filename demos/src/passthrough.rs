//! Passthrough — a simulated driver running a full render handler.
//!
//! Stands in for the platform's render-loop driver: per block it fills the
//! input buffers, builds the context, and invokes the handler. The handler
//! copies audio input to output, rescales an analog input onto an analog
//! output with `map`/`constrain`, and gates a digital pin from the analog
//! level.
//!
//! Signal flow:
//! ```text
//!   audio in (ramp)   ──► audio out            (per frame)
//!   analog in ch 0    ──► map ──► analog out 0 (persistent)
//!   analog in ch 0    ──► level > 0.5 ──► pin B0
//! ```
//!
//! The driver owns the diagnostic channel: accessor failures inside render
//! are logged, never unwound.

use log::{error, info};

use mux_io::context::{BlockLayout, ContextFlags, RenderContext};
use mux_io::helpers::{constrain, map};
use mux_io::pins::{DigitalPin, DigitalWord, PinMode};
use mux_io::{Error, RenderHandler};

const LAYOUT: BlockLayout = BlockLayout {
    audio_frames: 16,
    audio_in_channels: 2,
    audio_out_channels: 2,
    analog_frames: 4,
    analog_in_channels: 8,
    analog_out_channels: 8,
    digital_frames: 16,
};

const BLOCKS: usize = 8;
const GATE_PIN: DigitalPin = DigitalPin::B0;

struct Passthrough {
    gate_high_blocks: usize,
}

impl RenderHandler for Passthrough {
    fn setup(&mut self, context: &mut RenderContext) -> Result<(), Error> {
        // Claim the gate pin as an output for the whole first block; the
        // driver re-applies the direction bits on later blocks.
        context.pin_mode(0, GATE_PIN.channel(), PinMode::Output)?;
        info!(
            "setup: {} audio frames, {} analog frames per block",
            context.audio_frames(),
            context.analog_frames()
        );
        Ok(())
    }

    fn render(&mut self, context: &mut RenderContext) {
        for frame in 0..context.audio_frames() {
            for channel in 0..context.audio_out_channels() {
                match context.audio_read(frame, channel) {
                    Ok(sample) => {
                        if let Err(err) = context.audio_write(frame, channel, sample) {
                            error!("audio write failed: {err}");
                        }
                    }
                    Err(err) => error!("audio read failed: {err}"),
                }
            }
        }

        // Control-rate work once per block, persisted to the block end.
        let level = context.analog_read(0, 0).unwrap_or(0.0);
        let shaped = constrain(map(level, 0.0, 1.0, 0.2, 0.8), 0.0, 1.0);
        if let Err(err) = context.analog_write(0, 0, shaped) {
            error!("analog write failed: {err}");
        }

        let gate = level > 0.5;
        if gate {
            self.gate_high_blocks += 1;
        }
        if let Err(err) = context.digital_write(0, GATE_PIN.channel(), gate) {
            error!("digital write failed: {err}");
        }
    }

    fn cleanup(&mut self, _context: &mut RenderContext) {
        info!("cleanup: gate was high for {} blocks", self.gate_high_blocks);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut audio_in = vec![0.0f32; LAYOUT.audio_frames * LAYOUT.audio_in_channels];
    let mut audio_out = vec![0.0f32; LAYOUT.audio_frames * LAYOUT.audio_out_channels];
    let mut analog_in = vec![0.0f32; LAYOUT.analog_frames * LAYOUT.analog_in_channels];
    let mut analog_out = vec![0.0f32; LAYOUT.analog_frames * LAYOUT.analog_out_channels];
    let mut digital = vec![0x0000_FFFFu32; LAYOUT.digital_frames];

    let mut handler = Passthrough {
        gate_high_blocks: 0,
    };

    for block in 0..=BLOCKS {
        // The transport layer's job: fill inputs with this block's samples.
        let block_samples = audio_in.len();
        for (offset, sample) in audio_in.iter_mut().enumerate() {
            *sample = ((block * block_samples + offset) as f32 * 0.11) % 2.0 - 1.0;
        }
        for frame in 0..LAYOUT.analog_frames {
            analog_in[frame * LAYOUT.analog_in_channels] = block as f32 / BLOCKS as f32;
        }

        let mut context = RenderContext::new(
            LAYOUT,
            ContextFlags::ANALOG_OUTPUTS_PERSIST,
            &audio_in,
            &mut audio_out,
            &analog_in,
            &mut analog_out,
            &mut digital,
        )
        .expect("buffer shapes match the layout");

        if block == 0 {
            if let Err(err) = handler.setup(&mut context) {
                error!("setup failed: {err}");
                return;
            }
        }
        handler.render(&mut context);
        if block == BLOCKS {
            handler.cleanup(&mut context);
        }

        info!(
            "block {block}: audio_out[0] = {:+.3}, analog_out[0] = {:.3}, gate = {}",
            audio_out[0],
            analog_out[0],
            DigitalWord::from_bits(digital[0]).value(GATE_PIN.channel()),
        );
    }
}
