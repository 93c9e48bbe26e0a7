//! Blink — toggle one digital pin per block.
//!
//! The smallest possible driver simulation: no audio or analog work, just
//! `pin_mode` + `digital_write` once per block, showing that a single write
//! at frame 0 holds the pin for the whole block.

use log::info;

use mux_io::context::{BlockLayout, ContextFlags, RenderContext};
use mux_io::pins::{DigitalPin, DigitalWord, PinMode};

const LAYOUT: BlockLayout = BlockLayout {
    audio_frames: 16,
    audio_in_channels: 0,
    audio_out_channels: 0,
    analog_frames: 0,
    analog_in_channels: 0,
    analog_out_channels: 0,
    digital_frames: 16,
};

const LED_PIN: DigitalPin = DigitalPin::A6;
const BLOCKS: usize = 10;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let audio_in: [f32; 0] = [];
    let mut audio_out: [f32; 0] = [];
    let analog_in: [f32; 0] = [];
    let mut analog_out: [f32; 0] = [];
    let mut digital = vec![DigitalWord::default().bits(); LAYOUT.digital_frames];

    for block in 0..BLOCKS {
        let mut context = RenderContext::new(
            LAYOUT,
            ContextFlags::NONE,
            &audio_in,
            &mut audio_out,
            &analog_in,
            &mut analog_out,
            &mut digital,
        )
        .expect("buffer shapes match the layout");

        context
            .pin_mode(0, LED_PIN.channel(), PinMode::Output)
            .expect("pin index is valid");
        context
            .digital_write(0, LED_PIN.channel(), block % 2 == 0)
            .expect("pin index is valid");

        // Every frame of the block carries the written state.
        let led_on = block % 2 == 0;
        let held = (0..LAYOUT.digital_frames)
            .all(|frame| context.digital_read(frame, LED_PIN.channel()).unwrap() == led_on);
        info!(
            "block {block}: led {} (held all {} frames: {held})",
            if led_on { "on" } else { "off" },
            LAYOUT.digital_frames
        );
    }
}
