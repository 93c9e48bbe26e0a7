//! # mux-io
//!
//! A `no_std`, zero-allocation I/O layer for hardware platforms that stream
//! audio, analog, and digital signals synchronously through one block-shaped
//! render callback. Each block, the platform driver hands the callback a
//! [`RenderContext`] holding every domain's buffers; the accessors on the
//! context read and write any channel at any sub-block frame with
//! sample-accurate timing.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Context | [`context`] | Per-block buffer handle, geometry, behavior flags |
//! | Access | [`io`] | Frame/channel read-write operations, checked and unchecked |
//! | Digital | [`pins`] | Packed direction/value word, pin modes, pin names |
//! | Bits | [`bits`] | Single-bit manipulation on `u32` words |
//! | Shaping | [`helpers`] | `map` / `constrain` / `min` / `max` value helpers |
//! | Lifecycle | [`handler`] | `RenderHandler` setup/render/cleanup seam |
//!
//! ## Quick start
//!
//! ```ignore
//! use mux_io::context::RenderContext;
//! use mux_io::helpers::map;
//! use mux_io::pins::PinMode;
//!
//! // In your render callback, invoked once per block by the platform driver:
//! fn render(context: &mut RenderContext) {
//!     for frame in 0..context.audio_frames() {
//!         let input = context.audio_read(frame, 0).unwrap_or(0.0);
//!         let _ = context.audio_write(frame, 0, input * 0.5);
//!     }
//!
//!     // Drive an analog output from an analog input, rescaled.
//!     let level = context.analog_read(0, 0).unwrap_or(0.0);
//!     let _ = context.analog_write(0, 0, map(level, 0.0, 1.0, 0.2, 0.8));
//!
//!     // Gate a digital pin for the rest of the block.
//!     let _ = context.pin_mode(0, 3, PinMode::Output);
//!     let _ = context.digital_write(0, 3, level > 0.5);
//! }
//! ```
//!
//! ## Timing model
//!
//! - One **block** covers all three domains, each with its own frame count
//!   ([`context::BlockLayout`]); the clock ratio between domains is fixed per
//!   block and opaque to this layer.
//! - Float buffers are interleaved by channel within each frame, so every
//!   access is the single load/store at `frame * channels + channel`.
//! - Writes marked *persistent* forward-fill the value through the end of
//!   the block, keeping every later read a branch-free load.
//! - Nothing here allocates or retains state between calls; all state lives
//!   in the driver-owned buffers.

#![no_std]

pub mod bits;
pub mod constants;
pub mod context;
pub mod error;
pub mod handler;
pub mod helpers;
pub mod io;
pub mod pins;

pub use context::{BlockLayout, ContextFlags, RenderContext};
pub use error::{Error, SignalDomain};
pub use handler::RenderHandler;
pub use pins::{DigitalPin, DigitalWord, PinMode};
