/// Number of digital pins multiplexed into one `u32` word per frame.
///
/// Bits 0–15 of the word carry the pins' direction bits, bits 16–31 the
/// value bits, so the full state of all pins fits in a single word.
pub const DIGITAL_CHANNELS: usize = 16;
