#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod header;

pub use header::{render_header, HeaderChunks, HeaderLayout};

/// Width of the ST7735 panel the logo is scaled to
pub const MAX_WIDTH: u32 = 128;

/// Number of array elements per line in the emitted header
pub const VALUES_PER_LINE: usize = 12;

/// Indentation in front of every line of array elements
pub const INDENT: &str = "    ";

/// Pack an RGB888 pixel into RGB565 by truncating the low bits of each channel.
///
/// Layout of the result: `RRRRRGGG GGGBBBBB`.
#[inline]
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r = (r & 0xF8) as u16;
    let g = (g & 0xFC) as u16;
    let b = (b >> 3) as u16;
    (r << 8) | (g << 3) | b
}

/// Split an RGB565 word into its raw 5-bit red, 6-bit green and 5-bit blue channels
#[inline]
pub fn split_rgb565(value: u16) -> (u8, u8, u8) {
    (
        ((value >> 11) & 0x1F) as u8, // Red (5 bits)
        ((value >> 5) & 0x3F) as u8,  // Green (6 bits)
        (value & 0x1F) as u8,         // Blue (5 bits)
    )
}

/// Height of an image scaled to `target_width`, keeping the aspect ratio.
///
/// The ratio is computed in double precision and the product truncated toward
/// zero, so 49×49 scaled to 128 wide gives 127 rather than 128.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return 0;
    }
    let ratio = target_width as f64 / width as f64;
    (height as f64 * ratio) as u32
}
