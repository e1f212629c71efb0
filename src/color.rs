//! Color conversions shared by every board layout.
//!
//! Drawing happens in RGB565 while the LEDs take 8-bit PWM values per
//! channel. Expansion replicates each field's high bits into the newly
//! opened low bits, so full scale maps to 255 and zero stays zero.

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};
use embedded_graphics::prelude::IntoStorage;

/// Expand a packed RGB565 value to 8 bits per channel.
///
/// Red and blue become `(v << 3) | (v >> 2)`, green `(v << 2) | (v >> 4)`.
#[must_use]
pub const fn expand_565(color: u16) -> Rgb888 {
    let r = ((color >> 8) & 0xF8) | (color >> 13);
    let g = ((color >> 3) & 0xFC) | ((color >> 9) & 0x03);
    let b = ((color << 3) & 0xF8) | ((color >> 2) & 0x07);
    Rgb888::new(r as u8, g as u8, b as u8)
}

/// Expand an embedded-graphics RGB565 color.
#[must_use]
pub fn expand(color: Rgb565) -> Rgb888 {
    expand_565(color.into_storage())
}

/// Pack 8-bit components into RGB565 by truncation.
#[must_use]
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Same as [`color565`], as an embedded-graphics color.
#[must_use]
pub fn rgb565(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::from(RawU16::new(color565(r, g, b)))
}

/// Pack a color into `0x00RRGGBB`.
#[must_use]
pub fn pack_rgb(color: Rgb888) -> u32 {
    (u32::from(color.r()) << 16) | (u32::from(color.g()) << 8) | u32::from(color.b())
}

/// Split `0x00RRGGBB` into its components. The top byte is ignored.
#[must_use]
pub const fn unpack_rgb(color: u32) -> Rgb888 {
    Rgb888::new((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

/// Convert hue, saturation and value into a packed `0x00RRGGBB` color.
///
/// `hue` covers one full turn of the color wheel over 0-65535 and rolls
/// over, with pure red centered on the rollover. It is remapped onto a
/// 1530-step hexcone: six slices of 255 steps, the last step of each slice
/// being the first of the next. `sat` of 0 yields gray, `val` of 0 black.
/// The result is linear, not gamma corrected.
#[must_use]
pub const fn color_hsv(hue: u16, sat: u8, val: u8) -> u32 {
    let hue = (hue as u32 * 1530 + 32768) / 65536;

    let (r, g, b) = if hue < 510 {
        if hue < 255 {
            (255, hue, 0)
        } else {
            (510 - hue, 255, 0)
        }
    } else if hue < 1020 {
        if hue < 765 {
            (0, 255, hue - 510)
        } else {
            (0, 1020 - hue, 255)
        }
    } else if hue < 1530 {
        if hue < 1275 {
            (hue - 1020, 0, 255)
        } else {
            (255, 0, 1530 - hue)
        }
    } else {
        // 1530 wraps back to pure red
        (255, 0, 0)
    };

    // 1-256 scalars so the divides become shifts
    let v1 = 1 + val as u32;
    let s1 = 1 + sat as u32;
    let s2 = 255 - sat as u32;

    let red = ((((r * s1) >> 8) + s2) * v1) & 0xFF00;
    let green = ((((g * s1) >> 8) + s2) * v1) & 0xFF00;
    let blue = ((((b * s1) >> 8) + s2) * v1) >> 8;
    (red << 8) | green | blue
}

/// [`color_hsv`] with full saturation and value.
#[must_use]
pub const fn color_hue(hue: u16) -> u32 {
    color_hsv(hue, 255, 255)
}
