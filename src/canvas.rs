//! High resolution drawing surface for the glasses matrix.
//!
//! The canvas is three times the matrix size in each direction (54 × 15).
//! [`Canvas::downsample`] averages every 3 × 3 block into one matrix pixel.
//! Because the sums keep the fractional part that RGB565 loses, the result
//! has more intermediate shades than drawing on the matrix directly. The
//! sums are gamma corrected through lookup tables on the way out.
//!
//! Unlike drawing on the matrix, downsampling writes every connected matrix
//! pixel, black included, so it overwrites ring LEDs shared with the matrix.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::{DrawTarget, IntoStorage, OriginDimensions, Point, Size};
use embedded_graphics::Pixel;

use crate::glasses::GLASSES_MATRIX;
use crate::{Color, LED_COUNT};

/// Matrix pixels per canvas pixel, along each axis.
pub const SCALE: usize = 3;
/// Canvas width in pixels.
pub const CANVAS_WIDTH: usize = 18 * SCALE;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: usize = 5 * SCALE;

/// Gamma 2.2 for a sum of nine 5-bit components: `(x / 278) ^ 2.2 * 255`.
pub static GAMMA_RB: [u8; 279] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2,
    2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 8, 8, 8, 8,
    9, 9, 9, 10, 10, 10, 11, 11, 12, 12, 12, 13, 13, 13, 14,
    14, 15, 15, 16, 16, 16, 17, 17, 18, 18, 19, 19, 20, 20, 21,
    21, 22, 22, 23, 23, 24, 25, 25, 26, 26, 27, 27, 28, 29, 29,
    30, 31, 31, 32, 33, 33, 34, 35, 35, 36, 37, 37, 38, 39, 39,
    40, 41, 42, 42, 43, 44, 45, 45, 46, 47, 48, 49, 50, 50, 51,
    52, 53, 54, 55, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65,
    66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80,
    81, 82, 83, 84, 85, 86, 88, 89, 90, 91, 92, 93, 94, 96, 97,
    98, 99, 100, 102, 103, 104, 105, 107, 108, 109, 110, 112, 113, 114, 116,
    117, 118, 120, 121, 122, 124, 125, 126, 128, 129, 130, 132, 133, 135, 136,
    138, 139, 140, 142, 143, 145, 146, 148, 149, 151, 152, 154, 155, 157, 159,
    160, 162, 163, 165, 166, 168, 170, 171, 173, 175, 176, 178, 180, 181, 183,
    185, 186, 188, 190, 191, 193, 195, 197, 198, 200, 202, 204, 205, 207, 209,
    211, 213, 215, 216, 218, 220, 222, 224, 226, 228, 229, 231, 233, 235, 237,
    239, 241, 243, 245, 247, 249, 251, 253, 255,
];

/// Gamma 2.2 for a sum of nine 6-bit components: `(x / 566) ^ 2.2 * 255`.
pub static GAMMA_G: [u8; 567] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    4, 5, 5, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
    6, 6, 7, 7, 7, 7, 7, 7, 7, 8, 8, 8, 8, 8, 8,
    8, 9, 9, 9, 9, 9, 9, 10, 10, 10, 10, 10, 10, 11, 11,
    11, 11, 11, 11, 12, 12, 12, 12, 12, 13, 13, 13, 13, 13, 14,
    14, 14, 14, 14, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 17,
    17, 17, 17, 18, 18, 18, 18, 19, 19, 19, 19, 20, 20, 20, 20,
    21, 21, 21, 21, 22, 22, 22, 22, 23, 23, 23, 23, 24, 24, 24,
    24, 25, 25, 25, 26, 26, 26, 26, 27, 27, 27, 28, 28, 28, 28,
    29, 29, 29, 30, 30, 30, 31, 31, 31, 32, 32, 32, 33, 33, 33,
    34, 34, 34, 34, 35, 35, 36, 36, 36, 37, 37, 37, 38, 38, 38,
    39, 39, 39, 40, 40, 40, 41, 41, 42, 42, 42, 43, 43, 43, 44,
    44, 45, 45, 45, 46, 46, 46, 47, 47, 48, 48, 48, 49, 49, 50,
    50, 50, 51, 51, 52, 52, 53, 53, 53, 54, 54, 55, 55, 55, 56,
    56, 57, 57, 58, 58, 59, 59, 59, 60, 60, 61, 61, 62, 62, 63,
    63, 64, 64, 64, 65, 65, 66, 66, 67, 67, 68, 68, 69, 69, 70,
    70, 71, 71, 72, 72, 73, 73, 74, 74, 75, 75, 76, 76, 77, 77,
    78, 78, 79, 79, 80, 80, 81, 81, 82, 83, 83, 84, 84, 85, 85,
    86, 86, 87, 87, 88, 89, 89, 90, 90, 91, 91, 92, 93, 93, 94,
    94, 95, 95, 96, 97, 97, 98, 98, 99, 99, 100, 101, 101, 102, 102,
    103, 104, 104, 105, 106, 106, 107, 107, 108, 109, 109, 110, 110, 111, 112,
    112, 113, 114, 114, 115, 116, 116, 117, 118, 118, 119, 119, 120, 121, 121,
    122, 123, 123, 124, 125, 125, 126, 127, 127, 128, 129, 130, 130, 131, 132,
    132, 133, 134, 134, 135, 136, 136, 137, 138, 139, 139, 140, 141, 141, 142,
    143, 144, 144, 145, 146, 147, 147, 148, 149, 149, 150, 151, 152, 152, 153,
    154, 155, 155, 156, 157, 158, 159, 159, 160, 161, 162, 162, 163, 164, 165,
    165, 166, 167, 168, 169, 169, 170, 171, 172, 173, 173, 174, 175, 176, 177,
    177, 178, 179, 180, 181, 182, 182, 183, 184, 185, 186, 187, 187, 188, 189,
    190, 191, 192, 192, 193, 194, 195, 196, 197, 198, 198, 199, 200, 201, 202,
    203, 204, 205, 205, 206, 207, 208, 209, 210, 211, 212, 213, 213, 214, 215,
    216, 217, 218, 219, 220, 221, 222, 223, 223, 224, 225, 226, 227, 228, 229,
    230, 231, 232, 233, 234, 235, 236, 237, 237, 238, 239, 240, 241, 242, 243,
    244, 245, 246, 247, 248, 249, 250, 251, 252, 253, 254, 255,
];

/// Gamma correct a red or blue block sum. Sums past the table end, which a
/// fully lit block produces, read the last entry.
#[must_use]
pub fn gamma_rb(sum: u16) -> u8 {
    GAMMA_RB[usize::from(sum).min(GAMMA_RB.len() - 1)]
}

/// Gamma correct a green block sum, clamped like [`gamma_rb`].
#[must_use]
pub fn gamma_g(sum: u16) -> u8 {
    GAMMA_G[usize::from(sum).min(GAMMA_G.len() - 1)]
}

/// A 54 × 15 RGB565 frame.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: [u16; CANVAS_WIDTH * CANVAS_HEIGHT],
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// An all-black canvas.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pixels: [0; CANVAS_WIDTH * CANVAS_HEIGHT],
        }
    }

    /// Raw RGB565 pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u16; CANVAS_WIDTH * CANVAS_HEIGHT] {
        &self.pixels
    }

    /// Mutable raw pixels, row-major.
    pub fn pixels_mut(&mut self) -> &mut [u16; CANVAS_WIDTH * CANVAS_HEIGHT] {
        &mut self.pixels
    }

    /// Color at `point`, `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Color> {
        Self::index(point).map(|i| Color::from(RawU16::new(self.pixels[i])))
    }

    /// Set one pixel. Points outside the canvas are ignored.
    pub fn set_pixel(&mut self, point: Point, color: Color) {
        if let Some(i) = Self::index(point) {
            self.pixels[i] = color.into_storage();
        }
    }

    fn index(point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < CANVAS_WIDTH && y < CANVAS_HEIGHT).then_some(y * CANVAS_WIDTH + x)
    }

    /// Average each 3 × 3 block into the matching glasses matrix pixel of
    /// `leds`, gamma corrected.
    ///
    /// Only LEDs wired to the matrix are written.
    pub fn downsample(&self, leds: &mut [u8; LED_COUNT]) {
        let width = usize::from(GLASSES_MATRIX.width());
        let height = usize::from(GLASSES_MATRIX.height());

        for x in 0..width {
            for y in 0..height {
                let Some([b, r, g]) = GLASSES_MATRIX.entry(x, y) else {
                    continue;
                };
                let (mut rsum, mut gsum, mut bsum) = (0u16, 0u16, 0u16);
                for row in self.pixels[y * SCALE * CANVAS_WIDTH..]
                    .chunks(CANVAS_WIDTH)
                    .take(SCALE)
                {
                    for &rgb in &row[x * SCALE..(x + 1) * SCALE] {
                        rsum += (rgb >> 11) & 0x1F;
                        gsum += (rgb >> 5) & 0x3F;
                        bsum += rgb & 0x1F;
                    }
                }
                leds[usize::from(b)] = gamma_rb(bsum);
                leds[usize::from(r)] = gamma_rb(rsum);
                leds[usize::from(g)] = gamma_g(gsum);
            }
        }
    }
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &CANVAS_WIDTH)
            .field("height", &CANVAS_HEIGHT)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Canvas {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Canvas({}x{})", CANVAS_WIDTH, CANVAS_HEIGHT);
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color.into_storage());
        Ok(())
    }
}
