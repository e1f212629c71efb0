//! The two 24-pixel rings of the LED glasses.
//!
//! Ring pixels are addressed by position 0-23 and take packed `0x00RRGGBB`
//! colors. Each ring carries its own brightness which scales every color
//! as `(component * brightness) >> 8` before it is written, blue first,
//! then red, then green.
//!
//! Several ring pixels share LEDs with the edge of the glasses matrix, so
//! whichever is drawn last wins.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::color::unpack_rgb;
use crate::{Error, LedSink};

/// Pixels per ring.
pub const RING_LEDS: usize = 24;

/// `[blue, red, green]` LEDs of each left ring pixel.
pub static LEFT_RING_LEDS: [[u16; 3]; RING_LEDS] = [
    [341, 211, 210],
    [332, 181, 180],
    [323, 151, 150],
    [127, 126, 125],
    [154, 153, 152],
    [163, 162, 161],
    [166, 165, 164],
    [244, 243, 242],
    [259, 258, 257],
    [169, 168, 167],
    [139, 138, 137],
    [109, 108, 107],
    [79, 78, 77],
    [49, 48, 47],
    [199, 198, 197],
    [229, 228, 227],
    [19, 18, 17],
    [4, 3, 2],
    [16, 15, 14],
    [13, 12, 11],
    [10, 9, 8],
    [217, 216, 215],
    [7, 6, 5],
    [350, 241, 240],
];

/// `[blue, red, green]` LEDs of each right ring pixel.
pub static RIGHT_RING_LEDS: [[u16; 3]; RING_LEDS] = [
    [287, 31, 30],
    [278, 1, 0],
    [273, 274, 275],
    [282, 283, 284],
    [270, 271, 272],
    [27, 28, 29],
    [23, 24, 25],
    [276, 277, 22],
    [20, 21, 26],
    [50, 51, 56],
    [80, 81, 86],
    [110, 111, 116],
    [140, 141, 146],
    [170, 171, 176],
    [200, 201, 206],
    [230, 231, 236],
    [260, 261, 266],
    [348, 349, 262],
    [233, 234, 235],
    [237, 238, 239],
    [339, 340, 232],
    [327, 328, 329],
    [305, 91, 90],
    [296, 61, 60],
];

/// Which ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RingSide {
    /// Left ring
    Left,
    /// Right ring
    Right,
}

impl RingSide {
    /// LED table of this ring.
    #[must_use]
    pub fn leds(self) -> &'static [[u16; 3]; RING_LEDS] {
        match self {
            RingSide::Left => &LEFT_RING_LEDS,
            RingSide::Right => &RIGHT_RING_LEDS,
        }
    }
}

/// Brightness and wiring of one ring.
///
/// A `Ring` holds no bus handle; writes go through whatever [`LedSink`] is
/// passed in, or through a [`RingWriter`] that pairs the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ring {
    side: RingSide,
    brightness: u8,
}

impl Ring {
    /// A ring at full brightness.
    #[must_use]
    pub const fn new(side: RingSide) -> Self {
        Self {
            side,
            brightness: 255,
        }
    }

    /// Which ring this is.
    #[must_use]
    pub const fn side(&self) -> RingSide {
        self.side
    }

    /// Current brightness, 0-255.
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the brightness applied to subsequent writes. Pixels already
    /// written keep their value.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Apply the brightness to a packed color.
    ///
    /// Full brightness still scales by 255/256, so 255 becomes 254.
    #[must_use]
    pub fn scale(&self, color: u32) -> Rgb888 {
        let color = unpack_rgb(color);
        let scale = |c: u8| ((u16::from(c) * u16::from(self.brightness)) >> 8) as u8;
        Rgb888::new(scale(color.r()), scale(color.g()), scale(color.b()))
    }

    /// Set one ring pixel.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRingIndex`] for `n` of 24 or more, nothing is
    /// written. Otherwise whatever the sink reports.
    pub fn set_pixel_color<S: LedSink>(
        &self,
        sink: &mut S,
        n: usize,
        color: u32,
    ) -> Result<(), Error<S::BusError>> {
        let leds = self
            .side
            .leds()
            .get(n)
            .ok_or(Error::InvalidRingIndex(n))?;
        write_pixel(sink, leds, self.scale(color))
    }

    /// Set all 24 pixels to the same color.
    ///
    /// # Errors
    ///
    /// Whatever the sink reports; pixels before the failure stay written.
    pub fn fill<S: LedSink>(&self, sink: &mut S, color: u32) -> Result<(), Error<S::BusError>> {
        let color = self.scale(color);
        for leds in self.side.leds() {
            write_pixel(sink, leds, color)?;
        }
        Ok(())
    }
}

fn write_pixel<S: LedSink>(
    sink: &mut S,
    &[b, r, g]: &[u16; 3],
    color: Rgb888,
) -> Result<(), Error<S::BusError>> {
    sink.set_led(b, color.b())?;
    sink.set_led(r, color.r())?;
    sink.set_led(g, color.g())
}

/// A ring paired with the sink it draws to.
pub struct RingWriter<'a, S> {
    ring: &'a mut Ring,
    sink: &'a mut S,
}

impl<'a, S: LedSink> RingWriter<'a, S> {
    /// Pair a ring with a sink.
    pub fn new(ring: &'a mut Ring, sink: &'a mut S) -> Self {
        Self { ring, sink }
    }

    /// Which ring this writes to.
    #[must_use]
    pub fn side(&self) -> RingSide {
        self.ring.side()
    }

    /// Current brightness, 0-255.
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.ring.brightness()
    }

    /// See [`Ring::set_brightness`].
    pub fn set_brightness(&mut self, brightness: u8) {
        self.ring.set_brightness(brightness);
    }

    /// See [`Ring::set_pixel_color`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRingIndex`] or a sink error.
    pub fn set_pixel_color(&mut self, n: usize, color: u32) -> Result<(), Error<S::BusError>> {
        self.ring.set_pixel_color(self.sink, n, color)
    }

    /// See [`Ring::fill`].
    ///
    /// # Errors
    ///
    /// Whatever the sink reports.
    pub fn fill(&mut self, color: u32) -> Result<(), Error<S::BusError>> {
        self.ring.fill(self.sink, color)
    }
}
