//! Board wiring: which three LED channels light each RGB pixel.
//!
//! The chip numbers its channels 0-350 but boards route them to pixels in
//! their own order. Simple boards follow a formula; boards whose wiring is
//! irregular use a static [`LedTable`].
//!
//! Supported layouts:
//! - [`Layout::Rectangular`] – row-major breakout wiring, 3 channels per pixel
//!   in blue, green, red order
//! - [`Layout::Evb`] – the 13 × 9 evaluation board, columns split at x = 9
//! - [`Layout::Qt`] – the 13 × 9 QT board with permuted rows and
//!   column-dependent sub-channel order
//! - [`Layout::Table`] – any static table, such as the LED glasses matrix
//!
//! All coordinates here are physical; rotation happens in
//! [`crate::matrix::LedMatrix`].

use crate::glasses::GLASSES_MATRIX;
use crate::{Channel, LED_COUNT};

/// The three channels of one RGB pixel, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelLeds([(Channel, u16); 3]);

impl PixelLeds {
    /// Channels in explicit write order.
    #[must_use]
    pub const fn new(leds: [(Channel, u16); 3]) -> Self {
        Self(leds)
    }

    /// Blue, green, red on three consecutive channels starting at `offset`.
    #[must_use]
    pub const fn bgr(offset: u16) -> Self {
        Self([
            (Channel::Blue, offset),
            (Channel::Green, offset + 1),
            (Channel::Red, offset + 2),
        ])
    }

    /// The LED driving the given sub-channel, `None` if the pixel has none.
    #[must_use]
    pub fn led(&self, channel: Channel) -> Option<u16> {
        self.0
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|&(_, led)| led)
    }

    /// Channels in write order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, u16)> + '_ {
        self.0.iter().copied()
    }
}

/// Static wiring table for boards without a regular layout.
///
/// Entries are stored column-major (`x * height + y`). Each entry holds the
/// blue, red and green LED of a pixel, or `None` where the board has no LED.
#[derive(Debug, PartialEq, Eq)]
pub struct LedTable {
    width: u8,
    height: u8,
    leds: &'static [Option<[u16; 3]>],
}

impl LedTable {
    /// Wrap a table of `width * height` entries.
    ///
    /// # Panics
    ///
    /// If the table length does not match the dimensions. Tables are built
    /// in `static` initializers, so this fails at compile time.
    #[must_use]
    pub const fn new(width: u8, height: u8, leds: &'static [Option<[u16; 3]>]) -> Self {
        assert!(leds.len() == width as usize * height as usize);
        Self {
            width,
            height,
            leds,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Raw `[blue, red, green]` entry for a pixel.
    #[must_use]
    pub fn entry(&self, x: usize, y: usize) -> Option<[u16; 3]> {
        if x >= usize::from(self.width) || y >= usize::from(self.height) {
            return None;
        }
        self.leds[x * usize::from(self.height) + y]
    }

    /// Channels for a pixel, `None` if out of bounds or unconnected.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<PixelLeds> {
        self.entry(x, y).map(|[b, r, g]| {
            PixelLeds([(Channel::Blue, b), (Channel::Red, r), (Channel::Green, g)])
        })
    }
}

/// Row order of the QT board: logical row `y` sits on wiring row `QT_ROW_MAP[y]`.
const QT_ROW_MAP: [u16; 9] = [8, 5, 4, 3, 2, 1, 0, 7, 6];

/// Dimensions of a row-major layout known to fit within the chip's channels.
///
/// Only [`Layout::rectangular`] creates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RectangularLayout {
    width: u8,
    height: u8,
}

impl RectangularLayout {
    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }
}

/// How pixels are wired to LED channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Row-major wiring with pixel `(x, y)` on channels `3 * (x + width * y)`
    /// onward, blue first. Build with [`Layout::rectangular`].
    Rectangular(RectangularLayout),
    /// 13 × 9 evaluation board
    Evb,
    /// 13 × 9 QT board
    Qt,
    /// Static table lookup
    Table(&'static LedTable),
}

impl Layout {
    /// A row-major layout, or `None` if it would need more than 351 channels.
    #[must_use]
    pub const fn rectangular(width: u8, height: u8) -> Option<Self> {
        if width == 0 || height == 0 || width as usize * height as usize * 3 > LED_COUNT {
            return None;
        }
        Some(Layout::Rectangular(RectangularLayout { width, height }))
    }

    /// The 18 × 5 matrix of the LED glasses.
    #[must_use]
    pub fn glasses() -> Self {
        Layout::Table(&GLASSES_MATRIX)
    }

    /// Physical `(width, height)` in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        match self {
            Layout::Rectangular(rect) => (u32::from(rect.width), u32::from(rect.height)),
            Layout::Evb | Layout::Qt => (13, 9),
            Layout::Table(table) => (u32::from(table.width()), u32::from(table.height())),
        }
    }

    /// Channels for the pixel at physical `(x, y)`.
    ///
    /// `None` when the coordinate is outside the layout or the board has no
    /// LED there.
    #[must_use]
    pub fn leds(&self, x: usize, y: usize) -> Option<PixelLeds> {
        let (width, height) = self.size();
        if x >= width as usize || y >= height as usize {
            return None;
        }
        let (x16, y16) = (x as u16, y as u16);
        match self {
            Layout::Rectangular(rect) => {
                Some(PixelLeds::bgr((x16 + u16::from(rect.width) * y16) * 3))
            }
            Layout::Evb => Some(evb_leds(x16, y16)),
            Layout::Qt => Some(qt_leds(x16, y)),
            Layout::Table(table) => table.get(x, y),
        }
    }
}

fn evb_leds(x: u16, y: u16) -> PixelLeds {
    let offset = if x > 9 {
        (x + 80 + y * 3) * 3
    } else {
        (x + y * 10) * 3
    };
    PixelLeds::bgr(offset)
}

fn qt_leds(col: u16, y: usize) -> PixelLeds {
    let row = QT_ROW_MAP[y];
    let offset = if col >= 10 {
        0xB4 + 0x5A + 9 * row + (col - 10) * 3
    } else if row <= 5 {
        0x1E * row + col * 3
    } else {
        0xB4 + (row - 6) * 0x1E + col * 3
    };

    // odd columns and the last column are routed red-last
    let (r, g, b) = if col == 12 || col % 2 == 1 {
        (2, 1, 0)
    } else {
        (0, 2, 1)
    };
    PixelLeds::new([
        (Channel::Red, offset + r),
        (Channel::Green, offset + g),
        (Channel::Blue, offset + b),
    ])
}
