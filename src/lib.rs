//! Driver for the IS31FL3741 RGB LED matrix controller.
//!
//! ## How the IS31FL3741 Works
//!
//! The IS31FL3741 is an I²C LED matrix driver with 351 individually
//! addressable current sinks. Each sink has an 8-bit PWM duty cycle and an
//! 8-bit current scaling value. Boards wire three sinks to each RGB pixel,
//! so a 13 × 9 RGB matrix uses all 351 channels.
//!
//! ### Register pages
//! The register space is banked into five pages selected through a command
//! register:
//! - **Pages 0/1** – PWM values; LEDs 0-179 on page 0, LEDs 180-350 on page 1
//!   (rebased so LED 180 is register 0)
//! - **Pages 2/3** – per-LED scaling values, split the same way
//! - **Page 4** – function registers: configuration, global current, pull
//!   resistors, reset
//!
//! Every page change must be preceded by an unlock write, so the driver
//! caches the current page and skips redundant switches.
//!
//! ### Physical wiring
//! How the 351 channels map to visible pixels is a property of the board,
//! not the chip. Breakouts wire pixels row-major, the evaluation board splits
//! its columns, the QT board permutes rows and swaps sub-channels by column
//! parity, and the LED glasses route a non-rectangular matrix plus two rings
//! through static tables. [`layout::Layout`] captures each arrangement.
//!
//! ## Driver Flavours
//!
//! 1. **Direct** ([`driver::Is31fl3741`])
//!    - Every pixel write is an immediate I²C transaction
//!    - No RAM beyond the driver handle
//!
//! 2. **Buffered** ([`buffered::BufferedIs31fl3741`])
//!    - Pixel writes land in a 351-byte mirror of the PWM registers
//!    - [`buffered::BufferedIs31fl3741::show`] pushes the whole frame in
//!      bounded chunks
//!
//! Both implement [`LedSink`], so the same [`matrix::LedMatrix`] and
//! [`glasses::LedGlasses`] code draws to either one.
//!
//! ## embedded-graphics
//! [`matrix::LedMatrix`] implements `DrawTarget<Color = Rgb565>`. Colors are
//! expanded to 8 bits per channel by bit replication (see
//! [`color::expand_565`]) and rotation is applied before the board mapping.
//!
//! ## Available Feature Flags
//!
//! ### `defmt` Feature
//! Implements `defmt::Format` for the public types and emits `defmt` log
//! records on initialization, reset, page switches and frame flushes.
#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::pixelcolor::RgbColor;

pub mod buffered;
pub mod canvas;
pub mod color;
pub mod driver;
pub mod glasses;
pub mod layout;
pub mod matrix;
pub mod registers;
pub mod ring;

#[cfg(test)]
mod test_support;

/// Color type accepted by the drawing interface
pub type Color = Rgb565;

/// Number of individually addressable LED channels on the chip
pub const LED_COUNT: usize = 351;

/// Errors reported by the driver.
///
/// `E` is the error type of the underlying I²C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A bus transaction was not acknowledged
    I2c(E),
    /// LED index past the last channel
    InvalidLed(u16),
    /// Page number outside 0-4
    InvalidPage(u8),
    /// Ring position outside 0-23
    InvalidRingIndex(usize),
    /// The ID register did not read back twice the bus address
    WrongDevice {
        /// Value read from the ID register
        found: u8,
        /// Value expected for the configured address
        expected: u8,
    },
}

/// Display rotation, applied before pixels are mapped to LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// No rotation
    #[default]
    Deg0,
    /// 90° clockwise
    Deg90,
    /// 180°
    Deg180,
    /// 270° clockwise
    Deg270,
}

impl Rotation {
    /// Rotation from a quarter-turn count; only the low two bits are used.
    #[must_use]
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns & 0b11 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// Quarter-turn count, 0-3.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// True when logical width and height are swapped.
    #[must_use]
    pub const fn is_transposed(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Transform a logical coordinate to a physical one.
    ///
    /// `width` and `height` are the unrotated physical dimensions. The result
    /// is not bounds checked.
    #[must_use]
    pub const fn apply(self, x: i32, y: i32, width: i32, height: i32) -> (i32, i32) {
        match self {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => (width - 1 - y, x),
            Rotation::Deg180 => (width - 1 - x, height - 1 - y),
            Rotation::Deg270 => (y, height - 1 - x),
        }
    }
}

/// One sub-channel of an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

impl Channel {
    /// Pick this channel's component from an expanded color.
    #[must_use]
    pub fn component(self, color: Rgb888) -> u8 {
        match self {
            Channel::Red => color.r(),
            Channel::Green => color.g(),
            Channel::Blue => color.b(),
        }
    }
}

/// Destination for per-LED PWM values.
///
/// The direct driver writes each value to the chip immediately, the
/// buffered driver stores it in its frame mirror.
pub trait LedSink {
    /// Error type of the underlying bus
    type BusError;

    /// Set the PWM value of one LED channel (0-350).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLed`] for indices past the last channel, without
    /// touching the device or mirror. Bus failures for sinks that write
    /// through.
    fn set_led(&mut self, led: u16, pwm: u8) -> Result<(), Error<Self::BusError>>;
}

/// Sinks that keep a RAM copy of every PWM register.
pub trait LedBuffer {
    /// The PWM mirror, indexed by LED channel
    fn leds(&self) -> &[u8; LED_COUNT];

    /// Mutable access to the PWM mirror
    fn leds_mut(&mut self) -> &mut [u8; LED_COUNT];
}
