//! Frame-buffered access to the IS31FL3741.
//!
//! [`BufferedIs31fl3741`] keeps a 351-byte mirror of the PWM registers.
//! Pixel and LED writes only touch the mirror; [`BufferedIs31fl3741::show`]
//! pushes the whole mirror to the chip, page 0 then page 1, in writes of at
//! most [`Is31fl3741::max_transfer`] bytes.
//!
//! # Example
//! ```rust,no_run
//! use embedded_graphics::prelude::*;
//! use is31fl3741::buffered::BufferedIs31fl3741;
//! use is31fl3741::layout::Layout;
//! use is31fl3741::matrix::LedMatrix;
//! use is31fl3741::Color;
//! # fn run<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), is31fl3741::Error<I2C::Error>> {
//! let mut leds = BufferedIs31fl3741::new(i2c);
//! leds.init()?;
//! leds.driver_mut().set_global_current(0x20)?;
//! leds.driver_mut().set_all_led_scaling(0xFF)?;
//! leds.driver_mut().enable(true)?;
//!
//! let mut matrix = LedMatrix::new(leds, Layout::Qt);
//! matrix.set_pixel(Point::new(3, 4), Color::GREEN)?;
//! matrix.sink_mut().show()?;
//! # Ok(())
//! # }
//! ```

use embedded_hal::i2c::I2c;

use crate::driver::Is31fl3741;
use crate::registers::{Page, LOWER_PAGE_LEDS};
use crate::{Error, LedBuffer, LedSink, LED_COUNT};

/// IS31FL3741 driver with a RAM copy of the PWM registers.
pub struct BufferedIs31fl3741<I2C> {
    driver: Is31fl3741<I2C>,
    leds: [u8; LED_COUNT],
}

impl<I2C: I2c> BufferedIs31fl3741<I2C> {
    /// Buffered driver at the default address, with an all-off mirror.
    pub fn new(i2c: I2C) -> Self {
        Self::from_driver(Is31fl3741::new(i2c))
    }

    /// Buffered driver at the given 7-bit address.
    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Self::from_driver(Is31fl3741::new_with_address(i2c, address))
    }

    /// Wrap an existing direct driver.
    pub fn from_driver(driver: Is31fl3741<I2C>) -> Self {
        Self {
            driver,
            leds: [0; LED_COUNT],
        }
    }

    /// Initialize the chip like [`Is31fl3741::init`] and clear the mirror.
    ///
    /// The mirror is left untouched if initialization fails.
    ///
    /// # Errors
    ///
    /// Same as [`Is31fl3741::init`].
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        self.driver.init()?;
        self.leds = [0; LED_COUNT];
        Ok(())
    }

    /// The direct driver, for configuration and scaling registers.
    pub fn driver(&self) -> &Is31fl3741<I2C> {
        &self.driver
    }

    /// Mutable access to the direct driver.
    ///
    /// Writing PWM values through it bypasses the mirror and is undone by
    /// the next [`Self::show`].
    pub fn driver_mut(&mut self) -> &mut Is31fl3741<I2C> {
        &mut self.driver
    }

    /// Give back the bus.
    pub fn release(self) -> I2C {
        self.driver.release()
    }

    /// Set one mirrored PWM value. Nothing is sent until [`Self::show`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLed`] for `led` above 350.
    pub fn set_led_pwm(&mut self, led: u16, pwm: u8) -> Result<(), Error<I2C::Error>> {
        let slot = self
            .leds
            .get_mut(usize::from(led))
            .ok_or(Error::InvalidLed(led))?;
        *slot = pwm;
        Ok(())
    }

    /// Set every mirrored PWM value.
    pub fn fill(&mut self, pwm: u8) {
        self.leds.fill(pwm);
    }

    /// Turn every mirrored LED off.
    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// Push the mirror to the chip.
    ///
    /// LEDs 0-179 go to page 0 and LEDs 180-350 to page 1, each page written
    /// from register 0 up. The mirror itself is not modified.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure; the rest of the frame is not sent.
    pub fn show(&mut self) -> Result<(), Error<I2C::Error>> {
        let (lower, upper) = self.leds.split_at(LOWER_PAGE_LEDS);
        self.driver.write_page(Page::Pwm0, lower)?;
        self.driver.write_page(Page::Pwm1, upper)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("is31fl3741: frame sent");
        Ok(())
    }
}

impl<I2C: I2c> LedSink for BufferedIs31fl3741<I2C> {
    type BusError = I2C::Error;

    fn set_led(&mut self, led: u16, pwm: u8) -> Result<(), Error<Self::BusError>> {
        self.set_led_pwm(led, pwm)
    }
}

impl<I2C> LedBuffer for BufferedIs31fl3741<I2C> {
    fn leds(&self) -> &[u8; LED_COUNT] {
        &self.leds
    }

    fn leds_mut(&mut self) -> &mut [u8; LED_COUNT] {
        &mut self.leds
    }
}

impl<I2C> core::fmt::Debug for BufferedIs31fl3741<I2C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BufferedIs31fl3741")
            .field("driver", &self.driver)
            .field("lit", &self.leds.iter().filter(|&&v| v != 0).count())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl<I2C> defmt::Format for BufferedIs31fl3741<I2C> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "BufferedIs31fl3741 {{ driver: {} }}", self.driver);
    }
}
