//! Register map of the IS31FL3741.
//!
//! The chip banks its registers into five pages selected through the command
//! register. Changing the page requires writing [`COMMAND_UNLOCK`] to the
//! command lock register first.
//!
//! | Page | Contents                                     |
//! |------|----------------------------------------------|
//! | 0    | PWM values for LEDs 0-179                    |
//! | 1    | PWM values for LEDs 180-350 (rebased to 0)   |
//! | 2    | Scaling values for LEDs 0-179                |
//! | 3    | Scaling values for LEDs 180-350 (rebased)    |
//! | 4    | Function registers (config, current, reset)  |

use bitfield::bitfield;

use crate::LED_COUNT;

/// Selects the active page (0-4).
pub const COMMAND_REGISTER: u8 = 0xFD;
/// Must be written with [`COMMAND_UNLOCK`] before every page change.
pub const COMMAND_LOCK_REGISTER: u8 = 0xFE;
/// Unlock value for [`COMMAND_LOCK_REGISTER`].
pub const COMMAND_UNLOCK: u8 = 0xC5;
/// Interrupt mask register.
pub const INTERRUPT_MASK_REGISTER: u8 = 0xF0;
/// Interrupt status register.
pub const INTERRUPT_STATUS_REGISTER: u8 = 0xF1;
/// Reads back twice the configured 7-bit bus address.
pub const ID_REGISTER: u8 = 0xFC;

/// Configuration register on the function page.
pub const CONFIGURATION_REGISTER: u8 = 0x00;
/// Global current control register on the function page.
pub const GLOBAL_CURRENT_REGISTER: u8 = 0x01;
/// Pull-up/pull-down resistor selection on the function page.
pub const PULL_RESISTOR_REGISTER: u8 = 0x02;
/// Writing [`RESET_VALUE`] here restores every register to its power-on value.
pub const RESET_REGISTER: u8 = 0x3F;
/// Reset trigger value for [`RESET_REGISTER`].
pub const RESET_VALUE: u8 = 0xAE;

/// Number of LEDs addressed on the lower page of a PWM or scaling pair.
pub const LOWER_PAGE_LEDS: usize = 180;
/// Number of LEDs addressed on the upper page of a PWM or scaling pair.
pub const UPPER_PAGE_LEDS: usize = LED_COUNT - LOWER_PAGE_LEDS;

/// One of the five register pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Page {
    /// PWM registers for LEDs 0-179
    Pwm0 = 0,
    /// PWM registers for LEDs 180-350
    Pwm1 = 1,
    /// Scaling registers for LEDs 0-179
    Scaling0 = 2,
    /// Scaling registers for LEDs 180-350
    Scaling1 = 3,
    /// Function registers
    Function = 4,
}

impl Page {
    /// Number of per-LED registers on this page. Zero for the function page.
    #[must_use]
    pub const fn led_count(self) -> usize {
        match self {
            Page::Pwm0 | Page::Scaling0 => LOWER_PAGE_LEDS,
            Page::Pwm1 | Page::Scaling1 => UPPER_PAGE_LEDS,
            Page::Function => 0,
        }
    }
}

impl TryFrom<u8> for Page {
    type Error = u8;

    fn try_from(page: u8) -> Result<Self, Self::Error> {
        match page {
            0 => Ok(Page::Pwm0),
            1 => Ok(Page::Pwm1),
            2 => Ok(Page::Scaling0),
            3 => Ok(Page::Scaling1),
            4 => Ok(Page::Function),
            _ => Err(page),
        }
    }
}

/// A pair of pages holding one byte per LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    /// PWM duty cycle, pages 0 and 1
    Pwm,
    /// Per-LED current scaling, pages 2 and 3
    Scaling,
}

impl Bank {
    /// The lower and upper page of this bank.
    #[must_use]
    pub const fn pages(self) -> [Page; 2] {
        match self {
            Bank::Pwm => [Page::Pwm0, Page::Pwm1],
            Bank::Scaling => [Page::Scaling0, Page::Scaling1],
        }
    }

    /// Resolve an LED index to its page and in-page register address.
    ///
    /// Returns `None` for indices past the last LED.
    #[must_use]
    pub const fn locate(self, led: u16) -> Option<(Page, u8)> {
        let [lower, upper] = self.pages();
        let led = led as usize;
        if led < LOWER_PAGE_LEDS {
            Some((lower, led as u8))
        } else if led < LED_COUNT {
            Some((upper, (led - LOWER_PAGE_LEDS) as u8))
        } else {
            None
        }
    }
}

bitfield! {
    /// Configuration register (function page, 0x00).
    ///
    /// The bit layout is as follows:
    /// - Bits 7-4: SW pin setting (SWS)
    /// - Bit 3: Logic level control (LGC)
    /// - Bits 2-1: Open/short detection enable (OSDE)
    /// - Bit 0: Software shutdown control (SSD), set for normal operation
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct Configuration(u8);
    impl Debug;
    pub sw_setting, set_sw_setting: 7, 4;
    pub logic_level, set_logic_level: 3;
    pub open_short_detect, set_open_short_detect: 2, 1;
    pub normal_operation, set_normal_operation: 0;
}

impl Configuration {
    /// Power-on value: shut down, all other fields zero.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Wrap a raw register value.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw register value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

bitfield! {
    /// Pull-up/pull-down resistor register (function page, 0x02).
    ///
    /// Both fields take a 3-bit resistor code, 0 meaning no resistor.
    /// - Bits 6-4: SWy pull-up resistor (PUR)
    /// - Bits 2-0: CSx pull-down resistor (PDR)
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    #[repr(transparent)]
    pub struct PullResistors(u8);
    impl Debug;
    pub pull_up, set_pull_up: 6, 4;
    pub pull_down, set_pull_down: 2, 0;
}

impl PullResistors {
    /// No resistors selected.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Wrap a raw register value.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw register value.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Configuration {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Configuration({=u8:#04x})", self.0);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PullResistors {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PullResistors({=u8:#04x})", self.0);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_page_try_from() {
        assert_eq!(Page::try_from(0), Ok(Page::Pwm0));
        assert_eq!(Page::try_from(1), Ok(Page::Pwm1));
        assert_eq!(Page::try_from(2), Ok(Page::Scaling0));
        assert_eq!(Page::try_from(3), Ok(Page::Scaling1));
        assert_eq!(Page::try_from(4), Ok(Page::Function));
        assert_eq!(Page::try_from(5), Err(5));
        assert_eq!(Page::try_from(0xFF), Err(0xFF));
    }

    #[test]
    fn test_page_led_count() {
        assert_eq!(Page::Pwm0.led_count(), 180);
        assert_eq!(Page::Pwm1.led_count(), 171);
        assert_eq!(Page::Scaling0.led_count(), 180);
        assert_eq!(Page::Scaling1.led_count(), 171);
        assert_eq!(Page::Function.led_count(), 0);
        assert_eq!(LOWER_PAGE_LEDS + UPPER_PAGE_LEDS, LED_COUNT);
    }

    #[test]
    fn test_locate_every_led() {
        for led in 0..LED_COUNT as u16 {
            let (page, addr) = Bank::Pwm.locate(led).unwrap();
            if led < 180 {
                assert_eq!(page, Page::Pwm0);
                assert_eq!(u16::from(addr), led);
            } else {
                assert_eq!(page, Page::Pwm1);
                assert_eq!(u16::from(addr), led - 180);
            }

            let (page, addr) = Bank::Scaling.locate(led).unwrap();
            if led < 180 {
                assert_eq!(page, Page::Scaling0);
                assert_eq!(u16::from(addr), led);
            } else {
                assert_eq!(page, Page::Scaling1);
                assert_eq!(u16::from(addr), led - 180);
            }
        }
    }

    #[test]
    fn test_locate_out_of_range() {
        assert_eq!(Bank::Pwm.locate(351), None);
        assert_eq!(Bank::Scaling.locate(351), None);
        assert_eq!(Bank::Pwm.locate(u16::MAX), None);
    }

    #[test]
    fn test_configuration_fields() {
        let mut config = Configuration::new();
        assert_eq!(config.bits(), 0);
        assert!(!config.normal_operation());

        config.set_normal_operation(true);
        assert_eq!(config.bits(), 0b0000_0001);

        config.set_open_short_detect(0b11);
        assert_eq!(config.bits(), 0b0000_0111);
        assert_eq!(config.open_short_detect(), 0b11);

        config.set_logic_level(true);
        assert_eq!(config.bits(), 0b0000_1111);

        config.set_sw_setting(0b1001);
        assert_eq!(config.bits(), 0b1001_1111);
        assert_eq!(config.sw_setting(), 0b1001);
        assert!(config.normal_operation());
    }

    #[test]
    fn test_configuration_shutdown_bit_isolation() {
        let mut config = Configuration::from_bits(0xF0);
        config.set_normal_operation(true);
        assert_eq!(config.bits(), 0xF1);
        config.set_normal_operation(false);
        assert_eq!(config.bits(), 0xF0);
    }

    #[test]
    fn test_pull_resistors_fields() {
        let mut pull = PullResistors::new();
        pull.set_pull_up(0b101);
        pull.set_pull_down(0b011);
        assert_eq!(pull.bits(), 0b0101_0011);
        assert_eq!(pull.pull_up(), 0b101);
        assert_eq!(pull.pull_down(), 0b011);
        assert_eq!(PullResistors::from_bits(0x77).pull_up(), 7);
    }
}
