//! Direct, unbuffered access to the IS31FL3741.
//!
//! Every call results in one or more I²C transactions. The driver caches the
//! selected register page so that consecutive writes to the same page skip
//! the unlock and page-select round trip.
//!
//! # Example
//! ```rust,no_run
//! use is31fl3741::driver::Is31fl3741;
//! # fn run<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), is31fl3741::Error<I2C::Error>> {
//! let mut leds = Is31fl3741::new(i2c);
//! leds.init()?;
//! leds.set_global_current(0xFF)?;
//! leds.enable(true)?;
//! leds.set_all_led_scaling(0xFF)?;
//! leds.set_led_pwm(0, 0x80)?;
//! # Ok(())
//! # }
//! ```

use embedded_hal::i2c::I2c;

use crate::registers::{
    Bank, Configuration, Page, PullResistors, COMMAND_LOCK_REGISTER, COMMAND_REGISTER,
    COMMAND_UNLOCK, CONFIGURATION_REGISTER, GLOBAL_CURRENT_REGISTER, ID_REGISTER,
    LOWER_PAGE_LEDS, PULL_RESISTOR_REGISTER, RESET_REGISTER, RESET_VALUE,
};
use crate::{Error, LedSink};

/// Factory default 7-bit address (ADDR pin to GND)
pub const DEFAULT_ADDRESS: u8 = 0x30;

/// Default largest I²C write, in bytes, including the register address
pub const DEFAULT_MAX_TRANSFER: usize = 32;

/// Largest payload ever sent in one write: a full lower page.
const MAX_CHUNK: usize = LOWER_PAGE_LEDS;

/// IS31FL3741 driver writing straight to the device.
pub struct Is31fl3741<I2C> {
    i2c: I2C,
    address: u8,
    /// Last page selected on the device, `None` when unknown
    page: Option<Page>,
    max_transfer: usize,
}

impl<I2C: I2c> Is31fl3741<I2C> {
    /// Create a driver for a chip at [`DEFAULT_ADDRESS`].
    ///
    /// No bus traffic happens until [`Self::init`] is called.
    pub fn new(i2c: I2C) -> Self {
        Self::new_with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a driver for a chip at the given 7-bit address.
    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            page: None,
            max_transfer: DEFAULT_MAX_TRANSFER,
        }
    }

    /// The 7-bit bus address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Access the underlying bus.
    pub fn i2c(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Give back the underlying bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Largest write the bus accepts in one transaction, register address
    /// included. Clamped to 2..=181; bulk writes send `bytes - 1` LED values
    /// per transaction.
    pub fn set_max_transfer(&mut self, bytes: usize) {
        self.max_transfer = bytes.clamp(2, MAX_CHUNK + 1);
    }

    /// Largest write per transaction, register address included.
    pub fn max_transfer(&self) -> usize {
        self.max_transfer
    }

    /// The page the driver believes is selected, `None` if unknown.
    pub fn page(&self) -> Option<Page> {
        self.page
    }

    /// Forget the cached page, forcing the next access to reselect it.
    ///
    /// Call this after the chip lost power or the bus was reconnected.
    pub fn invalidate_page(&mut self) {
        self.page = None;
    }

    /// Check the chip identity and perform a software reset.
    ///
    /// # Errors
    ///
    /// [`Error::WrongDevice`] when the ID register does not read back twice
    /// the bus address, [`Error::I2c`] on bus failure.
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        self.page = None;

        let expected = self.address << 1;
        let found = self.read_id()?;
        if found != expected {
            #[cfg(feature = "defmt")]
            defmt::debug!("is31fl3741: id {=u8:#x}, expected {=u8:#x}", found, expected);
            return Err(Error::WrongDevice { found, expected });
        }

        self.reset()?;
        #[cfg(feature = "defmt")]
        defmt::debug!("is31fl3741: initialized at {=u8:#x}", self.address);
        Ok(())
    }

    /// Read the raw ID register. Accessible from any page.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn read_id(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_register(ID_REGISTER)
    }

    /// Software reset, restoring every register to its power-on value.
    ///
    /// The chip comes back on page 0 with all LEDs off and in shutdown.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.select_page(Page::Function)?;
        self.write_register(RESET_REGISTER, RESET_VALUE)?;
        self.page = Some(Page::Pwm0);
        #[cfg(feature = "defmt")]
        defmt::debug!("is31fl3741: reset");
        Ok(())
    }

    /// Allow the next write to the command register.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn unlock(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_register(COMMAND_LOCK_REGISTER, COMMAND_UNLOCK)
    }

    /// Switch the register page, skipping the bus entirely if it is already
    /// selected.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure; the page cache is left unknown.
    pub fn select_page(&mut self, page: Page) -> Result<(), Error<I2C::Error>> {
        if self.page == Some(page) {
            return Ok(());
        }

        self.page = None;
        self.unlock()?;
        self.write_register(COMMAND_REGISTER, page as u8)?;
        self.page = Some(page);
        #[cfg(feature = "defmt")]
        defmt::trace!("is31fl3741: page {}", page);
        Ok(())
    }

    /// [`Self::select_page`] for a raw page number.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPage`] for pages above 4, without touching the bus.
    pub fn select_page_number(&mut self, page: u8) -> Result<(), Error<I2C::Error>> {
        let page = Page::try_from(page).map_err(Error::InvalidPage)?;
        self.select_page(page)
    }

    /// Set or clear the software shutdown bit. `true` enables the outputs.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn enable(&mut self, enable: bool) -> Result<(), Error<I2C::Error>> {
        let mut config = self.configuration()?;
        config.set_normal_operation(enable);
        self.set_configuration(config)
    }

    /// Read the configuration register.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn configuration(&mut self) -> Result<Configuration, Error<I2C::Error>> {
        self.select_page(Page::Function)?;
        self.read_register(CONFIGURATION_REGISTER)
            .map(Configuration::from_bits)
    }

    /// Write the configuration register.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn set_configuration(&mut self, config: Configuration) -> Result<(), Error<I2C::Error>> {
        self.select_page(Page::Function)?;
        self.write_register(CONFIGURATION_REGISTER, config.bits())
    }

    /// Read the pull-up/pull-down resistor selection.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn pull_resistors(&mut self) -> Result<PullResistors, Error<I2C::Error>> {
        self.select_page(Page::Function)?;
        self.read_register(PULL_RESISTOR_REGISTER)
            .map(PullResistors::from_bits)
    }

    /// Write the pull-up/pull-down resistor selection.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn set_pull_resistors(&mut self, pull: PullResistors) -> Result<(), Error<I2C::Error>> {
        self.select_page(Page::Function)?;
        self.write_register(PULL_RESISTOR_REGISTER, pull.bits())
    }

    /// Set the global current from 0 (off) to 255 (brightest).
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn set_global_current(&mut self, current: u8) -> Result<(), Error<I2C::Error>> {
        self.select_page(Page::Function)?;
        self.write_register(GLOBAL_CURRENT_REGISTER, current)
    }

    /// Read the global current.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn global_current(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.select_page(Page::Function)?;
        self.read_register(GLOBAL_CURRENT_REGISTER)
    }

    /// Set the PWM duty cycle of one LED channel. No rotation or pixel
    /// mapping is applied.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLed`] for `led` above 350, without touching the bus.
    /// [`Error::I2c`] on bus failure.
    pub fn set_led_pwm(&mut self, led: u16, pwm: u8) -> Result<(), Error<I2C::Error>> {
        self.write_led(Bank::Pwm, led, pwm)
    }

    /// Set the current scaling of one LED channel.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLed`] for `led` above 350, without touching the bus.
    /// [`Error::I2c`] on bus failure.
    pub fn set_led_scaling(&mut self, led: u16, scale: u8) -> Result<(), Error<I2C::Error>> {
        self.write_led(Bank::Scaling, led, scale)
    }

    /// Set every LED's PWM to the same value. `fill(0)` clears the display.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure; LEDs after the failing chunk keep
    /// their previous value.
    pub fn fill(&mut self, pwm: u8) -> Result<(), Error<I2C::Error>> {
        self.write_bank(Bank::Pwm, pwm)
    }

    /// Set every LED's current scaling to the same value.
    ///
    /// # Errors
    ///
    /// [`Error::I2c`] on bus failure.
    pub fn set_all_led_scaling(&mut self, scale: u8) -> Result<(), Error<I2C::Error>> {
        self.write_bank(Bank::Scaling, scale)
    }

    /// Write consecutive registers of one page starting at register 0.
    ///
    /// The data is split into transactions of at most `max_transfer - 1`
    /// values, each prefixed with its starting register address.
    pub(crate) fn write_page(&mut self, page: Page, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        self.select_page(page)?;

        let chunk_len = self.max_transfer - 1;
        let mut tx = [0u8; MAX_CHUNK + 1];
        let mut addr = 0;
        for chunk in data.chunks(chunk_len) {
            tx[0] = addr as u8;
            tx[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &tx[..=chunk.len()])
                .map_err(Error::I2c)?;
            addr += chunk.len();
        }
        Ok(())
    }

    fn write_bank(&mut self, bank: Bank, value: u8) -> Result<(), Error<I2C::Error>> {
        let values = [value; MAX_CHUNK];
        for page in bank.pages() {
            self.write_page(page, &values[..page.led_count()])?;
        }
        Ok(())
    }

    fn write_led(&mut self, bank: Bank, led: u16, value: u8) -> Result<(), Error<I2C::Error>> {
        let (page, addr) = bank.locate(led).ok_or(Error::InvalidLed(led))?;
        self.select_page(page)?;
        self.write_register(addr, value)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(Error::I2c)
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Error<I2C::Error>> {
        let mut value = [0u8];
        self.i2c
            .write_read(self.address, &[register], &mut value)
            .map_err(Error::I2c)?;
        Ok(value[0])
    }
}

impl<I2C: I2c> LedSink for Is31fl3741<I2C> {
    type BusError = I2C::Error;

    fn set_led(&mut self, led: u16, pwm: u8) -> Result<(), Error<Self::BusError>> {
        self.set_led_pwm(led, pwm)
    }
}

impl<I2C> core::fmt::Debug for Is31fl3741<I2C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Is31fl3741")
            .field("address", &self.address)
            .field("page", &self.page)
            .field("max_transfer", &self.max_transfer)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl<I2C> defmt::Format for Is31fl3741<I2C> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Is31fl3741 {{ address: {=u8:#x}, page: {}, max_transfer: {} }}",
            self.address,
            self.page,
            self.max_transfer
        );
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;
    use std::vec;
    use std::vec::Vec;

    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = DEFAULT_ADDRESS;

    fn page_switch(page: u8) -> [I2cTransaction; 2] {
        [
            I2cTransaction::write(ADDR, vec![COMMAND_LOCK_REGISTER, COMMAND_UNLOCK]),
            I2cTransaction::write(ADDR, vec![COMMAND_REGISTER, page]),
        ]
    }

    /// Expected chunked writes of `len` copies of `value`.
    fn chunked(value: u8, len: usize, chunk: usize) -> Vec<I2cTransaction> {
        let mut out = Vec::new();
        let mut start = 0;
        while start < len {
            let n = chunk.min(len - start);
            let mut bytes = vec![start as u8];
            bytes.extend(core::iter::repeat(value).take(n));
            out.push(I2cTransaction::write(ADDR, bytes));
            start += n;
        }
        out
    }

    #[test]
    fn test_new_does_not_touch_bus() {
        let driver = Is31fl3741::new(I2cMock::new(&[]));
        assert_eq!(driver.address(), 0x30);
        assert_eq!(driver.page(), None);
        assert_eq!(driver.max_transfer(), DEFAULT_MAX_TRANSFER);
        driver.release().done();
    }

    #[test]
    fn test_init_checks_id_and_resets() {
        let mut expectations = vec![I2cTransaction::write_read(ADDR, vec![ID_REGISTER], vec![0x60])];
        expectations.extend(page_switch(4));
        expectations.push(I2cTransaction::write(ADDR, vec![RESET_REGISTER, RESET_VALUE]));
        // after reset the chip is back on page 0, no switch needed
        expectations.push(I2cTransaction::write(ADDR, vec![5, 0x11]));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        driver.init().unwrap();
        assert_eq!(driver.page(), Some(Page::Pwm0));
        driver.set_led_pwm(5, 0x11).unwrap();
        driver.release().done();
    }

    #[test]
    fn test_init_custom_address() {
        let expectations = [
            I2cTransaction::write_read(0x33, vec![ID_REGISTER], vec![0x66]),
            I2cTransaction::write(0x33, vec![COMMAND_LOCK_REGISTER, COMMAND_UNLOCK]),
            I2cTransaction::write(0x33, vec![COMMAND_REGISTER, 4]),
            I2cTransaction::write(0x33, vec![RESET_REGISTER, RESET_VALUE]),
        ];
        let mut driver = Is31fl3741::new_with_address(I2cMock::new(&expectations), 0x33);
        driver.init().unwrap();
        driver.release().done();
    }

    #[test]
    fn test_init_wrong_device() {
        let expectations = [I2cTransaction::write_read(ADDR, vec![ID_REGISTER], vec![0x00])];
        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        assert_eq!(
            driver.init(),
            Err(Error::WrongDevice {
                found: 0x00,
                expected: 0x60
            })
        );
        driver.release().done();
    }

    #[test]
    fn test_init_bus_failure() {
        let expectations = [
            I2cTransaction::write_read(ADDR, vec![ID_REGISTER], vec![0x00]).with_error(ErrorKind::Other),
        ];
        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        assert_eq!(driver.init(), Err(Error::I2c(ErrorKind::Other)));
        assert_eq!(driver.page(), None);
        driver.release().done();
    }

    #[test]
    fn test_select_page_caches() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(2));
        expectations.extend(page_switch(4));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        driver.select_page(Page::Scaling0).unwrap();
        driver.select_page(Page::Scaling0).unwrap();
        driver.select_page(Page::Function).unwrap();
        driver.select_page(Page::Function).unwrap();
        assert_eq!(driver.page(), Some(Page::Function));
        driver.release().done();
    }

    #[test]
    fn test_select_page_number_rejects_invalid() {
        let mut driver = Is31fl3741::new(I2cMock::new(&page_switch(3)));
        assert_eq!(driver.select_page_number(5), Err(Error::InvalidPage(5)));
        driver.select_page_number(3).unwrap();
        assert_eq!(driver.page(), Some(Page::Scaling1));
        driver.release().done();
    }

    #[test]
    fn test_failed_page_switch_invalidates_cache() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![COMMAND_LOCK_REGISTER, COMMAND_UNLOCK]),
            I2cTransaction::write(ADDR, vec![COMMAND_REGISTER, 1]).with_error(ErrorKind::Other),
            I2cTransaction::write(ADDR, vec![COMMAND_LOCK_REGISTER, COMMAND_UNLOCK]),
            I2cTransaction::write(ADDR, vec![COMMAND_REGISTER, 1]),
        ];
        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        assert_eq!(driver.select_page(Page::Pwm1), Err(Error::I2c(ErrorKind::Other)));
        assert_eq!(driver.page(), None);
        driver.select_page(Page::Pwm1).unwrap();
        driver.release().done();
    }

    #[test]
    fn test_invalidate_page_forces_reselect() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(0));
        expectations.extend(page_switch(0));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        driver.select_page(Page::Pwm0).unwrap();
        driver.invalidate_page();
        driver.select_page(Page::Pwm0).unwrap();
        driver.release().done();
    }

    #[test]
    fn test_set_led_pwm_page_split() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(0));
        expectations.push(I2cTransaction::write(ADDR, vec![0, 10]));
        expectations.push(I2cTransaction::write(ADDR, vec![179, 11]));
        expectations.extend(page_switch(1));
        expectations.push(I2cTransaction::write(ADDR, vec![0, 12]));
        expectations.push(I2cTransaction::write(ADDR, vec![170, 13]));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        driver.set_led_pwm(0, 10).unwrap();
        driver.set_led_pwm(179, 11).unwrap();
        driver.set_led_pwm(180, 12).unwrap();
        driver.set_led_pwm(350, 13).unwrap();
        driver.release().done();
    }

    #[test]
    fn test_set_led_pwm_out_of_range() {
        let mut driver = Is31fl3741::new(I2cMock::new(&[]));
        assert_eq!(driver.set_led_pwm(351, 1), Err(Error::InvalidLed(351)));
        assert_eq!(driver.set_led_pwm(u16::MAX, 1), Err(Error::InvalidLed(u16::MAX)));
        assert_eq!(driver.set_led_scaling(351, 1), Err(Error::InvalidLed(351)));
        assert_eq!(driver.page(), None);
        driver.release().done();
    }

    #[test]
    fn test_set_led_scaling_page_split() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(3));
        expectations.push(I2cTransaction::write(ADDR, vec![20, 0xFF]));
        expectations.extend(page_switch(2));
        expectations.push(I2cTransaction::write(ADDR, vec![20, 0x80]));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        driver.set_led_scaling(200, 0xFF).unwrap();
        driver.set_led_scaling(20, 0x80).unwrap();
        driver.release().done();
    }

    #[test]
    fn test_led_sink_writes_pwm() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(1));
        expectations.push(I2cTransaction::write(ADDR, vec![1, 0x42]));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        driver.set_led(181, 0x42).unwrap();
        driver.release().done();
    }

    #[test]
    fn test_fill_chunks_both_pages() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(0));
        expectations.extend(chunked(0x55, 180, 31));
        expectations.extend(page_switch(1));
        expectations.extend(chunked(0x55, 171, 31));
        // 6 chunks per page, the last ones 25 and 16 bytes long
        assert_eq!(expectations.len(), 16);

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        driver.fill(0x55).unwrap();
        driver.release().done();
    }

    #[test]
    fn test_set_all_led_scaling_with_large_transfers() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(2));
        expectations.extend(chunked(0xFF, 180, 180));
        expectations.extend(page_switch(3));
        expectations.extend(chunked(0xFF, 171, 180));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        driver.set_max_transfer(256);
        assert_eq!(driver.max_transfer(), 181);
        driver.set_all_led_scaling(0xFF).unwrap();
        driver.release().done();
    }

    #[test]
    fn test_fill_stops_on_failure() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(0));
        let mut first = vec![0u8];
        first.extend([0u8; 31]);
        expectations.push(I2cTransaction::write(ADDR, first).with_error(ErrorKind::Other));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        assert_eq!(driver.fill(0), Err(Error::I2c(ErrorKind::Other)));
        driver.release().done();
    }

    #[test]
    fn test_max_transfer_clamped() {
        let mut driver = Is31fl3741::new(I2cMock::new(&[]));
        driver.set_max_transfer(0);
        assert_eq!(driver.max_transfer(), 2);
        driver.set_max_transfer(16);
        assert_eq!(driver.max_transfer(), 16);
        driver.release().done();
    }

    #[test]
    fn test_enable_read_modify_write() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(4));
        expectations.push(I2cTransaction::write_read(ADDR, vec![CONFIGURATION_REGISTER], vec![0xF0]));
        expectations.push(I2cTransaction::write(ADDR, vec![CONFIGURATION_REGISTER, 0xF1]));
        expectations.push(I2cTransaction::write_read(ADDR, vec![CONFIGURATION_REGISTER], vec![0xF1]));
        expectations.push(I2cTransaction::write(ADDR, vec![CONFIGURATION_REGISTER, 0xF0]));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        driver.enable(true).unwrap();
        driver.enable(false).unwrap();
        driver.release().done();
    }

    #[test]
    fn test_global_current() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(4));
        expectations.push(I2cTransaction::write(ADDR, vec![GLOBAL_CURRENT_REGISTER, 0x7F]));
        expectations.push(I2cTransaction::write_read(ADDR, vec![GLOBAL_CURRENT_REGISTER], vec![0x7F]));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        driver.set_global_current(0x7F).unwrap();
        assert_eq!(driver.global_current().unwrap(), 0x7F);
        driver.release().done();
    }

    #[test]
    fn test_pull_resistors() {
        let mut expectations = Vec::new();
        expectations.extend(page_switch(4));
        expectations.push(I2cTransaction::write(ADDR, vec![PULL_RESISTOR_REGISTER, 0x33]));
        expectations.push(I2cTransaction::write_read(ADDR, vec![PULL_RESISTOR_REGISTER], vec![0x33]));

        let mut driver = Is31fl3741::new(I2cMock::new(&expectations));
        let mut pull = PullResistors::new();
        pull.set_pull_up(3);
        pull.set_pull_down(3);
        driver.set_pull_resistors(pull).unwrap();
        assert_eq!(driver.pull_resistors().unwrap(), pull);
        driver.release().done();
    }

    #[test]
    fn test_debug_output() {
        let driver = Is31fl3741::new(I2cMock::new(&[]));
        let debug = format!("{:?}", driver);
        assert!(debug.contains("address: 48"));
        assert!(debug.contains("page: None"));
        driver.release().done();
    }
}
