//! Sink used by unit tests to observe pixel writes without a bus.

extern crate std;

use std::vec::Vec;

use crate::{Error, LedBuffer, LedSink, LED_COUNT};

/// Records every write in order and mirrors the values.
pub(crate) struct RecordingSink {
    pub writes: Vec<(u16, u8)>,
    pub leds: [u8; LED_COUNT],
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            leds: [0; LED_COUNT],
        }
    }
}

impl LedSink for RecordingSink {
    type BusError = ();

    fn set_led(&mut self, led: u16, pwm: u8) -> Result<(), Error<()>> {
        let slot = self
            .leds
            .get_mut(usize::from(led))
            .ok_or(Error::InvalidLed(led))?;
        *slot = pwm;
        self.writes.push((led, pwm));
        Ok(())
    }
}

impl LedBuffer for RecordingSink {
    fn leds(&self) -> &[u8; LED_COUNT] {
        &self.leds
    }

    fn leds_mut(&mut self) -> &mut [u8; LED_COUNT] {
        &mut self.leds
    }
}
