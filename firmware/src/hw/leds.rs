//! Three-color indicator bank.

use embassy_rp::gpio::Output;
use occupancy_core::indicators::LedPattern;

pub struct LedBank {
    red: Output<'static>,
    green: Output<'static>,
    blue: Output<'static>,
}

impl LedBank {
    pub fn new(red: Output<'static>, green: Output<'static>, blue: Output<'static>) -> Self {
        Self { red, green, blue }
    }

    /// Drives all three LEDs to match the pattern.
    pub fn apply(&mut self, pattern: LedPattern) {
        self.red.set_level(pattern.red.into());
        self.green.set_level(pattern.green.into());
        self.blue.set_level(pattern.blue.into());
    }
}
