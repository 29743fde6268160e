//! Piezo buzzer driven by bit-banged square waves.

use embassy_rp::gpio::Output;
use embassy_time::Timer;
use occupancy_core::tones::ToneRequest;

pub struct Buzzer {
    pin: Output<'static>,
}

impl Buzzer {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }

    /// Plays one tone to completion. Rests just sleep with the pin low.
    pub async fn play(&mut self, tone: ToneRequest) {
        if tone.is_rest() {
            Timer::after_millis(u64::from(tone.duration_ms)).await;
            return;
        }

        let half_period_us = 500_000 / u64::from(tone.frequency_hz);
        let cycles = u64::from(tone.frequency_hz) * u64::from(tone.duration_ms) / 1000;
        for _ in 0..cycles {
            self.pin.set_high();
            Timer::after_micros(half_period_us).await;
            self.pin.set_low();
            Timer::after_micros(half_period_us).await;
        }
        self.pin.set_low();
    }
}
