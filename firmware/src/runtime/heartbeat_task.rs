//! Blinks the onboard LED so a wedged board is obvious at a glance.

use embassy_rp::gpio::Output;
use embassy_time::Timer;

use crate::config;

#[embassy_executor::task]
pub async fn run(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after_millis(config::HEARTBEAT_ON_MS).await;
        led.set_low();
        Timer::after_millis(config::HEARTBEAT_OFF_MS).await;
    }
}
