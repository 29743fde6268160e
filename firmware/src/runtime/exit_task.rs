//! Handles departure requests.

use embassy_time::Timer;
use occupancy_core::indicators::LedPattern;
use occupancy_core::room::DepartOutcome;
use occupancy_core::tones;
use occupancy_core::view::{self, Notice};

use crate::room::dwell_duration;
use crate::runtime::{AnnunciatorMutex, PanelMutex, ROOM};

#[embassy_executor::task]
pub async fn run(panel: &'static PanelMutex, annunciator: &'static AnnunciatorMutex) {
    loop {
        super::EXIT_REQUESTED.wait().await;

        let (outcome, snapshot) = {
            let mut room = ROOM.lock().await;
            let outcome = room.depart();
            (outcome, room.snapshot())
        };

        match outcome {
            DepartOutcome::Departed => {
                defmt::info!(
                    "exit recorded: {}/{}",
                    snapshot.current(),
                    snapshot.capacity()
                );
                {
                    let mut annunciator = annunciator.lock().await;
                    annunciator.leds.apply(snapshot.led_pattern());
                    annunciator.buzzer.play(tones::DEPARTED).await;
                }
                let mut panel = panel.lock().await;
                if let Err(err) = view::render_status(&mut *panel, &snapshot) {
                    defmt::warn!("status render failed: {}", err);
                }
            }
            DepartOutcome::Empty => {
                defmt::info!("exit ignored, room already empty");
                {
                    let mut annunciator = annunciator.lock().await;
                    annunciator.leds.apply(LedPattern::ALERT);
                    annunciator.buzzer.play(tones::INVALID_EXIT).await;
                }
                {
                    // Hold the panel lock across the dwell so the notice
                    // cannot be overdrawn mid-display.
                    let mut panel = panel.lock().await;
                    if let Err(err) = view::render_notice(&mut *panel, &Notice::ROOM_EMPTY) {
                        defmt::warn!("notice render failed: {}", err);
                    }
                    Timer::after(dwell_duration(Notice::ROOM_EMPTY.dwell)).await;
                    if let Err(err) = view::render_status(&mut *panel, &snapshot) {
                        defmt::warn!("status render failed: {}", err);
                    }
                }
                let mut annunciator = annunciator.lock().await;
                annunciator.leds.apply(snapshot.led_pattern());
            }
        }
    }
}
