//! Handles admission requests.

use embassy_time::Timer;
use occupancy_core::indicators::LedPattern;
use occupancy_core::room::AdmitOutcome;
use occupancy_core::tones;
use occupancy_core::view::{self, Notice};

use crate::room::dwell_duration;
use crate::runtime::{AnnunciatorMutex, PanelMutex, ROOM};

#[embassy_executor::task]
pub async fn run(panel: &'static PanelMutex, annunciator: &'static AnnunciatorMutex) {
    loop {
        super::ENTRY_REQUESTED.wait().await;

        let (outcome, snapshot) = {
            let mut room = ROOM.lock().await;
            let outcome = room.admit();
            (outcome, room.snapshot())
        };

        match outcome {
            AdmitOutcome::Admitted => {
                defmt::info!(
                    "entry admitted: {}/{}",
                    snapshot.current(),
                    snapshot.capacity()
                );
                {
                    let mut annunciator = annunciator.lock().await;
                    annunciator.leds.apply(snapshot.led_pattern());
                    annunciator.buzzer.play(tones::ADMITTED).await;
                }
                let mut panel = panel.lock().await;
                if let Err(err) = view::render_status(&mut *panel, &snapshot) {
                    defmt::warn!("status render failed: {}", err);
                }
            }
            AdmitOutcome::Full => {
                defmt::info!("entry rejected, room full at {}", snapshot.capacity());
                {
                    let mut annunciator = annunciator.lock().await;
                    annunciator.leds.apply(LedPattern::ALERT);
                    annunciator.buzzer.play(tones::REJECTED_FULL).await;
                }
                {
                    // Hold the panel lock across the dwell so the notice
                    // cannot be overdrawn mid-display.
                    let mut panel = panel.lock().await;
                    if let Err(err) = view::render_notice(&mut *panel, &Notice::ROOM_FULL) {
                        defmt::warn!("notice render failed: {}", err);
                    }
                    Timer::after(dwell_duration(Notice::ROOM_FULL.dwell)).await;
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
