//! Handles forced resets from the operator button.

use embassy_time::Timer;
use occupancy_core::tones;
use occupancy_core::view::{self, Notice};

use crate::room::dwell_duration;
use crate::runtime::{AnnunciatorMutex, PanelMutex, ROOM};

#[embassy_executor::task]
pub async fn run(panel: &'static PanelMutex, annunciator: &'static AnnunciatorMutex) {
    loop {
        super::RESET_REQUESTED.wait().await;

        let (summary, snapshot) = {
            let mut room = ROOM.lock().await;
            let summary = room.reset();
            (summary, room.snapshot())
        };

        defmt::info!(
            "reset: cleared {} occupants, released {} slots",
            summary.occupants_cleared,
            summary.slots_released
        );

        {
            let mut annunciator = annunciator.lock().await;
            annunciator.leds.apply(snapshot.led_pattern());
            annunciator.buzzer.play(tones::RESET_CHIME).await;
        }

        let mut panel = panel.lock().await;
        if let Err(err) = view::render_notice(&mut *panel, &Notice::RESETTING) {
            defmt::warn!("notice render failed: {}", err);
        }
        Timer::after(dwell_duration(Notice::RESETTING.dwell)).await;
        if let Err(err) = view::render_status(&mut *panel, &snapshot) {
            defmt::warn!("status render failed: {}", err);
        }
    }
}
