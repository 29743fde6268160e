//! Samples the three buttons and routes accepted edges to the workers.
//!
//! The buttons are wired active-low with pull-ups, so a press is a falling
//! edge. One debounce filter covers all three lines.

use embassy_futures::select::{Either3, select3};
use embassy_rp::gpio::Input;
use embassy_time::Instant;
use occupancy_core::debounce::{DebounceFilter, RequestLine};

use crate::config;

#[embassy_executor::task]
pub async fn run(
    mut entry: Input<'static>,
    mut exit: Input<'static>,
    mut reset: Input<'static>,
) {
    let mut filter = DebounceFilter::new(config::DEBOUNCE_MIN_INTERVAL_US);

    loop {
        let line = match select3(
            entry.wait_for_falling_edge(),
            exit.wait_for_falling_edge(),
            reset.wait_for_falling_edge(),
        )
        .await
        {
            Either3::First(()) => RequestLine::Entry,
            Either3::Second(()) => RequestLine::Exit,
            Either3::Third(()) => RequestLine::Reset,
        };

        if !filter.accept(Instant::now().as_micros()) {
            defmt::debug!("{} edge discarded as bounce", line.label());
            continue;
        }

        match line {
            RequestLine::Entry => super::ENTRY_REQUESTED.signal(()),
            RequestLine::Exit => super::EXIT_REQUESTED.signal(()),
            RequestLine::Reset => super::RESET_REQUESTED.signal(()),
        }
    }
}
