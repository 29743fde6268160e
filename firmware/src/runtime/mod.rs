//! Task wiring and board bring-up.

use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;

use occupancy_core::room::RoomLedger;
use occupancy_core::view;

use crate::config;
use crate::hw::{Annunciator, Buzzer, LedBank, Ssd1306Panel};
use crate::room::{LedgerMutex, RequestSignal, SharedMutex};

mod entry_task;
mod exit_task;
mod heartbeat_task;
mod input_task;
mod reset_task;

pub(crate) type PanelMutex = SharedMutex<Ssd1306Panel>;
pub(crate) type AnnunciatorMutex = SharedMutex<Annunciator>;

pub(crate) static ENTRY_REQUESTED: RequestSignal = RequestSignal::new();
pub(crate) static EXIT_REQUESTED: RequestSignal = RequestSignal::new();
pub(crate) static RESET_REQUESTED: RequestSignal = RequestSignal::new();

pub(crate) static ROOM: LedgerMutex = Mutex::new(RoomLedger::new(config::ROOM_CAPACITY));

static PANEL: StaticCell<PanelMutex> = StaticCell::new();
static ANNUNCIATOR: StaticCell<AnnunciatorMutex> = StaticCell::new();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    defmt::info!(
        "occupancy controller starting, capacity {}",
        config::ROOM_CAPACITY
    );

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config::DISPLAY_I2C_HZ;
    let bus = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    let mut panel = Ssd1306Panel::new(bus);
    if let Err(err) = panel.init() {
        defmt::warn!("display init failed: {}", err);
    }

    let mut leds = LedBank::new(
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
    );
    let buzzer = Buzzer::new(Output::new(p.PIN_10, Level::Low));

    // Paint the empty-room state before any button can fire.
    let snapshot = ROOM.lock().await.snapshot();
    leds.apply(snapshot.led_pattern());
    if let Err(err) = view::render_status(&mut panel, &snapshot) {
        defmt::warn!("initial status render failed: {}", err);
    }

    let panel = PANEL.init(Mutex::new(panel));
    let annunciator = ANNUNCIATOR.init(Mutex::new(Annunciator { leds, buzzer }));

    let entry_button = Input::new(p.PIN_5, Pull::Up);
    let exit_button = Input::new(p.PIN_6, Pull::Up);
    let reset_button = Input::new(p.PIN_22, Pull::Up);

    spawner
        .spawn(input_task::run(entry_button, exit_button, reset_button))
        .expect("failed to spawn input task");
    spawner
        .spawn(entry_task::run(panel, annunciator))
        .expect("failed to spawn entry task");
    spawner
        .spawn(exit_task::run(panel, annunciator))
        .expect("failed to spawn exit task");
    spawner
        .spawn(reset_task::run(panel, annunciator))
        .expect("failed to spawn reset task");
    spawner
        .spawn(heartbeat_task::run(Output::new(p.PIN_25, Level::Low)))
        .expect("failed to spawn heartbeat task");

    core::future::pending::<()>().await;
}
