//! Shared synchronization surface bridging firmware tasks with
//! `occupancy-core`.

#![cfg_attr(not(target_os = "none"), allow(dead_code))]

#[cfg(not(target_os = "none"))]
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
#[cfg(target_os = "none")]
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use occupancy_core::room::RoomLedger;

#[cfg(target_os = "none")]
type RoomMutex = ThreadModeRawMutex;
#[cfg(not(target_os = "none"))]
type RoomMutex = NoopRawMutex;

/// One-slot wakeup flag from the input task to a worker task.
///
/// Signals collapse: edges accepted while the worker is busy coalesce into a
/// single pending request.
pub type RequestSignal = Signal<RoomMutex, ()>;

/// The occupancy ledger behind the lock every worker takes before touching
/// the count or the slot pool.
pub type LedgerMutex = Mutex<RoomMutex, RoomLedger>;

/// Generic mutex over the room's raw mutex flavor, used for the display and
/// the annunciator hardware.
pub type SharedMutex<T> = Mutex<RoomMutex, T>;

/// Converts a portable dwell duration into the executor's tick-based one,
/// saturating rather than overflowing.
pub fn dwell_duration(dwell: core::time::Duration) -> embassy_time::Duration {
    let millis = u64::try_from(dwell.as_millis()).unwrap_or(u64::MAX);
    embassy_time::Duration::from_millis(millis)
}
