//! Board wiring and tuning constants.

#![cfg_attr(not(target_os = "none"), allow(dead_code))]

/// Maximum number of simultaneous occupants.
pub const ROOM_CAPACITY: u16 = 15;

/// Minimum spacing between accepted button edges, in microseconds.
pub const DEBOUNCE_MIN_INTERVAL_US: u64 = occupancy_core::debounce::DEFAULT_MIN_INTERVAL_US;

/// I2C bus speed for the OLED panel.
pub const DISPLAY_I2C_HZ: u32 = 400_000;

/// SSD1306 controller address on the shared bus.
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;

/// Heartbeat LED on-time per blink, in milliseconds.
pub const HEARTBEAT_ON_MS: u64 = 100;

/// Heartbeat LED off-time per blink, in milliseconds.
pub const HEARTBEAT_OFF_MS: u64 = 900;
