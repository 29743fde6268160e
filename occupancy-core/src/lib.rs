#![no_std]

// Shared logic for the room occupancy controller.
//
// This crate stays portable across MCU firmware and host tooling by avoiding
// the Rust standard library. Everything with a correctness hazard lives here:
// occupancy accounting, the capacity slot pool, edge debouncing, and the
// mapping from occupancy to indicator/display output.

pub mod debounce;
pub mod indicators;
pub mod room;
pub mod tones;
pub mod view;
