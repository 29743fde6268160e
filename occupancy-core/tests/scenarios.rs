//! End-to-end exercises of the occupancy ledger and indicator mapping,
//! driven the way the firmware's worker tasks drive them.

use occupancy_core::indicators::OccupancyStatus;
use occupancy_core::room::{AdmitOutcome, DepartOutcome, RoomLedger};
use occupancy_core::tones;
use occupancy_core::view::Notice;

const CAPACITY: u16 = 15;

#[test]
fn room_fills_one_admission_at_a_time() {
    let mut ledger = RoomLedger::new(CAPACITY);

    for expected in 1..=CAPACITY {
        assert_eq!(ledger.admit(), AdmitOutcome::Admitted);
        assert_eq!(ledger.occupancy(), expected);
        assert_eq!(ledger.free_slots(), CAPACITY - expected);
    }

    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.status(), OccupancyStatus::Full);
    assert!(snapshot.led_pattern().red);
    assert!(!snapshot.led_pattern().green);
}

#[test]
fn admission_at_capacity_is_rejected_without_side_effects() {
    let mut ledger = RoomLedger::new(CAPACITY);
    for _ in 0..CAPACITY {
        assert_eq!(ledger.admit(), AdmitOutcome::Admitted);
    }

    let before = ledger.snapshot();
    assert_eq!(ledger.admit(), AdmitOutcome::Full);
    assert_eq!(ledger.snapshot(), before);
    assert_eq!(ledger.occupancy(), CAPACITY);
    assert_eq!(ledger.free_slots(), 0);
}

#[test]
fn departure_from_empty_room_is_rejected_without_side_effects() {
    let mut ledger = RoomLedger::new(CAPACITY);

    let before = ledger.snapshot();
    assert_eq!(ledger.depart(), DepartOutcome::Empty);
    assert_eq!(ledger.snapshot(), before);
    assert_eq!(ledger.occupancy(), 0);
    // A rejected exit must not mint a slot token.
    assert_eq!(ledger.free_slots(), CAPACITY);
}

#[test]
fn reset_from_full_reopens_every_slot() {
    let mut ledger = RoomLedger::new(CAPACITY);
    for _ in 0..CAPACITY {
        let _ = ledger.admit();
    }

    let summary = ledger.reset();
    assert_eq!(summary.occupants_cleared, CAPACITY);
    assert_eq!(summary.slots_released, CAPACITY);
    assert_eq!(ledger.occupancy(), 0);
    assert_eq!(ledger.free_slots(), CAPACITY);

    // The room accepts a full cycle of admissions again.
    for _ in 0..CAPACITY {
        assert_eq!(ledger.admit(), AdmitOutcome::Admitted);
    }
    assert_eq!(ledger.admit(), AdmitOutcome::Full);
}

#[test]
fn reset_partway_is_clamped() {
    let mut ledger = RoomLedger::new(CAPACITY);
    for _ in 0..7 {
        let _ = ledger.admit();
    }

    let summary = ledger.reset();
    assert_eq!(summary.occupants_cleared, 7);
    // Only the outstanding tokens come back; the pool never overfills.
    assert_eq!(summary.slots_released, 7);
    assert_eq!(ledger.free_slots(), CAPACITY);
}

#[test]
fn occupancy_stays_within_bounds_under_a_mixed_workload() {
    let mut ledger = RoomLedger::new(CAPACITY);

    // Deterministic pseudo-random walk of admissions and departures.
    let mut state: u32 = 0x2545_f491;
    for _ in 0..10_000 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;

        match state % 3 {
            0 => {
                let _ = ledger.admit();
            }
            1 => {
                let _ = ledger.depart();
            }
            _ => {
                let _ = ledger.admit();
                let _ = ledger.admit();
            }
        }

        let snapshot = ledger.snapshot();
        assert!(snapshot.current() <= CAPACITY);
        assert_eq!(
            ledger.free_slots(),
            CAPACITY - snapshot.current(),
            "pool out of step with counter"
        );
    }
}

#[test]
fn near_capacity_warning_engages_two_slots_out() {
    let mut ledger = RoomLedger::new(CAPACITY);
    for _ in 0..(CAPACITY - 2) {
        let _ = ledger.admit();
    }

    let snapshot = ledger.snapshot();
    assert_eq!(snapshot.status(), OccupancyStatus::AlmostFull);
    let pattern = snapshot.led_pattern();
    assert!(pattern.green);
    assert!(!pattern.red);
    assert!(!pattern.blue);
}

#[test]
fn each_outcome_has_a_distinct_feedback_pairing() {
    // Rejections pair a long tone with a notice; confirmations are short
    // tones with no notice.
    assert_eq!(tones::REJECTED_FULL.duration_ms, 300);
    assert_eq!(Notice::ROOM_FULL.text, "ROOM FULL");
    assert_eq!(tones::INVALID_EXIT.duration_ms, 300);
    assert_eq!(Notice::ROOM_EMPTY.text, "ROOM EMPTY");
    assert_eq!(tones::ADMITTED.duration_ms, 100);
    assert_eq!(tones::DEPARTED.duration_ms, 100);
    assert_eq!(tones::RESET_CHIME.duration_ms, 100);
}
