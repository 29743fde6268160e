//! Occupancy accounting: the counter, the capacity slot pool, and the
//! ledger the worker tasks mutate.
//!
//! The pool's non-blocking acquire is the single source of truth for
//! admission. [`RoomLedger::admit`] performs acquire-then-increment inside a
//! single call, so a caller that serializes access to the ledger can never
//! observe `current > capacity`. Comparing the bare counter against the
//! capacity is deliberately not offered as an admission check.

use crate::indicators::{self, LedPattern, OccupancyStatus};

/// Number of people currently inside, bounded by a fixed capacity.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OccupancyCounter {
    current: u16,
    capacity: u16,
}

impl OccupancyCounter {
    /// Creates a counter at zero for a room of the given capacity.
    pub const fn new(capacity: u16) -> Self {
        Self {
            current: 0,
            capacity,
        }
    }

    /// Returns the number of occupants currently inside.
    pub const fn current(&self) -> u16 {
        self.current
    }

    /// Returns the fixed maximum number of simultaneous occupants.
    pub const fn capacity(&self) -> u16 {
        self.capacity
    }

    fn increment(&mut self) {
        debug_assert!(self.current < self.capacity, "counter exceeding capacity");
        self.current = self.current.saturating_add(1);
    }

    fn decrement(&mut self) {
        debug_assert!(self.current > 0, "counter underflow");
        self.current = self.current.saturating_sub(1);
    }

    fn clear(&mut self) -> u16 {
        let prior = self.current;
        self.current = 0;
        prior
    }
}

/// Counting pool of interchangeable admission tokens.
///
/// Each free token represents one open occupancy slot. Acquisition never
/// blocks; release clamps at the pool capacity so bulk refills cannot
/// over-release even if the caller's bookkeeping has drifted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SlotPool {
    free: u16,
    capacity: u16,
}

impl SlotPool {
    /// Creates a pool with every token free.
    pub const fn new(capacity: u16) -> Self {
        Self {
            free: capacity,
            capacity,
        }
    }

    /// Returns the number of tokens currently free.
    pub const fn free(&self) -> u16 {
        self.free
    }

    /// Returns the number of tokens acquired and not yet released.
    pub const fn outstanding(&self) -> u16 {
        self.capacity - self.free
    }

    /// Attempts to take one token without waiting.
    pub fn try_acquire(&mut self) -> bool {
        if self.free == 0 {
            return false;
        }
        self.free -= 1;
        true
    }

    /// Returns one token to the pool.
    ///
    /// Returns `false` when the pool is already full; the token count never
    /// exceeds the capacity.
    pub fn release(&mut self) -> bool {
        if self.free == self.capacity {
            return false;
        }
        self.free += 1;
        true
    }

    /// Releases tokens until the pool is full again and reports how many
    /// were returned.
    pub fn refill(&mut self) -> u16 {
        let released = self.capacity - self.free;
        self.free = self.capacity;
        released
    }
}

/// Result of an admission attempt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AdmitOutcome {
    /// A slot was acquired and the occupant counted in.
    Admitted,
    /// The room is at capacity; nothing changed.
    Full,
}

/// Result of a departure attempt.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DepartOutcome {
    /// The occupant was counted out and a slot returned to the pool.
    Departed,
    /// The room was already empty; nothing changed.
    Empty,
}

/// Accounting recorded by a forced reset.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ResetSummary {
    /// Occupants that were inside when the reset fired.
    pub occupants_cleared: u16,
    /// Slot tokens returned to the pool (clamped at the pool capacity).
    pub slots_released: u16,
}

/// Copyable view of the occupancy state, taken for rendering after the
/// ledger lock is dropped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct OccupancySnapshot {
    current: u16,
    capacity: u16,
}

impl OccupancySnapshot {
    /// Returns the occupant count captured by this snapshot.
    pub const fn current(&self) -> u16 {
        self.current
    }

    /// Returns the room capacity.
    pub const fn capacity(&self) -> u16 {
        self.capacity
    }

    /// Returns the number of open slots.
    pub const fn free_slots(&self) -> u16 {
        self.capacity - self.current
    }

    /// Classifies the snapshot for the status line.
    pub const fn status(&self) -> OccupancyStatus {
        indicators::status_for(self.current, self.capacity)
    }

    /// Computes the steady-state LED pattern for the snapshot.
    pub const fn led_pattern(&self) -> LedPattern {
        indicators::led_pattern_for(self.current, self.capacity)
    }
}

/// Counter and slot pool bound together behind the operations the three
/// worker tasks are allowed to perform.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RoomLedger {
    counter: OccupancyCounter,
    pool: SlotPool,
}

impl RoomLedger {
    /// Creates an empty ledger for a room of the given capacity.
    pub const fn new(capacity: u16) -> Self {
        Self {
            counter: OccupancyCounter::new(capacity),
            pool: SlotPool::new(capacity),
        }
    }

    /// Admits one occupant if a slot token is available.
    pub fn admit(&mut self) -> AdmitOutcome {
        if self.pool.try_acquire() {
            self.counter.increment();
            AdmitOutcome::Admitted
        } else {
            AdmitOutcome::Full
        }
    }

    /// Counts one occupant out, returning their slot token to the pool.
    ///
    /// Never decrements below zero and never releases a token while the
    /// count is zero.
    pub fn depart(&mut self) -> DepartOutcome {
        if self.counter.current() == 0 {
            return DepartOutcome::Empty;
        }
        self.counter.decrement();
        let released = self.pool.release();
        debug_assert!(released, "pool out of step with counter");
        DepartOutcome::Departed
    }

    /// Forces the ledger back to the empty state.
    ///
    /// The pool refill is clamped at the pool capacity, so a reset is safe
    /// to fire in any state, including an already-empty room.
    pub fn reset(&mut self) -> ResetSummary {
        let slots_released = self.pool.refill();
        let occupants_cleared = self.counter.clear();
        ResetSummary {
            occupants_cleared,
            slots_released,
        }
    }

    /// Returns the current occupant count.
    pub const fn occupancy(&self) -> u16 {
        self.counter.current()
    }

    /// Returns the room capacity.
    pub const fn capacity(&self) -> u16 {
        self.counter.capacity()
    }

    /// Returns the number of free slot tokens.
    pub const fn free_slots(&self) -> u16 {
        self.pool.free()
    }

    /// Captures a copyable view for rendering outside the ledger lock.
    pub const fn snapshot(&self) -> OccupancySnapshot {
        OccupancySnapshot {
            current: self.counter.current(),
            capacity: self.counter.capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_acquire_consumes_free_tokens() {
        let mut pool = SlotPool::new(2);
        assert!(pool.try_acquire());
        assert!(pool.try_acquire());
        assert!(!pool.try_acquire());
        assert_eq!(pool.free(), 0);
        assert_eq!(pool.outstanding(), 2);
    }

    #[test]
    fn pool_release_clamps_at_capacity() {
        let mut pool = SlotPool::new(2);
        assert!(!pool.release());
        assert!(pool.try_acquire());
        assert!(pool.release());
        assert!(!pool.release());
        assert_eq!(pool.free(), 2);
    }

    #[test]
    fn pool_refill_reports_outstanding_tokens() {
        let mut pool = SlotPool::new(3);
        assert!(pool.try_acquire());
        assert!(pool.try_acquire());
        assert_eq!(pool.refill(), 2);
        assert_eq!(pool.free(), 3);
        assert_eq!(pool.refill(), 0);
    }

    #[test]
    fn admit_tracks_pool_and_counter_together() {
        let mut ledger = RoomLedger::new(2);
        assert_eq!(ledger.admit(), AdmitOutcome::Admitted);
        assert_eq!(ledger.occupancy(), 1);
        assert_eq!(ledger.free_slots(), 1);

        assert_eq!(ledger.admit(), AdmitOutcome::Admitted);
        assert_eq!(ledger.admit(), AdmitOutcome::Full);
        assert_eq!(ledger.occupancy(), 2);
        assert_eq!(ledger.free_slots(), 0);
    }

    #[test]
    fn depart_refuses_to_underflow() {
        let mut ledger = RoomLedger::new(2);
        assert_eq!(ledger.depart(), DepartOutcome::Empty);
        assert_eq!(ledger.occupancy(), 0);
        assert_eq!(ledger.free_slots(), 2);

        assert_eq!(ledger.admit(), AdmitOutcome::Admitted);
        assert_eq!(ledger.depart(), DepartOutcome::Departed);
        assert_eq!(ledger.depart(), DepartOutcome::Empty);
        assert_eq!(ledger.free_slots(), 2);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut ledger = RoomLedger::new(3);
        let _ = ledger.admit();
        let _ = ledger.admit();

        let first = ledger.reset();
        assert_eq!(first.occupants_cleared, 2);
        assert_eq!(first.slots_released, 2);
        assert_eq!(ledger.occupancy(), 0);
        assert_eq!(ledger.free_slots(), 3);

        let second = ledger.reset();
        assert_eq!(second.occupants_cleared, 0);
        assert_eq!(second.slots_released, 0);
        assert_eq!(ledger.occupancy(), 0);
        assert_eq!(ledger.free_slots(), 3);
    }

    #[test]
    fn snapshot_mirrors_ledger_state() {
        let mut ledger = RoomLedger::new(15);
        let _ = ledger.admit();
        let snapshot = ledger.snapshot();
        assert_eq!(snapshot.current(), 1);
        assert_eq!(snapshot.capacity(), 15);
        assert_eq!(snapshot.free_slots(), 14);
    }
}
