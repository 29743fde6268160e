//! Edge debouncing for the three request lines.
//!
//! All lines share one filter: an accepted edge on any line suppresses
//! edges on every line for the minimum interval. With physical buttons a
//! few centimeters apart one operator cannot press two of them within the
//! window anyway, and the shared clock keeps chatter on one line from
//! leaking through on another.

/// Minimum spacing between accepted edges, in microseconds.
pub const DEFAULT_MIN_INTERVAL_US: u64 = 200_000;

/// Identifies which request line produced an edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RequestLine {
    /// A person asking to be admitted.
    Entry,
    /// A person leaving the room.
    Exit,
    /// The operator forcing the room back to empty.
    Reset,
}

impl RequestLine {
    /// Human-readable name for log lines.
    pub const fn label(&self) -> &'static str {
        match self {
            RequestLine::Entry => "entry",
            RequestLine::Exit => "exit",
            RequestLine::Reset => "reset",
        }
    }
}

/// Time-based filter that discards edges arriving too soon after the last
/// accepted one.
///
/// The filter is fed a monotonic microsecond timestamp by the caller, so it
/// works identically under the firmware's hardware clock and a test's
/// scripted one.
#[derive(Copy, Clone, Debug)]
pub struct DebounceFilter {
    last_accepted_us: Option<u64>,
    min_interval_us: u64,
}

impl DebounceFilter {
    /// Creates a filter that requires at least `min_interval_us` between
    /// accepted edges.
    pub const fn new(min_interval_us: u64) -> Self {
        Self {
            last_accepted_us: None,
            min_interval_us,
        }
    }

    /// Judges an edge observed at `now_us`.
    ///
    /// Returns `true` and arms the window when the edge is accepted. The
    /// first edge ever seen is always accepted.
    pub fn accept(&mut self, now_us: u64) -> bool {
        match self.last_accepted_us {
            Some(last) if now_us.wrapping_sub(last) < self.min_interval_us => false,
            _ => {
                self.last_accepted_us = Some(now_us);
                true
            }
        }
    }
}

impl Default for DebounceFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL_US)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_edge_is_always_accepted() {
        let mut filter = DebounceFilter::default();
        assert!(filter.accept(0));
    }

    #[test]
    fn edge_inside_window_is_discarded() {
        let mut filter = DebounceFilter::default();
        assert!(filter.accept(1_000_000));
        assert!(!filter.accept(1_050_000));
        assert!(!filter.accept(1_199_999));
    }

    #[test]
    fn edge_at_window_boundary_is_accepted() {
        let mut filter = DebounceFilter::default();
        assert!(filter.accept(1_000_000));
        assert!(filter.accept(1_200_000));
    }

    #[test]
    fn discarded_edges_do_not_extend_the_window() {
        let mut filter = DebounceFilter::default();
        assert!(filter.accept(0));
        assert!(!filter.accept(150_000));
        // Window measures from the last ACCEPTED edge, not the last seen one.
        assert!(filter.accept(200_000));
    }

    #[test]
    fn line_labels_are_stable() {
        assert_eq!(RequestLine::Entry.label(), "entry");
        assert_eq!(RequestLine::Exit.label(), "exit");
        assert_eq!(RequestLine::Reset.label(), "reset");
    }
}
