//! Mapping from occupancy to the status line and the indicator LEDs.

/// Coarse classification of how full the room is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OccupancyStatus {
    /// At least three slots open.
    Available,
    /// One or two slots left.
    AlmostFull,
    /// No slots left.
    Full,
}

impl OccupancyStatus {
    /// Text shown on the display's status line.
    pub const fn label(&self) -> &'static str {
        match self {
            OccupancyStatus::Available => "AVAILABLE",
            OccupancyStatus::AlmostFull => "ALMOST FULL",
            OccupancyStatus::Full => "FULL",
        }
    }
}

/// Desired on/off state of the three indicator LEDs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LedPattern {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl LedPattern {
    /// All indicators dark.
    pub const OFF: Self = Self {
        red: false,
        green: false,
        blue: false,
    };

    /// Amber (red + green), flashed while a rejected entry notice dwells.
    pub const ALERT: Self = Self {
        red: true,
        green: true,
        blue: false,
    };
}

/// Classifies a count against the capacity for the status line.
pub const fn status_for(current: u16, capacity: u16) -> OccupancyStatus {
    if current >= capacity {
        OccupancyStatus::Full
    } else if current + 2 >= capacity {
        OccupancyStatus::AlmostFull
    } else {
        OccupancyStatus::Available
    }
}

/// Computes the steady-state LED pattern for a count.
///
/// Exactly one rule applies per count; the comparisons use addition on the
/// count side so a capacity below 2 cannot underflow.
pub const fn led_pattern_for(current: u16, capacity: u16) -> LedPattern {
    if current >= capacity {
        LedPattern {
            red: true,
            green: false,
            blue: false,
        }
    } else if current + 1 == capacity {
        LedPattern {
            red: true,
            green: true,
            blue: false,
        }
    } else if current + 2 == capacity {
        LedPattern {
            red: false,
            green: true,
            blue: false,
        }
    } else if current == 0 {
        LedPattern {
            red: false,
            green: false,
            blue: true,
        }
    } else {
        LedPattern::OFF
    }
}
