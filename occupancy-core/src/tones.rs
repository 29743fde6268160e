//! Tone vocabulary for the buzzer.
//!
//! One short square-wave burst per outcome. The firmware bit-bangs these;
//! the emulator just names them.

/// A single square-wave burst.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ToneRequest {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl ToneRequest {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Silence for the given duration.
    pub const fn rest(duration_ms: u32) -> Self {
        Self {
            frequency_hz: 0,
            duration_ms,
        }
    }

    pub const fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

/// Entry accepted.
pub const ADMITTED: ToneRequest = ToneRequest::new(440, 100);

/// Entry rejected because the room is full.
pub const REJECTED_FULL: ToneRequest = ToneRequest::new(400, 300);

/// Exit accepted.
pub const DEPARTED: ToneRequest = ToneRequest::new(349, 100);

/// Exit pressed on an empty room.
pub const INVALID_EXIT: ToneRequest = ToneRequest::new(349, 300);

/// Forced reset acknowledged.
pub const RESET_CHIME: ToneRequest = ToneRequest::new(523, 100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_dwell_longer_than_confirmations() {
        assert!(REJECTED_FULL.duration_ms > ADMITTED.duration_ms);
        assert!(INVALID_EXIT.duration_ms > DEPARTED.duration_ms);
    }

    #[test]
    fn rest_is_silent() {
        let rest = ToneRequest::rest(50);
        assert!(rest.is_rest());
        assert!(!RESET_CHIME.is_rest());
    }
}
