//! Display composition for a 128x64 monochrome panel.
//!
//! Drawing goes through [`DisplayTarget`] so the same layout code drives the
//! firmware's OLED and a plain text canvas in host tests and the emulator.
//! Coordinates are pixels with the origin at the top-left.

use core::fmt::Write as _;
use core::time::Duration;

use heapless::String;

use crate::room::OccupancySnapshot;

/// Panel width in pixels.
pub const WIDTH: i32 = 128;
/// Panel height in pixels.
pub const HEIGHT: i32 = 64;

const HEADER_TEXT: &str = "OCCUPANCY";
const HEADER_POS: (i32, i32) = (28, 0);
const RULE_TOP: (i32, i32, i32, i32) = (3, 11, 123, 11);
const RULE_BOTTOM: (i32, i32, i32, i32) = (3, 45, 123, 45);
const COUNT_POS: (i32, i32) = (0, 20);
const LIMIT_POS: (i32, i32) = (0, 35);
const STATUS_POS: (i32, i32) = (15, 50);
const NOTICE_POS: (i32, i32) = (16, 28);

/// Minimal drawing surface the layout code needs.
pub trait DisplayTarget {
    type Error;

    /// Blanks the frame.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draws text with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), Self::Error>;

    /// Draws a one-pixel line from `(x0, y0)` to `(x1, y1)`.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), Self::Error>;

    /// Pushes the frame to the panel.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// A transient full-screen message and how long it stays up.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub text: &'static str,
    pub dwell: Duration,
}

impl Notice {
    /// Entry rejected at capacity.
    pub const ROOM_FULL: Self = Self {
        text: "ROOM FULL",
        dwell: Duration::from_millis(2000),
    };

    /// Exit pressed on an empty room.
    pub const ROOM_EMPTY: Self = Self {
        text: "ROOM EMPTY",
        dwell: Duration::from_millis(1000),
    };

    /// Forced reset in progress.
    pub const RESETTING: Self = Self {
        text: "RESETTING",
        dwell: Duration::from_millis(1000),
    };
}

/// Draws the steady-state frame: header, occupancy figures, status line.
pub fn render_status<D: DisplayTarget>(
    display: &mut D,
    snapshot: &OccupancySnapshot,
) -> Result<(), D::Error> {
    display.clear()?;
    display.draw_text(HEADER_TEXT, HEADER_POS.0, HEADER_POS.1)?;
    display.draw_line(RULE_TOP.0, RULE_TOP.1, RULE_TOP.2, RULE_TOP.3)?;

    let mut line: String<20> = String::new();
    let _ = write!(line, "Inside: {:02}", snapshot.current());
    display.draw_text(&line, COUNT_POS.0, COUNT_POS.1)?;

    line.clear();
    let _ = write!(line, "Limit : {:02}", snapshot.capacity());
    display.draw_text(&line, LIMIT_POS.0, LIMIT_POS.1)?;

    display.draw_line(RULE_BOTTOM.0, RULE_BOTTOM.1, RULE_BOTTOM.2, RULE_BOTTOM.3)?;
    display.draw_text(snapshot.status().label(), STATUS_POS.0, STATUS_POS.1)?;
    display.flush()
}

/// Draws a transient notice frame. The caller owns the dwell timing and the
/// follow-up [`render_status`] call.
pub fn render_notice<D: DisplayTarget>(display: &mut D, notice: &Notice) -> Result<(), D::Error> {
    display.clear()?;
    display.draw_text(notice.text, NOTICE_POS.0, NOTICE_POS.1)?;
    display.flush()
}
