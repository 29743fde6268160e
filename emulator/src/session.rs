//! Interactive session that drives the occupancy logic from scripted
//! button presses, with a text rendition of the OLED frame.

use core::convert::Infallible;

use occupancy_core::debounce::{DEFAULT_MIN_INTERVAL_US, DebounceFilter, RequestLine};
use occupancy_core::room::{AdmitOutcome, DepartOutcome, RoomLedger};
use occupancy_core::tones::{self, ToneRequest};
use occupancy_core::view::{self, DisplayTarget, Notice};

const ROOM_CAPACITY: u16 = 15;

/// Simulated time to advance before a press when the command gives none.
const DEFAULT_GAP_MS: u64 = 250;

/// Character-cell rendition of the 128x64 panel. Each cell covers one 6x10
/// glyph of the firmware's font.
const COLS: usize = 21;
const ROWS: usize = 7;

struct TextFrame {
    cells: [[char; COLS]; ROWS],
}

impl TextFrame {
    fn new() -> Self {
        Self {
            cells: [[' '; COLS]; ROWS],
        }
    }

    fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
    }
}

impl DisplayTarget for TextFrame {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.cells = [[' '; COLS]; ROWS];
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), Infallible> {
        let row = (y / 10) as usize;
        let start = (x / 6) as usize;
        if row >= ROWS {
            return Ok(());
        }
        for (offset, ch) in text.chars().enumerate() {
            let col = start + offset;
            if col >= COLS {
                break;
            }
            self.cells[row][col] = ch;
        }
        Ok(())
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, _y1: i32) -> Result<(), Infallible> {
        // The layout only draws horizontal rules.
        let row = (y0 / 10) as usize;
        if row >= ROWS {
            return Ok(());
        }
        let start = (x0 / 6) as usize;
        let end = ((x1 / 6) as usize).min(COLS - 1);
        for col in start..=end {
            self.cells[row][col] = '-';
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

pub struct Session {
    ledger: RoomLedger,
    filter: DebounceFilter,
    clock_us: u64,
    frame: TextFrame,
}

impl Session {
    pub fn new() -> Self {
        let mut session = Self {
            ledger: RoomLedger::new(ROOM_CAPACITY),
            filter: DebounceFilter::new(DEFAULT_MIN_INTERVAL_US),
            clock_us: 0,
            frame: TextFrame::new(),
        };
        session.render_status();
        session
    }

    pub fn handle_command(&mut self, input: &str) -> Vec<String> {
        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default().to_ascii_lowercase();
        let argument = parts.next();

        match command.as_str() {
            "in" => self.press(RequestLine::Entry, argument),
            "out" => self.press(RequestLine::Exit, argument),
            "reset" => self.press(RequestLine::Reset, argument),
            "wait" => self.wait(argument),
            "status" => vec![self.status_line()],
            "show" => self.show(),
            "help" => help_text(),
            _ => vec![format!("Unknown command `{input}`. Type `help` for a list.")],
        }
    }

    fn press(&mut self, line: RequestLine, gap_ms: Option<&str>) -> Vec<String> {
        let gap_ms = match parse_millis(gap_ms, DEFAULT_GAP_MS) {
            Ok(value) => value,
            Err(message) => return vec![message],
        };
        self.clock_us += gap_ms * 1000;

        if !self.filter.accept(self.clock_us) {
            return vec![format!(
                "t={}ms {} edge discarded as bounce",
                self.clock_us / 1000,
                line.label()
            )];
        }

        let mut lines = Vec::new();
        match line {
            RequestLine::Entry => match self.ledger.admit() {
                AdmitOutcome::Admitted => {
                    lines.push(format!(
                        "t={}ms entry admitted: {}",
                        self.clock_us / 1000,
                        self.status_line()
                    ));
                    lines.push(tone_line(&tones::ADMITTED));
                }
                AdmitOutcome::Full => {
                    lines.push(format!(
                        "t={}ms entry rejected, room full",
                        self.clock_us / 1000
                    ));
                    lines.push(alert_led_line());
                    lines.push(tone_line(&tones::REJECTED_FULL));
                    lines.push(notice_line(&Notice::ROOM_FULL));
                }
            },
            RequestLine::Exit => match self.ledger.depart() {
                DepartOutcome::Departed => {
                    lines.push(format!(
                        "t={}ms exit recorded: {}",
                        self.clock_us / 1000,
                        self.status_line()
                    ));
                    lines.push(tone_line(&tones::DEPARTED));
                }
                DepartOutcome::Empty => {
                    lines.push(format!(
                        "t={}ms exit ignored, room already empty",
                        self.clock_us / 1000
                    ));
                    lines.push(alert_led_line());
                    lines.push(tone_line(&tones::INVALID_EXIT));
                    lines.push(notice_line(&Notice::ROOM_EMPTY));
                }
            },
            RequestLine::Reset => {
                let summary = self.ledger.reset();
                lines.push(format!(
                    "t={}ms reset: cleared {} occupants, released {} slots",
                    self.clock_us / 1000,
                    summary.occupants_cleared,
                    summary.slots_released
                ));
                lines.push(tone_line(&tones::RESET_CHIME));
                lines.push(notice_line(&Notice::RESETTING));
            }
        }

        self.render_status();
        lines
    }

    fn wait(&mut self, argument: Option<&str>) -> Vec<String> {
        match parse_millis(argument, 0) {
            Ok(0) => vec!["Usage: wait <milliseconds>".to_string()],
            Ok(millis) => {
                self.clock_us += millis * 1000;
                vec![format!("t={}ms", self.clock_us / 1000)]
            }
            Err(message) => vec![message],
        }
    }

    fn show(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(ROWS + 2);
        lines.push(format!("+{}+", "-".repeat(COLS)));
        for row in self.frame.rows() {
            lines.push(format!("|{row:<COLS$}|"));
        }
        lines.push(format!("+{}+", "-".repeat(COLS)));
        lines
    }

    fn status_line(&self) -> String {
        let snapshot = self.ledger.snapshot();
        let pattern = snapshot.led_pattern();
        let mut colors = Vec::new();
        if pattern.red {
            colors.push("red");
        }
        if pattern.green {
            colors.push("green");
        }
        if pattern.blue {
            colors.push("blue");
        }
        let leds = if colors.is_empty() {
            "off".to_string()
        } else {
            colors.join("+")
        };
        format!(
            "{}/{} ({}), leds {}",
            snapshot.current(),
            snapshot.capacity(),
            snapshot.status().label(),
            leds
        )
    }

    fn render_status(&mut self) {
        let snapshot = self.ledger.snapshot();
        let _ = view::render_status(&mut self.frame, &snapshot);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_millis(argument: Option<&str>, default: u64) -> Result<u64, String> {
    match argument {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("Expected a millisecond count, got `{raw}`")),
    }
}

fn alert_led_line() -> String {
    "  leds red+green (alert) while the notice shows".to_string()
}

fn tone_line(tone: &ToneRequest) -> String {
    format!("  tone {} Hz for {} ms", tone.frequency_hz, tone.duration_ms)
}

fn notice_line(notice: &Notice) -> String {
    format!(
        "  notice \"{}\" for {} ms",
        notice.text,
        notice.dwell.as_millis()
    )
}

fn help_text() -> Vec<String> {
    [
        "Commands:",
        "  in [gap_ms]     press the entry button after gap_ms (default 250)",
        "  out [gap_ms]    press the exit button after gap_ms (default 250)",
        "  reset [gap_ms]  press the reset button after gap_ms (default 250)",
        "  wait <ms>       advance the clock without pressing anything",
        "  status          print occupancy, classification, and LED state",
        "  show            print the current display frame",
        "  exit            quit the emulator",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admission_updates_the_status_line() {
        let mut session = Session::new();
        let lines = session.handle_command("in");
        assert!(lines[0].contains("entry admitted: 1/15"));
        assert!(lines[1].contains("440 Hz"));
    }

    #[test]
    fn rapid_presses_are_debounced() {
        let mut session = Session::new();
        let _ = session.handle_command("in");
        let lines = session.handle_command("in 50");
        assert!(lines[0].contains("discarded as bounce"));

        let status = session.handle_command("status");
        assert!(status[0].starts_with("1/15"));
    }

    #[test]
    fn full_room_rejects_with_notice() {
        let mut session = Session::new();
        for _ in 0..15 {
            let _ = session.handle_command("in 300");
        }
        let lines = session.handle_command("in 300");
        assert!(lines[0].contains("room full"));
        assert!(lines[1].contains("red+green"));
        assert!(lines[3].contains("ROOM FULL"));
        assert!(lines[3].contains("2000 ms"));
    }

    #[test]
    fn exit_on_empty_room_is_reported() {
        let mut session = Session::new();
        let lines = session.handle_command("out");
        assert!(lines[0].contains("room already empty"));
        assert!(lines[2].contains("349 Hz"));
        assert!(lines[3].contains("ROOM EMPTY"));
    }

    #[test]
    fn empty_exit_flashes_the_alert_leds_and_restores_blue() {
        let mut session = Session::new();
        let lines = session.handle_command("out");
        // Alert override engages before the tone, as on the board.
        assert!(lines[1].contains("red+green"));

        // After the notice the steady empty-room pattern is back.
        let status = session.handle_command("status");
        assert!(status[0].contains("leds blue"));
    }

    #[test]
    fn reset_reports_the_clamped_summary() {
        let mut session = Session::new();
        let _ = session.handle_command("in 300");
        let _ = session.handle_command("in 300");
        let lines = session.handle_command("reset 300");
        assert!(lines[0].contains("cleared 2 occupants, released 2 slots"));
    }

    #[test]
    fn show_renders_the_layout() {
        let mut session = Session::new();
        let _ = session.handle_command("in");
        let frame = session.handle_command("show").join("\n");
        assert!(frame.contains("OCCUPANCY"));
        assert!(frame.contains("Inside: 01"));
        assert!(frame.contains("Limit : 15"));
        assert!(frame.contains("AVAILABLE"));
    }

    #[test]
    fn wait_spaces_out_presses() {
        let mut session = Session::new();
        let _ = session.handle_command("in 100");
        let _ = session.handle_command("wait 300");
        let lines = session.handle_command("in 1");
        assert!(lines[0].contains("entry admitted"));
    }

    #[test]
    fn default_session_starts_empty() {
        let mut session = Session::default();
        let status = session.handle_command("status");
        assert!(status[0].starts_with("0/15"));
    }

    #[test]
    fn unknown_commands_point_at_help() {
        let mut session = Session::new();
        let lines = session.handle_command("bogus");
        assert!(lines[0].contains("help"));
    }
}
