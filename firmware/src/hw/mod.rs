//! Board peripherals: indicator LEDs, buzzer, and the OLED panel.

pub mod buzzer;
pub mod display;
pub mod leds;

pub use buzzer::Buzzer;
pub use display::Ssd1306Panel;
pub use leds::LedBank;

/// LEDs and buzzer bundled so one lock covers a tone plus its matching
/// pattern change.
pub struct Annunciator {
    pub leds: LedBank,
    pub buzzer: Buzzer,
}
