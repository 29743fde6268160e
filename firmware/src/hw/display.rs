//! Framebuffer driver for a 128x64 SSD1306 OLED over blocking I2C.
//!
//! Drawing mutates a RAM framebuffer; `flush` pushes all eight pages to the
//! controller. Layout code reaches the panel through the portable
//! [`DisplayTarget`] trait, with text and lines rendered by
//! `embedded-graphics` into the buffer.

use core::convert::Infallible;

use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use occupancy_core::view::{self, DisplayTarget};

use crate::config::DISPLAY_I2C_ADDR;

const WIDTH: usize = view::WIDTH as usize;
const HEIGHT: usize = view::HEIGHT as usize;
const PAGES: usize = HEIGHT / 8;

pub struct Ssd1306Panel {
    i2c: I2c<'static, I2C1, Blocking>,
    buffer: [u8; WIDTH * PAGES],
}

impl Ssd1306Panel {
    pub fn new(i2c: I2c<'static, I2C1, Blocking>) -> Self {
        Self {
            i2c,
            buffer: [0; WIDTH * PAGES],
        }
    }

    /// Runs the controller's power-up sequence and blanks the panel.
    pub fn init(&mut self) -> Result<(), i2c::Error> {
        const INIT_SEQUENCE: &[u8] = &[
            0xAE, // display off
            0xD5, 0x80, // clock divide
            0xA8, 0x3F, // multiplex ratio 1/64
            0xD3, 0x00, // no display offset
            0x40, // start line 0
            0x8D, 0x14, // charge pump on
            0x20, 0x00, // horizontal addressing
            0xA1, // segment remap
            0xC8, // COM scan direction
            0xDA, 0x12, // COM pins
            0x81, 0xCF, // contrast
            0xD9, 0xF1, // precharge
            0xDB, 0x40, // VCOM detect
            0xA4, // resume from RAM
            0xA6, // normal polarity
            0xAF, // display on
        ];

        for &byte in INIT_SEQUENCE {
            self.command(byte)?;
        }
        self.buffer.fill(0);
        self.push_frame()
    }

    fn command(&mut self, byte: u8) -> Result<(), i2c::Error> {
        self.i2c
            .blocking_write(u16::from(DISPLAY_I2C_ADDR), &[0x00, byte])
    }

    fn push_frame(&mut self) -> Result<(), i2c::Error> {
        // Reset the addressing window to the whole panel.
        for byte in [0x21, 0x00, 0x7F, 0x22, 0x00, 0x07] {
            self.command(byte)?;
        }

        for page in 0..PAGES {
            let mut chunk = [0u8; WIDTH + 1];
            chunk[0] = 0x40;
            chunk[1..].copy_from_slice(&self.buffer[page * WIDTH..(page + 1) * WIDTH]);
            self.i2c.blocking_write(u16::from(DISPLAY_I2C_ADDR), &chunk)?;
        }
        Ok(())
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if !(0..view::WIDTH).contains(&x) || !(0..view::HEIGHT).contains(&y) {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let index = (y / 8) * WIDTH + x;
        let mask = 1 << (y % 8);
        if on {
            self.buffer[index] |= mask;
        } else {
            self.buffer[index] &= !mask;
        }
    }
}

impl DrawTarget for Ssd1306Panel {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Infallible>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

impl OriginDimensions for Ssd1306Panel {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DisplayTarget for Ssd1306Panel {
    type Error = i2c::Error;

    fn clear(&mut self) -> Result<(), i2c::Error> {
        self.buffer.fill(0);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), i2c::Error> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self);
        Ok(())
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), i2c::Error> {
        let _ = Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(self);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), i2c::Error> {
        self.push_frame()
    }
}
