//! SSD1306 OLED status display.
//!
//! 128×64 panel on I²C, driven through the `ssd1306` crate in buffered
//! graphics mode.  The crate's frame buffer is the only pixel buffer in the
//! firmware; it is cleared and redrawn in place on every phase change and
//! flushed over [`RenderArea::FULL_SCREEN`].  [`OledDisplay::new`] only
//! initialises the controller: the first frame, blank, comes from
//! `SignalController::start`.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use log::info;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;

use crate::app::ports::StatusDisplay;
use crate::display::{RenderArea, TextLayout, check_line};
use crate::error::{DisplayError, Error, Result};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Panel<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct OledDisplay<I2C> {
    panel: Panel<I2C>,
    layout: TextLayout,
    style: MonoTextStyle<'static, BinaryColor>,
}

impl<I2C> OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the controller at `address`.  Nothing is pushed yet.
    pub fn new(i2c: I2C, address: u8) -> Result<Self> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        panel
            .init()
            .map_err(|_| Error::Init("SSD1306 did not acknowledge init"))?;

        let area = RenderArea::FULL_SCREEN;
        info!(
            "oled: 0x{:02X} ready, {} columns x {} pages ({} bytes)",
            address,
            area.width_px(),
            area.pages(),
            area.buffer_len()
        );

        Ok(Self {
            panel,
            layout: TextLayout::DEFAULT,
            style: text_style(),
        })
    }
}

/// White 5×8 glyphs on a transparent background.
pub fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_5X8)
        .text_color(BinaryColor::On)
        .build()
}

/// Draw `text` with the top of its glyph cells on text row `row`.
pub fn draw_row<D>(
    target: &mut D,
    layout: TextLayout,
    style: MonoTextStyle<'_, BinaryColor>,
    row: u8,
    text: &str,
) -> core::result::Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let (x, y) = layout.origin(row);
    Text::with_baseline(text, Point::new(x as i32, y as i32), style, Baseline::Top)
        .draw(target)
        .map(|_| ())
}

impl<I2C> StatusDisplay for OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.panel.clear_buffer();
    }

    fn draw_line(&mut self, row: u8, text: &str) -> Result<()> {
        check_line(row, text)?;
        draw_row(&mut self.panel, self.layout, self.style, row, text)
            .map_err(|_| DisplayError::Bus)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.panel.flush().map_err(|_| DisplayError::Bus)?;
        Ok(())
    }
}
