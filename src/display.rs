//! Display geometry shared by every [`StatusDisplay`](crate::app::ports::StatusDisplay)
//! implementation.
//!
//! The SSD1306 is 128×64 pixels packed into 8 pages of 8 rows.  Frames are
//! always pushed over the full [`RenderArea::FULL_SCREEN`]; text lines sit on
//! an 8 px grid with a 5 px left margin.

use crate::error::{DisplayError, Result};
use crate::fsm::MESSAGE_LINES;

/// Panel width in pixels.
pub const WIDTH_PX: u32 = 128;
/// Panel height in pixels.
pub const HEIGHT_PX: u32 = 64;
/// Vertical pixels per memory page.
pub const PAGE_HEIGHT_PX: u32 = 8;

/// Rectangle of display memory a flush writes to, in columns and pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderArea {
    pub start_column: u8,
    pub end_column: u8,
    pub start_page: u8,
    pub end_page: u8,
}

impl RenderArea {
    /// The whole panel.  Computed once, never changes.
    pub const FULL_SCREEN: Self = Self {
        start_column: 0,
        end_column: (WIDTH_PX - 1) as u8,
        start_page: 0,
        end_page: (HEIGHT_PX / PAGE_HEIGHT_PX - 1) as u8,
    };

    pub const fn width_px(&self) -> u32 {
        (self.end_column - self.start_column) as u32 + 1
    }

    pub const fn pages(&self) -> u32 {
        (self.end_page - self.start_page) as u32 + 1
    }

    /// Bytes of display RAM covered (one byte per column per page).
    pub const fn buffer_len(&self) -> usize {
        (self.width_px() * self.pages()) as usize
    }
}

/// Where text rows land on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    pub left_margin_px: u32,
    pub row_height_px: u32,
    pub glyph_width_px: u32,
}

impl TextLayout {
    /// 5×8 glyphs, one text row per memory page.
    pub const DEFAULT: Self = Self {
        left_margin_px: 5,
        row_height_px: 8,
        glyph_width_px: 5,
    };

    /// Top-left pixel of text row `row`.
    pub const fn origin(&self, row: u8) -> (u32, u32) {
        (self.left_margin_px, row as u32 * self.row_height_px)
    }

    /// Characters that fit between the margin and the right edge of `area`.
    pub const fn max_chars(&self, area: RenderArea) -> usize {
        ((area.width_px() - self.left_margin_px) / self.glyph_width_px) as usize
    }
}

/// Longest line any phase may show, in characters.  Lines are ASCII, so
/// this is also their length in bytes.
pub const LINE_CAPACITY: usize = TextLayout::DEFAULT.max_chars(RenderArea::FULL_SCREEN);

/// Reject rows outside the 4-line layout, non-ASCII text (the panel font
/// only covers ASCII) and lines wider than the panel.
pub fn check_line(row: u8, text: &str) -> Result<()> {
    if row as usize >= MESSAGE_LINES {
        return Err(DisplayError::RowOutOfRange(row).into());
    }
    if !text.is_ascii() {
        return Err(DisplayError::NotAscii { row }.into());
    }
    let len = text.chars().count();
    if len > LINE_CAPACITY {
        return Err(DisplayError::LineTooLong { row, len }.into());
    }
    Ok(())
}
