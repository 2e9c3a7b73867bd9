//! In-memory text display.
//!
//! Implements [`StatusDisplay`] by keeping the four text rows in fixed
//! capacity strings.  Used on the host, where no panel is attached, by
//! tests that need to see exactly what would have been pushed.

use heapless::String;

use crate::app::ports::StatusDisplay;
use crate::display::{LINE_CAPACITY, TextLayout, check_line};
use crate::error::{DisplayError, Result};
use crate::fsm::MESSAGE_LINES;

type Line = String<LINE_CAPACITY>;

/// Frame buffer plus the last frame that was flushed.
#[derive(Debug, Default)]
pub struct TextFrameDisplay {
    pending: [Line; MESSAGE_LINES],
    shown: [Line; MESSAGE_LINES],
    flushes: u32,
}

impl TextFrameDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of the last flushed frame, top to bottom.
    pub fn shown(&self) -> [&str; MESSAGE_LINES] {
        core::array::from_fn(|row| self.shown[row].as_str())
    }

    /// Pixel origin of every non-empty row of the last flushed frame.
    pub fn shown_origins(&self) -> heapless::Vec<(u32, u32), MESSAGE_LINES> {
        self.shown
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(row, _)| TextLayout::DEFAULT.origin(row as u8))
            .collect()
    }

    pub fn flush_count(&self) -> u32 {
        self.flushes
    }
}

impl StatusDisplay for TextFrameDisplay {
    fn clear(&mut self) {
        for line in &mut self.pending {
            line.clear();
        }
    }

    fn draw_line(&mut self, row: u8, text: &str) -> Result<()> {
        check_line(row, text)?;
        let line = &mut self.pending[row as usize];
        line.clear();
        line.push_str(text).map_err(|()| DisplayError::LineTooLong {
            row,
            len: text.chars().count(),
        })?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.shown.clone_from(&self.pending);
        self.flushes += 1;
        Ok(())
    }
}
