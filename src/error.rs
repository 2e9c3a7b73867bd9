//! Unified error types for the crossing signal firmware.
//!
//! The control path itself cannot fail; these cover bring-up, configuration
//! and the display bus.  All variants are `Copy` so they travel through the
//! event sink without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// An ESP-IDF GPIO call returned a non-OK code.
    Gpio(i32),
    /// The display rejected a line or a frame.
    Display(DisplayError),
    /// Configuration is inconsistent.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Gpio(rc) => write!(f, "gpio: rc={rc}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Display errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Row index beyond the text layout.
    RowOutOfRange(u8),
    /// Line does not fit the display width.
    LineTooLong { row: u8, len: usize },
    /// Line holds a character outside the ASCII font.
    NotAscii { row: u8 },
    /// The bus transfer (or the controller behind it) failed.
    Bus,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfRange(row) => write!(f, "row {row} out of range"),
            Self::LineTooLong { row, len } => write!(f, "row {row} too long ({len} chars)"),
            Self::NotAscii { row } => write!(f, "row {row} is not ASCII"),
            Self::Bus => write!(f, "bus transfer failed"),
        }
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
