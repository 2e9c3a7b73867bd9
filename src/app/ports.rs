//! Port traits — the hexagonal boundary between the signal logic and the board.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SignalController (domain)
//! ```
//!
//! Driven adapters (LEDs, button, display, event sinks) implement these
//! traits.  The [`SignalController`](super::service::SignalController)
//! consumes them via generics, so the domain core never touches hardware
//! directly.  Blocking time comes from [`embedded_hal::delay::DelayNs`].

use crate::error::Result;
use crate::fsm::LedPattern;

// ───────────────────────────────────────────────────────────────
// Light port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the three signal LEDs.
pub trait LightPort {
    /// Drive all three LEDs to `pattern` (logical on/off).
    fn set_lights(&mut self, pattern: LedPattern);
}

// ───────────────────────────────────────────────────────────────
// Button port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Electrical level observed on an input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Read-side port for the crossing-request button.
///
/// Returns the **raw** pin level.  The button is wired active-low, so the
/// domain treats [`Level::Low`] as "pressed".
pub trait ButtonPort {
    fn read_level(&mut self) -> Level;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → OLED)
// ───────────────────────────────────────────────────────────────

/// Four-line status text.  The adapter owns the pixel buffer and the
/// render region; the domain only ever hands it text.
pub trait StatusDisplay {
    /// Blank the frame buffer.  Nothing reaches the panel until [`flush`].
    ///
    /// [`flush`]: StatusDisplay::flush
    fn clear(&mut self);

    /// Draw `text` on row `row` (0–3) of the frame buffer.
    fn draw_line(&mut self, row: u8, text: &str) -> Result<()>;

    /// Push the frame buffer to the panel.
    fn flush(&mut self) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
