//! Hardware adapter — bridges the signal GPIO to domain port traits.
//!
//! Owns the LED and button drivers, exposing them through [`LightPort`]
//! and [`ButtonPort`].  On non-espidf targets the drivers fall back to
//! in-memory state and a released button.

use crate::app::ports::{ButtonPort, Level, LightPort};
use crate::drivers::button::PushButton;
use crate::drivers::status_led::SignalLeds;
use crate::fsm::LedPattern;

/// Concrete adapter for the signal board.
pub struct HardwareAdapter {
    leds: SignalLeds,
    button: PushButton,
}

impl HardwareAdapter {
    pub fn new(leds: SignalLeds, button: PushButton) -> Self {
        Self { leds, button }
    }
}

// ── LightPort implementation ──────────────────────────────────

impl LightPort for HardwareAdapter {
    fn set_lights(&mut self, pattern: LedPattern) {
        self.leds.set(pattern);
    }
}

// ── ButtonPort implementation ─────────────────────────────────

impl ButtonPort for HardwareAdapter {
    fn read_level(&mut self) -> Level {
        self.button.level()
    }
}
