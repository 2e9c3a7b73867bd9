//! Crossing-request push-button.
//!
//! Active-low momentary switch with the internal pull-up enabled during
//! bring-up.  The driver only reports the raw pin level; deciding what
//! counts as a press is the input monitor's job.

use crate::app::ports::Level;
use crate::drivers::hw_init;

pub struct PushButton {
    gpio: i32,
}

impl PushButton {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// Current raw level of the pin.
    pub fn level(&self) -> Level {
        if hw_init::gpio_read(self.gpio) {
            Level::High
        } else {
            Level::Low
        }
    }
}
