//! Signal LED driver.
//!
//! Three discrete LEDs on plain digital outputs (active HIGH).  Red alone
//! reads as "closed", red + green as "attention", green alone as "open".
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the three GPIOs via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::fsm::LedPattern;
use crate::pins;

pub struct SignalLeds {
    current: LedPattern,
}

impl Default for SignalLeds {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalLeds {
    /// All off, matching the level set during bring-up.
    pub fn new() -> Self {
        Self {
            current: LedPattern::OFF,
        }
    }

    pub fn set(&mut self, pattern: LedPattern) {
        hw_init::gpio_write(pins::LED_R_GPIO, pattern.red);
        hw_init::gpio_write(pins::LED_G_GPIO, pattern.green);
        hw_init::gpio_write(pins::LED_B_GPIO, pattern.blue);
        self.current = pattern;
    }

    pub fn current(&self) -> LedPattern {
        self.current
    }
}
