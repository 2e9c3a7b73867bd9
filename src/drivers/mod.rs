//! Peripheral drivers and one-shot hardware initialisation.

pub mod button;
pub mod hw_init;
pub mod oled;
pub mod status_led;
