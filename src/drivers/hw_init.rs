//! One-shot GPIO bring-up.
//!
//! Configures the three LED outputs and the push-button input using raw
//! ESP-IDF sys calls.  Called once from `main()` before the controller
//! starts.  The I²C bus for the OLED is brought up separately through
//! `esp-idf-hal`, which owns those pins.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use core::fmt;

#[cfg(target_os = "espidf")]
use log::info;

use crate::error::{Error, Result};
#[cfg(target_os = "espidf")]
use crate::pins;

/// A `gpio_config` call rejected one of the signal pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    /// LED output setup failed.
    Output { pin: i32, rc: i32 },
    /// Button input setup failed.
    Input { pin: i32, rc: i32 },
}

impl HwInitError {
    /// ESP-IDF return code behind the failure.
    pub const fn rc(self) -> i32 {
        match self {
            Self::Output { rc, .. } | Self::Input { rc, .. } => rc,
        }
    }
}

impl fmt::Display for HwInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output { pin, rc } => write!(f, "output GPIO {pin}: rc={rc}"),
            Self::Input { pin, rc } => write!(f, "input GPIO {pin}: rc={rc}"),
        }
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Gpio(e.rc())
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<()> {
    // SAFETY: Called once from main() before the controller runs; single-threaded.
    unsafe {
        init_gpio_outputs()?;
        init_gpio_inputs()?;
    }
    info!("hw_init: signal GPIO configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<()> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> core::result::Result<(), HwInitError> {
    let output_pins = [pins::LED_R_GPIO, pins::LED_G_GPIO, pins::LED_B_GPIO];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let rc = unsafe { gpio_config(&cfg) };
        if rc != ESP_OK as i32 {
            return Err(HwInitError::Output { pin, rc });
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: LED outputs configured (R={}, G={}, B={})",
        pins::LED_R_GPIO, pins::LED_G_GPIO, pins::LED_B_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_gpio_outputs(). Main-loop only.
    unsafe { gpio_set_level(pin, u32::from(high)); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── GPIO Inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> core::result::Result<(), HwInitError> {
    // Polled, so no interrupt; pull-up keeps the released level HIGH.
    let btn_cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::BUTTON_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let rc = unsafe { gpio_config(&btn_cfg) };
    if rc != ESP_OK as i32 {
        return Err(HwInitError::Input {
            pin: pins::BUTTON_GPIO,
            rc,
        });
    }

    info!("hw_init: button input configured (GPIO {})", pins::BUTTON_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

/// Host builds see a released button (pull-up HIGH).
#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    true
}
