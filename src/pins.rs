//! GPIO / peripheral pin assignments for the crossing signal board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Signal LEDs (discrete, active HIGH)
// ---------------------------------------------------------------------------

/// Red LED — "closed" and "attention".
pub const LED_R_GPIO: i32 = 13;
/// Green LED — "attention" (together with red, reads as yellow) and "open".
pub const LED_G_GPIO: i32 = 11;
/// Blue LED — wired but never lit by the signal sequence.
pub const LED_B_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// Pedestrian push-button (active-low with internal pull-up)
// ---------------------------------------------------------------------------

/// Crossing-request button.  HIGH = released, LOW = pressed.
pub const BUTTON_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// I²C bus (SSD1306 OLED)
// ---------------------------------------------------------------------------

/// Must match the typed pin handed to the I²C driver in `main`.
pub const I2C_SDA_GPIO: i32 = 14;
/// Must match the typed pin handed to the I²C driver in `main`.
pub const I2C_SCL_GPIO: i32 = 15;
/// Bus clock for the OLED (fast mode).
pub const I2C_FREQ_HZ: u32 = 400_000;
/// 7-bit SSD1306 address (SA0 tied low).
pub const OLED_I2C_ADDR: u8 = 0x3C;
