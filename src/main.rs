//! Crosswalk Firmware — Main Entry Point
//!
//! Hexagonal layout with a single blocking control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter     OledDisplay      LogEventSink             │
//! │  (Light+ButtonPort)  (StatusDisplay)  (EventSink)              │
//! │  BlockingDelay                                                 │
//! │  (DelayNs)                                                     │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │          SignalController (pure logic)                 │    │
//! │  │  Sequencer · InputMonitor · SignalConfig               │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::info;

use crosswalk::adapters::hardware::HardwareAdapter;
use crosswalk::adapters::log_sink::LogEventSink;
use crosswalk::adapters::time::BlockingDelay;
use crosswalk::app::service::SignalController;
use crosswalk::config::SignalConfig;
use crosswalk::drivers::button::PushButton;
use crosswalk::drivers::hw_init;
use crosswalk::drivers::oled::OledDisplay;
use crosswalk::drivers::status_led::SignalLeds;
use crosswalk::pins;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Crosswalk v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Timing plan ────────────────────────────────────────
    let config = SignalConfig::default();
    config.validate()?;
    info!("Config: {}", serde_json::to_string(&config)?);

    // ── 3. Signal GPIO (LEDs + button) ────────────────────────
    hw_init::init_peripherals()?;

    // ── 4. I²C bus + OLED ─────────────────────────────────────
    // Typed pins must match pins::I2C_SDA_GPIO / pins::I2C_SCL_GPIO.
    let peripherals = Peripherals::take()?;
    let i2c_config = I2cConfig::new().baudrate(Hertz(pins::I2C_FREQ_HZ));
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio14,
        peripherals.pins.gpio15,
        &i2c_config,
    )?;
    info!(
        "I2C0 up: SDA={} SCL={} @ {} Hz",
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO,
        pins::I2C_FREQ_HZ
    );
    let mut oled = OledDisplay::new(i2c, pins::OLED_I2C_ADDR)?;

    // ── 5. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(SignalLeds::new(), PushButton::new(pins::BUTTON_GPIO));
    let mut delay = BlockingDelay::new();
    let mut log_sink = LogEventSink::new();

    // ── 6. Controller ─────────────────────────────────────────
    let mut controller = SignalController::new(config);
    controller.start(&mut oled, &mut log_sink);

    info!("System ready. Entering signal loop.");
    controller.run_forever(&mut hw, &mut oled, &mut delay, &mut log_sink)
}
