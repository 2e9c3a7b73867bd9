//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter      | Implements             | Connects to                |
//! |--------------|------------------------|----------------------------|
//! | `hardware`   | LightPort, ButtonPort  | ESP32 GPIO (LEDs, button)  |
//! | `log_sink`   | EventSink              | Serial log output          |
//! | `text_frame` | StatusDisplay          | In-memory text rows (host) |
//! | `time`       | DelayNs                | FreeRTOS / `std` sleep     |
//!
//! The SSD1306 panel implements `StatusDisplay` directly in
//! [`drivers::oled`](crate::drivers::oled).

pub mod hardware;
pub mod log_sink;
pub mod text_frame;
pub mod time;
