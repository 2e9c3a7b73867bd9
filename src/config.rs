//! Signal timing parameters
//!
//! All durations the sequencer uses.  The firmware only ever runs with
//! [`SignalConfig::default()`]; the struct exists so tests and host runs can
//! shorten the cycle without touching the controller.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core signal configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalConfig {
    // --- Closed ---
    /// Longest time the CLOSED phase waits for a crossing request (ms).
    pub closed_wait_ms: u32,

    // --- Attention ---
    /// Fixed ATTENTION hold before the signal opens (ms).
    pub attention_ms: u32,

    // --- Open ---
    /// OPEN hold when the CLOSED wait timed out (ms).
    pub open_ms: u32,
    /// OPEN hold when a pedestrian pressed the button during CLOSED (ms).
    pub open_requested_ms: u32,

    // --- Input ---
    /// Button sampling interval during the CLOSED wait (ms).
    pub button_poll_ms: u32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            closed_wait_ms: 8_000,
            attention_ms: 2_000,
            open_ms: 8_000,
            open_requested_ms: 10_000,
            button_poll_ms: 100,
        }
    }
}

impl SignalConfig {
    /// OPEN hold for the outcome of the preceding CLOSED wait.
    pub fn open_hold_ms(&self, crossing_requested: bool) -> u32 {
        if crossing_requested {
            self.open_requested_ms
        } else {
            self.open_ms
        }
    }

    /// Reject values that would stall or invert the cycle.
    pub fn validate(&self) -> Result<()> {
        if self.button_poll_ms == 0 {
            return Err(Error::Config("button_poll_ms must be non-zero"));
        }
        if self.attention_ms == 0 || self.open_ms == 0 {
            return Err(Error::Config("phase holds must be non-zero"));
        }
        if self.open_requested_ms < self.open_ms {
            return Err(Error::Config(
                "open_requested_ms must not be shorter than open_ms",
            ));
        }
        Ok(())
    }
}
