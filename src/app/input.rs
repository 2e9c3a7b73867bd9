//! Interruptible wait on the crossing-request button.
//!
//! The button is sampled once per poll interval.  The first sample that
//! reads pressed ends the wait; otherwise the wait runs to its timeout,
//! rounded up to a whole number of polls.  There is no debounce: a single
//! low sample counts as a press.

use embedded_hal::delay::DelayNs;
use log::debug;

use super::ports::{ButtonPort, Level};

/// Outcome of one wait window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Seen pressed on the sample taken `after_ms` into the window.
    Pressed { after_ms: u32 },
    /// No pressed sample; `waited_ms` is the time actually slept.
    TimedOut { waited_ms: u32 },
}

impl ButtonEvent {
    pub fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed { .. })
    }

    /// Time spent inside the window.
    pub fn elapsed_ms(self) -> u32 {
        match self {
            Self::Pressed { after_ms } => after_ms,
            Self::TimedOut { waited_ms } => waited_ms,
        }
    }
}

/// Active-low: a LOW level is a press.
pub fn is_pressed(level: Level) -> bool {
    level == Level::Low
}

/// Polls a [`ButtonPort`] at a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct InputMonitor {
    poll_ms: u32,
}

impl InputMonitor {
    /// A zero interval would never advance, so it is raised to 1 ms.
    pub fn new(poll_ms: u32) -> Self {
        Self {
            poll_ms: poll_ms.max(1),
        }
    }

    pub fn poll_ms(&self) -> u32 {
        self.poll_ms
    }

    /// Wait up to `timeout_ms` for the button.
    ///
    /// Samples at 0, poll, 2·poll, … while the elapsed time is below the
    /// timeout, sleeping a full poll after each released sample.
    pub fn wait_with_read(
        &self,
        button: &mut impl ButtonPort,
        delay: &mut impl DelayNs,
        timeout_ms: u32,
    ) -> ButtonEvent {
        let mut elapsed_ms: u32 = 0;

        while elapsed_ms < timeout_ms {
            if is_pressed(button.read_level()) {
                debug!("button: pressed at {} ms of {} ms", elapsed_ms, timeout_ms);
                return ButtonEvent::Pressed {
                    after_ms: elapsed_ms,
                };
            }
            delay.delay_ms(self.poll_ms);
            elapsed_ms = elapsed_ms.saturating_add(self.poll_ms);
        }

        ButtonEvent::TimedOut {
            waited_ms: elapsed_ms,
        }
    }
}
