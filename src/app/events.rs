//! Outbound application events.
//!
//! The [`SignalController`](super::service::SignalController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.

use crate::error::Error;
use crate::fsm::Phase;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The controller has started (carries the initial phase).
    Started(Phase),

    /// A phase's LEDs and text are now showing.
    PhaseEntered { phase: Phase, cycle: u64 },

    /// The button was seen pressed during the CLOSED wait.
    CrossingRequested { after_ms: u32 },

    /// The CLOSED wait ran out without a press.
    WaitTimedOut { waited_ms: u32 },

    /// OPEN ended; one full cycle is complete.
    CycleCompleted { cycles: u64, requested: bool },

    /// The display rejected a frame.  The LEDs still changed.
    DisplayFault { phase: Phase, error: Error },
}
