//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(phase) => {
                info!("START | initial_phase={:?}", phase);
            }
            AppEvent::PhaseEntered { phase, cycle } => {
                info!("PHASE | {:?} | cycle={}", phase, cycle);
            }
            AppEvent::CrossingRequested { after_ms } => {
                info!("BUTTON | pressed after {}ms", after_ms);
            }
            AppEvent::WaitTimedOut { waited_ms } => {
                info!("BUTTON | no request in {}ms", waited_ms);
            }
            AppEvent::CycleCompleted { cycles, requested } => {
                info!(
                    "CYCLE | #{} | open={}",
                    cycles,
                    if *requested { "requested" } else { "default" }
                );
            }
            AppEvent::DisplayFault { phase, error } => {
                warn!("DISPLAY | {:?} | {}", phase, error);
            }
        }
    }
}
