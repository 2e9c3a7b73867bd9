//! Signal controller — the hexagonal core.
//!
//! [`SignalController`] owns the sequencer, the input monitor and the
//! timing configuration.  All I/O flows through port traits injected at
//! call sites, making the whole cycle testable with mock adapters and a
//! virtual clock.
//!
//! ```text
//!  ButtonPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                 │     SignalController      │
//!   LightPort ◀── │  Sequencer · InputMonitor │ ──▶ StatusDisplay
//!                 └──────────────────────────┘
//!                              ▲
//!                           DelayNs
//! ```

use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::config::SignalConfig;
use crate::error::{Error, Result};
use crate::fsm::{Dwell, MESSAGE_LINES, Phase, Sequencer};

use super::events::AppEvent;
use super::input::{ButtonEvent, InputMonitor};
use super::ports::{ButtonPort, EventSink, LightPort, StatusDisplay};

/// What one call to [`SignalController::run_phase`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseReport {
    /// The phase that was shown.
    pub phase: Phase,
    /// Time spent in it before the transition.
    pub held_ms: u32,
    /// Outcome of the button wait (CLOSED only).
    pub button: Option<ButtonEvent>,
}

// ───────────────────────────────────────────────────────────────
// SignalController
// ───────────────────────────────────────────────────────────────

pub struct SignalController {
    config: SignalConfig,
    sequencer: Sequencer,
    monitor: InputMonitor,
}

impl SignalController {
    /// Construct the controller in the initial phase.
    ///
    /// Nothing is driven until [`start`](Self::start) and
    /// [`run_phase`](Self::run_phase).
    pub fn new(config: SignalConfig) -> Self {
        Self {
            monitor: InputMonitor::new(config.button_poll_ms),
            sequencer: Sequencer::new(),
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.current()
    }

    pub fn cycles(&self) -> u64 {
        self.sequencer.cycles()
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Push one blank frame so stale content from before reset disappears.
    pub fn start(&mut self, display: &mut impl StatusDisplay, sink: &mut impl EventSink) {
        display.clear();
        if let Err(error) = display.flush() {
            self.report_display_fault(error, sink);
        }
        sink.emit(&AppEvent::Started(self.phase()));
        info!("SignalController started in {:?}", self.phase());
    }

    /// Show the active phase: LEDs first, then the text frame.
    pub fn enter_phase(
        &mut self,
        lights: &mut impl LightPort,
        display: &mut impl StatusDisplay,
        sink: &mut impl EventSink,
    ) {
        let descriptor = self.sequencer.descriptor();

        lights.set_lights(descriptor.leds);
        if let Err(error) = render(display, &descriptor.message) {
            self.report_display_fault(error, sink);
        }

        sink.emit(&AppEvent::PhaseEntered {
            phase: descriptor.phase,
            cycle: self.sequencer.cycles(),
        });
    }

    // ── Per-phase orchestration ───────────────────────────────

    /// Enter the active phase, hold it per its dwell policy, then advance.
    ///
    /// The `hw` parameter satisfies **both** [`LightPort`] and
    /// [`ButtonPort`], mirroring a single board adapter.
    pub fn run_phase(
        &mut self,
        hw: &mut (impl LightPort + ButtonPort),
        display: &mut impl StatusDisplay,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> PhaseReport {
        self.enter_phase(hw, display, sink);

        let descriptor = self.sequencer.descriptor();
        let (held_ms, button) = match descriptor.dwell {
            Dwell::AwaitRequest => {
                let event = self
                    .monitor
                    .wait_with_read(hw, delay, self.config.closed_wait_ms);
                self.sequencer.record_request(event.is_pressed());
                match event {
                    ButtonEvent::Pressed { after_ms } => {
                        info!("Crossing requested after {} ms", after_ms);
                        sink.emit(&AppEvent::CrossingRequested { after_ms });
                    }
                    ButtonEvent::TimedOut { waited_ms } => {
                        sink.emit(&AppEvent::WaitTimedOut { waited_ms });
                    }
                }
                (event.elapsed_ms(), Some(event))
            }
            Dwell::Fixed => {
                delay.delay_ms(self.config.attention_ms);
                (self.config.attention_ms, None)
            }
            Dwell::ByRequest => {
                let hold_ms = self
                    .config
                    .open_hold_ms(self.sequencer.crossing_requested());
                delay.delay_ms(hold_ms);
                (hold_ms, None)
            }
        };

        let requested = self.sequencer.crossing_requested();
        self.sequencer.advance();

        if descriptor.phase == Phase::Open {
            sink.emit(&AppEvent::CycleCompleted {
                cycles: self.sequencer.cycles(),
                requested,
            });
        }

        PhaseReport {
            phase: descriptor.phase,
            held_ms,
            button,
        }
    }

    /// The firmware main loop.  Never returns.
    pub fn run_forever(
        &mut self,
        hw: &mut (impl LightPort + ButtonPort),
        display: &mut impl StatusDisplay,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.run_phase(hw, display, delay, sink);
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn report_display_fault(&self, error: Error, sink: &mut impl EventSink) {
        warn!("Display fault in {:?}: {}", self.phase(), error);
        sink.emit(&AppEvent::DisplayFault {
            phase: self.phase(),
            error,
        });
    }
}

/// Clear, draw all four lines top to bottom, push.
fn render(display: &mut impl StatusDisplay, lines: &[&str; MESSAGE_LINES]) -> Result<()> {
    display.clear();
    for (row, line) in lines.iter().enumerate() {
        display.draw_line(row as u8, line)?;
    }
    display.flush()
}
