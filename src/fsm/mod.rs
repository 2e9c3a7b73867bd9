//! Phase table and sequencer for the crossing signal.
//!
//! ```text
//!  ┌────────────────────────────────────────────────────────────┐
//!  │  PHASE_TABLE                                               │
//!  │  ┌───────────┬──────────────┬──────────────┬────────────┐  │
//!  │  │ Phase     │ leds (R,G,B) │ message[4]   │ dwell      │  │
//!  │  ├───────────┼──────────────┼──────────────┼────────────┤  │
//!  │  │ Closed    │ (1,0,0)      │ SINAL FECH.. │ AwaitReq.  │  │
//!  │  │ Attention │ (1,1,0)      │ SINAL DE ..  │ Fixed      │  │
//!  │  │ Open      │ (0,1,0)      │ SINAL ABER.. │ ByRequest  │  │
//!  │  └───────────┴──────────────┴──────────────┴────────────┘  │
//!  └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Descriptors are pure data.  The [`Sequencer`] owns the only mutable
//! state: the active phase, whether the last CLOSED wait saw a crossing
//! request, and the completed-cycle count.  Durations live in
//! [`SignalConfig`](crate::config::SignalConfig).

pub mod table;

use log::info;

pub use table::{PHASE_TABLE, descriptor};

// ---------------------------------------------------------------------------
// Phase identity
// ---------------------------------------------------------------------------

/// Enumeration of all signal phases.
/// Must stay in sync with [`table::PHASE_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    Closed = 0,
    Attention = 1,
    Open = 2,
}

impl Phase {
    /// Total number of phases — used to size the table array.
    pub const COUNT: usize = 3;

    /// Phase entered at power-on.
    pub const INITIAL: Self = Self::Closed;

    /// The phase that unconditionally follows this one.
    pub const fn next(self) -> Self {
        match self {
            Self::Closed => Self::Attention,
            Self::Attention => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn name(self) -> &'static str {
        descriptor(self).name
    }
}

// ---------------------------------------------------------------------------
// Descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Level of each signal LED while a phase is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedPattern {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl LedPattern {
    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }

    /// Everything dark.
    pub const OFF: Self = Self::new(false, false, false);
}

/// How long a phase holds before [`Phase::next`] takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dwell {
    /// Poll the button for up to `closed_wait_ms`; a press ends the wait early.
    AwaitRequest,
    /// Hold for `attention_ms`.
    Fixed,
    /// Hold for `open_requested_ms` after a request, `open_ms` otherwise.
    ByRequest,
}

/// Number of text lines every phase shows.
pub const MESSAGE_LINES: usize = 4;

/// Static descriptor for a single phase.
#[derive(Debug)]
pub struct PhaseDescriptor {
    pub phase: Phase,
    pub name: &'static str,
    pub leds: LedPattern,
    pub message: [&'static str; MESSAGE_LINES],
    pub dwell: Dwell,
}

// ---------------------------------------------------------------------------
// Sequencer
// ---------------------------------------------------------------------------

/// Tracks the active phase and the one-cycle crossing request.
#[derive(Debug, Clone)]
pub struct Sequencer {
    current: Phase,
    /// Outcome of the last CLOSED wait; consumed when OPEN ends.
    crossing_requested: bool,
    /// Completed CLOSED → ATTENTION → OPEN cycles (wraps at `u64::MAX`).
    cycles: u64,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            current: Phase::INITIAL,
            crossing_requested: false,
            cycles: 0,
        }
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    pub fn descriptor(&self) -> &'static PhaseDescriptor {
        descriptor(self.current)
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether the OPEN phase of this cycle was requested by a pedestrian.
    pub fn crossing_requested(&self) -> bool {
        self.crossing_requested
    }

    /// Record the outcome of the CLOSED wait.  Ignored in any other phase.
    pub fn record_request(&mut self, pressed: bool) {
        debug_assert_eq!(self.current, Phase::Closed, "request outside CLOSED");
        if self.current == Phase::Closed {
            self.crossing_requested = pressed;
        }
    }

    /// Move to the next phase and return it.
    ///
    /// Leaving OPEN clears the request and completes one cycle, so a press
    /// never reaches past the OPEN phase that follows it.
    pub fn advance(&mut self) -> Phase {
        let next = self.current.next();
        info!("Signal transition: {} -> {}", self.current.name(), next.name());

        if self.current == Phase::Open {
            self.crossing_requested = false;
            self.cycles = self.cycles.wrapping_add(1);
        }
        self.current = next;
        next
    }
}
