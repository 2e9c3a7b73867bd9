//! The static phase table.
//!
//! ```text
//!  CLOSED ──[button pressed | 8 s elapsed]──▶ ATTENTION
//!    ▲                                            │
//!    │                                        [2 s]
//!    │                                            ▼
//!    └──────────[10 s if requested, else 8 s]── OPEN
//! ```

use super::{Dwell, LedPattern, Phase, PhaseDescriptor};

/// Indexed by `Phase as usize`.
pub static PHASE_TABLE: [PhaseDescriptor; Phase::COUNT] = [
    // Index 0 — Closed: red for pedestrians, green for traffic
    PhaseDescriptor {
        phase: Phase::Closed,
        name: "Closed",
        leds: LedPattern::new(true, false, false),
        message: ["SINAL FECHADO", "-", "AGUARDE", ""],
        dwell: Dwell::AwaitRequest,
    },
    // Index 1 — Attention: red + green reads as yellow
    PhaseDescriptor {
        phase: Phase::Attention,
        name: "Attention",
        leds: LedPattern::new(true, true, false),
        message: ["SINAL DE", "ATENCAO", "-", "PREPARE-SE"],
        dwell: Dwell::Fixed,
    },
    // Index 2 — Open: green for pedestrians
    PhaseDescriptor {
        phase: Phase::Open,
        name: "Open",
        leds: LedPattern::new(false, true, false),
        message: ["SINAL ABERTO", "-", "ATRAVESSAR COM", "CUIDADO"],
        dwell: Dwell::ByRequest,
    },
];

/// Look up the descriptor for `phase`.
pub fn descriptor(phase: Phase) -> &'static PhaseDescriptor {
    &PHASE_TABLE[phase as usize]
}
