//! Mock board for integration tests.
//!
//! Every mock shares one [`Timeline`] on a virtual millisecond clock, so
//! tests can assert what the LEDs showed at the instant a frame was pushed
//! and when each phase began, without sleeping.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crosswalk::app::events::AppEvent;
use crosswalk::app::ports::{ButtonPort, EventSink, Level, LightPort, StatusDisplay};
use crosswalk::display::check_line;
use crosswalk::error::{DisplayError, Result};
use crosswalk::fsm::{LedPattern, Phase, descriptor};
use embedded_hal::delay::DelayNs;

// ── Shared timeline ───────────────────────────────────────────

/// A frame as it reached the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub at_ms: u64,
    pub lines: Vec<String>,
    /// LED pattern at the moment of the flush.
    pub lights: LedPattern,
}

#[derive(Debug, Default)]
pub struct Timeline {
    pub now_ms: u64,
    pub lights: LedPattern,
    pub frames: Vec<Frame>,
    pub light_changes: Vec<(u64, LedPattern)>,
    pub samples: u32,
    /// Press offset for each CLOSED window, in order; `None` = no press.
    pub press_plan: Vec<Option<u64>>,
    closed_windows: usize,
    window_start_ms: u64,
}

pub type Shared = Rc<RefCell<Timeline>>;

impl Timeline {
    fn current_window_press(&self) -> Option<u64> {
        let idx = self.closed_windows.checked_sub(1)?;
        self.press_plan.get(idx).copied().flatten()
    }

    /// Timestamps of frames whose text belongs to `phase`.
    pub fn frames_for(&self, phase: Phase) -> Vec<u64> {
        let message = descriptor(phase).message;
        self.frames
            .iter()
            .filter(|f| f.lines == message)
            .map(|f| f.at_ms)
            .collect()
    }
}

// ── MockBoard (LightPort + ButtonPort) ────────────────────────

pub struct MockBoard {
    timeline: Shared,
}

impl LightPort for MockBoard {
    fn set_lights(&mut self, pattern: LedPattern) {
        let mut t = self.timeline.borrow_mut();
        t.lights = pattern;
        let now = t.now_ms;
        t.light_changes.push((now, pattern));
        if pattern == descriptor(Phase::Closed).leds {
            t.closed_windows += 1;
            t.window_start_ms = now;
        }
    }
}

impl ButtonPort for MockBoard {
    fn read_level(&mut self) -> Level {
        let mut t = self.timeline.borrow_mut();
        t.samples += 1;
        match t.current_window_press() {
            Some(offset) if t.now_ms - t.window_start_ms >= offset => Level::Low,
            _ => Level::High,
        }
    }
}

// ── MockDisplay (StatusDisplay) ───────────────────────────────

pub struct MockDisplay {
    timeline: Shared,
    pending: Vec<String>,
    /// Make every flush fail with a bus error.
    pub fail_flush: bool,
}

impl StatusDisplay for MockDisplay {
    fn clear(&mut self) {
        self.pending = vec![String::new(); 4];
    }

    fn draw_line(&mut self, row: u8, text: &str) -> Result<()> {
        check_line(row, text)?;
        self.pending[row as usize] = text.to_string();
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.fail_flush {
            return Err(DisplayError::Bus.into());
        }
        let mut t = self.timeline.borrow_mut();
        let frame = Frame {
            at_ms: t.now_ms,
            lines: self.pending.clone(),
            lights: t.lights,
        };
        t.frames.push(frame);
        Ok(())
    }
}

// ── MockClock (DelayNs) ───────────────────────────────────────

pub struct MockClock {
    timeline: Shared,
}

impl DelayNs for MockClock {
    fn delay_ns(&mut self, ns: u32) {
        self.timeline.borrow_mut().now_ms += u64::from(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timeline.borrow_mut().now_ms += u64::from(ms);
    }
}

// ── RecordingSink (EventSink) ─────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Rig ───────────────────────────────────────────────────────

pub struct Rig {
    pub board: MockBoard,
    pub display: MockDisplay,
    pub clock: MockClock,
    pub sink: RecordingSink,
    pub timeline: Shared,
}

impl Rig {
    /// `press_plan[i]` is the press offset (ms) inside the i-th CLOSED window.
    pub fn new(press_plan: Vec<Option<u64>>) -> Self {
        let timeline: Shared = Rc::new(RefCell::new(Timeline {
            press_plan,
            ..Timeline::default()
        }));
        Self {
            board: MockBoard {
                timeline: Rc::clone(&timeline),
            },
            display: MockDisplay {
                timeline: Rc::clone(&timeline),
                pending: vec![String::new(); 4],
                fail_flush: false,
            },
            clock: MockClock {
                timeline: Rc::clone(&timeline),
            },
            sink: RecordingSink::default(),
            timeline,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.timeline.borrow().now_ms
    }
}
