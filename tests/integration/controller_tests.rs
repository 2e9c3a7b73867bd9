//! Integration tests for `SignalController` — full cycles against the
//! mock board on a virtual clock.

use crosswalk::app::events::AppEvent;
use crosswalk::app::input::ButtonEvent;
use crosswalk::app::service::{PhaseReport, SignalController};
use crosswalk::config::SignalConfig;
use crosswalk::error::{DisplayError, Error};
use crosswalk::fsm::{LedPattern, Phase, descriptor};

use super::mock_hw::Rig;

fn run(rig: &mut Rig, ctl: &mut SignalController, phases: usize) -> Vec<PhaseReport> {
    (0..phases)
        .map(|_| {
            ctl.run_phase(
                &mut rig.board,
                &mut rig.display,
                &mut rig.clock,
                &mut rig.sink,
            )
        })
        .collect()
}

// ── Timing ────────────────────────────────────────────────────

#[test]
fn unrequested_cycle_follows_default_timings() {
    let mut rig = Rig::new(vec![None, None]);
    let mut ctl = SignalController::new(SignalConfig::default());

    let reports = run(&mut rig, &mut ctl, 4);

    let t = rig.timeline.borrow();
    assert_eq!(t.frames_for(Phase::Closed), vec![0, 18_000]);
    assert_eq!(t.frames_for(Phase::Attention), vec![8_000]);
    assert_eq!(t.frames_for(Phase::Open), vec![10_000]);

    assert_eq!(
        reports[0].button,
        Some(ButtonEvent::TimedOut { waited_ms: 8_000 })
    );
    assert_eq!(reports[1].held_ms, 2_000);
    assert_eq!(reports[2].held_ms, 8_000);
    // Two full CLOSED windows, 80 samples each.
    assert_eq!(t.samples, 160);
}

#[test]
fn press_at_300ms_shortens_wait_and_lengthens_open() {
    let mut rig = Rig::new(vec![Some(300)]);
    let mut ctl = SignalController::new(SignalConfig::default());

    let reports = run(&mut rig, &mut ctl, 4);

    let t = rig.timeline.borrow();
    assert_eq!(t.frames_for(Phase::Attention), vec![300]);
    assert_eq!(t.frames_for(Phase::Open), vec![2_300]);
    assert_eq!(t.frames_for(Phase::Closed), vec![0, 12_300]);

    assert_eq!(reports[0].button, Some(ButtonEvent::Pressed { after_ms: 300 }));
    assert_eq!(reports[2].held_ms, 10_000);
    // Samples at 0, 100, 200, 300 in the first window.
    assert_eq!(t.samples, 4);
}

#[test]
fn request_only_affects_the_following_open() {
    let mut rig = Rig::new(vec![Some(0), None]);
    let mut ctl = SignalController::new(SignalConfig::default());

    let reports = run(&mut rig, &mut ctl, 6);

    assert_eq!(reports[2].phase, Phase::Open);
    assert_eq!(reports[2].held_ms, 10_000);
    assert_eq!(reports[5].phase, Phase::Open);
    assert_eq!(reports[5].held_ms, 8_000);
    assert_eq!(ctl.cycles(), 2);
}

#[test]
fn press_held_through_several_windows_is_sampled_each_time() {
    let mut rig = Rig::new(vec![Some(0), Some(0), Some(0)]);
    let mut ctl = SignalController::new(SignalConfig::default());

    let reports = run(&mut rig, &mut ctl, 9);

    for closed in reports.iter().filter(|r| r.phase == Phase::Closed) {
        assert_eq!(closed.button, Some(ButtonEvent::Pressed { after_ms: 0 }));
    }
    // 3 × (0 + 2000 + 10000)
    assert_eq!(rig.now_ms(), 36_000);
}

// ── Outputs ───────────────────────────────────────────────────

#[test]
fn lights_match_phase_when_each_frame_is_pushed() {
    let mut rig = Rig::new(vec![Some(500), None]);
    let mut ctl = SignalController::new(SignalConfig::default());

    run(&mut rig, &mut ctl, 6);

    let t = rig.timeline.borrow();
    assert_eq!(t.frames.len(), 6);
    for frame in &t.frames {
        let phase = [Phase::Closed, Phase::Attention, Phase::Open]
            .into_iter()
            .find(|p| frame.lines == descriptor(*p).message)
            .expect("frame text belongs to a phase");
        assert_eq!(frame.lights, descriptor(phase).leds);
    }
}

#[test]
fn exactly_one_led_pattern_per_phase() {
    let mut rig = Rig::new(vec![None]);
    let mut ctl = SignalController::new(SignalConfig::default());

    run(&mut rig, &mut ctl, 3);

    let t = rig.timeline.borrow();
    let patterns: Vec<LedPattern> = t.light_changes.iter().map(|(_, p)| *p).collect();
    assert_eq!(
        patterns,
        vec![
            LedPattern::new(true, false, false),
            LedPattern::new(true, true, false),
            LedPattern::new(false, true, false),
        ]
    );
    // Blue is never driven high.
    assert!(patterns.iter().all(|p| !p.blue));
}

#[test]
fn frames_carry_the_four_phase_lines() {
    let mut rig = Rig::new(vec![None]);
    let mut ctl = SignalController::new(SignalConfig::default());

    run(&mut rig, &mut ctl, 3);

    let t = rig.timeline.borrow();
    let lines: Vec<Vec<String>> = t.frames.iter().map(|f| f.lines.clone()).collect();
    assert_eq!(lines[0], ["SINAL FECHADO", "-", "AGUARDE", ""]);
    assert_eq!(lines[1], ["SINAL DE", "ATENCAO", "-", "PREPARE-SE"]);
    assert_eq!(lines[2], ["SINAL ABERTO", "-", "ATRAVESSAR COM", "CUIDADO"]);
}

#[test]
fn start_pushes_a_blank_frame_before_the_first_phase() {
    let mut rig = Rig::new(vec![None]);
    let mut ctl = SignalController::new(SignalConfig::default());

    ctl.start(&mut rig.display, &mut rig.sink);
    run(&mut rig, &mut ctl, 1);

    let t = rig.timeline.borrow();
    assert_eq!(t.frames.len(), 2);
    assert!(t.frames[0].lines.iter().all(|l| l.is_empty()));
    assert_eq!(t.frames[0].lights, LedPattern::OFF);
    assert_eq!(rig.sink.events[0], AppEvent::Started(Phase::Closed));
}

// ── Events ────────────────────────────────────────────────────

#[test]
fn events_trace_one_requested_cycle() {
    let mut rig = Rig::new(vec![Some(200)]);
    let mut ctl = SignalController::new(SignalConfig::default());

    run(&mut rig, &mut ctl, 3);

    assert_eq!(
        rig.sink.events,
        vec![
            AppEvent::PhaseEntered {
                phase: Phase::Closed,
                cycle: 0
            },
            AppEvent::CrossingRequested { after_ms: 200 },
            AppEvent::PhaseEntered {
                phase: Phase::Attention,
                cycle: 0
            },
            AppEvent::PhaseEntered {
                phase: Phase::Open,
                cycle: 0
            },
            AppEvent::CycleCompleted {
                cycles: 1,
                requested: true
            },
        ]
    );
}

#[test]
fn display_fault_is_reported_and_cycle_continues() {
    let mut rig = Rig::new(vec![None]);
    rig.display.fail_flush = true;
    let mut ctl = SignalController::new(SignalConfig::default());

    let reports = run(&mut rig, &mut ctl, 3);

    assert_eq!(reports.len(), 3);
    assert_eq!(ctl.phase(), Phase::Closed);
    assert_eq!(rig.now_ms(), 18_000);
    assert_eq!(rig.timeline.borrow().light_changes.len(), 3);

    let faults = rig
        .sink
        .events
        .iter()
        .filter(|e| {
            matches!(
                e,
                AppEvent::DisplayFault {
                    error: Error::Display(DisplayError::Bus),
                    ..
                }
            )
        })
        .count();
    assert_eq!(faults, 3);
}

#[test]
fn custom_timings_are_honoured() {
    let config = SignalConfig {
        closed_wait_ms: 1_000,
        attention_ms: 500,
        open_ms: 3_000,
        open_requested_ms: 4_000,
        button_poll_ms: 250,
    };
    config.validate().expect("valid config");

    let mut rig = Rig::new(vec![None, Some(500)]);
    let mut ctl = SignalController::new(config);

    let reports = run(&mut rig, &mut ctl, 6);

    let held: Vec<u32> = reports.iter().map(|r| r.held_ms).collect();
    assert_eq!(held, vec![1_000, 500, 3_000, 500, 500, 4_000]);
}
