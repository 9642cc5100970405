//! Tests for the size controller state machine.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use autosize_common::Size;

use super::*;

type Calls = Rc<RefCell<Vec<Size>>>;

fn recording_callbacks() -> (SizeCallbacks, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let callbacks = SizeCallbacks::on_size_updated(move |size, _props| {
        sink.borrow_mut().push(size);
    });
    (callbacks, calls)
}

fn props(enable_animation: bool) -> AutoHeightProps {
    AutoHeightProps {
        enable_animation,
        animation_duration: Duration::from_millis(200),
        height_offset: 12.0,
        width_offset: 8.0,
        ..Default::default()
    }
}

const VIEWPORT: f64 = 390.0;

// -----------------------------------------------------------------
// Initial state
// -----------------------------------------------------------------

#[test]
fn starts_at_viewport_width_and_zero_height() {
    let (cb, _) = recording_callbacks();
    let c = SizeController::new(props(false), VIEWPORT, cb);
    assert_eq!(c.container(), Size::new(VIEWPORT, 0.0));
    assert_eq!(c.displayed_size(), Size::new(VIEWPORT + 8.0, 12.0));
    assert_eq!(c.phase(), Phase::Idle);
    assert!(!c.script().is_empty());
}

#[test]
fn opacity_fixed_at_one_without_animation() {
    let (cb, _) = recording_callbacks();
    let c = SizeController::new(props(false), VIEWPORT, cb);
    assert_eq!(c.opacity(), 1.0);
}

#[test]
fn opacity_starts_hidden_with_animation() {
    let (cb, _) = recording_callbacks();
    let c = SizeController::new(props(true), VIEWPORT, cb);
    assert_eq!(c.opacity(), 0.0);
}

// -----------------------------------------------------------------
// Accept / ignore
// -----------------------------------------------------------------

#[test]
fn accepted_report_updates_container_synchronously() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(false), VIEWPORT, cb);
    let phase = c.receive_report("320,480", Instant::now());

    assert_eq!(phase, Phase::Settled);
    assert_eq!(c.container(), Size::new(320.0, 480.0));
    assert_eq!(c.displayed_size(), Size::new(328.0, 492.0));
    assert_eq!(*calls.borrow(), vec![Size::new(320.0, 480.0)]);
}

#[test]
fn unchanged_height_is_ignored_even_if_width_differs() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(false), VIEWPORT, cb);
    let now = Instant::now();
    c.receive_report("320,480", now);

    let phase = c.receive_report("150,480", now);
    assert_eq!(phase, Phase::Unchanged);
    assert_eq!(c.container(), Size::new(320.0, 480.0));
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn zero_height_is_ignored() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(false), VIEWPORT, cb);
    let now = Instant::now();
    c.receive_report("320,480", now);

    assert_eq!(c.receive_report("320,0", now), Phase::Unchanged);
    assert_eq!(c.container(), Size::new(320.0, 480.0));
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn malformed_payloads_are_ignored() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(false), VIEWPORT, cb);
    let now = Instant::now();
    for payload in ["", "about:blank", "320", "abc,def", "320,NaN", "x,480", "-3,-4"] {
        assert_eq!(c.receive_report(payload, now), Phase::Unchanged, "{payload}");
    }
    assert_eq!(c.container(), Size::new(VIEWPORT, 0.0));
    assert!(calls.borrow().is_empty());
}

#[test]
fn displayed_size_tracks_last_accepted_report() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(false), VIEWPORT, cb);
    let now = Instant::now();
    let reports = ["300,100", "300,100", "310,250", "0,250", "200,90", "1,0"];
    for r in reports {
        c.receive_report(r, now);
    }
    assert_eq!(c.container(), Size::new(200.0, 90.0));
    assert_eq!(c.displayed_size(), Size::new(208.0, 102.0));
    assert_eq!(
        *calls.borrow(),
        vec![
            Size::new(300.0, 100.0),
            Size::new(310.0, 250.0),
            Size::new(200.0, 90.0),
        ]
    );
}

#[test]
fn height_updated_and_width_updated_are_never_invoked() {
    let hits = Rc::new(RefCell::new(0));
    let h = Rc::clone(&hits);
    let w = Rc::clone(&hits);
    let callbacks = SizeCallbacks {
        on_height_updated: Some(Box::new(move |_: Size, _: &AutoHeightProps| *h.borrow_mut() += 1)),
        on_width_updated: Some(Box::new(move |_: Size, _: &AutoHeightProps| *w.borrow_mut() += 1)),
        on_size_updated: None,
    };
    let mut c = SizeController::new(props(false), VIEWPORT, callbacks);
    c.receive_report("320,480", Instant::now());
    c.receive_report("640,960", Instant::now());
    assert_eq!(*hits.borrow(), 0);
}

#[test]
fn callback_receives_active_props() {
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    let callbacks = SizeCallbacks::on_size_updated(move |_, props| {
        *sink.borrow_mut() = Some(props.height_offset);
    });
    let mut c = SizeController::new(props(false), VIEWPORT, callbacks);
    c.receive_report("10,20", Instant::now());
    assert_eq!(*seen.borrow(), Some(12.0));
}

// -----------------------------------------------------------------
// Animation
// -----------------------------------------------------------------

#[test]
fn animated_update_fires_after_duration() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(true), VIEWPORT, cb);
    let t0 = Instant::now();

    assert_eq!(c.receive_report("320,480", t0), Phase::Updating);
    assert_eq!(c.opacity(), 0.0);
    assert_eq!(c.displayed_size(), Size::new(328.0, 492.0));
    assert!(calls.borrow().is_empty());

    assert!(c.tick(t0 + Duration::from_millis(100)));
    assert!(c.opacity() > 0.0 && c.opacity() < 1.0);
    assert!(calls.borrow().is_empty());

    assert!(c.tick(t0 + Duration::from_millis(199)));
    assert!(calls.borrow().is_empty());

    assert!(!c.tick(t0 + Duration::from_millis(200)));
    assert_eq!(c.opacity(), 1.0);
    assert_eq!(c.phase(), Phase::Settled);
    assert_eq!(*calls.borrow(), vec![Size::new(320.0, 480.0)]);

    assert!(!c.tick(t0 + Duration::from_millis(400)));
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn new_report_mid_transition_resets_opacity_and_flushes_previous() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(true), VIEWPORT, cb);
    let t0 = Instant::now();

    c.receive_report("320,480", t0);
    c.tick(t0 + Duration::from_millis(120));
    assert!(c.opacity() > 0.0);

    let t1 = t0 + Duration::from_millis(150);
    assert_eq!(c.receive_report("320,600", t1), Phase::Updating);
    assert_eq!(c.opacity(), 0.0);
    assert_eq!(c.container(), Size::new(320.0, 600.0));
    assert_eq!(*calls.borrow(), vec![Size::new(320.0, 480.0)]);

    c.tick(t1 + Duration::from_millis(200));
    assert_eq!(
        *calls.borrow(),
        vec![Size::new(320.0, 480.0), Size::new(320.0, 600.0)]
    );
}

#[test]
fn ignored_report_mid_transition_leaves_it_running() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(true), VIEWPORT, cb);
    let t0 = Instant::now();
    c.receive_report("320,480", t0);
    c.tick(t0 + Duration::from_millis(50));
    let before = c.opacity();

    assert_eq!(c.receive_report("100,480", t0 + Duration::from_millis(60)), Phase::Unchanged);
    assert_eq!(c.opacity(), before);
    assert!(c.is_animating());
    assert!(calls.borrow().is_empty());
}

#[test]
fn ignored_report_mid_transition_keeps_updating_phase() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(true), VIEWPORT, cb);
    let t0 = Instant::now();
    c.receive_report("320,480", t0);

    c.receive_report("garbage", t0 + Duration::from_millis(10));
    assert_eq!(c.phase(), Phase::Updating);
    c.receive_report("100,480", t0 + Duration::from_millis(20));
    assert_eq!(c.phase(), Phase::Updating);

    c.tick(t0 + Duration::from_millis(250));
    assert_eq!(c.phase(), Phase::Settled);
    assert_eq!(*calls.borrow(), vec![Size::new(320.0, 480.0)]);

    // Nothing pending any more: an ignored report is visible in the phase.
    c.receive_report("100,480", t0 + Duration::from_millis(300));
    assert_eq!(c.phase(), Phase::Unchanged);
}

#[test]
fn disabling_animation_mid_transition_delivers_immediately() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(true), VIEWPORT, cb);
    let t0 = Instant::now();
    c.receive_report("320,480", t0);

    c.configure(props(false));
    assert!(!c.tick(t0 + Duration::from_millis(10)));
    assert_eq!(*calls.borrow(), vec![Size::new(320.0, 480.0)]);
    assert_eq!(c.opacity(), 1.0);
    assert_eq!(c.phase(), Phase::Settled);

    c.configure(props(true));
    assert_eq!(c.opacity(), 1.0);
}

// -----------------------------------------------------------------
// Configuration changes
// -----------------------------------------------------------------

#[test]
fn configuration_change_regenerates_script_and_keeps_size() {
    let (cb, _) = recording_callbacks();
    let mut c = SizeController::new(props(false), VIEWPORT, cb);
    c.receive_report("320,480", Instant::now());
    let before = c.script().to_string();

    let mut next = props(false);
    next.has_iframe = true;
    assert_eq!(
        c.handle(ControllerEvent::ConfigurationChanged(next), Instant::now()),
        Phase::ScriptRegenerated
    );
    assert_ne!(c.script(), before);
    assert_eq!(c.container(), Size::new(320.0, 480.0));

    let mut scripted = props(false);
    scripted.custom_script = Some("window.hello = 1;".into());
    let after_iframe = c.script().to_string();
    c.configure(scripted);
    assert!(c.script().contains("window.hello = 1;"));
    assert_ne!(c.script(), after_iframe);
    assert_eq!(c.container(), Size::new(320.0, 480.0));
}

#[test]
fn new_offsets_apply_to_existing_measurement() {
    let (cb, _) = recording_callbacks();
    let mut c = SizeController::new(props(false), VIEWPORT, cb);
    c.receive_report("320,480", Instant::now());

    let mut next = props(false);
    next.height_offset = 0.0;
    next.width_offset = 0.0;
    c.configure(next);
    assert_eq!(c.displayed_size(), Size::new(320.0, 480.0));
}

#[test]
fn handle_routes_reports() {
    let (cb, calls) = recording_callbacks();
    let mut c = SizeController::new(props(false), VIEWPORT, cb);
    let phase = c.handle(ControllerEvent::ReportReceived("50,60".into()), Instant::now());
    assert_eq!(phase, Phase::Settled);
    assert_eq!(calls.borrow().len(), 1);
}

// -----------------------------------------------------------------
// End-to-end scenario
// -----------------------------------------------------------------

#[test]
fn load_then_width_only_then_zero_height() {
    let (cb, calls) = recording_callbacks();
    let p = AutoHeightProps {
        enable_animation: false,
        ..Default::default()
    };
    let mut c = SizeController::new(p, VIEWPORT, cb);
    let now = Instant::now();

    assert_eq!(c.container(), Size::new(VIEWPORT, 0.0));

    c.receive_report("320,480", now);
    assert_eq!(c.displayed_size(), Size::new(332.0, 492.0));
    assert_eq!(*calls.borrow(), vec![Size::new(320.0, 480.0)]);

    c.receive_report("150,480", now);
    assert_eq!(c.displayed_size(), Size::new(332.0, 492.0));
    assert_eq!(calls.borrow().len(), 1);

    c.receive_report("320,0", now);
    assert_eq!(c.displayed_size(), Size::new(332.0, 492.0));
    assert_eq!(calls.borrow().len(), 1);
}
