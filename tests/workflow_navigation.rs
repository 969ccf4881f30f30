//! Integration tests for the end-to-end navigation workflows.
//!
//! Drives the app router with synthetic key events and a memory sink,
//! verifying the push/event pairing for every button in the screen
//! graph:
//!
//! - A -> B (`button_b_tapped_event`)
//! - A -> C (`button_c_tapped_event`)
//! - B -> A (`button_a_tapped_event`)
//! - C -> C (`button_c_tapped_event`, fresh instance each time)

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use screenflow::analytics::MemorySink;
use screenflow::app::App;
use screenflow::screens::{Screen, ScreenId};

fn press(app: &mut App<MemorySink>, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn new_app() -> App<MemorySink> {
    App::new(MemorySink::new())
}

// ============================================================================
// SINGLE-BUTTON CONTRACTS
// ============================================================================

#[test]
fn a_button_b_pushes_b_and_records_one_event() {
    let mut app = new_app();

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current_screen(), Some(ScreenId::B));
    assert_eq!(app.stack().depth(), 2);
    assert_eq!(app.sink().labels(), vec!["button_b_tapped_event"]);
    let event = app.sink().events[0];
    assert_eq!(event.source, ScreenId::A);
    assert_eq!(event.target, ScreenId::B);
}

#[test]
fn a_button_c_pushes_c_and_records_one_event() {
    let mut app = new_app();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current_screen(), Some(ScreenId::C));
    assert_eq!(app.stack().depth(), 2);
    assert_eq!(app.sink().labels(), vec!["button_c_tapped_event"]);
}

#[test]
fn b_button_pushes_a_and_records_one_event() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter); // A -> B

    press(&mut app, KeyCode::Enter); // B -> A

    assert_eq!(app.current_screen(), Some(ScreenId::A));
    assert_eq!(app.stack().depth(), 3);
    assert_eq!(app.sink().events[1].source, ScreenId::B);
    assert_eq!(app.sink().events[1].target, ScreenId::A);
    assert_eq!(app.sink().events[1].label, "button_a_tapped_event");
}

// ============================================================================
// SELF-LOOP AND NO-DEDUP PROPERTIES
// ============================================================================

#[test]
fn c_button_pushes_a_fresh_c_each_time_without_cap() {
    let mut app = new_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // A -> C

    let depth_before = app.stack().depth();
    let taps = 25;
    for _ in 0..taps {
        press(&mut app, KeyCode::Enter); // C -> C
    }

    assert_eq!(app.stack().depth(), depth_before + taps);
    assert_eq!(app.current_screen(), Some(ScreenId::C));

    // Every pushed entry is a separate instance, not a re-push of the
    // same screen object.
    let addrs: Vec<*const ()> = app
        .stack()
        .entries()
        .iter()
        .map(|e| std::ptr::from_ref::<dyn Screen>(e.screen.as_ref()).cast::<()>())
        .collect();
    let mut deduped = addrs.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), addrs.len());
}

#[test]
fn identical_taps_produce_independent_push_event_pairs() {
    let mut app = new_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // A -> C
    press(&mut app, KeyCode::Enter); // C -> C
    press(&mut app, KeyCode::Enter); // C -> C

    assert_eq!(app.stack().depth(), 4);
    assert_eq!(
        app.sink().labels(),
        vec![
            "button_c_tapped_event",
            "button_c_tapped_event",
            "button_c_tapped_event",
        ]
    );
}

// ============================================================================
// END-TO-END SCENARIOS
// ============================================================================

#[test]
fn scenario_a_to_b() {
    let mut app = new_app();
    assert_eq!(app.stack().depth(), 1);

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current_screen(), Some(ScreenId::B));
    assert_eq!(app.stack().depth(), 2);
    assert_eq!(app.sink().labels(), vec!["button_b_tapped_event"]);
}

#[test]
fn scenario_a_to_b_to_a() {
    let mut app = new_app();

    press(&mut app, KeyCode::Enter); // A -> B
    press(&mut app, KeyCode::Enter); // B -> A

    assert_eq!(app.current_screen(), Some(ScreenId::A));
    assert_eq!(app.stack().depth(), 3);
    assert_eq!(
        app.sink().labels(),
        vec!["button_b_tapped_event", "button_a_tapped_event"]
    );
}

#[test]
fn scenario_three_c_taps() {
    let mut app = new_app();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // A -> C
    press(&mut app, KeyCode::Enter); // C -> C
    press(&mut app, KeyCode::Enter); // C -> C

    assert_eq!(app.stack().depth(), 4);
    assert_eq!(
        app.sink().labels(),
        vec![
            "button_c_tapped_event",
            "button_c_tapped_event",
            "button_c_tapped_event",
        ]
    );
    let c_entries = app
        .stack()
        .entries()
        .iter()
        .filter(|e| e.id == ScreenId::C)
        .count();
    assert_eq!(c_entries, 3);
}

// ============================================================================
// BACK NAVIGATION (OUTSIDE THE BUTTON CONTRACT)
// ============================================================================

#[test]
fn back_unwinds_without_recording_events() {
    let mut app = new_app();
    press(&mut app, KeyCode::Enter); // A -> B
    press(&mut app, KeyCode::Enter); // B -> A
    assert_eq!(app.stack().depth(), 3);

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);

    assert_eq!(app.stack().depth(), 1);
    assert_eq!(app.current_screen(), Some(ScreenId::A));
    assert_eq!(app.sink().events.len(), 2);
    assert!(!app.should_quit());
}

#[test]
fn popping_the_root_ends_the_session() {
    let mut app = new_app();

    press(&mut app, KeyCode::Backspace);

    assert_eq!(app.stack().depth(), 0);
    assert!(app.should_quit());
}
