//! Integration tests for the session command surface and the keyboard flow
//! built on top of it

use super::common::driver::{position, press, press_with, type_text};
use super::common::terminal::render_app;
use bubblestep::core::{
    Command, InputError, Navigation, Outcome, SessionError, SortSession, StepKind,
};
use bubblestep::ui::{InputMode, ViewMode};
use bubblestep::{App, Config};
use crossterm::event::{KeyCode, KeyModifiers};

fn view(outcome: Outcome) -> bubblestep::core::StepView {
    match outcome {
        Outcome::Step(view) => view,
        other => panic!("expected step, got {:?}", other),
    }
}

/// Walk [3, 1, 2] step by step and check every description
#[test]
fn test_walk_three_one_two() {
    let mut session = SortSession::default();
    let mut statuses = vec![view(session.apply(Command::Start("3, 1, 2".into())).unwrap()).status()];
    loop {
        let v = view(
            session
                .apply(Command::Navigate(Navigation::Forward))
                .unwrap(),
        );
        statuses.push(v.status());
        if !v.can_advance {
            break;
        }
    }

    assert_eq!(
        statuses,
        vec![
            "Step 0 of 8: Initial array: [3, 1, 2]",
            "Step 1 of 8: Pass 1: Compare arr[0]=3 with arr[1]=1",
            "Step 2 of 8: Pass 1: SWAPPED! Now: [1, 3, 2]",
            "Step 3 of 8: Pass 1: Compare arr[1]=3 with arr[2]=2",
            "Step 4 of 8: Pass 1: SWAPPED! Now: [1, 2, 3]",
            "Step 5 of 8: Pass 2: Compare arr[0]=1 with arr[1]=2",
            "Step 6 of 8: Pass 2: No swap",
            "Step 7 of 8: Pass 2: Sorted!",
            "Step 8 of 8: COMPLETE: [1, 2, 3]",
        ]
    );
}

#[test]
fn test_single_value_has_two_steps() {
    let mut session = SortSession::default();
    let first = view(session.apply(Command::Start("42".into())).unwrap());
    assert_eq!(first.total, 2);
    let last = view(session.apply(Command::Navigate(Navigation::Last)).unwrap());
    assert_eq!(last.step.kind, StepKind::Complete);
    assert_eq!(last.step.description, "COMPLETE: [42]");
}

#[test]
fn test_validation_errors() {
    let mut session = SortSession::default();
    let cases = [
        ("", InputError::EmptyInput),
        ("   ", InputError::EmptyInput),
        ("a, 2", InputError::InvalidToken("a".into())),
        (", ,", InputError::NoNumbersFound),
    ];
    for (text, expected) in cases {
        assert_eq!(
            session.apply(Command::Start(text.into())),
            Err(SessionError::Input(expected)),
            "input {:?}",
            text
        );
        assert!(!session.is_active());
    }
}

#[test]
fn test_show_all_then_reset() {
    let mut session = SortSession::default();
    session.apply(Command::Start("2, 1".into())).unwrap();
    let Outcome::Log(log) = session.apply(Command::ShowAll).unwrap() else {
        panic!("expected log");
    };
    assert!(log.starts_with(&"=".repeat(80)));
    assert!(log.contains("STEP 3: COMPLETE: [1, 2]"));

    session.apply(Command::Reset).unwrap();
    assert_eq!(
        session.apply(Command::Navigate(Navigation::First)),
        Err(SessionError::NoTrace)
    );
}

#[test]
fn test_keyboard_flow_across_tabs() {
    let mut app = App::new(Config::default());
    type_text(&mut app, "5, 2, 8");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Right);
    assert_eq!(position(&app), Some(1));

    // second tab starts empty and in editing mode
    press_with(&mut app, KeyCode::Char('t'), KeyModifiers::CONTROL);
    assert_eq!(app.tab_manager().len(), 2);
    assert_eq!(app.input_mode(), InputMode::Editing);
    assert_eq!(position(&app), None);

    type_text(&mut app, "9, 1");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::End);
    assert_eq!(position(&app), Some(3));

    // first tab kept its own cursor
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.tab_manager().active_index(), 0);
    assert_eq!(position(&app), Some(1));
}

#[test]
fn test_keyboard_log_view_and_back() {
    let mut app = App::new(Config::default());
    app.start_with("4, 3, 2, 1");
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.view_mode(), ViewMode::Log);
    // rendering sizes the viewport the scroll limits depend on
    render_app(&mut app, 80, 24);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.active_tab().unwrap().log_view.scroll_offset(), 2);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.active_tab().unwrap().log_view.scroll_offset(), 0);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view_mode(), ViewMode::Steps);
}

#[test]
fn test_edit_after_error_and_retry() {
    let mut app = App::new(Config::default());
    type_text(&mut app, "3, x");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode(), InputMode::Editing);
    assert_eq!(
        app.active_tab().unwrap().status.as_ref().unwrap().text,
        "Error: 'x' not a number"
    );

    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "1");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode(), InputMode::Playback);
    assert_eq!(
        app.active_tab().unwrap().session.trace().unwrap().input(),
        &[3.0, 1.0]
    );
}

#[test]
fn test_reset_key_returns_to_editing() {
    let mut app = App::new(Config::default());
    app.start_with("2, 1");
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.input_mode(), InputMode::Editing);
    assert!(app.active_tab().unwrap().input.is_empty());
    assert_eq!(position(&app), None);
}
