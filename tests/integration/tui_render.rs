//! Rendering tests for the full app through Ratatui's TestBackend

use super::common::driver::{press, type_text};
use super::common::terminal::{assert_screen_contains, buffer_contains, buffer_row, render_app};
use bubblestep::ui::components::PLACEHOLDER;
use bubblestep::{App, Config};
use crossterm::event::KeyCode;

#[test]
fn test_empty_tab_shows_placeholder_and_prompt() {
    let mut app = App::new(Config::default());
    let terminal = render_app(&mut app, 80, 24);
    let buffer = terminal.backend().buffer();

    assert_screen_contains(buffer, PLACEHOLDER);
    assert_screen_contains(buffer, "Enter numbers and press Enter to start");
    assert_screen_contains(buffer, "[1] new");
    // no progress bar without a trace
    assert!(!buffer_contains(buffer, "0 / "));
}

#[test]
fn test_step_render_shows_values_status_and_progress() {
    let mut app = App::new(Config::default());
    app.start_with("3, 1, 2");
    press(&mut app, KeyCode::Right);

    let terminal = render_app(&mut app, 80, 24);
    let buffer = terminal.backend().buffer();

    assert_screen_contains(buffer, "Step 1 of 8: Pass 1: Compare arr[0]=3 with arr[1]=1");
    assert_screen_contains(buffer, "1 / 8");
    assert_screen_contains(buffer, "comparing");
    assert_screen_contains(buffer, "[1] [3, 1, 2]");
}

#[test]
fn test_error_is_shown_in_status_bar() {
    let mut app = App::new(Config::default());
    app.start_with("a, 2");

    let terminal = render_app(&mut app, 80, 24);
    assert_screen_contains(terminal.backend().buffer(), "Error: 'a' not a number");
}

#[test]
fn test_log_view_renders_header() {
    let mut app = App::new(Config::default());
    app.start_with("2, 1");
    press(&mut app, KeyCode::Char('a'));

    let terminal = render_app(&mut app, 90, 30);
    let buffer = terminal.backend().buffer();
    assert_screen_contains(buffer, "Full log");
    assert_screen_contains(buffer, "COMPLETE BUBBLE SORT PROCESS");
    assert_screen_contains(buffer, ">>> SWAP <<<");
}

#[test]
fn test_goto_prompt_replaces_status() {
    let mut app = App::new(Config::default());
    app.start_with("2, 1");
    press(&mut app, KeyCode::Char(':'));
    press(&mut app, KeyCode::Char('2'));

    let terminal = render_app(&mut app, 80, 24);
    let status_row = buffer_row(terminal.backend().buffer(), 22);
    assert!(
        status_row.contains("Go to step (0-3): 2"),
        "status row was {:?}",
        status_row
    );
}

#[test]
fn test_footer_follows_mode() {
    let mut app = App::new(Config::default());
    let editing = render_app(&mut app, 100, 24);
    assert!(buffer_row(editing.backend().buffer(), 23).contains("start"));

    app.start_with("2, 1");
    let playback = render_app(&mut app, 100, 24);
    assert!(buffer_row(playback.backend().buffer(), 23).contains("autoplay"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = App::new(Config::default());
    app.start_with("9, 8, 7, 6, 5, 4, 3, 2, 1");
    render_app(&mut app, 20, 8);
    render_app(&mut app, 1, 1);
}

#[test]
fn test_last_step_shows_stats() {
    let mut app = App::new(Config::default());
    app.start_with("3, 1, 2");
    press(&mut app, KeyCode::End);

    let terminal = render_app(&mut app, 80, 24);
    assert_screen_contains(
        terminal.backend().buffer(),
        "3 comparisons, 2 swaps, 2 passes",
    );
}

#[test]
fn test_late_comparison_in_long_array_stays_visible() {
    use bubblestep::ui::components::theme::ROLE_COMPARING;

    let values: Vec<String> = (100..164).map(|v| v.to_string()).collect();
    let mut app = App::new(Config::default());
    app.start_with(&values.join(", "));
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "119");
    press(&mut app, KeyCode::Enter);

    let terminal = render_app(&mut app, 80, 24);
    let buffer = terminal.backend().buffer();
    assert_screen_contains(buffer, "Compare arr[59]=159 with arr[60]=160");

    // digits drawn in the comparing colour inside the array view
    let mut highlighted = String::new();
    for y in 5..20 {
        for x in 0..80 {
            let cell = &buffer[(x, y)];
            if cell.fg == ROLE_COMPARING && cell.symbol().chars().all(|c| c.is_ascii_digit()) {
                highlighted.push_str(cell.symbol());
            }
        }
    }
    assert_eq!(highlighted, "159160");
    assert_screen_contains(buffer, "of 64");
    assert_screen_contains(buffer, "+1 more");
}

#[test]
fn test_footer_offers_only_possible_directions() {
    let mut app = App::new(Config::default());
    app.start_with("3, 1, 2");

    let first = render_app(&mut app, 120, 24);
    let footer = buffer_row(first.backend().buffer(), 23);
    assert!(footer.contains("→  next"), "footer was {:?}", footer);
    assert!(!footer.contains('←'), "footer was {:?}", footer);

    press(&mut app, KeyCode::Right);
    let middle = render_app(&mut app, 120, 24);
    assert!(buffer_row(middle.backend().buffer(), 23).contains("←/→  step"));

    press(&mut app, KeyCode::End);
    let last = render_app(&mut app, 120, 24);
    let footer = buffer_row(last.backend().buffer(), 23);
    assert!(footer.contains("←  prev"), "footer was {:?}", footer);
    assert!(!footer.contains('→'), "footer was {:?}", footer);
}
