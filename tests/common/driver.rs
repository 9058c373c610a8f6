//! Helpers that drive the app the way a user at the keyboard would

use bubblestep::ui::AppEvent;
use bubblestep::App;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

pub fn press(app: &mut App, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(AppEvent::Input(Event::Key(KeyEvent::new(code, modifiers))));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Cursor position of the active tab, if a sort is in progress
pub fn position(app: &App) -> Option<usize> {
    app.active_tab()
        .and_then(|tab| tab.session.cursor())
        .map(|cursor| cursor.position())
}
