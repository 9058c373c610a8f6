//! Default keybindings
//!
//! This module defines the default keybindings that are used
//! when no user configuration is present.

use std::collections::HashMap;

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global Keybindings ==========
    // Control chords only, so they never collide with typed numbers

    bind(&mut config.global, "C-q", Action::Quit);
    bind(&mut config.global, "C-c", Action::Quit);
    bind(&mut config.global, "C-t", Action::NewTab);
    bind(&mut config.global, "C-w", Action::CloseTab);
    bind(&mut config.global, "C-<Right>", Action::NextTab);
    bind(&mut config.global, "C-<Left>", Action::PrevTab);
    bind(&mut config.global, "<Tab>", Action::NextTab);
    bind(&mut config.global, "<BackTab>", Action::PrevTab);

    // ========== Input Box ==========
    let input = config.context.entry(KeyContext::Input).or_default();
    bind(input, "<CR>", Action::StartSort);
    bind(input, "<Esc>", Action::LeaveInput);
    bind(input, "<BS>", Action::Backspace);
    bind(input, "<Del>", Action::Delete);
    bind(input, "<Left>", Action::MoveCursorLeft);
    bind(input, "<Right>", Action::MoveCursorRight);
    bind(input, "<Home>", Action::MoveCursorStart);
    bind(input, "<End>", Action::MoveCursorEnd);
    bind(input, "C-a", Action::MoveCursorStart);
    bind(input, "C-e", Action::MoveCursorEnd);
    bind(input, "C-u", Action::DeleteToStart);
    bind(input, "M-<BS>", Action::DeleteWordBack);
    bind(input, "C-l", Action::CycleExample);

    // ========== Playback ==========
    let playback = config.context.entry(KeyContext::Playback).or_default();
    bind(playback, "<Right>", Action::StepForward);
    bind(playback, "l", Action::StepForward);
    bind(playback, "n", Action::StepForward);
    bind(playback, "<Left>", Action::StepBackward);
    bind(playback, "h", Action::StepBackward);
    bind(playback, "p", Action::StepBackward);
    bind(playback, "<Home>", Action::JumpToStart);
    bind(playback, "g", Action::JumpToStart);
    bind(playback, "<End>", Action::JumpToEnd);
    bind(playback, "G", Action::JumpToEnd);
    bind(playback, "<Space>", Action::ToggleAutoplay);
    bind(playback, ":", Action::OpenGoTo);
    bind(playback, "a", Action::ShowAll);
    bind(playback, "r", Action::Reset);
    bind(playback, "i", Action::FocusInput);
    bind(playback, "q", Action::Quit);

    // ========== Log View ==========
    let log = config.context.entry(KeyContext::Log).or_default();
    bind(log, "j", Action::ScrollDown(1));
    bind(log, "<Down>", Action::ScrollDown(1));
    bind(log, "k", Action::ScrollUp(1));
    bind(log, "<Up>", Action::ScrollUp(1));
    bind(log, "<PageDown>", Action::ScrollPageDown);
    bind(log, "<PageUp>", Action::ScrollPageUp);
    bind(log, "g", Action::ScrollToTop);
    bind(log, "G", Action::ScrollToBottom);
    bind(log, "a", Action::ShowAll);
    bind(log, "<Esc>", Action::ShowAll);
    bind(log, "i", Action::FocusInput);
    bind(log, "r", Action::Reset);
    bind(log, "q", Action::Quit);

    // ========== Go To Step ==========
    let goto = config.context.entry(KeyContext::GoTo).or_default();
    bind(goto, "<CR>", Action::ConfirmGoTo);
    bind(goto, "<Esc>", Action::Cancel);
    bind(goto, "<BS>", Action::Backspace);

    config
}
