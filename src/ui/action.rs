//! Actions that can be triggered by keybindings
//!
//! This module defines all the actions that can be bound to keys.
//! Each action represents a single, atomic operation in the UI.

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global Actions ==========
    /// Quit the application
    Quit,
    /// Open a new tab with its own session
    NewTab,
    /// Close current tab
    CloseTab,
    /// Switch to next tab
    NextTab,
    /// Switch to previous tab
    PrevTab,

    // ========== Input Box Editing ==========
    /// Sort the numbers in the input box
    StartSort,
    /// Focus the input box
    FocusInput,
    /// Leave the input box and return to playback
    LeaveInput,
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Delete word before cursor
    DeleteWordBack,
    /// Delete from cursor to start of line
    DeleteToStart,
    /// Move cursor left one character
    MoveCursorLeft,
    /// Move cursor right one character
    MoveCursorRight,
    /// Move cursor to start of line
    MoveCursorStart,
    /// Move cursor to end of line
    MoveCursorEnd,
    /// Replace the input with the next example list
    CycleExample,

    // ========== Playback ==========
    /// Show the next step
    StepForward,
    /// Show the previous step
    StepBackward,
    /// Jump to the first step
    JumpToStart,
    /// Jump to the last step
    JumpToEnd,
    /// Start or stop automatic stepping
    ToggleAutoplay,
    /// Toggle the full step log
    ShowAll,
    /// Discard the trace and clear the tab
    Reset,

    // ========== Go To Step ==========
    /// Open the go-to-step prompt
    OpenGoTo,
    /// Jump to the step typed in the prompt
    ConfirmGoTo,
    /// Cancel current prompt/mode
    Cancel,

    // ========== Log Scrolling ==========
    /// Scroll log up by N lines
    ScrollUp(u16),
    /// Scroll log down by N lines
    ScrollDown(u16),
    /// Scroll log up by a page
    ScrollPageUp,
    /// Scroll log down by a page
    ScrollPageDown,
    /// Scroll to top of log
    ScrollToTop,
    /// Scroll to bottom of log
    ScrollToBottom,
}

impl Action {
    /// Get a human-readable description of the action
    pub fn description(&self) -> &'static str {
        match self {
            // Global
            Action::Quit => "Quit application",
            Action::NewTab => "New tab",
            Action::CloseTab => "Close tab",
            Action::NextTab => "Next tab",
            Action::PrevTab => "Previous tab",

            // Input editing
            Action::StartSort => "Start sorting",
            Action::FocusInput => "Edit numbers",
            Action::LeaveInput => "Back to playback",
            Action::Backspace => "Backspace",
            Action::Delete => "Delete",
            Action::DeleteWordBack => "Delete word back",
            Action::DeleteToStart => "Delete to start",
            Action::MoveCursorLeft => "Move left",
            Action::MoveCursorRight => "Move right",
            Action::MoveCursorStart => "Move to start",
            Action::MoveCursorEnd => "Move to end",
            Action::CycleExample => "Load example",

            // Playback
            Action::StepForward => "Next step",
            Action::StepBackward => "Previous step",
            Action::JumpToStart => "First step",
            Action::JumpToEnd => "Last step",
            Action::ToggleAutoplay => "Play/pause",
            Action::ShowAll => "All steps",
            Action::Reset => "Reset",

            // Go to
            Action::OpenGoTo => "Go to step",
            Action::ConfirmGoTo => "Jump",
            Action::Cancel => "Cancel",

            // Scrolling
            Action::ScrollUp(_) => "Scroll up",
            Action::ScrollDown(_) => "Scroll down",
            Action::ScrollPageUp => "Page up",
            Action::ScrollPageDown => "Page down",
            Action::ScrollToTop => "Scroll to top",
            Action::ScrollToBottom => "Scroll to bottom",
        }
    }
}
