use ratatui::{buffer::Buffer, layout::Rect};

use super::key_hints::{render_key_hints, KeyHintBarStyle};
use super::theme::{FOOTER_BG, KEY_HINT_BG};
use crate::ui::events::{InputMode, ViewMode};

const STEP_HINT: (&str, &str) = ("←/→", "step");

/// Context for determining which footer hints to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterContext {
    /// Typing numbers
    #[default]
    Editing,
    /// Stepping through a trace
    Playback,
    /// Typing a step number
    GoTo,
    /// Reading the full log
    Log,
}

impl FooterContext {
    pub fn from_state(view_mode: ViewMode, input_mode: InputMode) -> Self {
        match (input_mode, view_mode) {
            (InputMode::Editing, _) => FooterContext::Editing,
            (InputMode::GoTo, _) => FooterContext::GoTo,
            (InputMode::Playback, ViewMode::Log) => FooterContext::Log,
            (InputMode::Playback, ViewMode::Steps) => FooterContext::Playback,
        }
    }
}

/// Footer showing keyboard shortcuts for the current context
pub struct GlobalFooter {
    hints: Vec<(&'static str, &'static str)>,
}

impl GlobalFooter {
    pub fn for_context(context: FooterContext) -> Self {
        let hints = match context {
            FooterContext::Editing => vec![
                ("enter", "start"),
                ("C-l", "example"),
                ("esc", "playback"),
                ("C-t", "new tab"),
                ("tab", "next tab"),
                ("C-q", "quit"),
            ],
            FooterContext::Playback => vec![
                STEP_HINT,
                ("g/G", "first/last"),
                ("space", "autoplay"),
                (":", "go to"),
                ("a", "full log"),
                ("i", "edit"),
                ("r", "reset"),
                ("q", "quit"),
            ],
            FooterContext::GoTo => vec![("0-9", "step"), ("enter", "jump"), ("esc", "cancel")],
            FooterContext::Log => vec![
                ("j/k", "scroll"),
                ("g/G", "top/bottom"),
                ("esc", "steps"),
                ("q", "quit"),
            ],
        };
        Self { hints }
    }

    pub fn from_state(view_mode: ViewMode, input_mode: InputMode) -> Self {
        Self::for_context(FooterContext::from_state(view_mode, input_mode))
    }

    /// Offer only the step directions the cursor can still move in
    pub fn with_step_bounds(mut self, can_retreat: bool, can_advance: bool) -> Self {
        let replacement = match (can_retreat, can_advance) {
            (true, true) => return self,
            (false, true) => Some(("→", "next")),
            (true, false) => Some(("←", "prev")),
            (false, false) => None,
        };
        if let Some(pos) = self.hints.iter().position(|hint| *hint == STEP_HINT) {
            match replacement {
                Some(hint) => self.hints[pos] = hint,
                None => {
                    self.hints.remove(pos);
                }
            }
        }
        self
    }

    pub fn hints(&self) -> &[(&'static str, &'static str)] {
        &self.hints
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_key_hints(
            area,
            buf,
            &self.hints,
            KeyHintBarStyle::footer_bar(KEY_HINT_BG, FOOTER_BG),
        );
    }
}
