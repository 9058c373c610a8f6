//! Keybinding configuration types and parsing
//!
//! This module provides types for representing keyboard shortcuts and
//! parsing vim-style key notation (e.g., "C-x", "M-<Left>", "<CR>").

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::action::Action;
use crate::ui::events::{InputMode, ViewMode};

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a KeyCombo from a crossterm KeyEvent
    ///
    /// Normalizes to the canonical form produced by config parsing:
    /// - Uppercase letters become lowercase + SHIFT, so "G" matches Shift+g
    /// - SHIFT is dropped from other printable characters, since terminals
    ///   disagree on whether ':' or '+' arrive with it
    pub fn from_key_event(event: &crossterm::event::KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => Self {
                code: event.code,
                modifiers: event.modifiers - KeyModifiers::SHIFT,
            },
            // BackTab already implies Shift
            KeyCode::BackTab => Self {
                code: event.code,
                modifiers: event.modifiers - KeyModifiers::SHIFT,
            },
            _ => Self {
                code: event.code,
                modifiers: event.modifiers,
            },
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S");
        }

        let key_str = match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::BackTab => "<BackTab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Delete => "<Del>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::PageUp => "<PageUp>".to_string(),
            KeyCode::PageDown => "<PageDown>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::F(n) => format!("<F{}>", n),
            _ => format!("{:?}", self.code),
        };

        if parts.is_empty() {
            write!(f, "{}", key_str)
        } else {
            parts.push(&key_str);
            write!(f, "{}", parts.join("-"))
        }
    }
}

/// Context for keybindings (logical grouping of input modes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyContext {
    /// Global keys that work in all modes
    Global,
    /// Typing numbers into the input box
    Input,
    /// Stepping through the array view
    Playback,
    /// Typing a step number to jump to
    GoTo,
    /// Reading the full step log
    Log,
}

impl KeyContext {
    /// Get all non-global contexts
    pub fn all_contexts() -> &'static [KeyContext] {
        &[
            KeyContext::Input,
            KeyContext::Playback,
            KeyContext::GoTo,
            KeyContext::Log,
        ]
    }

    /// Name used for the context's table in config.toml
    pub fn config_key(self) -> &'static str {
        match self {
            KeyContext::Global => "global",
            KeyContext::Input => "input",
            KeyContext::Playback => "playback",
            KeyContext::GoTo => "goto",
            KeyContext::Log => "log",
        }
    }

    /// Convert from InputMode to KeyContext
    pub fn from_input_mode(mode: InputMode, view_mode: ViewMode) -> Self {
        match mode {
            InputMode::Editing => KeyContext::Input,
            InputMode::GoTo => KeyContext::GoTo,
            InputMode::Playback => match view_mode {
                ViewMode::Log => KeyContext::Log,
                ViewMode::Steps => KeyContext::Playback,
            },
        }
    }
}

/// Configuration for all keybindings
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    /// Global keybindings (apply to all contexts unless overridden)
    pub global: HashMap<KeyCombo, Action>,
    /// Context-specific keybindings
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an action for a key combo in a given context
    /// First checks context-specific bindings, then falls back to global
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<Action> {
        self.context
            .get(&context)
            .and_then(|bindings| bindings.get(key))
            .or_else(|| self.global.get(key))
            .copied()
    }

    /// Merge user configuration on top of defaults
    pub fn merge(&mut self, other: KeybindingConfig) {
        self.global.extend(other.global);

        for (ctx, bindings) in other.context {
            self.context.entry(ctx).or_default().extend(bindings);
        }
    }
}

/// Parse a vim-style key notation string into a KeyCombo
///
/// Supported notation:
/// - `C-x` for Ctrl+x, `M-x` for Alt+x, `S-x` for Shift+x
/// - `G` for Shift+g
/// - `<CR>`, `<Esc>`, `<Tab>`, `<BackTab>`, `<BS>`, `<Del>`, `<Space>`
/// - `<Up>`, `<Down>`, `<Left>`, `<Right>`, `<PageUp>`, `<PageDown>`,
///   `<Home>`, `<End>`
/// - `<F1>` through `<F12>`
/// - modifiers inside brackets, e.g. `<C-Left>`, or before them, `M-<BS>`
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();

    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }

    if s.starts_with('<') && s.ends_with('>') {
        return parse_special_key(s);
    }

    // A lone '-' is the key itself, not a separator
    if s == "-" {
        return Ok(KeyCombo::new(KeyCode::Char('-'), KeyModifiers::NONE));
    }

    let parts: Vec<&str> = s.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;
        match *part {
            "C" if !is_last => modifiers |= KeyModifiers::CONTROL,
            "M" if !is_last => modifiers |= KeyModifiers::ALT,
            "S" if !is_last => modifiers |= KeyModifiers::SHIFT,
            _ if is_last => key_part = Some(*part),
            other => return Err(KeyParseError::InvalidModifier(other.to_string())),
        }
    }

    let key_str = key_part
        .filter(|k| !k.is_empty())
        .ok_or(KeyParseError::NoKey)?;
    let (code, needs_shift) = parse_key_code(key_str)?;

    if needs_shift {
        modifiers |= KeyModifiers::SHIFT;
    }

    Ok(KeyCombo::new(code, modifiers))
}

/// Parse a special key notation like <CR>, <C-Left>, etc.
fn parse_special_key(s: &str) -> Result<KeyCombo, KeyParseError> {
    let inner = &s[1..s.len() - 1];
    let parts: Vec<&str> = inner.split('-').collect();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_name = inner;

    if parts.len() > 1 {
        for part in &parts[..parts.len() - 1] {
            match *part {
                "C" => modifiers |= KeyModifiers::CONTROL,
                "M" => modifiers |= KeyModifiers::ALT,
                "S" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(KeyParseError::InvalidModifier(part.to_string())),
            }
        }
        key_name = parts[parts.len() - 1];
    }

    let code = match key_name.to_uppercase().as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BACKTAB" => KeyCode::BackTab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "DEL" | "DELETE" => KeyCode::Delete,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "PAGEUP" | "PGUP" => KeyCode::PageUp,
        "PAGEDOWN" | "PGDN" => KeyCode::PageDown,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "SPACE" => KeyCode::Char(' '),
        name if name.starts_with('F') && name.len() > 1 => {
            let num: u8 = name[1..]
                .parse()
                .map_err(|_| KeyParseError::InvalidSpecialKey(key_name.to_string()))?;
            if num == 0 || num > 12 {
                return Err(KeyParseError::InvalidSpecialKey(key_name.to_string()));
            }
            KeyCode::F(num)
        }
        _ => return Err(KeyParseError::InvalidSpecialKey(key_name.to_string())),
    };

    Ok(KeyCombo::new(code, modifiers))
}

/// Parse a single key code (not a special key)
/// Returns the KeyCode and whether SHIFT should be added (for uppercase chars)
fn parse_key_code(s: &str) -> Result<(KeyCode, bool), KeyParseError> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let needs_shift = c.is_ascii_uppercase();
        return Ok((KeyCode::Char(c.to_ascii_lowercase()), needs_shift));
    }

    if s.starts_with('<') && s.ends_with('>') {
        let key = parse_special_key(s)?;
        return Ok((key.code, false));
    }

    match s.to_uppercase().as_str() {
        "SPACE" => Ok((KeyCode::Char(' '), false)),
        "TAB" => Ok((KeyCode::Tab, false)),
        "ENTER" | "CR" | "RETURN" => Ok((KeyCode::Enter, false)),
        "ESC" | "ESCAPE" => Ok((KeyCode::Esc, false)),
        "BS" | "BACKSPACE" => Ok((KeyCode::Backspace, false)),
        _ => Err(KeyParseError::InvalidKey(s.to_string())),
    }
}

/// Error type for key parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key notation")]
    Empty,
    #[error("no key specified")]
    NoKey,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
    #[error("invalid special key: {0}")]
    InvalidSpecialKey(String),
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}
