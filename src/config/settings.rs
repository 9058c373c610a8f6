use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::{SessionOptions, TraceOptions};
use crate::ui::action::Action;
use crate::util::paths::config_path;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyContext, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Shortest autoplay interval accepted, in milliseconds
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of tabs allowed
    pub max_tabs: usize,
    /// Playback configuration
    pub playback: PlaybackConfig,
    /// Input validation configuration
    pub input: InputConfig,
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Delay between steps while autoplay is running
    pub autoplay_interval_ms: u64,
    /// Record a step for every comparison that does not swap
    pub record_no_swap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    /// Largest list a single sort accepts (None = unlimited)
    pub max_values: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tabs: 9,
            playback: PlaybackConfig {
                autoplay_interval_ms: 500,
                record_no_swap: true,
            },
            input: InputConfig {
                max_values: Some(64),
            },
            keybindings: default_keybindings(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlPlaybackConfig {
    pub autoplay_interval_ms: Option<u64>,
    pub record_no_swap: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlInputConfig {
    /// 0 disables the limit
    pub max_values: Option<usize>,
}

/// TOML representation of keybinding configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Global keybindings (apply to all contexts)
    #[serde(flatten)]
    pub global: HashMap<String, toml::Value>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub max_tabs: Option<usize>,
    pub playback: Option<TomlPlaybackConfig>,
    pub input: Option<TomlInputConfig>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    /// Convert TOML keybindings to KeybindingConfig.
    ///
    /// String entries and `[keys.global]` are global bindings; tables named
    /// after a context (`[keys.playback]`) hold bindings for that context only.
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();

        for (name, value) in &self.global {
            match value {
                toml::Value::String(key_str) => {
                    if let Some((combo, action)) = parse_binding(name, key_str) {
                        config.global.insert(combo, action);
                    }
                }
                toml::Value::Table(table) => {
                    let bindings = if name == KeyContext::Global.config_key() {
                        &mut config.global
                    } else if let Some(context) = context_from_name(name) {
                        config.context.entry(context).or_default()
                    } else {
                        tracing::warn!(context = %name, "Unknown keybinding context");
                        continue;
                    };
                    for (action_name, key) in table {
                        let Some(key_str) = key.as_str() else {
                            continue;
                        };
                        if let Some((combo, action)) = parse_binding(action_name, key_str) {
                            bindings.insert(combo, action);
                        }
                    }
                }
                _ => {
                    tracing::warn!(action = %name, "Keybinding must be a string or table");
                }
            }
        }

        config
    }
}

fn context_from_name(name: &str) -> Option<KeyContext> {
    KeyContext::all_contexts()
        .iter()
        .copied()
        .find(|ctx| ctx.config_key() == name)
}

fn parse_binding(action_name: &str, key_str: &str) -> Option<(crate::config::KeyCombo, Action)> {
    let Some(action) = parse_action(action_name) else {
        tracing::warn!(action = %action_name, "Unknown action in keybinding config");
        return None;
    };
    match parse_key_notation(key_str) {
        Ok(combo) => Some((combo, action)),
        Err(e) => {
            tracing::warn!(action = %action_name, key = %key_str, error = %e, "Invalid key notation");
            None
        }
    }
}

/// Parse an action name string into an Action
pub fn parse_action(name: &str) -> Option<Action> {
    match name {
        // Global
        "quit" => Some(Action::Quit),
        "new_tab" => Some(Action::NewTab),
        "close_tab" => Some(Action::CloseTab),
        "next_tab" => Some(Action::NextTab),
        "prev_tab" => Some(Action::PrevTab),

        // Input editing
        "start_sort" | "start" => Some(Action::StartSort),
        "focus_input" => Some(Action::FocusInput),
        "leave_input" => Some(Action::LeaveInput),
        "backspace" => Some(Action::Backspace),
        "delete" => Some(Action::Delete),
        "delete_word_back" => Some(Action::DeleteWordBack),
        "delete_to_start" => Some(Action::DeleteToStart),
        "move_cursor_left" => Some(Action::MoveCursorLeft),
        "move_cursor_right" => Some(Action::MoveCursorRight),
        "move_cursor_start" => Some(Action::MoveCursorStart),
        "move_cursor_end" => Some(Action::MoveCursorEnd),
        "cycle_example" | "example" => Some(Action::CycleExample),

        // Playback
        "step_forward" | "next" => Some(Action::StepForward),
        "step_backward" | "prev" => Some(Action::StepBackward),
        "jump_to_start" => Some(Action::JumpToStart),
        "jump_to_end" => Some(Action::JumpToEnd),
        "toggle_autoplay" => Some(Action::ToggleAutoplay),
        "show_all" => Some(Action::ShowAll),
        "reset" => Some(Action::Reset),

        // Go to
        "open_goto" => Some(Action::OpenGoTo),
        "confirm_goto" => Some(Action::ConfirmGoTo),
        "cancel" => Some(Action::Cancel),

        // Scrolling
        "scroll_up" => Some(Action::ScrollUp(1)),
        "scroll_down" => Some(Action::ScrollDown(1)),
        "scroll_page_up" => Some(Action::ScrollPageUp),
        "scroll_page_down" => Some(Action::ScrollPageDown),
        "scroll_to_top" => Some(Action::ScrollToTop),
        "scroll_to_bottom" => Some(Action::ScrollToBottom),

        _ => None,
    }
}

impl Config {
    /// Load configuration from `config.toml` in the data directory.
    ///
    /// Writes the bundled example when no file exists yet. Problems with an
    /// existing file are logged and the defaults are used.
    pub fn load() -> Self {
        let config_file = config_path();

        if !config_file.exists() {
            Self::create_default_config(&config_file);
            return Self::default();
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %config_file.display(),
                    error = %e,
                    "Falling back to default configuration"
                );
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Overlay the settings in a TOML document on top of the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Self::default();

        if let Some(max_tabs) = toml_config.max_tabs {
            config.max_tabs = max_tabs.max(1);
        }

        if let Some(playback) = toml_config.playback {
            if let Some(interval) = playback.autoplay_interval_ms {
                config.playback.autoplay_interval_ms = interval.max(MIN_AUTOPLAY_INTERVAL_MS);
            }
            if let Some(record_no_swap) = playback.record_no_swap {
                config.playback.record_no_swap = record_no_swap;
            }
        }

        if let Some(input) = toml_config.input {
            if let Some(max_values) = input.max_values {
                config.input.max_values = (max_values > 0).then_some(max_values);
            }
        }

        // Merge user keybindings on top of defaults
        if let Some(keys) = toml_config.keys {
            config.keybindings.merge(keys.to_keybinding_config());
        }

        Ok(config)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_max_tabs(mut self, max_tabs: usize) -> Self {
        self.max_tabs = max_tabs.max(1);
        self
    }

    pub fn with_record_no_swap(mut self, record_no_swap: bool) -> Self {
        self.playback.record_no_swap = record_no_swap;
        self
    }

    /// Options handed to every new sort session
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            trace: TraceOptions {
                record_no_swap: self.playback.record_no_swap,
            },
            max_values: self.input.max_values,
        }
    }
}
