pub mod default_keys;
pub mod keys;
mod settings;

pub use default_keys::default_keybindings;
pub use keys::{parse_key_notation, KeyCombo, KeyContext, KeyParseError, KeybindingConfig};
pub use settings::{
    parse_action, Config, ConfigError, InputConfig, PlaybackConfig, EXAMPLE_CONFIG,
    MIN_AUTOPLAY_INTERVAL_MS,
};
