//! Shared UI color constants.

use ratatui::style::Color;

pub const TAB_BAR_BG: Color = Color::Rgb(20, 20, 20);
pub const STATUS_BAR_BG: Color = Color::Rgb(30, 30, 30);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);

pub const ACCENT_PRIMARY: Color = Color::Cyan;
pub const ACCENT_ERROR: Color = Color::Rgb(230, 90, 90);

pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

pub const BORDER_FOCUSED: Color = Color::Cyan;
pub const BORDER_DEFAULT: Color = Color::Rgb(70, 70, 70);

/// Box colors for the three element roles
pub const ROLE_SWAPPED: Color = Color::Rgb(76, 175, 80);
pub const ROLE_COMPARING: Color = Color::Rgb(33, 150, 243);
pub const ROLE_IDLE: Color = Color::Rgb(120, 120, 120);
