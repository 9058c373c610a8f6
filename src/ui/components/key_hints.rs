//! Key hint rendering for the footer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{TEXT_MUTED, TEXT_SECONDARY};

#[derive(Debug, Clone, Copy)]
pub struct KeyHintBarStyle {
    pub key_style: Style,
    pub action_style: Style,
    pub item_gap: &'static str,
    pub background: Option<Color>,
}

impl KeyHintBarStyle {
    pub fn footer_bar(key_bg: Color, footer_bg: Color) -> Self {
        Self {
            key_style: Style::default().fg(TEXT_SECONDARY).bg(key_bg),
            action_style: Style::default().fg(TEXT_MUTED),
            item_gap: "   ",
            background: Some(footer_bg),
        }
    }
}

/// Render `(key, action)` pairs on one line; hints that do not fit are dropped
pub fn render_key_hints(
    area: Rect,
    buf: &mut Buffer,
    hints: &[(&str, &str)],
    style: KeyHintBarStyle,
) {
    let mut spans = vec![Span::raw(" ")];
    let mut used = 1usize;

    for (i, (key, action)) in hints.iter().enumerate() {
        let gap = if i > 0 { style.item_gap.len() } else { 0 };
        let key_text = format!(" {} ", key);
        let action_text = format!(" {}", action);
        let width = gap + key_text.chars().count() + action_text.chars().count();
        if used + width > area.width as usize {
            break;
        }
        used += width;

        if i > 0 {
            spans.push(Span::raw(style.item_gap));
        }
        spans.push(Span::styled(key_text, style.key_style));
        spans.push(Span::styled(action_text, style.action_style));
    }

    let mut paragraph = Paragraph::new(Line::from(spans));
    if let Some(bg) = style.background {
        paragraph = paragraph.style(Style::default().bg(bg));
    }
    paragraph.render(area, buf);
}
