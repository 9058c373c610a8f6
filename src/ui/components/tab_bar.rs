use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_PRIMARY, ROLE_SWAPPED, TAB_BAR_BG, TEXT_MUTED, TEXT_PRIMARY};

/// Tab bar component for switching between sessions
pub struct TabBar {
    tabs: Vec<String>,
    active: usize,
    can_add: bool,
}

impl TabBar {
    pub fn new(tabs: Vec<String>, active: usize, can_add: bool) -> Self {
        Self {
            tabs,
            active,
            can_add,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, tab) in self.tabs.iter().enumerate() {
            let is_active = i == self.active;

            if is_active {
                spans.push(Span::styled(" ▶ ", Style::default().fg(ACCENT_PRIMARY)));
            } else {
                spans.push(Span::raw("   "));
            }

            let tab_style = if is_active {
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_MUTED)
            };

            spans.push(Span::styled(format!("[{}] {}", i + 1, tab), tab_style));
            spans.push(Span::raw("  "));
        }

        if self.can_add {
            spans.push(Span::styled(" [+] C-t ", Style::default().fg(ROLE_SWAPPED)));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(TAB_BAR_BG))
            .render(area, buf);
    }
}
