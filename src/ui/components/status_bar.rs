use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_ERROR, STATUS_BAR_BG, TEXT_MUTED, TEXT_PRIMARY};

/// Severity of the status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Message shown beneath the array view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// One-line status bar; `right` holds mode indicators such as autoplay
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    right: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(message: Option<&'a StatusMessage>, right: &'a str) -> Self {
        Self { message, right }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let (text, style) = match self.message {
            Some(m) if m.kind == StatusKind::Error => {
                (m.text.as_str(), Style::default().fg(ACCENT_ERROR))
            }
            Some(m) => (m.text.as_str(), Style::default().fg(TEXT_PRIMARY)),
            None => ("", Style::default()),
        };

        let right_width = self.right.chars().count();
        let room = (area.width as usize).saturating_sub(right_width + 2);
        let left: String = text.chars().take(room).collect();
        let pad = (area.width as usize).saturating_sub(left.chars().count() + right_width + 2);

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(left, style),
            Span::raw(" ".repeat(pad)),
            Span::styled(self.right, Style::default().fg(TEXT_MUTED)),
            Span::raw(" "),
        ]);
        Paragraph::new(line)
            .style(Style::default().bg(STATUS_BAR_BG))
            .render(area, buf);
    }
}
