use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::scrollbar::render_vertical_scrollbar;
use super::theme::{BORDER_FOCUSED, ROLE_SWAPPED, TEXT_MUTED, TEXT_PRIMARY};

/// Scrollable view over the full plain-text log
#[derive(Debug, Clone, Default)]
pub struct LogViewState {
    lines: Vec<String>,
    scroll: usize,
    /// Inner height from the last render, used for paging
    viewport: usize,
}

impl LogViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content and jump back to the top
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_string).collect();
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll = 0;
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport.max(1))
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.saturating_sub(1).max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn styled_line(line: &str) -> Line<'_> {
        if line.starts_with(">>>") {
            Line::from(Span::styled(line, Style::default().fg(ROLE_SWAPPED)))
        } else if line.starts_with("STEP ") || line.starts_with("COMPLETE ") {
            Line::from(Span::styled(line, Style::default().fg(TEXT_PRIMARY)))
        } else {
            Line::from(Span::styled(line, Style::default().fg(TEXT_MUTED)))
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Full log ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_FOCUSED));
        let inner = block.inner(area);
        block.render(area, buf);

        self.viewport = inner.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        let visible: Vec<Line> = self
            .lines
            .iter()
            .skip(self.scroll)
            .take(self.viewport)
            .map(|l| Self::styled_line(l))
            .collect();
        Paragraph::new(visible).render(inner, buf);

        render_vertical_scrollbar(area, buf, self.lines.len(), self.viewport, self.scroll);
    }
}
