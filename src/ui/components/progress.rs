use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Gauge, Widget},
};

use super::theme::{ACCENT_PRIMARY, STATUS_BAR_BG, TEXT_PRIMARY};

/// Playback progress: how far the cursor is through the trace
pub struct ProgressBar {
    position: usize,
    total: usize,
}

impl ProgressBar {
    pub fn new(position: usize, total: usize) -> Self {
        Self { position, total }
    }

    /// Fraction in [0, 1]; a single-step trace counts as finished
    pub fn ratio(&self) -> f64 {
        let last = self.total.saturating_sub(1);
        if last == 0 {
            1.0
        } else {
            (self.position.min(last) as f64) / (last as f64)
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let label = format!(
            "{} / {}",
            self.position,
            self.total.saturating_sub(1)
        );
        Gauge::default()
            .gauge_style(Style::default().fg(ACCENT_PRIMARY).bg(STATUS_BAR_BG))
            .label(ratatui::text::Span::styled(
                label,
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .ratio(self.ratio())
            .render(area, buf);
    }
}
