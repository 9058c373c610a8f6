//! Vertical scrollbar rendering.

use ratatui::prelude::StatefulWidget;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Render a vertical scrollbar on the right edge if the content overflows.
pub fn render_vertical_scrollbar(
    area: Rect,
    buf: &mut Buffer,
    total: usize,
    visible: usize,
    offset: usize,
) {
    if total <= visible {
        return;
    }

    let max_scroll = total.saturating_sub(visible);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▲"))
        .end_symbol(Some("▼"))
        .track_symbol(Some("│"))
        .thumb_symbol("█");

    let mut state = ScrollbarState::new(max_scroll).position(offset);
    scrollbar.render(area, buf, &mut state);
}
