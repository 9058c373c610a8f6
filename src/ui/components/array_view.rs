//! Array view: one bordered box per element, coloured by its role in the step.

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::core::{format_value, ElementRole, Step};

use super::theme::{ROLE_COMPARING, ROLE_IDLE, ROLE_SWAPPED, TEXT_MUTED, TEXT_SECONDARY};

pub const PLACEHOLDER: &str = "Enter comma-separated numbers and press Enter to start";

const BOX_HEIGHT: u16 = 3;
/// Box plus the index label beneath it
const ROW_HEIGHT: u16 = BOX_HEIGHT + 1;
const GAP: u16 = 1;
const MIN_BOX_WIDTH: u16 = 5;

pub fn role_style(role: ElementRole) -> Style {
    match role {
        ElementRole::Swapped => Style::default()
            .fg(ROLE_SWAPPED)
            .add_modifier(Modifier::BOLD),
        ElementRole::Comparing => Style::default()
            .fg(ROLE_COMPARING)
            .add_modifier(Modifier::BOLD),
        ElementRole::Idle => Style::default().fg(ROLE_IDLE),
    }
}

/// Renders the array state of a single step, or a placeholder when there is none
pub struct ArrayView<'a> {
    step: Option<&'a Step>,
}

impl<'a> ArrayView<'a> {
    pub fn new(step: Option<&'a Step>) -> Self {
        Self { step }
    }

    /// Legend line explaining the colours
    pub fn legend() -> Line<'static> {
        Line::from(vec![
            Span::styled("■ ", role_style(ElementRole::Swapped)),
            Span::styled("swapped   ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled("■ ", role_style(ElementRole::Comparing)),
            Span::styled("comparing   ", Style::default().fg(TEXT_SECONDARY)),
            Span::styled("■ ", role_style(ElementRole::Idle)),
            Span::styled("idle", Style::default().fg(TEXT_SECONDARY)),
        ])
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let Some(step) = self.step else {
            let y = area.y + area.height / 2;
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(TEXT_MUTED))
                .alignment(Alignment::Center)
                .render(Rect::new(area.x, y, area.width, 1), buf);
            return;
        };

        // Legend takes the bottom row
        let legend_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        Paragraph::new(Self::legend())
            .alignment(Alignment::Center)
            .render(legend_area, buf);

        let boxes_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(2));
        let shown = self.render_boxes(step, boxes_area, buf);

        // Row between the boxes and the legend notes anything scrolled out
        let hidden_before = shown.start;
        let hidden_after = step.array_state.len() - shown.end;
        if (hidden_before > 0 || hidden_after > 0) && area.height >= 3 {
            let marker = clip_marker(hidden_before, hidden_after, step.array_state.len(), &shown);
            Paragraph::new(marker)
                .style(Style::default().fg(TEXT_MUTED))
                .alignment(Alignment::Center)
                .render(Rect::new(area.x, area.y + area.height - 2, area.width, 1), buf);
        }
    }

    /// Draw as many rows of boxes as fit, scrolled so the compared pair stays
    /// visible. Returns the range of indices drawn.
    fn render_boxes(&self, step: &Step, area: Rect, buf: &mut Buffer) -> Range<usize> {
        let labels: Vec<String> = step.array_state.iter().map(|v| format_value(*v)).collect();
        let box_width = labels
            .iter()
            .map(|l| l.width() as u16 + 4)
            .max()
            .unwrap_or(MIN_BOX_WIDTH)
            .max(MIN_BOX_WIDTH)
            .min(area.width.max(MIN_BOX_WIDTH));

        let per_row = ((area.width + GAP) / (box_width + GAP)).max(1) as usize;
        let total_rows = labels.len().div_ceil(per_row);
        let visible_rows = ((area.height / ROW_HEIGHT) as usize).min(total_rows);
        if visible_rows == 0 || box_width > area.width {
            return 0..0;
        }

        let first_row = first_visible_row(step, per_row, total_rows, visible_rows);
        let shown = first_row * per_row..((first_row + visible_rows) * per_row).min(labels.len());

        let used_height = (visible_rows as u16) * ROW_HEIGHT;
        let top = area.y + area.height.saturating_sub(used_height) / 2;

        for i in shown.clone() {
            let label = &labels[i];
            let row = (i / per_row - first_row) as u16;
            let col = (i % per_row) as u16;
            let in_row = per_row.min(labels.len() - (i / per_row) * per_row) as u16;
            let row_width = in_row * box_width + in_row.saturating_sub(1) * GAP;
            let left = area.x + area.width.saturating_sub(row_width) / 2;

            let x = left + col * (box_width + GAP);
            let y = top + row * ROW_HEIGHT;

            let style = role_style(step.role_of(i));
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if step.role_of(i) == ElementRole::Swapped {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(style);
            let cell = Rect::new(x, y, box_width, BOX_HEIGHT);
            let inner = block.inner(cell);
            block.render(cell, buf);
            Paragraph::new(label.as_str())
                .style(style)
                .alignment(Alignment::Center)
                .render(inner, buf);

            Paragraph::new(i.to_string())
                .style(Style::default().fg(TEXT_MUTED))
                .alignment(Alignment::Center)
                .render(Rect::new(x, y + BOX_HEIGHT, box_width, 1), buf);
        }

        shown
    }
}

/// First row to draw: row 0 unless the compared pair lies further down
fn first_visible_row(
    step: &Step,
    per_row: usize,
    total_rows: usize,
    visible_rows: usize,
) -> usize {
    let Some((left, right)) = step.compared_indices else {
        return 0;
    };
    let (left_row, right_row) = (left / per_row, right / per_row);
    right_row
        .saturating_sub(visible_rows - 1)
        .min(left_row)
        .min(total_rows - visible_rows)
}

fn clip_marker(before: usize, after: usize, total: usize, shown: &Range<usize>) -> String {
    let range = if shown.is_empty() {
        format!("0 of {total} shown")
    } else {
        format!("{}-{} of {total}", shown.start, shown.end - 1)
    };
    match (before, after) {
        (0, after) => format!("{range} · +{after} more"),
        (before, 0) => format!("+{before} before · {range}"),
        (before, after) => format!("+{before} before · {range} · +{after} more"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_placeholder_without_step() {
        let area = Rect::new(0, 0, 70, 5);
        let mut buf = Buffer::empty(area);
        ArrayView::new(None).render(area, &mut buf);
        assert!(buffer_text(&buf).contains(PLACEHOLDER));
    }

    #[test]
    fn test_values_and_legend_rendered() {
        let trace = generate(&[3.0, 1.0, 2.5]);
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        ArrayView::new(trace.get(0)).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("3"));
        assert!(text.contains("2.5"));
        assert!(text.contains("comparing"));
    }

    #[test]
    fn test_compared_boxes_use_comparing_colour() {
        let trace = generate(&[3.0, 1.0]);
        // step 1 compares indices 0 and 1 without swapping yet
        let step = trace.get(1).unwrap();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        ArrayView::new(Some(step)).render(area, &mut buf);

        let text = buffer_text(&buf);
        let line = text.lines().position(|l| l.contains('3')).unwrap() as u16;
        let col = text
            .lines()
            .nth(line as usize)
            .unwrap()
            .chars()
            .position(|c| c == '3')
            .unwrap() as u16;
        assert_eq!(buf[(col, line)].fg, ROLE_COMPARING);
    }

    #[test]
    fn test_rows_scroll_to_compared_pair() {
        let values: Vec<f64> = (100..164).map(f64::from).collect();
        let trace = generate(&values);
        // already sorted: step 2j+1 compares indices j and j+1
        let step = trace.get(119).unwrap();
        assert_eq!(step.compared_indices, Some((59, 60)));
        let area = Rect::new(0, 0, 78, 15);
        let mut buf = Buffer::empty(area);
        ArrayView::new(Some(step)).render(area, &mut buf);

        let text = buffer_text(&buf);
        let comparing: Vec<String> = text
            .lines()
            .enumerate()
            .flat_map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .filter(|(x, _)| buf[(*x as u16, y as u16)].fg == ROLE_COMPARING)
                    .map(|(_, c)| c)
                    .collect::<Vec<_>>()
            })
            .filter(char::is_ascii_digit)
            .map(String::from)
            .collect();
        assert_eq!(comparing.concat(), "159160");
        assert!(text.contains("+"), "no clipping marker:\n{text}");
        assert!(text.contains("of 64"));
        assert!(!text.contains("100"));
    }

    #[test]
    fn test_first_rows_shown_without_comparison() {
        let values: Vec<f64> = (100..164).map(f64::from).collect();
        let trace = generate(&values);
        let area = Rect::new(0, 0, 78, 15);
        let mut buf = Buffer::empty(area);
        ArrayView::new(trace.get(0)).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("100"));
        assert!(text.contains("0-26 of 64 · +37 more"), "{text}");
    }

    #[test]
    fn test_no_marker_when_everything_fits() {
        let trace = generate(&[3.0, 1.0, 2.0]);
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        ArrayView::new(trace.get(1)).render(area, &mut buf);
        assert!(!buffer_text(&buf).contains(" more"));
    }

    #[test]
    fn test_many_values_wrap_without_panic() {
        let values: Vec<f64> = (0..40).map(|v| v as f64 * 1.5).collect();
        let trace = generate(&values);
        let area = Rect::new(0, 0, 30, 12);
        let mut buf = Buffer::empty(area);
        ArrayView::new(Some(trace.final_step())).render(area, &mut buf);
    }
}
