//! Array pane: one colored cell per element
//!
//! Green cells are finalized, red cells were touched by the step on screen,
//! blue cells are still inside the heap. Cells wrap onto further rows when
//! the pane is narrower than the sequence.

use super::StepView;
use crate::ui::theme::{cell_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Columns taken by one cell, separator included
const CELL_WIDTH: usize = 8;

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, view: &StepView) {
    let block = Block::default()
        .title(format!(
            " Array  (heap size {} / {}) ",
            view.heap_boundary,
            view.values.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let content_width = area.width.saturating_sub(2) as usize;
    let per_row = (content_width / CELL_WIDTH).max(1);

    let lines = cell_lines(view, per_row);
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Build value/index line pairs, `per_row` cells at a time
fn cell_lines(view: &StepView, per_row: usize) -> Vec<Line<'static>> {
    if view.values.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty sequence)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }

    let mut lines = Vec::new();
    for (row, chunk) in view.values.chunks(per_row).enumerate() {
        let mut value_spans = Vec::new();
        let mut index_spans = Vec::new();

        for (offset, value) in chunk.iter().enumerate() {
            let index = row * per_row + offset;
            let bg = cell_color(index, view.heap_boundary, view.active);
            value_spans.push(Span::styled(
                format!("{:^width$}", value, width = CELL_WIDTH - 1),
                Style::default()
                    .bg(bg)
                    .fg(DEFAULT_THEME.cell_text)
                    .add_modifier(Modifier::BOLD),
            ));
            value_spans.push(Span::raw(" "));
            index_spans.push(Span::styled(
                format!("{:^width$}", format!("idx {}", index), width = CELL_WIDTH - 1),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            index_spans.push(Span::raw(" "));
        }

        lines.push(Line::from(value_spans));
        lines.push(Line::from(index_spans));
        lines.push(Line::default());
    }
    lines
}
