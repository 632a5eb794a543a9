//! Heap tree pane
//!
//! Draws the sequence as a complete binary tree. Level `d` holds indices
//! `2^d - 1 ..= 2^(d+1) - 2`; each node is centered in a slot of
//! `width / 2^d` columns.

use super::StepView;
use crate::ui::theme::{cell_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the heap tree pane
pub fn render_tree_pane(frame: &mut Frame, area: Rect, view: &StepView) {
    let block = Block::default()
        .title(" Heap Tree ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let width = area.width.saturating_sub(2) as usize;
    let paragraph = Paragraph::new(tree_lines(view, width)).block(block);
    frame.render_widget(paragraph, area);
}

fn tree_lines(view: &StepView, width: usize) -> Vec<Line<'static>> {
    let n = view.values.len();
    if n == 0 {
        return vec![Line::from(Span::styled(
            "(empty heap)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }

    let mut lines = Vec::new();
    let mut level_start = 0;
    let mut level_len = 1;

    while level_start < n {
        let slot = (width / level_len).max(1);
        let mut spans = Vec::new();

        for index in level_start..(level_start + level_len).min(n) {
            let label = format!(" {} ", view.values[index]);
            let label_len = label.chars().count();
            let pad = slot.saturating_sub(label_len);
            let left = pad / 2;

            spans.push(Span::raw(" ".repeat(left)));
            spans.push(Span::styled(
                label,
                Style::default()
                    .bg(cell_color(index, view.heap_boundary, view.active))
                    .fg(DEFAULT_THEME.cell_text)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" ".repeat(pad - left)));
        }

        lines.push(Line::from(spans));
        lines.push(Line::default());

        level_start += level_len;
        level_len *= 2;
    }
    lines
}
