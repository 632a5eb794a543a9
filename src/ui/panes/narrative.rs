//! Narrative pane: what the step on screen did, plus the step log

use super::StepView;
use crate::history::StepRecord;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the narrative pane
pub fn render_narrative_pane(
    frame: &mut Frame,
    area: Rect,
    view: &StepView,
    records: &[StepRecord<i64>],
    cursor: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(area);

    render_status_block(frame, chunks[0], view);
    render_log(frame, chunks[1], records, cursor);
}

fn render_status_block(frame: &mut Frame, area: Rect, view: &StepView) {
    let block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused))
        .padding(Padding::new(1, 1, 0, 0));

    let label = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = view
        .narrative
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(DEFAULT_THEME.fg))))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Indices to check: ", label),
        Span::raw(queue_text(view.work_queue)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Heap Size: ", label),
        Span::raw(format!("{} / {}", view.heap_boundary, view.values.len())),
        Span::styled("   Phase: ", label),
        Span::raw(view.phase.to_string()),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_log(frame: &mut Frame, area: Rect, records: &[StepRecord<i64>], cursor: usize) {
    let block = Block::default()
        .title(" Step Log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if records.is_empty() {
        let paragraph = Paragraph::new("(no steps yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let offset = scroll_offset(cursor, records.len(), visible_height);

    let items: Vec<ListItem> = records
        .iter()
        .skip(offset)
        .take(visible_height)
        .map(|record| {
            let style = if record.index == cursor {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(format!(
                "{:>3} {:<8} {}",
                record.index,
                record.phase.to_string(),
                record.narrative.last().map(String::as_str).unwrap_or("")
            ))
            .style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// "3, 1, 0" or "None"
fn queue_text(queue: &[usize]) -> String {
    if queue.is_empty() {
        "None".to_string()
    } else {
        queue
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// First visible row so that the cursor stays on screen, biased to the bottom
fn scroll_offset(cursor: usize, total: usize, visible: usize) -> usize {
    if total <= visible {
        return 0;
    }
    let max_offset = total - visible;
    (cursor + 1).saturating_sub(visible).min(max_offset)
}
