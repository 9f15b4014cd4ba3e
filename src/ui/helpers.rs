use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::TableData;

/// Widest a grid column may grow before its text is clipped.
const MAX_COLUMN_WIDTH: usize = 32;

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Column widths sized to the longest header or cell, capped.
pub(crate) fn column_widths(data: &TableData) -> Vec<Constraint> {
    data.columns
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let longest = data
                .rows
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            let width = longest.max(header.chars().count()).min(MAX_COLUMN_WIDTH);
            Constraint::Length(width as u16)
        })
        .collect()
}

/// Bar width that fits `count` bars (with one-cell gaps) into `available`
/// columns, never narrower than three cells.
pub(crate) fn bar_width(available: u16, count: usize) -> u16 {
    if count == 0 {
        return 3;
    }
    let count = count as u16;
    let gaps = count.saturating_sub(1);
    (available.saturating_sub(gaps) / count).clamp(3, 12)
}

/// `Label: ◀ value ▶` selector line, highlighted when it has focus.
pub(crate) fn selector_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::raw(format!("{label}: ")),
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ])
}

/// Cursor position after `value_len` characters of a `label: value` line on
/// `row` of `inner`, kept inside the area however long the value grows.
pub(crate) fn field_cursor(inner: Rect, label: &str, value_len: usize, row: u16) -> (u16, u16) {
    let prefix = u16::try_from(label.chars().count() + 2).unwrap_or(u16::MAX);
    let value_len = u16::try_from(value_len).unwrap_or(u16::MAX);
    let x = inner
        .x
        .saturating_add(prefix)
        .saturating_add(value_len)
        .min(inner.right().saturating_sub(1));
    let y = inner
        .y
        .saturating_add(row)
        .min(inner.bottom().saturating_sub(1));
    (x, y)
}
