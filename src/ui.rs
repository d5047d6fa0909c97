use ratatui::{prelude::*, widgets::*};

use crate::status::SubmissionStatus;

/// Border style for a form input
pub fn field_border_style(is_focused: bool, is_editing: bool, has_error: bool) -> Style {
    if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Renders a labelled input; shows the placeholder dimmed while empty.
///
/// With `wrap_width` the content is word-wrapped into rows from
/// [`wrap_rows`], so the cursor math in [`wrapped_cursor`] matches the screen.
pub fn render_field<'a>(
    content: &'a str,
    label: &'a str,
    placeholder: &'a str,
    border_style: Style,
    wrap_width: Option<u16>,
) -> Paragraph<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", label));

    if content.is_empty() {
        return Paragraph::new(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
            .block(block);
    }

    match wrap_width {
        Some(width) => {
            let lines: Vec<Line> = wrap_rows(content, width)
                .into_iter()
                .map(|(start, end)| Line::from(&content[start..end]))
                .collect();
            // Rows already fit, so no second wrapping pass
            Paragraph::new(lines).block(block)
        }
        None => Paragraph::new(content).block(block),
    }
}

/// Banner colour per submission status
pub fn status_color(status: SubmissionStatus) -> Color {
    match status {
        SubmissionStatus::Success => Color::Green,
        SubmissionStatus::Loading => Color::Yellow,
        SubmissionStatus::Error => Color::Red,
        SubmissionStatus::Idle => Color::DarkGray,
    }
}

/// Submit control style; dimmed while a send is in flight
pub fn submit_style(is_focused: bool, is_submitting: bool) -> Style {
    if is_submitting {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    } else if is_focused {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bg(Color::Blue).bold()
    }
}

/// Byte ranges of the visual rows of `text` word-wrapped to `width` columns.
///
/// Rows break after the last space that fits; a word longer than the row is
/// split mid-word. Hard newlines always start a new row and are not part of
/// any range.
pub fn wrap_rows(text: &str, width: u16) -> Vec<(usize, usize)> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut line_offset = 0;

    for line in text.split('\n') {
        let mut start = 0;
        let mut cols = 0;
        let mut last_break: Option<usize> = None;

        for (i, c) in line.char_indices() {
            if cols == width {
                let cut = match last_break {
                    Some(b) if b > start => b,
                    _ => i,
                };
                rows.push((line_offset + start, line_offset + cut));
                start = cut;
                cols = line[cut..i].chars().count();
                last_break = line[cut..i].rfind(' ').map(|p| cut + p + 1);
            }
            cols += 1;
            if c == ' ' {
                last_break = Some(i + c.len_utf8());
            }
        }

        rows.push((line_offset + start, line_offset + line.len()));
        line_offset += line.len() + 1;
    }

    rows
}

/// Visual row and column of a byte cursor inside text wrapped by [`wrap_rows`]
pub fn wrapped_cursor(text: &str, cursor: usize, width: u16) -> (u16, u16) {
    let cursor = cursor.min(text.len());
    let rows = wrap_rows(text, width);
    let row = rows.iter().rposition(|(start, _)| *start <= cursor).unwrap_or(0);
    let start = rows[row].0;
    let col = text.get(start..cursor).map(|s| s.chars().count()).unwrap_or(0);

    // A full row pushes the caret onto the next one
    if col >= usize::from(width.max(1)) {
        (row as u16 + 1, 0)
    } else {
        (row as u16, col as u16)
    }
}

/// Column of a byte cursor in single-line text
pub fn cursor_column(text: &str, cursor: usize) -> u16 {
    let cursor = cursor.min(text.len());
    text.get(..cursor).map(|s| s.chars().count()).unwrap_or(0) as u16
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
