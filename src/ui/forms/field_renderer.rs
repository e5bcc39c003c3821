//! Field rendering utilities for forms

use crate::ui::presenter::FieldView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a contact form field from its view model
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let accent = if field.is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let value_style = if field.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = if field.value.is_empty() {
        let hint = field.placeholder.unwrap_or(if field.is_active { "" } else { "(empty)" });
        vec![Line::from(Span::styled(
            hint.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else if field.is_multiline {
        field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(field.value.clone(), value_style))]
    };

    if field.is_choice {
        // Choice fields show arrows instead of a text cursor
        if let Some(line) = lines.first_mut() {
            let arrow_style = Style::default().fg(accent);
            line.spans.insert(0, Span::styled("◀ ", arrow_style));
            line.spans.push(Span::styled(" ▶", arrow_style));
        }
    } else if field.is_active {
        if field.value.is_empty() {
            lines = vec![Line::from(cursor)];
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Draw a one-line help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
