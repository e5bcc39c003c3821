//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{Focus, Section, SubmissionStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)]; // Top padding (flex)
    constraints.extend(Section::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0)); // Bottom padding (flex)

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, section) in Section::ALL.iter().enumerate() {
        let is_selected = *section == app.state.current_section;
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &format!("{}", idx + 1),
            section.label(),
            is_selected,
        );
    }
}

/// Key hints for the current section and focus
fn get_view_hints(app: &App) -> &'static str {
    let state = &app.state;
    if state.focus == Focus::Sidebar {
        return "↑/↓: section | 1-5: jump | Enter: open | q: quit";
    }
    match state.current_section {
        Section::Portfolio => "←/→: filter | Esc: back",
        Section::Contact => match state.contact.status() {
            SubmissionStatus::Success => "Enter: send another | Esc: back",
            SubmissionStatus::Sending => "Sending... | Esc: back",
            _ => "Tab/↑/↓: move | Enter: next/send | Esc: back",
        },
        _ => "Esc: back",
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission status
    let status = app.state.contact.status();
    let color = match status {
        SubmissionStatus::Idle => Color::DarkGray,
        SubmissionStatus::Sending => Color::Yellow,
        SubmissionStatus::Success => Color::Green,
        SubmissionStatus::Error { .. } => Color::Red,
    };
    spans.push(Span::styled(" ● ", Style::default().fg(color)));
    spans.push(Span::styled(
        format!("{} ", status.label()),
        Style::default().fg(color),
    ));

    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_sidebar() {
        let area = Rect::new(0, 0, 100, 40);
        let (sidebar, main) = create_layout(area);

        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(main.x, SIDEBAR_WIDTH);
        assert_eq!(main.width, 100 - SIDEBAR_WIDTH);
        // Bottom row is the status bar
        assert_eq!(sidebar.height, 39);
        assert_eq!(main.height, 39);
    }
}
