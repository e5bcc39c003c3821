//! Contact section: enquiry form and contact info panel

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::content::{CONTACT_INFO, SOCIAL_LINKS};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::FieldName;
use crate::ui::components::{render_action_button, render_dialog, DialogConfig, BUTTON_HEIGHT};
use crate::ui::presenter::{present, ContactView, FieldView, SubmitView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact section with the form on the left and info on the right
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(34), // Contact info
        ])
        .split(area);

    let state = &app.state;
    let view = present(
        &state.contact,
        state.contact_focus,
        state.is_contact_focused(),
    );
    draw_contact_view(frame, main_chunks[0], &view, state.is_contact_focused());
    draw_info_panel(frame, main_chunks[1]);
}

/// Render a `ContactView` into `area`
pub fn draw_contact_view(frame: &mut Frame, area: Rect, view: &ContactView, is_focused: bool) {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Send a Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match view {
        ContactView::Form {
            fields,
            submit,
            error,
            missing,
        } => draw_form(frame, inner, fields, submit, error.as_deref(), missing),
        ContactView::Confirmation {
            message,
            reset_label,
        } => {
            let hint = vec![
                Span::raw("Press "),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" to {}", reset_label.to_lowercase())),
            ];
            render_dialog(
                frame,
                inner,
                DialogConfig {
                    title: "Thank you!",
                    title_color: Color::Green,
                    border_color: Color::Green,
                    message,
                    hint: Some(hint),
                    ..Default::default()
                },
            );
        }
    }
}

fn draw_form(
    frame: &mut Frame,
    area: Rect,
    fields: &[FieldView],
    submit: &SubmitView,
    error: Option<&str>,
    missing: &[FieldName],
) {
    let banner_height = if error.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Error banner
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Service
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help
        ])
        .horizontal_margin(1)
        .split(area);

    if let Some(reason) = error {
        let banner = Paragraph::new(reason.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(banner, chunks[0]);
    }

    for (field, chunk) in fields.iter().zip(&chunks[1..5]) {
        draw_field(frame, *chunk, field);
    }

    let button_area = Rect {
        width: chunks[5].width.min(24),
        ..chunks[5]
    };
    render_action_button(
        frame,
        button_area,
        &format!("✉ {}", submit.label),
        submit.is_selected,
        submit.enabled,
        Some(Color::Green),
    );

    draw_help_text(frame, chunks[6], &help_text(submit, missing));
}

/// Help line under the form
fn help_text(submit: &SubmitView, missing: &[FieldName]) -> String {
    if !submit.enabled && !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        format!("Required: {}", labels.join(", "))
    } else {
        format!("Tab: next field | ←/→: choose service | {SUBMIT_SHORTCUT}: send")
    }
}

fn draw_info_panel(frame: &mut Frame, area: Rect) {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled("Contact Info", heading)), Line::from("")];
    for (title, detail) in CONTACT_INFO {
        lines.push(Line::from(Span::styled(
            *title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            *detail,
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Follow Me", heading)));
    for (network, url) in SOCIAL_LINKS {
        lines.push(Line::from(vec![
            Span::raw(format!("{network}: ")),
            Span::styled(*url, Style::default().fg(Color::Blue)),
        ]));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Get in Touch ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatchFailure;
    use crate::state::{ContactFocus, ContactForm};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    fn render(view: &ContactView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| draw_contact_view(frame, frame.area(), view, true))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(FieldName::Name, "Ada");
        form.edit(FieldName::Email, "ada@example.com");
        form.edit(FieldName::Service, "Web Design");
        form.edit(FieldName::Message, "Need a site");
        form
    }

    #[test]
    fn test_renders_field_labels_and_submit() {
        let text = render(&present(&ContactForm::new(), ContactFocus::default(), true));
        for field in FieldName::ALL {
            assert!(text.contains(field.label()), "missing {}", field.label());
        }
        assert!(text.contains("Send Message"));
        assert!(text.contains("Required: Your Name"));
    }

    #[test]
    fn test_renders_sending_label() {
        let mut form = filled_form();
        form.submit();
        let text = render(&present(&form, ContactFocus::SubmitButton, true));

        assert!(text.contains("Sending..."));
        assert!(!text.contains("Send Message"));
        assert!(text.contains("ada@example.com"));
    }

    #[test]
    fn test_renders_error_banner_with_values() {
        let mut form = filled_form();
        form.submit();
        form.settle(Err(DispatchFailure));
        let text = render(&present(&form, ContactFocus::SubmitButton, true));

        assert!(text.contains("Failed to send message."));
        assert!(text.contains("Need a site"));
    }

    #[test]
    fn test_renders_confirmation() {
        let mut form = filled_form();
        form.submit();
        form.settle(Ok(()));
        let text = render(&present(&form, ContactFocus::default(), true));

        assert!(text.contains("Thank you!"));
        assert!(text.contains("send another message"));
        assert!(!text.contains("Your Name"));
    }

    #[test]
    fn test_help_text_lists_missing_fields() {
        let submit = SubmitView {
            label: "Send Message",
            enabled: false,
            is_selected: false,
        };
        assert_eq!(
            help_text(&submit, &[FieldName::Email, FieldName::Message]),
            "Required: Your Email, Your Message"
        );
    }
}
