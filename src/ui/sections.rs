//! Static content sections

use crate::app::App;
use crate::content::{
    PortfolioFilter, ABOUT_TEXT, HERO_INTRO, HERO_NAME, HERO_TAGLINES, SERVICES, SKILLS,
};
use crate::state::Focus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn section_block(title: &str, is_focused: bool) -> Block<'static> {
    let color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn is_focused(app: &App) -> bool {
    app.state.focus == Focus::Content
}

/// Draw the hero section
pub fn draw_home(frame: &mut Frame, area: Rect, app: &App) {
    let block = section_block("Home", is_focused(app));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            HERO_NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            HERO_TAGLINES.join(" · "),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(""),
        Line::from(HERO_INTRO),
        Line::from(""),
        Line::from(Span::styled(
            "Press 5 to get in touch",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let height = lines.len() as u16 + 2;
    let centered = Rect {
        y: inner.y + inner.height.saturating_sub(height) / 2,
        height: height.min(inner.height),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        centered,
    );
}

/// Draw the about section with skill bars
pub fn draw_about(frame: &mut Frame, area: Rect, app: &App) {
    let block = section_block("About", is_focused(app));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(5), Constraint::Length(1)];
    constraints.extend(SKILLS.iter().map(|_| Constraint::Length(2)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(ABOUT_TEXT).wrap(Wrap { trim: true }),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Technical Skills",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        chunks[1],
    );

    for ((name, level), chunk) in SKILLS.iter().zip(&chunks[2..]) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .label(format!("{name} {level}%"))
            .percent(*level);
        frame.render_widget(gauge, Rect { height: chunk.height.min(1), ..*chunk });
    }
}

/// Draw the services list
pub fn draw_services(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = SERVICES
        .iter()
        .map(|service| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    service.title,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    service.description,
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    frame.render_widget(
        List::new(items).block(section_block("Services", is_focused(app))),
        area,
    );
}

/// Draw the portfolio list with its category filter
pub fn draw_portfolio(frame: &mut Frame, area: Rect, app: &App) {
    let block = section_block("Portfolio", is_focused(app));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .horizontal_margin(1)
        .split(inner);

    let current = app.state.portfolio_filter;
    let mut tabs = Vec::new();
    for filter in PortfolioFilter::ALL {
        let style = if filter == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tabs.push(Span::styled(format!(" {} ", filter.label()), style));
        tabs.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

    let items: Vec<ListItem> = current
        .items()
        .map(|item| ListItem::new(format!("• {}", item.title)))
        .collect();
    frame.render_widget(List::new(items), chunks[1]);
}
