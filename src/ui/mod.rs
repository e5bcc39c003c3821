//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
pub mod presenter;
mod sections;

use crate::app::App;
use crate::state::Section;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);

    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_section {
        Section::Home => sections::draw_home(frame, main_area, app),
        Section::About => sections::draw_about(frame, main_area, app),
        Section::Services => sections::draw_services(frame, main_area, app),
        Section::Portfolio => sections::draw_portfolio(frame, main_area, app),
        Section::Contact => forms::draw_contact(frame, main_area, app),
    }

    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: area.height.min(1),
    };
    layout::draw_status_bar(frame, status_area, app);
}
