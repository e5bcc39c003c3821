//! Application state definitions

use super::contact::{ContactForm, FieldName};
use crate::content::PortfolioFilter;

/// Site section shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    /// Sections in sidebar order
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a section name from configuration (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(name))
            // "work" is the anchor name of the portfolio section
            .or_else(|| name.eq_ignore_ascii_case("work").then_some(Section::Portfolio))
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which pane receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

/// Focused element inside the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFocus {
    Field(FieldName),
    SubmitButton,
}

impl Default for ContactFocus {
    fn default() -> Self {
        ContactFocus::Field(FieldName::Name)
    }
}

impl ContactFocus {
    const ORDER: [ContactFocus; 5] = [
        ContactFocus::Field(FieldName::Name),
        ContactFocus::Field(FieldName::Email),
        ContactFocus::Field(FieldName::Service),
        ContactFocus::Field(FieldName::Message),
        ContactFocus::SubmitButton,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.position();
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::Field(name) => Some(*name),
            Self::SubmitButton => None,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_section: Section,
    pub focus: Focus,
    pub contact: ContactForm,
    pub contact_focus: ContactFocus,
    pub portfolio_filter: PortfolioFilter,
}

impl AppState {
    pub fn new(start_section: Section) -> Self {
        Self {
            current_section: start_section,
            contact: ContactForm::new(),
            ..Default::default()
        }
    }

    /// Switch section; focus returns to the sidebar
    pub fn select_section(&mut self, section: Section) {
        self.current_section = section;
        self.focus = Focus::Sidebar;
    }

    pub fn is_contact_focused(&self) -> bool {
        self.current_section == Section::Contact && self.focus == Focus::Content
    }
}
