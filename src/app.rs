//! Application state and core logic

use crate::dispatch::{DispatchFailure, SubmissionDispatcher};
use crate::platform::is_submit_shortcut;
use crate::state::{
    next_service, prev_service, AppState, ContactFocus, FieldName, Focus, Section,
    SubmissionStatus,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Outcome of a spawned dispatch, delivered back to the UI loop
type DispatchOutcome = Result<(), DispatchFailure>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Sends accepted submissions to the email provider
    dispatcher: SubmissionDispatcher,
    outcome_tx: UnboundedSender<DispatchOutcome>,
    outcome_rx: UnboundedReceiver<DispatchOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(dispatcher: SubmissionDispatcher, start_section: Section) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::new(start_section),
            dispatcher,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Content => match self.state.current_section {
                Section::Portfolio => self.handle_portfolio_key(key),
                Section::Contact => self.handle_contact_key(key),
                _ => self.handle_static_key(key),
            },
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                let section = self.state.current_section.prev();
                self.state.select_section(section);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let section = self.state.current_section.next();
                self.state.select_section(section);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let index = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1));
                if let Some(section) = index.and_then(Section::from_index) {
                    self.state.select_section(section);
                }
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.state.focus = Focus::Content;
            }
            _ => {}
        }
    }

    fn handle_static_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Left | KeyCode::BackTab) {
            self.state.focus = Focus::Sidebar;
        }
    }

    fn handle_portfolio_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => {
                self.state.portfolio_filter = self.state.portfolio_filter.next();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.portfolio_filter = self.state.portfolio_filter.prev();
            }
            KeyCode::Esc | KeyCode::BackTab => self.state.focus = Focus::Sidebar,
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.state.focus = Focus::Sidebar;
            return;
        }

        if *self.state.contact.status() == SubmissionStatus::Success {
            if key.code == KeyCode::Enter {
                self.reset_contact();
            }
            return;
        }
        // Inputs stay locked until the outcome arrives
        if self.state.contact.status().is_sending() {
            return;
        }

        if is_submit_shortcut(&key) {
            self.submit_contact();
            return;
        }

        let focus = self.state.contact_focus;
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.contact_focus = focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.state.contact_focus = focus.prev(),
            KeyCode::Enter => match focus {
                ContactFocus::SubmitButton => {
                    self.submit_contact();
                }
                ContactFocus::Field(FieldName::Message) => {
                    self.state
                        .contact
                        .edit_with(FieldName::Message, |s| s.push('\n'));
                }
                ContactFocus::Field(_) => self.state.contact_focus = focus.next(),
            },
            _ => {
                if let Some(field) = focus.field() {
                    self.edit_field(field, key);
                }
            }
        }
    }

    /// Translate a key into an edit intent for the focused field
    fn edit_field(&mut self, field: FieldName, key: KeyEvent) {
        let contact = &mut self.state.contact;

        if field.is_choice() {
            match key.code {
                KeyCode::Right | KeyCode::Char(' ') => {
                    let next = next_service(contact.fields().get(field));
                    contact.edit(field, next);
                }
                KeyCode::Left => {
                    let prev = prev_service(contact.fields().get(field));
                    contact.edit(field, prev);
                }
                KeyCode::Backspace | KeyCode::Delete => {
                    contact.edit(field, "");
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                contact.edit_with(field, |s| s.push(c));
            }
            KeyCode::Backspace => {
                contact.edit_with(field, |s| {
                    s.pop();
                });
            }
            _ => {}
        }
    }

    /// Submit intent. Spawns the dispatch when the form accepts it.
    pub fn submit_contact(&mut self) -> bool {
        let Some(payload) = self.state.contact.submit() else {
            return false;
        };

        let dispatcher = self.dispatcher.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = dispatcher.dispatch(payload).await;
            // The receiver only closes when the app is shutting down
            let _ = tx.send(outcome);
        });
        true
    }

    /// Reset intent from the confirmation view
    pub fn reset_contact(&mut self) -> bool {
        let reset = self.state.contact.reset();
        if reset {
            self.state.contact_focus = ContactFocus::default();
        }
        reset
    }

    /// Apply dispatch outcomes that have arrived since the last frame.
    /// Returns the number applied.
    pub fn poll_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.state.contact.settle(outcome);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{MockEmailProvider, ProviderError};
    use crate::state::{FormFields, SEND_FAILED_MESSAGE};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(mock: MockEmailProvider) -> App {
        App::new(
            SubmissionDispatcher::new(Arc::new(mock)),
            Section::Contact,
        )
    }

    fn provider_ok(times: usize) -> MockEmailProvider {
        let mut mock = MockEmailProvider::new();
        mock.expect_send().times(times).returning(|_| Ok(()));
        mock
    }

    fn provider_err() -> MockEmailProvider {
        let mut mock = MockEmailProvider::new();
        mock.expect_send().times(1).returning(|_| {
            Err(ProviderError::Rejected {
                status: 412,
                body: "The Public Key is invalid".to_string(),
            })
        });
        mock
    }

    fn fill(app: &mut App, fields: &FormFields) {
        for field in FieldName::ALL {
            app.state.contact.edit(field, fields.get(field));
        }
    }

    fn scenario_fields() -> FormFields {
        FormFields::new("Ada", "ada@example.com", "Web Design", "Need a site")
    }

    /// Wait for the spawned dispatch and apply its outcome
    async fn settle_next(app: &mut App) {
        let outcome = app.outcome_rx.recv().await.expect("dispatch outcome");
        app.state.contact.settle(outcome);
    }

    #[tokio::test]
    async fn test_scenario_success_clears_fields() {
        let mut app = app_with(provider_ok(1));
        fill(&mut app, &scenario_fields());

        assert!(app.submit_contact());
        assert_eq!(app.state.contact.status(), &SubmissionStatus::Sending);
        settle_next(&mut app).await;

        assert_eq!(app.state.contact.status(), &SubmissionStatus::Success);
        assert_eq!(app.state.contact.fields(), &FormFields::default());
    }

    #[tokio::test]
    async fn test_scenario_failure_keeps_fields() {
        let mut app = app_with(provider_err());
        fill(&mut app, &scenario_fields());

        assert!(app.submit_contact());
        settle_next(&mut app).await;

        assert_eq!(
            app.state.contact.status(),
            &SubmissionStatus::Error {
                reason: SEND_FAILED_MESSAGE.to_string()
            }
        );
        assert_eq!(app.state.contact.fields(), &scenario_fields());
    }

    #[tokio::test]
    async fn test_scenario_incomplete_form_never_dispatches() {
        // times(0): any call fails the test when the mock drops
        let mut app = app_with(provider_ok(0));
        fill(
            &mut app,
            &FormFields::new("", "a@b.com", "Web Design", "hi"),
        );

        assert!(!app.submit_contact());
        assert_eq!(app.state.contact.status(), &SubmissionStatus::Idle);
        assert!(app.outcome_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_double_submit_dispatches_once() {
        let mut app = app_with(provider_ok(1));
        app.state.focus = Focus::Content;
        fill(&mut app, &scenario_fields());

        assert!(app.submit_contact());
        assert!(!app.submit_contact());
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        settle_next(&mut app).await;

        assert_eq!(app.state.contact.status(), &SubmissionStatus::Success);
        assert!(app.outcome_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let mut mock = MockEmailProvider::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(ProviderError::Rejected {
                    status: 500,
                    body: String::new(),
                })
            });
        mock.expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let mut app = app_with(mock);
        fill(&mut app, &scenario_fields());

        app.submit_contact();
        settle_next(&mut app).await;
        assert!(app.state.contact.status().error_reason().is_some());

        assert!(app.submit_contact());
        settle_next(&mut app).await;
        assert_eq!(app.state.contact.status(), &SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn test_reset_from_confirmation_via_enter() {
        let mut app = app_with(provider_ok(1));
        app.state.focus = Focus::Content;
        fill(&mut app, &scenario_fields());
        app.submit_contact();
        settle_next(&mut app).await;

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state.contact.status(), &SubmissionStatus::Idle);
        assert!(app.state.contact.fields().is_empty());
        assert_eq!(app.state.contact_focus, ContactFocus::default());
    }

    #[tokio::test]
    async fn test_poll_outcomes_applies_arrived_results() {
        let mut app = app_with(provider_ok(1));
        fill(&mut app, &scenario_fields());
        app.submit_contact();

        // Wait for the spawned task, then feed the outcome back through the channel
        let outcome = app.outcome_rx.recv().await.expect("dispatch outcome");
        app.outcome_tx.send(outcome).unwrap();

        assert_eq!(app.poll_outcomes(), 1);
        assert_eq!(app.state.contact.status(), &SubmissionStatus::Success);
        assert_eq!(app.poll_outcomes(), 0);
    }

    #[tokio::test]
    async fn test_typing_fills_focused_field() {
        let mut app = app_with(provider_ok(0));
        app.state.focus = Focus::Content;

        for c in "Ada".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Char('a')));

        assert_eq!(app.state.contact.fields().name, "Ada");
    }

    #[tokio::test]
    async fn test_keyboard_flow_submits() {
        let mut app = app_with(provider_ok(1));
        app.state.focus = Focus::Content;

        let type_text = |app: &mut App, text: &str| {
            for c in text.chars() {
                app.handle_key(key(KeyCode::Char(c)));
            }
        };

        type_text(&mut app, "Ada");
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "ada@example.com");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "Need a site");
        app.handle_key(key(KeyCode::Tab));

        assert_eq!(app.state.contact_focus, ContactFocus::SubmitButton);
        assert_eq!(app.state.contact.fields(), &scenario_fields());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.contact.status(), &SubmissionStatus::Sending);
        settle_next(&mut app).await;
        assert_eq!(app.state.contact.status(), &SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn test_keys_ignored_while_sending() {
        let mut app = app_with(provider_ok(1));
        app.state.focus = Focus::Content;
        fill(&mut app, &scenario_fields());
        app.submit_contact();

        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Tab));

        assert_eq!(app.state.contact.fields(), &scenario_fields());
        assert_eq!(app.state.contact_focus, ContactFocus::default());
        settle_next(&mut app).await;
    }

    #[tokio::test]
    async fn test_enter_in_message_inserts_newline() {
        let mut app = app_with(provider_ok(0));
        app.state.focus = Focus::Content;
        app.state.contact_focus = ContactFocus::Field(FieldName::Message);

        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('b')));

        assert_eq!(app.state.contact.fields().message, "a\nb");
    }

    #[tokio::test]
    async fn test_service_choice_cycles() {
        let mut app = app_with(provider_ok(0));
        app.state.focus = Focus::Content;
        app.state.contact_focus = ContactFocus::Field(FieldName::Service);

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.state.contact.fields().service, "Web Design");
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.state.contact.fields().service, "Video Editing");
        // Free typing does not apply to the choice field
        app.handle_key(key(KeyCode::Char('z')));
        assert_eq!(app.state.contact.fields().service, "Video Editing");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.state.contact.fields().service, "");
    }

    #[tokio::test]
    async fn test_sidebar_navigation() {
        let mut app = app_with(provider_ok(0));
        app.state.select_section(Section::Home);

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.state.current_section, Section::About);
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.state.current_section, Section::Portfolio);
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.state.current_section, Section::Portfolio);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.focus, Focus::Content);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(
            app.state.portfolio_filter,
            crate::content::PortfolioFilter::Web
        );
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state.focus, Focus::Sidebar);
    }

    #[tokio::test]
    async fn test_digits_typed_in_form_stay_in_form() {
        let mut app = app_with(provider_ok(0));
        app.state.focus = Focus::Content;

        app.handle_key(key(KeyCode::Char('1')));

        assert_eq!(app.state.current_section, Section::Contact);
        assert_eq!(app.state.contact.fields().name, "1");
    }

    #[tokio::test]
    async fn test_q_quits_only_from_sidebar() {
        let mut app = app_with(provider_ok(0));
        app.state.focus = Focus::Content;
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit());

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}
