//! Portfolio TUI - terminal rendition of a design portfolio site
//!
//! Static sections plus a contact form that delivers enquiries through
//! the EmailJS API.

mod app;
mod config;
mod content;
mod dispatch;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::{ProviderConfig, TuiConfig};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dispatch::{EmailJsClient, SubmissionDispatcher};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::Section;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let tui_config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config file: {err:#}");
        TuiConfig::default()
    });

    let provider_config = ProviderConfig::init(ProviderConfig::from_env(&tui_config))?;
    let missing = provider_config.missing();
    if !missing.is_empty() {
        tracing::warn!(
            "Email provider credentials not set ({}); messages will fail to send",
            missing.join(", ")
        );
    }

    let client = EmailJsClient::new(provider_config)?;
    tracing::info!("Email provider endpoint: {}", client.endpoint());
    let dispatcher = SubmissionDispatcher::new(Arc::new(client));

    let start_section = tui_config
        .start_section
        .as_deref()
        .and_then(Section::from_name)
        .unwrap_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(dispatcher, start_section);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the cache dir; the terminal itself belongs to the UI
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "portfolio_tui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn open_log_file() -> Option<File> {
    let dir = config::project_dirs()?.cache_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("portfolio-tui.log"))
        .ok()
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Settle any dispatch that finished since the last frame
        app.poll_outcomes();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Short timeout so settled dispatches are picked up promptly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key);
            }
        }
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
