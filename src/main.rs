//! Terminal lifecycle, event loop, and cleanup for the On Tour TUI.

mod actions;
mod app;
mod backend;
mod commands;
mod config;
mod error;
mod events;
mod i18n;
mod search;
mod state;
mod ui;

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use app::App;
use backend::{ShowSource, ShowsClient};
use config::Config;
use events::{key_to_action, TICK_RATE};

/// Structured logging (RUST_LOG controls the filter). The terminal is in raw
/// mode, so output goes to `ONTOUR_LOG_FILE` or nowhere.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("ontour_tui=info".parse()?);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false);
    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::sink).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config)?;

    let source = match &config.shows_file {
        Some(path) => ShowSource::File(path.clone()),
        None => ShowSource::Api(ShowsClient::new(config.base_url.clone(), config.token.clone())?),
    };
    tracing::info!(source = %source.describe(), locale = ?config.locale, "starting");

    // Set up the terminal in raw / alternate-screen mode.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(source, config.locale);
    app.bootstrap();

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick = app.tick.wrapping_add(1);
        app.poll_results();

        if app.should_quit {
            return Ok(());
        }

        let tick = app.tick;
        terminal.draw(|frame| ui::render(frame, app, tick))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = key_to_action(&key, app.state.palette.visible) {
                    app.dispatch(action);
                    if app.should_quit {
                        return Ok(());
                    }
                }
            }
        }
    }
}
