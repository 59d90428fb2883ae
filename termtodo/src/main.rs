//! `TermTodo` — terminal-native task list.
//!
//! Launches the TUI over a persisted task collection. Configuration via
//! CLI flags, environment variables, or config file
//! (`~/.config/termtodo/config.toml`).
//!
//! ```bash
//! # Default data file under the platform data directory
//! cargo run --bin termtodo
//!
//! # Explicit data file
//! cargo run --bin termtodo -- --data-file /tmp/tasks.json
//!
//! # In-memory session, nothing written to disk
//! cargo run --bin termtodo -- --ephemeral
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use termtodo::app::{App, FilterMode};
use termtodo::config::{CliArgs, ClientConfig};
use termtodo::ui;
use termtodo_store::{JsonFileStore, MemoryStore, Persistence, TaskStore};

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            ClientConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("termtodo starting");

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app over the configured persistence slot.
    let result = if config.ephemeral {
        tracing::info!("ephemeral session, task data kept in memory");
        let app = build_app(TaskStore::load(MemoryStore::new()), &config);
        run_app(&mut terminal, app, &config)
    } else {
        tracing::info!("task data at {}", config.data_file.display());
        let store = TaskStore::load(JsonFileStore::new(config.data_file.clone()));
        let app = build_app(store, &config);
        run_app(&mut terminal, app, &config)
    };

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("termtodo exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown
/// to ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("termtodo.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Apply config-driven view settings to a fresh app.
fn build_app<P: Persistence>(store: TaskStore<P>, config: &ClientConfig) -> App<P> {
    let mut app = App::new(store);
    if let Some(name) = &config.initial_filter {
        match FilterMode::from_name(name) {
            Some(filter) => app = app.with_filter(filter),
            None => tracing::warn!("unrecognized filter mode {name:?}, keeping default view"),
        }
    }
    app
}

/// Main application loop: draw a frame, poll for input, repeat.
fn run_app<P: Persistence>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App<P>,
    config: &ClientConfig,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
