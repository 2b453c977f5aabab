//! multilang - switch the interface language at runtime
//!
//! Full-screen terminal frontend over the multilang core. Pick a language
//! in Settings and every screen follows.

use std::path::PathBuf;

use clap::Parser;
use libmultilang::config::resolve_data_path;
use libmultilang::logging::{LogFormat, LoggingConfig};
use libmultilang::Config;
use multilang_app::{
    app::{keymap, reduce, EventHandler, TuiEvent, UiState},
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui::{self, View},
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "multilang")]
#[command(about = "Switch the interface language at runtime", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the XDG config directory)
    #[arg(short, long, env = "MULTILANG_CONFIG")]
    config: Option<PathBuf>,

    /// Log format (text, json or pretty)
    #[arg(long, env = "MULTILANG_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Log file (defaults to the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let log_file = match cli.log_file {
        Some(path) => path,
        None => resolve_data_path()?.join("multilang.log"),
    };
    let level = std::env::var("MULTILANG_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    LoggingConfig::new(cli.log_format, level, cli.verbose)
        .with_file(log_file)
        .init();

    let config = match cli.config {
        Some(path) => Config::load_from_path(&path)?,
        None => Config::load_or_default()?,
    };
    let services = ServiceHandle::new(&config)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &services);
    restore_terminal(terminal)?;

    services.shutdown();
    info!("Exited");
    result
}

fn run_app(terminal: &mut Tui, services: &ServiceHandle) -> Result<()> {
    let mut state = UiState::new();
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        let language = services.language();
        let view = View::new(language, services.localization().as_ref());
        terminal.draw(|frame| ui::render(frame, &state, &view))?;

        let key = match event_handler.next()? {
            TuiEvent::Key(key) => key,
            TuiEvent::Resize(_, _) | TuiEvent::Tick => continue,
        };

        if let Some(command) = keymap(&state, key) {
            for action in services.execute(&state, command) {
                state = reduce(state, action);
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
