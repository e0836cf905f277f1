//! Monkeydex - Browse the monkey catalog from your terminal
//!
//! A terminal UI application that lists, searches and randomly picks monkey
//! species, keeping the catalog cached and counting which ones get viewed.

use std::io;
use std::panic;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use monkeydex::app::App;
use monkeydex::cache::{CacheConfig, RecordCache};
use monkeydex::cli::{Cli, Source, StartupConfig};
use monkeydex::data::{HttpProvider, RecordProvider, StaticProvider};
use monkeydex::logging::init_logging;
use monkeydex::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Builds the record provider selected on the command line
fn build_provider(source: &Source) -> Result<Arc<dyn RecordProvider>, Box<dyn std::error::Error>> {
    match source {
        Source::Offline => {
            info!("using built-in catalog");
            Ok(Arc::new(StaticProvider::new()))
        }
        Source::Remote { endpoint, timeout } => {
            let provider = HttpProvider::new(endpoint.clone(), *timeout)?;
            info!(endpoint = provider.endpoint(), "using remote catalog");
            Ok(Arc::new(provider))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    // Logging must be set up before the terminal is taken over
    match init_logging(config.log_dir.as_deref(), config.verbose) {
        Ok(Some(path)) => info!(
            "Monkeydex v{} starting, logging to {}",
            env!("CARGO_PKG_VERSION"),
            path.display()
        ),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let provider = build_provider(&config.source)?;
    let cache = RecordCache::new(
        provider,
        CacheConfig {
            expiry: config.cache_expiry,
            ..CacheConfig::default()
        },
    );
    let mut app = App::new(cache);

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initial render to show loading state
    terminal.draw(|f| ui::render(f, &app))?;

    // Trigger initial data load
    app.load_initial_data().await;

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| ui::render(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Run queued work, showing a busy footer while it is awaited
        if app.has_pending() {
            app.busy = true;
            terminal.draw(|f| ui::render(f, &app))?;
            app.process_pending().await;
            app.busy = false;
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    info!("Monkeydex exiting");
    Ok(())
}
