//! Cascade TUI - host screen with a modal catalog explorer.
//!
//! Dialog panes:
//! 1. Catalogs - every catalog of the fixture
//! 2. Schemas - filter input and the catalog's schemas
//! 3. Tables & Views - relations of the selected schema
//! 4. Details - owner, storage, Sample Data, columns

use std::io::{self, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use cascade_core::Fixture;
use cascade_tui::{input, ui, AppState, Config};

#[derive(Parser)]
#[command(name = "cascade-tui", about = "Cascade - terminal catalog explorer")]
struct Args {
    /// Config file. Defaults to ./cascade.toml, then the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML fixture to browse instead of the embedded catalogs.
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Start with the explorer dialog open.
    #[arg(long, default_value_t = false)]
    open: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config file: {e:#}");
        eprintln!("Using default configuration");
        Config::default()
    });

    if let Err(e) = cascade_tui::logging::init(&config.logging) {
        eprintln!("Warning: logging disabled: {e:#}");
    }
    tracing::info!("Starting Cascade TUI v{}", env!("CARGO_PKG_VERSION"));

    // Fixture: CLI flag wins over config; a bad file falls back to the embedded set.
    let mut fixture_error = None;
    let fixture = match args.fixture.as_ref().or(config.fixture.as_ref()) {
        Some(path) => Fixture::from_file(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to embedded fixture");
            fixture_error = Some(e.to_string());
            Fixture::builtin()
        }),
        None => Fixture::builtin(),
    };

    let mut dialog_config = config.dialog.clone();
    dialog_config.open_on_start |= args.open;
    let mut app = AppState::new(fixture, &dialog_config);
    if let Some(err) = fixture_error {
        app.set_error(err);
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Cascade TUI exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Block until the next input event; resizes just redraw.
        if let Event::Key(key) = event::read()? {
            input::handle_key(app, key);
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
