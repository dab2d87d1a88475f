use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use tracing_subscriber::EnvFilter;
use vitrine_core::{portfolio::Portfolio, settings::Settings};
mod events;
mod ui;
use ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    };
    let portfolio = match Portfolio::load(&settings.portfolio_path) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("portfolio not loaded ({}); using the demo portfolio", e);
            Portfolio::demo()
        }
    };

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, portfolio);

    let result = app.run(&mut terminal);

    restore_terminal(&mut terminal)?;

    result
}

// The terminal owns stdout, so logs go to a file.
fn init_tracing() -> Result<()> {
    let log_file = std::fs::File::create("vitrine.log")?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vitrine=info,vitrine_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}
