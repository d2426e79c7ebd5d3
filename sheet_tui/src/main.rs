//! sheet_tui - Interactive D&D 5e character sheet in the terminal

mod app;
mod ui;

use app::{App, Tab};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> io::Result<()> {
    let _guard = setup_logging()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        tracing::error!(%err, "terminal loop failed");
    }
    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::F(1), _) => app.toggle_help(),
            // The help page has nothing to edit
            _ if app.current_tab == Tab::Help => {}
            (KeyCode::Tab, _) | (KeyCode::Down, _) => app.next_field(),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => app.prev_field(),
            (KeyCode::Left, _) => app.on_left(),
            (KeyCode::Right, _) => app.on_right(),
            (KeyCode::Enter, _) => app.on_enter(),
            (KeyCode::Backspace, _) => app.on_backspace(),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => app.on_char(c),
            _ => {}
        }
    }

    tracing::info!("sheet closed");
    Ok(())
}

/// Log to a file; the terminal belongs to the UI
fn setup_logging() -> io::Result<WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "sheet_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/sheet_tui.log", log_dir.display());
    Ok(guard)
}

fn log_directory() -> PathBuf {
    std::env::temp_dir().join("sheet_tui")
}
