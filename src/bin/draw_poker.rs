use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use draw_poker::table::TableConfig;
use draw_poker::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Five-card draw poker in the terminal.
#[derive(Parser, Debug)]
#[command(name = "draw-poker", version, about)]
struct Args {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Cards each player may replace per round
    #[arg(short = 'r', long, default_value_t = 2)]
    max_replacements: usize,

    /// Write a log to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level for the log file
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn init_logging(path: &Path, level: log::LevelFilter) -> io::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = std::fs::File::create(path)?;
    simplelog::WriteLogger::init(level, config, file).map_err(io::Error::other)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path, args.log_level)?;
    }

    let config = TableConfig {
        players: args.players,
        max_replacements: args.max_replacements,
        ..TableConfig::default()
    };
    let mut app = AppState::with_config(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    if !io::stdout().is_terminal() {
        println!(
            "draw-poker needs a real terminal (TTY). Run it in a terminal and press q to quit. Version: {}",
            draw_poker::VERSION
        );
        return Ok(());
    }
    log::info!("starting draw-poker {}", draw_poker::VERSION);
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
