mod app;
mod config;
mod game;
mod render;
mod theme;
mod wordbank;

use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use theme::Theme;
use wordbank::WordBank;

/// Poll/tick interval for the event loop
const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "wordsearch", about = "Terminal word-search puzzle game", version)]
struct Cli {
    /// Word file backing the random-word fetch (one word per line)
    #[arg(short = 'f', long)]
    words_file: Option<PathBuf>,

    /// How many random words a fetch asks for
    #[arg(short = 'c', long)]
    count: Option<usize>,

    /// Color theme: dark, light, or high-contrast
    #[arg(short = 't', long)]
    theme: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(count) = cli.count {
        config.word_count = count.clamp(config::MIN_WORD_COUNT, config::MAX_WORD_COUNT);
    }
    if let Some(name) = &cli.theme {
        match Theme::by_name(name) {
            Some(theme) => config.theme = theme.name.to_string(),
            None => {
                eprintln!("Unknown theme '{name}'; expected dark, light, or high-contrast");
                std::process::exit(2);
            }
        }
    }

    let bank = match &cli.words_file {
        Some(path) => WordBank::from_file(path)?,
        None => WordBank::embedded(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let mut app = App::new(config, Box::new(bank));
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    app.config.save();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Handle Ctrl+C
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        break;
                    }

                    match app.handle_key(key) {
                        app::AppAction::Continue => {}
                        app::AppAction::Quit => break,
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        // Tick the message and hint countdowns
        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
