//! Quartet CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The binary bridges [`quartet_engine`] (the game session) and
//! [`quartet_tui`] (rendering), with RAII-based terminal management and
//! guaranteed cleanup:
//!
//! ```text
//! main() -> config + catalog fetch -> GameSession
//!             |
//!             v
//!     run_tui()   - ratatui grid, cursor-driven
//!     run_plain() - line-based prompt loop
//! ```
//!
//! Both variants drive the session through the same three commands (toggle,
//! submit, reset) and render from its snapshot, so gameplay is identical.

use std::fs::{self, OpenOptions};
use std::io::{Stdout, Write, stdout};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use quartet_catalog::CatalogSource;
use quartet_config::QuartetConfig;
use quartet_engine::{GameSession, GuessOutcome, Word, WordStatus};
use quartet_tui::{GameApp, draw, handle_key};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.quartet/logs/quartet.log
    if let Some(config_path) = QuartetConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("quartet.log"));
    }

    // Fallback: ./.quartet/logs/quartet.log (useful in constrained environments)
    candidates.push(PathBuf::from(".quartet").join("logs").join("quartet.log"));

    candidates
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiMode {
    Tui,
    Plain,
}

impl UiMode {
    /// Resolve the requested variant; unknown values warn and fall back to
    /// the grid UI.
    fn resolve(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "plain" | "cli" | "prompt" => UiMode::Plain,
                "tui" | "grid" | "full" => UiMode::Tui,
                other => {
                    tracing::warn!("Unknown ui mode: {}", other);
                    UiMode::Tui
                }
            },
            None => UiMode::Tui,
        }
    }
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored even after panics or
/// early returns, so the terminal stays usable.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = QuartetConfig::load().ok().flatten().unwrap_or_default();
    let ui_mode = UiMode::resolve(config.ui());

    let source = CatalogSource::from_settings(config.catalog_url(), config.catalog_path());
    let catalog = match source.load().await {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            // Abort before any session exists; the process exits cleanly.
            eprintln!("Could not load the category catalog: {err}");
            std::process::exit(1);
        }
    };

    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let session = match GameSession::new(Arc::clone(&catalog), &mut rng) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Could not start a game: {err}");
            std::process::exit(1);
        }
    };

    match ui_mode {
        UiMode::Tui => run_tui(session, rng),
        UiMode::Plain => run_plain(session, rng),
    }
}

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

fn run_tui(session: GameSession, rng: StdRng) -> Result<()> {
    let mut terminal_session = TerminalSession::new()?;
    let mut app = GameApp::new(session, rng);

    loop {
        terminal_session
            .terminal
            .draw(|frame| draw(frame, &app))?;

        if event::poll(EVENT_POLL_TIMEOUT)?
            && let Event::Key(key) = event::read()?
        {
            handle_key(&mut app, key);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn run_plain(mut session: GameSession, mut rng: StdRng) -> Result<()> {
    println!("Welcome to Quartet!");
    println!("Group the words into their hidden categories of four.");

    let stdin = std::io::stdin();
    let mut input = String::new();

    loop {
        let snapshot = session.snapshot();

        println!();
        if snapshot.won {
            println!("Congratulations! You've correctly grouped all the words!");
            println!("Your groups were: {}", snapshot.guessed_categories.join(", "));
            print!("Type 'reset' for a new board or 'quit' to exit: ");
        } else {
            if !snapshot.guessed_categories.is_empty() {
                println!("Solved so far: {}", snapshot.guessed_categories.join(", "));
            }
            let pool: Vec<&str> = snapshot
                .tiles
                .iter()
                .filter(|tile| tile.status != WordStatus::Correct)
                .map(|tile| tile.word.as_str())
                .collect();
            println!("Words: {}", pool.join(", "));
            print!("Enter 4 words separated by commas (or 'reset'/'quit'): ");
        }
        stdout().flush()?;

        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            // EOF: behave like quit.
            println!();
            break;
        }

        let line = input.trim();
        match line {
            "quit" | "exit" | "q" => break,
            "reset" => {
                session.reset(&mut rng);
                continue;
            }
            "" => continue,
            _ => {}
        }
        if snapshot.won {
            println!("Unrecognized command.");
            continue;
        }

        let Some(guess) = parse_guess(line) else {
            println!("Please enter exactly 4 words.");
            continue;
        };

        // The adapter owns selection hygiene: drop anything left over from
        // a rejected guess, then toggle in this guess.
        clear_selection(&mut session);
        for word in &guess {
            session.toggle_word(word);
        }

        match session.submit_selection() {
            Ok(()) => {
                if let Some(outcome) = session.last_outcome() {
                    println!("{}", outcome.message());
                    if let GuessOutcome::Solved { .. } = outcome
                        && !session.won()
                    {
                        println!("{} categories to go.", session.remaining_count());
                    }
                }
            }
            Err(err) => {
                // Some guessed words were unavailable (solved already or
                // not on the board), so fewer than 4 ended up selected.
                tracing::debug!(%err, "guess rejected");
                println!("Please enter 4 available words from the board.");
                clear_selection(&mut session);
            }
        }
    }

    Ok(())
}

/// Split a comma-separated guess into trimmed words; `None` unless there are
/// exactly four non-empty tokens.
fn parse_guess(line: &str) -> Option<Vec<Word>> {
    let words: Vec<Word> = line
        .split(',')
        .map(Word::new)
        .collect::<Result<_, _>>()
        .ok()?;
    if words.len() == quartet_engine::WORDS_PER_CATEGORY {
        Some(words)
    } else {
        None
    }
}

fn clear_selection(session: &mut GameSession) {
    for word in session.selected().to_vec() {
        session.toggle_word(&word);
    }
}
