//! Cupid CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`cupid_engine`] (session state and counters) and
//! [`cupid_tui`] (rendering), providing RAII-based terminal management with
//! guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new(mode) -> run_app(draw | draw_inline) -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! Both full-screen and inline modes use a fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`cupid_tui::InputPump`])
//! 3. Advance animations and toasts (`app.tick()`)
//! 4. Render frame

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{TerminalOptions, Viewport, prelude::*};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, Write, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cupid_engine::{App, CupidConfig, wording};
use cupid_tui::{
    INLINE_VIEWPORT_HEIGHT, InputPump, clear_inline_viewport, draw, draw_inline, handle_events,
};

const TUI_ENV_VAR: &str = "CUPID_TUI";

/// First log file that could be opened, plus the reasons earlier candidates
/// were skipped.
struct LogSink {
    path: PathBuf,
    file: fs::File,
    skipped: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match open_log_sink(&log_file_candidates()) {
        Ok(sink) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(sink.file)))
                .with(filter)
                .init();
            tracing::info!(path = %sink.path.display(), "Logging initialized");
            for reason in sink.skipped {
                tracing::warn!("{reason}");
            }
        }
        // Stdout and stderr belong to the TUI; with no file, log nowhere.
        Err(_) => tracing_subscriber::registry().with(filter).init(),
    }
}

fn open_log_sink(candidates: &[PathBuf]) -> Result<LogSink, Vec<String>> {
    let mut skipped = Vec::new();
    for path in candidates {
        let opened = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| OpenOptions::new().create(true).append(true).open(path));
        match opened {
            Ok(file) => {
                return Ok(LogSink {
                    path: path.clone(),
                    file,
                    skipped,
                });
            }
            Err(e) => skipped.push(format!("Cannot log to {}: {e}", path.display())),
        }
    }
    Err(skipped)
}

/// `~/.cupid/logs/cupid.log`, then `./.cupid/logs/cupid.log`.
fn log_file_candidates() -> Vec<PathBuf> {
    let home = CupidConfig::path()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join("logs").join("cupid.log"));
    let local = PathBuf::from(".cupid").join("logs").join("cupid.log");
    home.into_iter().chain([local]).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiMode {
    Full,
    Inline,
}

impl UiMode {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "inline" => Some(UiMode::Inline),
            "full" | "fullscreen" => Some(UiMode::Full),
            _ => None,
        }
    }

    fn from_env() -> Option<Self> {
        let raw = env::var(TUI_ENV_VAR).ok()?;
        let mode = Self::parse(&raw);
        if mode.is_none() {
            tracing::warn!("Unknown {TUI_ENV_VAR} value: {raw}");
        }
        mode
    }

    fn from_config(config: &CupidConfig) -> Option<Self> {
        let raw = config.tui_mode()?;
        let mode = Self::parse(raw);
        if mode.is_none() {
            tracing::warn!("Unknown tui mode in config: {raw}");
        }
        mode
    }
}

/// Raw mode for the lifetime of the value, plus the alternate screen in full
/// mode. Dropping it restores the terminal, including on panic unwind.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mode: UiMode,
}

fn leave_raw_mode(mode: UiMode) {
    let _ = disable_raw_mode();
    if mode == UiMode::Full {
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

impl TerminalSession {
    fn new(mode: UiMode) -> Result<Self> {
        enable_raw_mode()?;
        if mode == UiMode::Full
            && let Err(err) = execute!(stdout(), EnterAlternateScreen)
        {
            leave_raw_mode(mode);
            return Err(err.into());
        }

        let viewport = match mode {
            UiMode::Full => Viewport::Fullscreen,
            UiMode::Inline => Viewport::Inline(INLINE_VIEWPORT_HEIGHT),
        };
        match Terminal::with_options(CrosstermBackend::new(stdout()), TerminalOptions { viewport }) {
            Ok(terminal) => Ok(Self { terminal, mode }),
            Err(err) => {
                leave_raw_mode(mode);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.mode == UiMode::Inline {
            let _ = clear_inline_viewport(&mut self.terminal);
        }
        leave_raw_mode(self.mode);
        let _ = self.terminal.show_cursor();
        let _ = stdout().flush();
    }
}

fn load_config() -> CupidConfig {
    match CupidConfig::load() {
        Ok(Some(config)) => config,
        Ok(None) => CupidConfig::default(),
        Err(e) => {
            tracing::warn!("Using default configuration: {e}");
            CupidConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config();
    let ui_mode = UiMode::from_env()
        .or_else(|| UiMode::from_config(&config))
        .unwrap_or(UiMode::Full);
    let mut app = App::from_config(&config).context("invalid configuration")?;

    let run_result = {
        let mut session = TerminalSession::new(ui_mode)?;
        let render: fn(&mut Frame, &App) = match ui_mode {
            UiMode::Full => draw,
            UiMode::Inline => draw_inline,
        };
        run_app(&mut session.terminal, &mut app, render).await
    };

    if let Err(err) = run_result {
        eprintln!("Error: {err:?}");
    }

    if let Some(summary) = app.summary() {
        println!(
            "{}: {}  |  {}: {}",
            wording::YES_COUNT_LABEL,
            summary.yes_total,
            wording::NO_COUNT_LABEL,
            summary.no_total
        );
    }

    tracing::info!(
        stage = ?app.session().stage(),
        clicks = app.session().click_count(),
        rejections = app.session().no_rejections(),
        "Session ended"
    );
    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    render: fn(&mut Frame, &App),
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        match handle_events(app, &mut input) {
            Ok(true) => break Ok(()),
            Ok(false) => {}
            Err(e) => break Err(e),
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| render(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
