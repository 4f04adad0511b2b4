//! Folio TUI - the portfolio contact page in a terminal.
//!
//! - Floating navbar that collapses once the hero scrolls away
//! - Contact form with service list, budget slider and tier legend
//! - Simulated submission on a worker thread, thank-you card and toast
//!
//! Usage: `folio-tui [CONFIG.toml]`. Set `FOLIO_LOG` to write a log file.

mod app;
mod input;
mod theme;
mod ui;
mod worker;

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use folio_core::{Site, SiteConfig};

use crate::app::AppState;
use crate::worker::{WorkerCommand, WorkerResponse};

fn main() -> Result<()> {
    init_tracing()?;

    let site = load_site(std::env::args_os().nth(1).map(PathBuf::from))?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();

    // Spawn worker
    let service = Box::new(site.submission.simulated_service());
    let worker_handle =
        worker::spawn_worker(cmd_rx, resp_tx, service).context("spawn submission worker")?;

    let mut app = AppState::new(site, cmd_tx.clone(), resp_rx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Log to a file only when `FOLIO_LOG` is set; the terminal belongs to the UI.
fn init_tracing() -> Result<()> {
    let Ok(filter) = EnvFilter::try_from_env("FOLIO_LOG") else {
        return Ok(());
    };
    let path = std::env::temp_dir().join("folio-tui.log");
    let file = File::create(&path).with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    info!(path = %path.display(), "logging started");
    Ok(())
}

fn load_site(path: Option<PathBuf>) -> Result<Site> {
    let config = match &path {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::default(),
    };
    let site = config.build().context("site configuration is invalid")?;
    info!(config = ?path, "site ready");
    Ok(site)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Expire the toast
        app.expire_toast(chrono::Local::now());

        // 4. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::SubmissionDone { result } => app.finish_submission(result),
    }
}
