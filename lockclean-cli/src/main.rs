mod app;
mod logging;
mod tui;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lockclean_core::{DEFAULT_BUDGET, DEFAULT_EXTENSION, ScanConfig};
use ratatui::{Terminal, backend::CrosstermBackend, style::Style, widgets::Widget};
use tracing::{debug, info};

use app::{AppState, Msg};
use tui::{AppEvent, EventHandler, Worker, handle_key};
use ui::{AppLayout, ContentView, Footer, Header, Theme};

/// LOCKCLEAN - find and remove stale lock files
#[derive(Parser, Debug)]
#[command(name = "lockclean")]
#[command(about = "Interactively find and delete .cdslck lock files under a folder")]
#[command(version)]
struct Args {
    /// Folder to search (prompted for when omitted)
    #[arg(short, long)]
    folder: Option<String>,

    /// File extension to match
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Maximum number of directories scanned at once
    #[arg(short, long, default_value_t = DEFAULT_BUDGET)]
    jobs: usize,

    /// Log file (defaults to the user cache directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn scan_config(&self) -> ScanConfig {
        ScanConfig::default()
            .with_extension(&self.extension)
            .with_budget(self.jobs)
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let _log_guard = logging::init_logging(args.log_file.clone(), args.verbose);

    let scan_config = args.scan_config();
    info!(
        extension = %scan_config.extension,
        budget = scan_config.budget,
        "starting lockclean"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let result = run_app(&mut terminal, scan_config, args.folder.as_deref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    scan_config: ScanConfig,
    folder: Option<&str>,
) -> Result<()> {
    let theme = Theme::default();
    let mut state = AppState::new(scan_config.extension.clone());
    let worker = Worker::new(scan_config);
    let event_handler = EventHandler::new(50); // 50ms tick rate

    if let Some(effect) = state.start(folder) {
        worker.dispatch(effect);
    }

    loop {
        // Feed finished background work back into the controller
        while let Some(msg) = worker.try_recv() {
            if let Some(effect) = state.update(msg) {
                worker.dispatch(effect);
            }
        }

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = AppLayout::new(area);

            // Background
            frame
                .buffer_mut()
                .set_style(area, Style::default().bg(theme.bg));

            Header::new(&state, &theme).render(layout.header, frame.buffer_mut());
            ContentView::new(state.display(), state.scroll_back, &theme)
                .render(layout.content, frame.buffer_mut());
            Footer::new(&state, &theme).render(layout.footer, frame.buffer_mut());
        })?;

        // Handle events
        let msg = match event_handler.next()? {
            AppEvent::Key(key) => Msg::Action(handle_key(key, state.phase)),
            AppEvent::Resize(w, h) => Msg::Resize(w, h),
            AppEvent::Tick => Msg::Tick,
        };
        if let Some(effect) = state.update(msg) {
            worker.dispatch(effect);
        }

        if state.should_quit {
            debug!(phase = ?state.phase, busy = state.is_busy(), "quitting");
            worker.cancel();
            break;
        }
    }

    info!(
        deleted = state.tally().deleted,
        failed = state.tally().failed.len(),
        "exiting"
    );

    Ok(())
}
