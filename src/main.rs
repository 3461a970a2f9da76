use std::io::{self, stdout, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use finery::app::LogicThread;
use finery::config::Config;
use finery::pages::Route;
use finery::render::RenderState;
use finery::theme::Theme;
use finery::{flog, flog_error, ui, Error, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// Finery - interactive terminal tour of the Finery UI component library
#[derive(Parser, Debug)]
#[command(name = "finery")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    FINERY_DEBUG=1     Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.finery/finery.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Start in this theme instead of the configured one
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Open the tour at this page path (e.g. /grid/sorting)
    #[arg(long)]
    pub page: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Headless commands for scripting against the tour's catalog
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the tour's page paths
    Routes,

    /// Print a demo card's source snippet to stdout
    Snippet {
        /// Page path (e.g. /buttons)
        path: String,

        /// Card index on the page
        #[arg(long, short = 'i', default_value_t = 0)]
        index: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    finery::log::init_with_debug(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Routes) => run_routes(),
        Some(Command::Snippet { ref path, index }) => run_snippet(path, index),
        None => run_tui(cli),
    }
}

fn run_routes() -> Result<()> {
    for route in Route::ALL {
        println!("{:<28}{}", route.path(), route.title());
    }
    Ok(())
}

fn run_snippet(path: &str, index: usize) -> Result<()> {
    let route = Route::from_path(path)?;
    let card = route
        .cards()
        .get(index)
        .ok_or_else(|| Error::NoSuchSnippet {
            route: route.path().to_string(),
            index,
        })?;
    println!("{}", card.snippet);
    Ok(())
}

fn run_tui(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let route = match cli.page {
        Some(ref path) => Route::from_path(path)?,
        None => Route::Home,
    };
    flog!("finery starting route={}", route.path());

    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);
    let shutdown = Arc::new(AtomicBool::new(false));

    let mut terminal = setup_terminal()?;

    let logic_shutdown = shutdown.clone();
    let theme_override = cli.theme;
    let logic = thread::spawn(move || {
        let result = LogicThread::run(
            config,
            theme_override,
            route,
            state_tx,
            logic_shutdown.clone(),
        );
        logic_shutdown.store(true, Ordering::Relaxed);
        if let Err(ref e) = result {
            flog_error!("logic thread failed: {}", e);
        }
        result
    });

    let render_result = render_loop(&mut terminal, state_rx, &shutdown);
    shutdown.store(true, Ordering::Relaxed);
    let _ = logic.join();

    restore_terminal(&mut terminal)?;
    flog!("finery exiting");
    render_result
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(disable_raw_mode()?)
}
