//! The logic thread of the decoupled loop.
//!
//! All mutable state lives here: the logic thread polls terminal events,
//! runs the pure update function, executes the returned commands, and
//! publishes immutable RenderState snapshots to the render thread over a
//! bounded channel (latest wins). Store reads and writes are synchronous
//! and single-threaded; the snapshot channel is the only cross-thread
//! edge.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use crossterm::event::{self, Event};

use crate::clipboard;
use crate::config::Config;
use crate::pages::Route;
use crate::render::RenderState;
use crate::store::UiState;
use crate::tea::{update, Command, Message, Model};
use crate::theme::Theme;
use crate::{flog_debug, flog_error, Result};

pub struct LogicThread;

impl LogicThread {
    pub fn run(
        config: Config,
        theme_override: Option<Theme>,
        route: Route,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        let initial = UiState {
            theme: theme_override.unwrap_or_else(|| config.theme()),
            sidebar_open: config.sidebar_open(),
            ..UiState::default()
        };
        flog_debug!(
            "LogicThread::run theme={} sidebar_open={} route={}",
            initial.theme.label(),
            initial.sidebar_open,
            route.path()
        );

        let size = crossterm::terminal::size().unwrap_or((80, 24));
        let mut model = Model::new(initial, route, size);

        send_state(&state_tx, &mut model);

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Terminal input (priority)
            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) => Some(Message::Key(key)),
                    Event::Mouse(mouse) => Some(Message::Mouse(mouse)),
                    Event::Resize(w, h) => Some(Message::Resize(w, h)),
                    _ => None,
                };
                let Some(msg) = msg else { continue };

                if dispatch(&mut model, msg) {
                    shutdown.store(true, Ordering::Relaxed);
                    return Ok(());
                }

                if model.dirty {
                    send_state(&state_tx, &mut model);
                    model.dirty = false;
                }
            }

            // Expire the transient copied indicator
            if model.copied_expired(Instant::now()) && dispatch(&mut model, Message::CopiedExpired)
            {
                shutdown.store(true, Ordering::Relaxed);
                return Ok(());
            }

            if model.dirty {
                send_state(&state_tx, &mut model);
                model.dirty = false;
            }

            std::thread::sleep(Duration::from_micros(500));
        }

        Ok(())
    }
}

/// Run one message through update and execute its commands. Commands may
/// yield follow-up messages, which are processed in the same pass.
/// Returns true when the app should quit.
fn dispatch(model: &mut Model, msg: Message) -> bool {
    let mut queue = vec![msg];
    while let Some(msg) = queue.pop() {
        for cmd in update(model, msg) {
            match execute_command(model, cmd) {
                CommandOutcome::Continue => {}
                CommandOutcome::FollowUp(follow_up) => queue.push(follow_up),
                CommandOutcome::Quit => return true,
            }
        }
    }
    false
}

enum CommandOutcome {
    Continue,
    FollowUp(Message),
    Quit,
}

fn execute_command(_model: &mut Model, cmd: Command) -> CommandOutcome {
    match cmd {
        Command::CopyToClipboard { card, text } => {
            flog_debug!("Command::CopyToClipboard card={} bytes={}", card, text.len());
            match clipboard::copy(&text) {
                Ok(()) => CommandOutcome::FollowUp(Message::Copied { card }),
                Err(e) => {
                    // Log only; the copied check simply never appears.
                    flog_error!("clipboard write failed: {}", e);
                    CommandOutcome::Continue
                }
            }
        }

        Command::Quit => {
            flog_debug!("Command::Quit");
            CommandOutcome::Quit
        }
    }
}

fn send_state(state_tx: &Sender<RenderState>, model: &Model) {
    // Bounded(1) channel with try_send: never blocks the logic loop.
    let _ = state_tx.try_send(RenderState::snapshot(model));
}
