//! Terminal 2048 runner (default binary).
//!
//! Keys or mouse swipes become `GameAction`s for a `Session`; every change is
//! drawn through the framebuffer renderer. Configuration comes from the
//! environment (see `tui_2048::config`).

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};

use tui_2048::core::{GameSnapshot, Session};
use tui_2048::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2048::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;
use tui_2048::{AppConfig, AppStore};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    log::info!("starting tui-2048 with seed {}", config.seed);

    let store = AppStore::open(config.store_path.as_deref());
    let mut session = Session::new(config.seed, store);

    let mut term = TerminalRenderer::new().with_mouse(true);
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!(
        "exiting with score {} (best {}, {})",
        session.score(),
        session.best_score(),
        session.status().as_str()
    );
    result
}

/// Logs go to `TUI_2048_LOG_PATH` when set; the terminal belongs to the game.
fn init_logging(config: &AppConfig) -> Result<()> {
    match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            env_logger::Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        }
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut Session<AppStore>,
    config: &AppConfig,
) -> Result<()> {
    let view = BoardView::default();
    let mut swipe = SwipeTracker::new(config.swipe_min_cells);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipe.handle_mouse(mouse).map(GameAction::Move),
            Event::Resize(_, _) => {
                term.invalidate();
                swipe.cancel();
                dirty = true;
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            log::trace!("action {:?}", action);
            dirty |= session.apply_action(action);
        }
    }
}
