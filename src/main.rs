//! Terminal Blockfall runner (default binary).
//!
//! The engine task owns the game; this binary only forwards keys and redraws
//! whenever a new snapshot is published.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::{mpsc, watch};
use tracing::{info, Level};

use blockfall::core::GameSnapshot;
use blockfall::engine::{ActionSender, Engine, EngineConfig};
use blockfall::input::{gate, handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// blockfall - falling-block puzzle in the terminal
///
/// Keys: a/d move, s soft drop, w hard drop, Left/Right rotate, c hold,
/// p pause, Enter start, q quit.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Gravity period in milliseconds (overrides BLOCKFALL_TICK_MS)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Bag seed (overrides BLOCKFALL_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Maximum log level
    #[arg(long, default_value = "info")]
    log_level: Level,
}

/// Events from the input thread that the engine does not handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiEvent {
    Resize,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut config = EngineConfig::from_env()?;
    if let Some(tick_ms) = args.tick_ms {
        config = config.with_tick_ms(tick_ms);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config).await;

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(args: &Args) -> Result<()> {
    // The terminal belongs to the renderer, so logs only go to a file.
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

async fn run(term: &mut TerminalRenderer, config: EngineConfig) -> Result<()> {
    info!(?config, "starting session");
    let handle = Engine::spawn(config)?;
    let mut snapshots = handle.subscribe();

    let (ui_tx, mut ui_rx) = mpsc::unbounded_channel();
    let pump = {
        let actions = handle.sender();
        let status = handle.subscribe();
        tokio::task::spawn_blocking(move || pump_input(actions, status, ui_tx))
    };

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    draw(term, &view, &mut fb, &handle.snapshot())?;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snap = *snapshots.borrow_and_update();
                draw(term, &view, &mut fb, &snap)?;
            }
            event = ui_rx.recv() => match event {
                Some(UiEvent::Resize) => {
                    term.invalidate();
                    draw(term, &view, &mut fb, &handle.snapshot())?;
                }
                Some(UiEvent::Quit) | None => break,
            },
        }
    }

    drop(ui_rx);
    let final_state = handle.shutdown().await?;
    info!(
        score = final_state.score(),
        lines = final_state.lines(),
        games = final_state.episode_id() + 1,
        "session finished"
    );

    pump.await?
}

fn draw(term: &mut TerminalRenderer, view: &GameView, fb: &mut FrameBuffer, snap: &GameSnapshot) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw(fb)
}

/// Blocking loop reading terminal events. Returns once the user quits or the
/// other side of either channel goes away.
fn pump_input(
    actions: ActionSender,
    status: watch::Receiver<GameSnapshot>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
) -> Result<()> {
    while !actions.is_closed() && !ui_tx.is_closed() {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    let _ = ui_tx.send(UiEvent::Quit);
                    return Ok(());
                }
                let current = status.borrow().status;
                if let Some(action) = handle_key_event(key).and_then(|a| gate(a, current)) {
                    if actions.blocking_send(action).is_err() {
                        return Ok(());
                    }
                }
            }
            Event::Resize(_, _) => {
                let _ = ui_tx.send(UiEvent::Resize);
            }
            _ => {}
        }
    }
    Ok(())
}
