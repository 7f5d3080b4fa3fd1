//! Engine task: one owner of the game state, fed by a command channel and a
//! gravity timer, publishing snapshots on a watch channel.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::core::{GameSnapshot, GameState};
use crate::error::{EngineError, Result};
use crate::types::GameAction;

/// Message delivered to the engine task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    Action(GameAction),
    Shutdown,
}

/// Cloneable sender for game actions.
///
/// Handed to input pumps so they can run on their own task or thread.
#[derive(Debug, Clone)]
pub struct ActionSender {
    tx: mpsc::Sender<EngineCommand>,
}

impl ActionSender {
    pub async fn send(&self, action: GameAction) -> Result<()> {
        self.tx
            .send(EngineCommand::Action(action))
            .await
            .map_err(|_| EngineError::Stopped)
    }

    /// Send from a thread outside the async runtime.
    ///
    /// Panics if called from inside an async context (tokio restriction).
    pub fn blocking_send(&self, action: GameAction) -> Result<()> {
        self.tx
            .blocking_send(EngineCommand::Action(action))
            .map_err(|_| EngineError::Stopped)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Handle to a running engine
pub struct EngineHandle {
    actions: ActionSender,
    snapshot_rx: watch::Receiver<GameSnapshot>,
    task: JoinHandle<GameState>,
}

impl EngineHandle {
    /// Queue an action; resolves once the channel accepted it
    pub async fn send(&self, action: GameAction) -> Result<()> {
        self.actions.send(action).await
    }

    pub fn sender(&self) -> ActionSender {
        self.actions.clone()
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        *self.snapshot_rx.borrow()
    }

    /// Receiver notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Stop the engine and return its final state
    pub async fn shutdown(self) -> Result<GameState> {
        // A closed channel means the task already ended; join it either way.
        let _ = self.actions.tx.send(EngineCommand::Shutdown).await;
        Ok(self.task.await?)
    }
}

/// The engine task state
pub struct Engine {
    state: GameState,
    tick_interval: Duration,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    snapshot_tx: watch::Sender<GameSnapshot>,
}

impl Engine {
    /// Validate `config` and start the engine on the current tokio runtime.
    ///
    /// The game begins in `NotStarted`; send [`GameAction::Start`] to play.
    pub fn spawn(config: EngineConfig) -> Result<EngineHandle> {
        let state = match config.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        };
        Self::spawn_with_state(state, config)
    }

    /// Start the engine around an existing game state
    pub fn spawn_with_state(state: GameState, config: EngineConfig) -> Result<EngineHandle> {
        config.validate()?;

        let (cmd_tx, cmd_rx) = mpsc::channel(config.command_buffer);
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        let engine = Self {
            state,
            tick_interval: config.tick_interval,
            cmd_rx,
            snapshot_tx,
        };

        info!(tick_ms = config.tick_interval.as_millis() as u64, "engine starting");
        let task = tokio::spawn(engine.run());

        Ok(EngineHandle {
            actions: ActionSender { tx: cmd_tx },
            snapshot_rx,
            task,
        })
    }

    fn new_ticker(&self) -> Interval {
        let mut ticker = time::interval_at(Instant::now() + self.tick_interval, self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }

    async fn run(mut self) -> GameState {
        let mut ticker = self.new_ticker();
        let mut was_running = self.state.status().is_running();

        loop {
            let ticking = self.state.status().is_running();

            let (changed, restarted) = tokio::select! {
                biased;

                cmd = self.cmd_rx.recv() => match cmd {
                    Some(EngineCommand::Action(action)) => {
                        let changed = self.state.apply_action(action);
                        if !changed {
                            trace!(action = action.as_str(), status = self.state.status().as_str(), "action ignored");
                        }
                        (changed, changed && action == GameAction::Start)
                    }
                    Some(EngineCommand::Shutdown) | None => break,
                },
                _ = ticker.tick(), if ticking => (self.state.tick(), false),
            };

            let running = self.state.status().is_running();
            if running && (!was_running || restarted) {
                ticker.reset();
                debug!("gravity timer armed");
            } else if was_running && !running {
                debug!(status = self.state.status().as_str(), "gravity timer stopped");
            }
            was_running = running;

            if changed {
                self.snapshot_tx.send_replace(self.state.snapshot());
            }
        }

        info!(
            score = self.state.score(),
            status = self.state.status().as_str(),
            "engine stopped"
        );
        self.state
    }
}
