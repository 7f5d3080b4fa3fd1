//! Immutable copy of everything a renderer needs.
//!
//! Produced by [`GameState::snapshot`](crate::GameState::snapshot) after each
//! command or tick. Serializes to camelCase JSON for browser hosts.

use serde::Serialize;

use crate::pieces::PreviewGrid;
use crate::types::{Cell, GameStatus, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_SIZE};
use crate::Tetromino;

/// Locked cells with the active piece overlaid, row 0 first.
pub type VisibleBoard = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: VisibleBoard,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<PieceKind>,
    pub next_preview: PreviewGrid,
    pub hold: Option<PieceKind>,
    pub hold_preview: PreviewGrid,
    pub can_hold: bool,
    pub status: GameStatus,
    pub episode_id: u32,
    pub piece_id: u32,
    pub seed: u64,
    pub score: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.status.is_running()
    }

    /// Number of occupied cells on the visible board
    pub fn filled_cells(&self) -> usize {
        self.board.iter().flatten().filter(|c| c.is_some()).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: None,
            next_preview: [[None; PREVIEW_SIZE]; PREVIEW_SIZE],
            hold: None,
            hold_preview: [[None; PREVIEW_SIZE]; PREVIEW_SIZE],
            can_hold: true,
            status: GameStatus::NotStarted,
            episode_id: 0,
            piece_id: 0,
            seed: 0,
            score: 0,
            lines: 0,
        }
    }
}
