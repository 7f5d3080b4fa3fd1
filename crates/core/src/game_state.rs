//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, bag, and collision check. It
//! applies commands and gravity ticks, locks pieces, clears lines, keeps score,
//! and drives the game lifecycle.

use tracing::{debug, info};

use crate::board::Board;
use crate::collision::is_legal;
use crate::pieces::{get_shape, preview_grid, try_rotate, PieceShape, PreviewGrid};
use crate::rng::PieceBag;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, VisibleBoard};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Whether the piece fits on `board` where it is
    pub fn is_legal(&self, board: &Board) -> bool {
        is_legal(self.kind, self.rotation, self.x, self.y, board)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: Option<PieceKind>,
    hold: Option<PieceKind>,
    can_hold: bool,
    bag: PieceBag,
    status: GameStatus,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces (lock spawns and hold spawns).
    piece_id: u32,
    /// Last lock outcome (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_bag(PieceBag::new(seed))
    }

    /// Create a new game seeded from system entropy
    pub fn from_entropy() -> Self {
        Self::with_bag(PieceBag::from_entropy())
    }

    fn with_bag(bag: PieceBag) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            hold: None,
            can_hold: true,
            bag,
            status: GameStatus::NotStarted,
            episode_id: 0,
            piece_id: 0,
            last_event: None,
            score: 0,
            lines: 0,
        }
    }

    /// Start a fresh game (also used as restart)
    ///
    /// Resets board, score, hold slot and bag, then spawns the first piece.
    pub fn start(&mut self) {
        if self.status != GameStatus::NotStarted {
            self.episode_id = self.episode_id.wrapping_add(1);
        }

        self.board.reset();
        self.score = 0;
        self.lines = 0;
        self.hold = None;
        self.can_hold = true;
        self.last_event = None;
        self.bag.reseed();

        let first = self.bag.next();
        self.next = Some(self.bag.next());
        self.status = GameStatus::Running;

        info!(
            episode = self.episode_id,
            seed = self.bag.seed(),
            "game started"
        );

        self.spawn(first);
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.bag.seed()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Put `kind` at the spawn point; game over if it does not fit
    fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Tetromino::new(kind);
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);

        if !piece.is_legal(&self.board) {
            self.end_game(GameOverCause::SpawnBlocked);
            return false;
        }
        true
    }

    /// Promote the queued next piece and queue a fresh one from the bag
    fn spawn_next(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.bag.next(),
        };
        self.next = Some(self.bag.next());
        self.can_hold = true;
        self.spawn(kind)
    }

    fn end_game(&mut self, cause: GameOverCause) {
        self.status = GameStatus::GameOver;
        info!(
            episode = self.episode_id,
            score = self.score,
            lines = self.lines,
            ?cause,
            "game over"
        );
    }

    fn is_playing(&self) -> bool {
        self.status == GameStatus::Running && self.active.is_some()
    }

    /// Try to translate the active piece without locking
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = Tetromino {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        };
        if moved.is_legal(&self.board) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    /// Move the active piece by (dx, dy)
    ///
    /// A blocked downward move locks the piece; a blocked sideways move does
    /// nothing. Returns whether the state changed.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_playing() {
            return false;
        }
        if self.try_move(dx, dy) {
            return true;
        }
        if dy > 0 {
            self.lock_piece();
            return true;
        }
        false
    }

    /// Move down one row, locking if blocked
    pub fn soft_drop(&mut self) -> bool {
        self.move_piece(0, 1)
    }

    /// Gravity step from the external timer. Ignored unless running.
    pub fn tick(&mut self) -> bool {
        self.soft_drop()
    }

    /// Rotate the active piece with horizontal wall kicks
    pub fn rotate(&mut self, direction: RotationDirection) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        let result = try_rotate(active.rotation, active.x, active.y, direction, |r, x, y| {
            is_legal(active.kind, r, x, y, board)
        });

        match result {
            Some((rotation, dx)) => {
                self.active = Some(Tetromino {
                    rotation,
                    x: active.x + dx,
                    ..active
                });
                true
            }
            None => false,
        }
    }

    /// Drop the active piece to its resting row and lock it
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        while self.try_move(0, 1) {}
        self.lock_piece();
        true
    }

    /// Row the active piece would come to rest on
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut y = active.y;
        while is_legal(active.kind, active.rotation, active.x, y + 1, &self.board) {
            y += 1;
        }
        Some(y)
    }

    /// Swap active piece with hold piece
    ///
    /// Allowed once per spawned piece; the flag comes back with the next
    /// lock-driven spawn.
    pub fn hold(&mut self) -> bool {
        if !self.can_hold || !self.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let incoming = match self.hold.replace(active.kind) {
            Some(held) => held,
            None => self.bag.next(),
        };
        self.can_hold = false;

        debug!(held = ?active.kind, ?incoming, "hold");
        self.spawn(incoming);
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        self.status = GameStatus::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Running;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            _ => false,
        }
    }

    /// Lock the active piece onto the board, clear lines and spawn the next
    fn lock_piece(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        let cells = active.cells();

        if cells.iter().any(|&(_, y)| y < 0) {
            self.last_event = Some(LockEvent {
                kind: active.kind,
                lines_cleared: 0,
                points: 0,
                game_over: Some(GameOverCause::LockedAboveBoard),
            });
            self.end_game(GameOverCause::LockedAboveBoard);
            return;
        }

        for (x, y) in cells {
            if !Board::is_out_of_bounds(x, y) {
                self.board.place(x, y, active.kind);
            }
        }
        self.active = None;

        let lines_cleared = self.board.clear_full_rows().len() as u32;
        let points = lines_cleared * LINE_CLEAR_POINTS;
        self.lines += lines_cleared;
        self.score += points;

        debug!(kind = ?active.kind, x = active.x, y = active.y, lines_cleared, "piece locked");

        let spawned = self.spawn_next();
        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared,
            points,
            game_over: (!spawned).then_some(GameOverCause::SpawnBlocked),
        });
    }

    /// Apply a game action
    ///
    /// Actions not allowed in the current status are ignored. Returns whether
    /// the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !action.allowed_in(self.status) {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_piece(-1, 0),
            GameAction::MoveRight => self.move_piece(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateLeft => self.rotate(RotationDirection::Left),
            GameAction::RotateRight => self.rotate(RotationDirection::Right),
            GameAction::Hold => self.hold(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }

    /// Locked cells with the active piece overlaid
    ///
    /// The active piece is left out once the game is over.
    pub fn visible_board(&self) -> VisibleBoard {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.board.write_grid(&mut grid);

        if self.status != GameStatus::GameOver {
            if let Some(active) = self.active {
                for (x, y) in active.cells() {
                    if !Board::is_out_of_bounds(x, y) {
                        grid[y as usize][x as usize] = Some(active.kind);
                    }
                }
            }
        }
        grid
    }

    pub fn next_preview(&self) -> PreviewGrid {
        preview_grid(self.next)
    }

    pub fn hold_preview(&self) -> PreviewGrid {
        preview_grid(self.hold)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.visible_board();
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.next_preview = self.next_preview();
        out.hold = self.hold;
        out.hold_preview = self.hold_preview();
        out.can_hold = self.can_hold;
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
        out.seed = self.bag.seed();
        out.score = self.score;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
