//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! They are plain data with serde derives so the same values can travel to a
//! browser host as JSON, to the terminal runner, or into tests.
//!
//! # Board Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (4, 0), i.e. `floor(WIDTH / 2) - 1`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 800 | Gravity period of the external timer |
//! | `MIN_TICK_MS` | 50 | Smallest accepted gravity period |
//! | `MAX_TICK_MS` | 5000 | Largest accepted gravity period |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column of the piece origin.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn row of the piece origin.
pub const SPAWN_Y: i8 = 0;

/// Side length of the next/hold preview grids.
pub const PREVIEW_SIZE: usize = 4;

/// Points awarded per cleared row (flat, no multi-line bonus).
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Horizontal wall-kick offsets, tried in this order after the unkicked rotation.
pub const WALL_KICKS: [i8; 4] = [-1, 1, -2, 2];

/// Default gravity period in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 800;

/// Lower bound for a configured gravity period.
pub const MIN_TICK_MS: u64 = 50;

/// Upper bound for a configured gravity period.
pub const MAX_TICK_MS: u64 = 5000;


/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Display color of this kind.
    ///
    /// ```
    /// use blockfall_types::{Color, PieceKind};
    ///
    /// assert_eq!(PieceKind::T.color(), Color::Purple);
    /// assert_eq!(PieceKind::T.color().as_str(), "purple");
    /// ```
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }
}

/// Display color attached to a piece kind. Rules never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl Color {
    /// CSS color keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }

    /// 24-bit RGB value for renderers without named colors.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (0, 240, 240),
            Color::Blue => (0, 0, 240),
            Color::Orange => (240, 160, 0),
            Color::Yellow => (240, 240, 0),
            Color::Green => (0, 240, 0),
            Color::Purple => (160, 0, 240),
            Color::Red => (240, 0, 0),
        }
    }
}

/// Rotation states, indexed 0..=3
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: Rotated 90° clockwise (index 1)
/// - **South**: Rotated 180° (index 2)
/// - **West**: Rotated 90° counter-clockwise (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotation for an index in 0..=3.
    ///
    /// # Panics
    ///
    /// Panics if `index > 3`; rotation indices come from a closed set and an
    /// out-of-range value is a caller bug.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            3 => Rotation::West,
            _ => panic!("rotation index out of range: {index}"),
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate clockwise (index + 1 mod 4)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (index - 1 mod 4)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    pub fn rotate(&self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Left => self.rotate_ccw(),
            RotationDirection::Right => self.rotate_cw(),
        }
    }
}

/// Direction of a rotate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationDirection {
    Left,
    Right,
}

/// Commands accepted by the game state machine
///
/// Produced by key mapping (browser or terminal) and consumed by
/// `GameState::apply_action` or the runtime's command channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if blocked
    SoftDrop,
    /// Drop piece to its resting row and lock it
    HardDrop,
    /// Rotate counter-clockwise with horizontal kicks
    RotateLeft,
    /// Rotate clockwise with horizontal kicks
    RotateRight,
    /// Swap with the hold slot (once per spawned piece)
    Hold,
    /// Pause a running game or resume a paused one
    TogglePause,
    /// Start a new game, or restart the current one
    Start,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase names)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotateleft" => Some(GameAction::RotateLeft),
            "rotateright" => Some(GameAction::RotateRight),
            "hold" => Some(GameAction::Hold),
            "togglepause" | "pause" => Some(GameAction::TogglePause),
            "start" | "restart" => Some(GameAction::Start),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateLeft => "rotateLeft",
            GameAction::RotateRight => "rotateRight",
            GameAction::Hold => "hold",
            GameAction::TogglePause => "togglePause",
            GameAction::Start => "start",
        }
    }

    /// Whether the state machine honors this action in `status`.
    ///
    /// ```
    /// use blockfall_types::{GameAction, GameStatus};
    ///
    /// assert!(GameAction::Start.allowed_in(GameStatus::GameOver));
    /// assert!(!GameAction::Hold.allowed_in(GameStatus::Paused));
    /// assert!(GameAction::TogglePause.allowed_in(GameStatus::Paused));
    /// ```
    pub fn allowed_in(&self, status: GameStatus) -> bool {
        match status {
            GameStatus::NotStarted | GameStatus::GameOver => *self == GameAction::Start,
            GameStatus::Paused => *self == GameAction::TogglePause,
            GameStatus::Running => true,
        }
    }
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "notStarted",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameOver",
        }
    }

    pub fn is_running(&self) -> bool {
        *self == GameStatus::Running
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOverCause {
    /// A freshly spawned piece overlapped locked cells.
    SpawnBlocked,
    /// A piece came to rest with cells above the visible board.
    LockedAboveBoard,
}

/// Event recorded after every lock attempt.
///
/// Observers take it with `GameState::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub game_over: Option<GameOverCause>,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
