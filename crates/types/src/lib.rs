//! Shared types module - piece kinds, actions, constants, configuration errors
//!
//! Everything here is plain data used by the rules engine, the replay driver and any
//! presentation layer that polls the engine. Nothing in this crate holds game state.
//!
//! # Board Dimensions
//!
//! The board size is chosen per session. The defaults follow the classic playfield:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: `(width / 2 - 1, 0)`
//!
//! # Gravity
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest gravity, reached at level 10 |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
//!
//! let piece: PieceKind = "t".parse().unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color_id(), 6);
//!
//! let action: GameAction = "hardDrop".parse().unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//!
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level above 1
pub const DROP_STEP_MS: u32 = 100;

/// Absolute minimum drop interval (100ms)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the line count and the level
pub const POINTS_PER_LINE: u32 = 100;

/// Level a fresh session starts at
pub const STARTING_LEVEL: u32 = 1;

/// The seven tetromino piece kinds
///
/// Each kind has a fixed color id (1..=7) which is also the nonzero marker
/// used in its shape matrix and the value reported for locked cells:
/// I=1, J=2, L=3, O=4, S=5, T=6, Z=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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
    /// Number of piece kinds
    pub const LEN: usize = 7;

    /// All kinds in color-id order
    pub const ALL: [PieceKind; Self::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Color id of this kind (1..=7)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color_id(), 1);
    /// assert_eq!(PieceKind::Z.color_id(), 7);
    /// ```
    pub const fn color_id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::color_id`]
    pub const fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Kind at `index` in [`PieceKind::ALL`], wrapping around
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::LEN]
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
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// Error returned when a string names no piece kind or action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what}: {value:?}")]
pub struct ParseError {
    pub what: &'static str,
    pub value: String,
}

impl FromStr for PieceKind {
    type Err = ParseError;

    /// Parse piece kind from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i" => Ok(PieceKind::I),
            "j" => Ok(PieceKind::J),
            "l" => Ok(PieceKind::L),
            "o" => Ok(PieceKind::O),
            "s" => Ok(PieceKind::S),
            "t" => Ok(PieceKind::T),
            "z" => Ok(PieceKind::Z),
            _ => Err(ParseError {
                what: "piece kind",
                value: s.to_string(),
            }),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell locked with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Color id reported for a cell (0 = empty)
pub fn cell_color_id(cell: Cell) -> u8 {
    cell.map_or(0, PieceKind::color_id)
}

/// Commands a presentation or input layer can send to a session
///
/// Each action maps to exactly one session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot fall
    SoftDrop,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start (or resume) play; restarts after game over
    Start,
    /// Reset to a fresh, not yet started game
    Reset,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
            GameAction::Reset => "reset",
        }
    }

    /// Whether the action moves the active piece (and is ignored unless running)
    pub fn is_piece_action(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft
                | GameAction::MoveRight
                | GameAction::SoftDrop
                | GameAction::HardDrop
                | GameAction::Rotate
        )
    }
}

impl FromStr for GameAction {
    type Err = ParseError;

    /// Parse action from string (case-insensitive); short aliases are accepted
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!("moveLeft".parse(), Ok(GameAction::MoveLeft));
    /// assert_eq!("left".parse(), Ok(GameAction::MoveLeft));
    /// assert_eq!("drop".parse(), Ok(GameAction::HardDrop));
    /// assert!("hold".parse::<GameAction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Ok(GameAction::MoveLeft),
            "moveright" | "right" => Ok(GameAction::MoveRight),
            "softdrop" | "down" => Ok(GameAction::SoftDrop),
            "harddrop" | "drop" => Ok(GameAction::HardDrop),
            "rotate" | "up" => Ok(GameAction::Rotate),
            "pause" | "resume" => Ok(GameAction::Pause),
            "start" => Ok(GameAction::Start),
            "reset" | "restart" => Ok(GameAction::Reset),
            _ => Err(ParseError {
                what: "action",
                value: s.to_string(),
            }),
        }
    }
}

/// Invalid session configuration, reported at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid configuration: board width must be positive")]
    ZeroWidth,
    #[error("invalid configuration: board height must be positive")]
    ZeroHeight,
    #[error("invalid configuration: shape for piece {0} has no cells")]
    EmptyShape(PieceKind),
}
