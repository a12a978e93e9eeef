//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management of a falling-block
//! puzzle game. It has **zero dependencies** on rendering, input devices or I/O:
//! presentation layers send commands, call [`Session::tick`] once per frame with the
//! elapsed milliseconds, and poll [`Session::snapshot`] to redraw.
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision detection, merging and line clearing
//! - [`pieces`]: the seven tetromino shapes and the clockwise rotation transform
//! - [`piece`]: the falling piece; shift, rotate and gravity steps against a board
//! - [`rng`]: pluggable piece sources (uniform, 7-bag, fixed sequence)
//! - [`scoring`]: line-clear points, level progression and gravity speed
//! - [`config`]: board dimensions and construction-time validation
//! - [`session`]: the state machine tying everything together
//! - [`snapshot`]: read-only view of a session for presentation
//!
//! # Game Rules
//!
//! - Pieces spawn at `(width / 2 - 1, 0)`
//! - Rotation is clockwise only and has no wall kicks: a blocked rotation is undone
//! - Soft drop moves one row; a piece that cannot fall locks immediately
//! - Hard drop falls to the floor and locks, bypassing the gravity timer
//! - Clearing `k` rows at level `L` scores `k * 100 * L`; every 10 lines is a level
//! - Gravity starts at 1000ms per row, 100ms faster per level, floored at 100ms
//! - A spawned piece that overlaps the stack ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Phase, Session, SessionConfig};
//! use blockfall_types::GameAction;
//!
//! let mut game = Session::new(SessionConfig::default(), 12345).unwrap();
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Gravity runs off wall-clock time.
//! game.tick(16);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.phase, Phase::Running);
//! assert_eq!(game.last_event().map(|e| e.lines_cleared), Some(0));
//! ```
//!
//! # Threading
//!
//! A session is a plain owned value with no interior mutability. Hosts that run on
//! several threads must route every call through a single owner.

pub mod board;
pub mod config;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::SessionConfig;
pub use piece::{ActivePiece, Gravity};
pub use pieces::{canonical_shape, Shape};
pub use rng::{BagSource, PieceSource, SequenceSource, UniformSource};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_points};
pub use session::{LockEvent, Phase, Session};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
