//! Session module - the game state machine
//!
//! A [`Session`] owns the board, the falling piece, the next piece kind and the
//! score totals. Callers drive it with piece commands and `tick(elapsed_ms)` and
//! poll [`Session::snapshot`] afterwards to redraw.
//!
//! Phases: `Ready` -> `Running` <-> `Paused`; `Running` -> `GameOver`; `reset()`
//! returns to `Ready` from anywhere.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::SessionConfig;
use crate::piece::{ActivePiece, Gravity};
use crate::pieces::{canonical_shape, Shape};
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::Progress;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{ConfigError, GameAction, PieceKind};

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Freshly reset; pieces are dealt but gravity is not running
    Ready,
    Running,
    Paused,
    /// A new piece could not be placed; terminal until reset
    GameOver,
}

/// Emitted every time a piece locks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    /// Level after the clear
    pub level: u32,
    pub level_up: bool,
    /// The piece spawned after this lock did not fit
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<S = UniformSource> {
    config: SessionConfig,
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    source: S,
    progress: Progress,
    /// Time accumulated toward the next gravity step
    drop_timer_ms: u32,
    phase: Phase,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl Session {
    /// Create a session drawing pieces uniformly at random from `seed`
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, UniformSource::seeded(seed))
    }
}

impl<S: PieceSource> Session<S> {
    /// Create a session drawing pieces from `source`
    ///
    /// Fails if the board would have no cells or the piece catalog is malformed.
    pub fn with_source(config: SessionConfig, mut source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;
        let (active, next) = deal(&mut source, config.width);

        let mut session = Self {
            config,
            board,
            active,
            next,
            source,
            progress: Progress::new(),
            drop_timer_ms: 0,
            phase: Phase::Ready,
            last_event: None,
        };
        if session.active.collides(&session.board) {
            session.phase = Phase::GameOver;
        }
        Ok(session)
    }

    /// Start over: empty board, zeroed score, fresh pieces, `Ready` phase
    pub fn reset(&mut self) {
        self.board.clear();
        self.progress = Progress::new();
        self.drop_timer_ms = 0;
        self.last_event = None;

        let (active, next) = deal(&mut self.source, self.config.width);
        self.active = active;
        self.next = next;
        self.phase = if self.active.collides(&self.board) {
            Phase::GameOver
        } else {
            Phase::Ready
        };
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn next_shape(&self) -> Shape {
        canonical_shape(self.next)
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.progress.drop_interval_ms
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Row the active piece would land on (ghost piece)
    pub fn ghost_y(&self) -> i16 {
        self.active.landing_y(&self.board)
    }

    /// Last lock event, if any, without consuming it
    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Begin or continue play
    ///
    /// `Ready` and `Paused` go to `Running`; after game over the session is reset
    /// first. Returns false if the session was already running or cannot run.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Running => false,
            Phase::Ready | Phase::Paused => {
                self.phase = Phase::Running;
                true
            }
            Phase::GameOver => {
                self.reset();
                if self.phase != Phase::Ready {
                    return false;
                }
                self.phase = Phase::Running;
                true
            }
        }
    }

    /// Suspend gravity; only valid while running
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// Resume after [`Session::pause`]
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.pause() || self.resume()
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i16) -> bool {
        !self.game_over() && self.active.try_shift(&self.board, dx)
    }

    /// Rotate the active piece clockwise; blocked rotations are rejected
    pub fn rotate(&mut self) -> bool {
        !self.game_over() && self.active.try_rotate(&self.board)
    }

    /// Move the piece down one row now, locking it if it cannot fall
    ///
    /// Restarts the gravity timer. Returns None after game over.
    pub fn soft_drop(&mut self) -> Option<Gravity> {
        if self.game_over() {
            return None;
        }
        self.drop_timer_ms = 0;
        Some(self.gravity_step())
    }

    /// Drop the piece as far as it goes and lock it immediately
    ///
    /// Returns the number of rows travelled, or None after game over.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if self.game_over() {
            return None;
        }
        let rows = self.active.drop_to_floor(&self.board);
        self.lock_active();
        Some(rows)
    }

    /// Advance the gravity timer by `elapsed_ms`
    ///
    /// Inert unless running. Once the accumulated time exceeds the drop interval the
    /// piece falls one row (or locks) and the timer restarts from zero. Returns
    /// whether a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.progress.drop_interval_ms {
            return false;
        }

        self.drop_timer_ms = 0;
        self.gravity_step();
        true
    }

    /// Apply a game action
    ///
    /// Piece actions are ignored unless the session is running, the way an input
    /// layer would ignore keys while paused or before start. Returns whether
    /// anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action.is_piece_action() && !self.is_running() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop().is_some(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Read-only copy of everything a presentation layer draws
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.color_grid(),
            active: ActiveSnapshot {
                kind: self.active.kind,
                x: self.active.x,
                y: self.active.y,
                shape: self.active.shape,
                ghost_y: self.ghost_y(),
            },
            next: self.next,
            next_shape: self.next_shape(),
            score: self.progress.score,
            level: self.progress.level,
            lines: self.progress.lines,
            drop_interval_ms: self.progress.drop_interval_ms,
            phase: self.phase,
            paused: self.paused(),
            game_over: self.game_over(),
        }
    }

    fn gravity_step(&mut self) -> Gravity {
        let outcome = self.active.step_down(&self.board);
        if outcome == Gravity::Locked {
            self.lock_active();
        }
        outcome
    }

    /// Merge the piece, clear rows, update totals and spawn the next piece
    fn lock_active(&mut self) {
        self.active.merge_into(&mut self.board);
        let cleared = self.board.clear_full_rows() as u32;

        let level_before = self.progress.level;
        self.progress = self.progress.apply(cleared);
        self.drop_timer_ms = 0;

        let spawned = self.spawn_next();
        if !spawned {
            self.phase = Phase::GameOver;
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            points: self.progress.points,
            level: self.progress.level,
            level_up: self.progress.level > level_before,
            game_over: !spawned,
        });
    }

    /// Promote the next kind to the active piece; false if it does not fit
    fn spawn_next(&mut self) -> bool {
        self.active = ActivePiece::spawn(self.next, self.config.width);
        self.next = self.source.next_kind();
        !self.active.collides(&self.board)
    }
}

/// Draw the first active piece and the kind after it
fn deal<S: PieceSource>(source: &mut S, width: u8) -> (ActivePiece, PieceKind) {
    let first = source.next_kind();
    let active = ActivePiece::spawn(first, width);
    (active, source.next_kind())
}
