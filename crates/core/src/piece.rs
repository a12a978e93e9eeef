//! Active piece module - the falling piece and its movement rules
//!
//! Every transform is tentative: the piece is moved or rotated, checked against the
//! board, and put back if it collides. Nothing here locks a piece; [`Gravity::Locked`]
//! only tells the session that it must.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{canonical_shape, Shape, MAX_SHAPE_SIZE};
use crate::types::PieceKind;

/// Outcome of moving a piece down one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    /// The piece fell one row
    Advanced,
    /// The piece rests on the floor or a locked cell and must be locked
    Locked,
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current rotation of the kind's canonical shape
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl ActivePiece {
    /// Create a piece at the spawn position: top row, centered-left column
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self {
            kind,
            shape: canonical_shape(kind),
            x: (board_width / 2) as i16 - 1,
            y: 0,
        }
    }

    /// Check whether the piece overlaps a wall, the floor or a locked cell
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Shift horizontally by `dx`; reverts and returns false if blocked
    pub fn try_shift(&mut self, board: &Board, dx: i16) -> bool {
        let Some(x) = self.x.checked_add(dx) else {
            return false;
        };
        if board.collides(&self.shape, x, self.y) {
            return false;
        }
        self.x = x;
        true
    }

    /// Rotate 90° clockwise in place; keeps the old orientation if blocked
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let original = self.shape;
        self.shape = original.rotate_cw();
        if self.collides(board) {
            self.shape = original;
            return false;
        }
        true
    }

    /// Move down one row, or report that the piece has landed
    pub fn step_down(&mut self, board: &Board) -> Gravity {
        self.y += 1;
        if self.collides(board) {
            self.y -= 1;
            return Gravity::Locked;
        }
        Gravity::Advanced
    }

    /// Step down until landed; returns the number of rows travelled
    pub fn drop_to_floor(&mut self, board: &Board) -> u32 {
        let mut rows = 0;
        while self.step_down(board) == Gravity::Advanced {
            rows += 1;
        }
        rows
    }

    /// Row the piece would land on if dropped now (ghost position)
    pub fn landing_y(&self, board: &Board) -> i16 {
        let mut ghost = *self;
        ghost.drop_to_floor(board);
        ghost.y
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> ArrayVec<(i16, i16), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }> {
        self.shape
            .minos()
            .iter()
            .map(|m| (self.x + m.dx, self.y + m.dy))
            .collect()
    }

    /// Write the piece into the board
    pub fn merge_into(&self, board: &mut Board) {
        board.merge(&self.shape, self.x, self.y);
    }
}
