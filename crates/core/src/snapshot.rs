use serde::Serialize;

use crate::pieces::Shape;
use crate::session::Phase;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i16,
    pub y: i16,
    /// Current rotation, rows top to bottom
    pub shape: Shape,
    /// Row a hard drop would land on
    pub ghost_y: i16,
}

impl ActiveSnapshot {
    /// Absolute board coordinates and color ids of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16, u8)> + '_ {
        self.shape
            .minos()
            .into_iter()
            .map(move |m| (self.x + m.dx, self.y + m.dy, m.color))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cells as color ids (0 = empty), rows top to bottom
    pub board: Vec<Vec<u8>>,
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub next_shape: Shape,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub phase: Phase,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Board color ids with the active piece drawn on top
    pub fn composed_board(&self) -> Vec<Vec<u8>> {
        let mut grid = self.board.clone();
        for (x, y, color) in self.active.cells() {
            if let Some(cell) = usize::try_from(y)
                .ok()
                .and_then(|y| grid.get_mut(y))
                .and_then(|row| usize::try_from(x).ok().and_then(|x| row.get_mut(x)))
            {
                *cell = color;
            }
        }
        grid
    }
}
