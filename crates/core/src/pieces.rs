//! Pieces module - tetromino shape matrices and the clockwise rotation transform
//!
//! Every canonical shape is padded to a square bounding box so one rotation law
//! (`result[i][j] = original[N-1-j][i]`) applies to all seven kinds. There is no
//! wall-kick table: a rotation either fits where the piece is or is rejected.

use arrayvec::ArrayVec;
use serde::{Serialize, Serializer};

use crate::types::{ConfigError, PieceKind};

/// Largest bounding box side of any shape (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// One occupied cell of a shape: offset from the shape's top-left corner plus its color id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mino {
    pub dx: i16,
    pub dy: i16,
    pub color: u8,
}

/// Occupied cells of a shape, at most one per bounding box cell
pub type Minos = ArrayVec<Mino, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Immutable square matrix of cell markers (0 = empty, nonzero = color id)
///
/// Only the top-left `size` x `size` block is meaningful; the rest of the
/// backing array is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from a `size` x `size` block stored in a 4x4 array
    ///
    /// Only the catalog constructs shapes, so a bad size or nonzero padding is a
    /// compile-time error in the const tables.
    pub(crate) const fn new(size: u8, cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        assert!(size as usize <= MAX_SHAPE_SIZE, "shape larger than 4x4");
        let mut y = 0;
        while y < MAX_SHAPE_SIZE {
            let mut x = 0;
            while x < MAX_SHAPE_SIZE {
                if x >= size as usize || y >= size as usize {
                    assert!(cells[y][x] == 0, "shape padding must be empty");
                }
                x += 1;
            }
            y += 1;
        }
        Self { size, cells }
    }

    /// Side length of the bounding box
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Marker at column `x`, row `y` (0 outside the bounding box)
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.size() || y >= self.size() {
            return 0;
        }
        self.cells[y][x]
    }

    /// Rows of the bounding box, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells[..self.size()].iter().map(|row| &row[..self.size()])
    }

    /// Occupied cells in row-major order
    pub fn minos(&self) -> Minos {
        let mut minos = Minos::new();
        for (dy, row) in self.rows().enumerate() {
            for (dx, &color) in row.iter().enumerate() {
                if color != 0 {
                    minos.push(Mino {
                        dx: dx as i16,
                        dy: dy as i16,
                        color,
                    });
                }
            }
        }
        minos
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.rows().flatten().filter(|&&c| c != 0).count()
    }

    /// New shape rotated 90° clockwise
    pub fn rotate_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, row) in cells.iter_mut().enumerate().take(n) {
            for (j, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - j][i];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// New shape rotated 90° counter-clockwise (three clockwise turns)
    pub fn rotate_ccw(&self) -> Self {
        self.rotate_cw().rotate_cw().rotate_cw()
    }
}

impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

const I_SHAPE: Shape = Shape::new(4, [[1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_SHAPE: Shape = Shape::new(3, [[2, 0, 0, 0], [2, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const L_SHAPE: Shape = Shape::new(3, [[0, 0, 3, 0], [3, 3, 3, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const O_SHAPE: Shape = Shape::new(2, [[4, 4, 0, 0], [4, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const S_SHAPE: Shape = Shape::new(3, [[0, 5, 5, 0], [5, 5, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const T_SHAPE: Shape = Shape::new(3, [[0, 6, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const Z_SHAPE: Shape = Shape::new(3, [[7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

/// Canonical (spawn orientation) shape for a piece kind
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Every kind with its canonical shape, in color-id order
pub fn catalog() -> impl Iterator<Item = (PieceKind, Shape)> {
    PieceKind::ALL
        .into_iter()
        .map(|kind| (kind, canonical_shape(kind)))
}

/// Check that every catalog shape has at least one cell
pub fn validate_catalog() -> Result<(), ConfigError> {
    match catalog().find(|(_, shape)| shape.cell_count() == 0) {
        Some((kind, _)) => Err(ConfigError::EmptyShape(kind)),
        None => Ok(()),
    }
}
