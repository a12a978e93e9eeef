//! Board module - manages the game grid
//!
//! The board is a `width` x `height` grid where each cell is empty or holds the kind
//! of the piece locked there. Dimensions are fixed when the board is created.
//! Uses a flat vector in row-major order for cache locality; after creation no
//! operation allocates.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom (row 0 is top).

use crate::pieces::Shape;
use crate::types::{
    cell_color_id, Cell, ConfigError, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH,
};

/// The game board with flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16
    }

    /// Whether `shape` placed with its top-left corner at (x, y) hits a wall, the floor,
    /// the area above the board, or a locked cell
    pub fn collides(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape.minos().iter().any(|m| {
            match (x.checked_add(m.dx), y.checked_add(m.dy)) {
                (Some(cx), Some(cy)) => !self.is_valid(cx, cy),
                _ => true,
            }
        })
    }

    /// Write every occupied shape cell into the board at (x, y)
    ///
    /// The caller must have checked [`Board::collides`] first; cells that fall
    /// outside the board are dropped.
    pub fn merge(&mut self, shape: &Shape, x: i16, y: i16) {
        debug_assert!(!self.collides(shape, x, y), "merging a colliding piece");
        for m in shape.minos() {
            self.set(x + m.dx, y + m.dy, PieceKind::from_color_id(m.color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Cells of row `y`, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Remove all full rows, collapsing the rows above them and refilling the top
    /// with empty rows. Returns the number of rows removed.
    ///
    /// Uses a two-pointer compaction, so any number of full rows, adjacent or not,
    /// is handled in one bottom-to-top pass.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        // Scan from bottom to top
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows of color ids (0 = empty) for presentation
    pub fn color_grid(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&c| cell_color_id(c)).collect())
            .collect()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Create from a 2D vector for testing
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        let height = cells_2d.len() as u8;
        let width = cells_2d.first().map_or(0, Vec::len) as u8;
        assert!(cells_2d.iter().all(|row| row.len() == width as usize));

        Self {
            width,
            height,
            cells: cells_2d.into_iter().flatten().collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        let (width, height) = (DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }
}
