//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that was locked there. Uses a flat array for cache locality and zero
//! allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one line-clear pass (at most every row).
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if position is outside the grid
    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position holds a locked cell
    ///
    /// Out-of-bounds positions answer `true`: anything outside the grid blocks.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        !matches!(self.get(x, y), Some(None))
    }

    /// Write a locked cell of `kind` at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the grid; lock positions are validated
    /// before they reach the board.
    pub fn place(&mut self, x: i8, y: i8, kind: PieceKind) {
        let idx = Self::index(x, y)
            .unwrap_or_else(|| panic!("place out of bounds: ({x}, {y})"));
        self.cells[idx] = Some(kind);
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Cells of row `y`, or None if out of range
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Remove row `y`, shift every row above it down by one and insert an
    /// empty row at the top. Out-of-range rows are ignored.
    pub fn clear_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;

        // Shifting the whole block [0, y) down one row; copy_within handles
        // the overlap.
        self.cells.copy_within(0..y * width, width);

        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Clear all full rows and return the row indices that were cleared
    ///
    /// Rows are scanned bottom to top. After a clear the same index is checked
    /// again, since the row above has just shifted into it.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared_rows.push(row);
            } else {
                y -= 1;
            }
        }

        cleared_rows
    }

    /// Whether no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Copy the grid into a 2D array, row 0 first
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out
            .iter_mut()
            .zip(self.cells.chunks_exact(BOARD_WIDTH as usize))
        {
            dst.copy_from_slice(src);
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.place(0, 0, PieceKind::I);
        board.place(5, 10, PieceKind::T);

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_clear_row_zero() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.place(x, 0, PieceKind::Z);
        }
        board.place(3, 1, PieceKind::S);

        board.clear_row(0);

        assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
        assert_eq!(board.get(3, 1), Some(Some(PieceKind::S)));
    }

    #[test]
    fn test_clear_full_rows_rechecks_same_index() {
        // Rows 17, 18 and 19 full with a partial row 16 on top.
        let mut rows = vec![vec![None; 10]; 20];
        for y in 17..20 {
            rows[y] = vec![Some(PieceKind::L); 10];
        }
        rows[16][2] = Some(PieceKind::J);
        let mut board = Board::from_cells(rows);

        let cleared = board.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[19, 19, 19]);
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::J)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_write_grid() {
        let mut board = Board::new();
        board.place(9, 19, PieceKind::O);

        let mut grid = [[None; 10]; 20];
        board.write_grid(&mut grid);

        assert_eq!(grid[19][9], Some(PieceKind::O));
        assert_eq!(grid[0][0], None);
    }
}
