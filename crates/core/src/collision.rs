//! Collision module - decides whether a piece placement is legal
//!
//! Cells above the board (negative y) only count against the side walls, so a
//! piece may sit partly above the visible area. Everything else must be inside
//! the grid and on an empty cell.

use crate::board::Board;
use crate::pieces::get_shape;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `kind` in `rotation` with its origin at (x, y) fits on `board`.
pub fn is_legal(kind: PieceKind, rotation: Rotation, x: i8, y: i8, board: &Board) -> bool {
    get_shape(kind, rotation)
        .iter()
        .all(|&(dx, dy)| cell_is_free(board, x + dx, y + dy))
}

#[inline]
fn cell_is_free(board: &Board, x: i8, y: i8) -> bool {
    if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
        return false;
    }
    y < 0 || !board.is_occupied(x, y)
}
