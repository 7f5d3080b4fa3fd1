//! Pieces module - Tetromino shapes and rotation
//!
//! Every piece has four fixed rotation states. Offsets are normalized so each
//! state's bounding box starts at (0, 0) and are listed in row-major order.
//! State `r + 1` is the clockwise rotation of state `r`.

use crate::types::{Cell, PieceKind, Rotation, RotationDirection, PREVIEW_SIZE, WALL_KICKS};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// 4x4 preview of a piece for next/hold panels.
pub type PreviewGrid = [[Cell; PREVIEW_SIZE]; PREVIEW_SIZE];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => get_i_shape(rotation),
        PieceKind::J => get_j_shape(rotation),
        PieceKind::L => get_l_shape(rotation),
        PieceKind::O => get_o_shape(rotation),
        PieceKind::S => get_s_shape(rotation),
        PieceKind::T => get_t_shape(rotation),
        PieceKind::Z => get_z_shape(rotation),
    }
}

/// I piece shapes
fn get_i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(0, 0), (1, 0), (2, 0), (3, 0)],
        Rotation::East | Rotation::West => [(0, 0), (0, 1), (0, 2), (0, 3)],
    }
}

/// J piece shapes
fn get_j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(0, 0), (1, 0), (0, 1), (0, 2)],
        Rotation::South => [(0, 0), (1, 0), (2, 0), (2, 1)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

/// L piece shapes
fn get_l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Rotation::South => [(0, 0), (1, 0), (2, 0), (0, 1)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// O piece shapes (same for all rotations)
fn get_o_shape(_rotation: Rotation) -> PieceShape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// S piece shapes
fn get_s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East | Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// T piece shapes
fn get_t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(0, 0), (0, 1), (1, 1), (0, 2)],
        Rotation::South => [(0, 0), (1, 0), (2, 0), (1, 1)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// Z piece shapes
fn get_z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East | Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

/// Bounding (width, height) of a rotation state.
pub fn shape_bounds(kind: PieceKind, rotation: Rotation) -> (i8, i8) {
    let shape = get_shape(kind, rotation);
    let width = shape.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
    let height = shape.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
    (width, height)
}

/// Try to rotate a piece with horizontal wall kicks
///
/// The unkicked rotation is tried first, then the origin shifted by each of
/// [`WALL_KICKS`] in order. `is_legal(rotation, x, y)` decides a candidate.
/// Returns `Some((new_rotation, dx))` for the first legal candidate.
pub fn try_rotate(
    rotation: Rotation,
    x: i8,
    y: i8,
    direction: RotationDirection,
    is_legal: impl Fn(Rotation, i8, i8) -> bool,
) -> Option<(Rotation, i8)> {
    let new_rotation = rotation.rotate(direction);

    std::iter::once(0)
        .chain(WALL_KICKS)
        .find(|&dx| is_legal(new_rotation, x + dx, y))
        .map(|dx| (new_rotation, dx))
}

/// Centered 4x4 preview of `kind` in its spawn rotation.
///
/// `None` yields an empty grid (e.g. an empty hold slot).
pub fn preview_grid(kind: Option<PieceKind>) -> PreviewGrid {
    let mut grid = [[None; PREVIEW_SIZE]; PREVIEW_SIZE];
    let Some(kind) = kind else {
        return grid;
    };

    let (width, height) = shape_bounds(kind, Rotation::North);
    let size = PREVIEW_SIZE as i8;
    let offset_x = (size - width).div_euclid(2);
    let offset_y = (size - height).div_euclid(2);

    for (dx, dy) in get_shape(kind, Rotation::North) {
        let x = dx + offset_x;
        let y = dy + offset_y;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            grid[y as usize][x as usize] = Some(kind);
        }
    }
    grid
}
