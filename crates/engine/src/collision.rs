//! collision detection - walls, floor, other blocks

use cascade_core::{Grid, Piece};

/// does the piece overlap a wall, a block, or leave the grid?
#[inline(always)]
pub fn overlaps(grid: &Grid, piece: &Piece) -> bool {
    piece
        .cells()
        .iter()
        .any(|&(col, row)| grid.is_blocked(col, row))
}

/// can we place here? (just !overlaps)
pub fn can_place(grid: &Grid, piece: &Piece) -> bool {
    !overlaps(grid, piece)
}

/// lowest row the piece reaches by falling straight down
#[inline]
pub fn hard_drop_row(grid: &Grid, piece: &Piece) -> i8 {
    let mut landing = *piece;
    while can_place(grid, &landing.shifted(0, -1)) {
        landing.row -= 1;
    }
    landing.row
}
