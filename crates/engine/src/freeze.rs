use log::warn;

use cascade_core::{Cell, Grid, Piece};

/// Lock the piece into the grid and clear full rows. Returns rows cleared.
pub fn freeze(grid: &mut Grid, piece: &Piece) -> u8 {
    for (col, row) in piece.cells() {
        if let Err(err) = grid.set(col, row, Cell::Block(piece.kind)) {
            warn!("freeze skipped a cell of {:?}: {err}", piece.kind);
        }
    }
    grid.clear_lines()
}

/// Freeze onto a snapshot, leaving `grid` untouched.
pub fn freeze_snapshot(grid: &Grid, piece: &Piece) -> (Grid, u8) {
    let mut next = grid.snapshot();
    let lines = freeze(&mut next, piece);
    (next, lines)
}
