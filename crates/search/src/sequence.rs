//! Replaying action sequences against a fixed grid.

use cascade_core::{Action, Grid, Piece};
use cascade_engine::{apply_action, freeze_snapshot, overlaps, MoveBlocked};

/// Apply each action, then fall one row (unchecked), starting from `start`.
/// Stops at the first blocked action.
pub fn replay(grid: &Grid, start: Piece, actions: &[Action]) -> Result<Piece, MoveBlocked> {
    let mut piece = start;
    for &action in actions {
        apply_action(grid, &mut piece, action)?;
        piece.row -= 1;
    }
    Ok(piece)
}

/// Resting position if the replayed piece has landed.
///
/// A piece counts as landed only once the unchecked fall has carried it into
/// the stack; it then rests one row up. A piece merely touching the stack is
/// still falling and gets one more tick. Kept as the game plays it.
pub fn landing(grid: &Grid, replayed: &Piece) -> Option<Piece> {
    if overlaps(grid, replayed) {
        Some(replayed.shifted(0, 1))
    } else {
        None
    }
}

/// Replay and freeze onto a snapshot. None if blocked or still falling.
pub fn resolve(grid: &Grid, start: Piece, actions: &[Action]) -> Option<(Grid, u8)> {
    let replayed = replay(grid, start, actions).ok()?;
    let resting = landing(grid, &replayed)?;
    Some(freeze_snapshot(grid, &resting))
}
