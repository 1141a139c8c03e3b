//! Move executor - shifts, clockwise rotation with nudges, double shifts.

use thiserror::Error;

use crate::collision::overlaps;
use crate::kicks::get_nudges;
use cascade_core::{Action, Grid, Piece};

/// An action that would have pushed the piece into the grid. The piece is
/// left where it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{action} blocked for {kind:?} at ({col}, {row})")]
pub struct MoveBlocked {
    pub action: Action,
    pub kind: cascade_core::PieceKind,
    pub col: i8,
    pub row: i8,
}

impl MoveBlocked {
    fn at(action: Action, piece: &Piece) -> Self {
        Self {
            action,
            kind: piece.kind,
            col: piece.col,
            row: piece.row,
        }
    }
}

/// Apply one action to `piece` against `grid`.
///
/// Single shifts and rotation are all-or-nothing. Doubles are two single
/// shifts that keep whatever succeeded and never report a block: a double
/// against a wall may move one column or none and still count as applied.
/// The search scores doubles by that partial motion, so it stays this way.
pub fn apply_action(grid: &Grid, piece: &mut Piece, action: Action) -> Result<(), MoveBlocked> {
    match action {
        Action::None => Ok(()),
        Action::Left | Action::Right => try_shift(grid, piece, action),
        Action::LeftDouble | Action::RightDouble => {
            let single = if action == Action::LeftDouble {
                Action::Left
            } else {
                Action::Right
            };
            let _ = try_shift(grid, piece, single);
            let _ = try_shift(grid, piece, single);
            Ok(())
        }
        Action::RotateCw => try_rotate(grid, piece),
    }
}

/// Move one column in the action's direction, reverting on overlap.
pub fn try_shift(grid: &Grid, piece: &mut Piece, action: Action) -> Result<(), MoveBlocked> {
    let moved = piece.shifted(action.shift(), 0);
    if overlaps(grid, &moved) {
        return Err(MoveBlocked::at(action, piece));
    }
    *piece = moved;
    Ok(())
}

/// Turn clockwise, then take the first nudge that fits.
pub fn try_rotate(grid: &Grid, piece: &mut Piece) -> Result<(), MoveBlocked> {
    let turned = Piece {
        rotation: piece.rotation.cw(),
        ..*piece
    };
    for &(dcol, drow) in get_nudges() {
        let candidate = turned.shifted(dcol, drow);
        if !overlaps(grid, &candidate) {
            *piece = candidate;
            return Ok(());
        }
    }
    Err(MoveBlocked::at(Action::RotateCw, piece))
}

/// Fall one row if possible. Returns false when the piece is resting.
pub fn try_drop(grid: &Grid, piece: &mut Piece) -> bool {
    let dropped = piece.shifted(0, -1);
    if overlaps(grid, &dropped) {
        false
    } else {
        *piece = dropped;
        true
    }
}
