//! Rotation nudge table.
//!
//! After a clockwise turn the piece is tried at these positions, in order,
//! relative to where it stood before turning. Each entry builds on the last:
//! left one, up one, then right one and down three, then left one again.

pub const ROTATION_NUDGES: [(i8, i8); 5] = [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)];

/// Nudges to try for a clockwise turn. Every shape uses the same table.
pub fn get_nudges() -> &'static [(i8, i8)] {
    &ROTATION_NUDGES
}
