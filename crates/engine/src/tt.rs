//! Reached-state table - fingerprints of piece states seen in one search.
//! Only position and rotation go in, the grid is fixed for a whole search.

use rustc_hash::FxHashSet;

use cascade_core::Piece;

/// Pack (col, row, rotation) into one word. Exact, so no two states collide.
#[inline(always)]
pub fn fingerprint(piece: &Piece) -> u64 {
    (piece.col as u8 as u64) | ((piece.row as u8 as u64) << 8) | ((piece.rotation.index() as u64) << 16)
}

#[derive(Debug, Default)]
pub struct ReachedTable {
    seen: FxHashSet<u64>,
}

impl ReachedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the piece state. Returns false if it was already there.
    #[inline]
    pub fn insert(&mut self, piece: &Piece) -> bool {
        self.seen.insert(fingerprint(piece))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forget everything; keeps the allocation for the next search.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
