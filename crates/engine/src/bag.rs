use rand::Rng;

use cascade_core::PieceKind;

/// Draws kinds without replacement from a pool of all seven, refilling the
/// pool whenever it runs dry.
pub struct PieceBag<R> {
    pool: Vec<PieceKind>,
    rng: R,
}

impl<R: Rng> PieceBag<R> {
    pub fn new(rng: R) -> Self {
        Self {
            pool: Vec::with_capacity(PieceKind::ALL.len()),
            rng,
        }
    }

    pub fn next_piece(&mut self) -> PieceKind {
        if self.pool.is_empty() {
            self.pool.extend_from_slice(&PieceKind::ALL);
        }
        let index = self.rng.gen_range(0..self.pool.len());
        self.pool.swap_remove(index)
    }

    /// Kinds still left before the next refill.
    pub fn remaining(&self) -> &[PieceKind] {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_each_round_has_all_kinds() {
        let mut bag = PieceBag::new(StdRng::seed_from_u64(42));
        for _ in 0..3 {
            let mut round: Vec<PieceKind> = (0..7).map(|_| bag.next_piece()).collect();
            round.sort_by_key(|kind| kind.index());
            assert_eq!(round, PieceKind::ALL.to_vec());
        }
    }

    #[test]
    fn test_remaining_shrinks() {
        let mut bag = PieceBag::new(StdRng::seed_from_u64(3));
        let first = bag.next_piece();
        assert_eq!(bag.remaining().len(), 6);
        assert!(!bag.remaining().contains(&first));
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a = PieceBag::new(StdRng::seed_from_u64(9));
        let mut b = PieceBag::new(StdRng::seed_from_u64(9));
        for _ in 0..14 {
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }
}
