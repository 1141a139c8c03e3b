/// Why a candidate sequence was dropped from the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PruneReason {
    /// A shift or rotation ran into the grid.
    Illegal,
    /// The replayed piece reached a position already seen this search.
    Duplicate,
    /// More actions than the search allows.
    TooLong,
}

/// Classification of one candidate sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceOutcome {
    Pruned(PruneReason),
    /// Still falling; expand it.
    InProgress,
    /// Came to rest; the frozen board scored this much.
    Landed(i32),
}

impl SequenceOutcome {
    pub fn is_pruned(&self) -> bool {
        matches!(self, SequenceOutcome::Pruned(_))
    }

    pub fn score(&self) -> Option<i32> {
        match *self {
            SequenceOutcome::Landed(score) => Some(score),
            _ => None,
        }
    }
}
