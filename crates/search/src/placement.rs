use std::collections::VecDeque;

use log::debug;
use rand::Rng;

use cascade_core::{format_sequence, Action, Grid, Piece};
use cascade_engine::{freeze_snapshot, ReachedTable};
use cascade_eval::{evaluate, EvalWeights};

use crate::config::SearchConfig;
use crate::outcome::{PruneReason, SequenceOutcome};
use crate::sequence::{landing, replay};

const LEFT_SEEDED: [Action; 4] = [Action::Left, Action::RotateCw, Action::LeftDouble, Action::None];
const RIGHT_SEEDED: [Action; 4] = [Action::Right, Action::RotateCw, Action::RightDouble, Action::None];
const REFINE: [Action; 4] = [Action::None, Action::RotateCw, Action::Left, Action::Right];

/// Best landed sequence of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub actions: Vec<Action>,
    pub score: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub evaluated: usize,
    pub landed: usize,
    pub expanded: usize,
    pub illegal: usize,
    pub duplicate: usize,
    pub too_long: usize,
}

impl SearchStats {
    pub fn pruned(&self) -> usize {
        self.illegal + self.duplicate + self.too_long
    }

    fn record_prune(&mut self, reason: PruneReason) {
        match reason {
            PruneReason::Illegal => self.illegal += 1,
            PruneReason::Duplicate => self.duplicate += 1,
            PruneReason::TooLong => self.too_long += 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// None when no sequence landed.
    pub best: Option<Placement>,
    pub stats: SearchStats,
}

/// Exhaustive-with-pruning search over action sequences for one piece.
///
/// Candidates grow from two seeds, `[LeftDouble]` and `[RightDouble]`, kept in
/// one deque. Each round pops from a random end, replays the sequence against
/// the grid and either scores it (landed), drops it (pruned) or queues its
/// children (still falling). Ties keep the first landing seen.
pub struct PlacementSearch<R> {
    config: SearchConfig,
    weights: EvalWeights,
    reached: ReachedTable,
    rng: R,
}

impl<R: Rng> PlacementSearch<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, SearchConfig::default(), EvalWeights::default())
    }

    pub fn with_config(rng: R, config: SearchConfig, weights: EvalWeights) -> Self {
        Self {
            config,
            weights,
            reached: ReachedTable::new(),
            rng,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// States recorded so far. Zero between searches.
    pub fn reached_len(&self) -> usize {
        self.reached.len()
    }

    /// Replay `actions` on a copy of `piece` and classify the result.
    ///
    /// Each action is followed by an unchecked one-row fall. The first blocked
    /// action prunes the sequence before anything is recorded. Otherwise the
    /// final state goes into the reached table, and a piece that has fallen
    /// into the stack is lifted back one row, frozen onto a snapshot and
    /// scored.
    pub fn evaluate_sequence(&mut self, grid: &Grid, piece: &Piece, actions: &[Action]) -> SequenceOutcome {
        let trial = match replay(grid, *piece, actions) {
            Ok(trial) => trial,
            Err(_) => return SequenceOutcome::Pruned(PruneReason::Illegal),
        };

        if !self.reached.insert(&trial) {
            return SequenceOutcome::Pruned(PruneReason::Duplicate);
        }

        match landing(grid, &trial) {
            Some(resting) => {
                let (frozen, _) = freeze_snapshot(grid, &resting);
                SequenceOutcome::Landed(evaluate(&frozen, &self.weights))
            }
            None => SequenceOutcome::InProgress,
        }
    }

    pub fn search(&mut self, grid: &Grid, piece: &Piece) -> SearchReport {
        self.reached.clear();

        let mut stats = SearchStats::default();
        let mut best: Option<Placement> = None;

        let mut frontier: VecDeque<Vec<Action>> = VecDeque::new();
        frontier.push_front(vec![Action::LeftDouble]);
        frontier.push_front(vec![Action::RightDouble]);

        loop {
            let popped = if self.rng.gen_bool(0.5) {
                frontier.pop_front()
            } else {
                frontier.pop_back()
            };
            let Some(actions) = popped else { break };

            stats.evaluated += 1;
            let outcome = self.evaluate_sequence(grid, piece, &actions);

            // length is checked after evaluation, so an over-long sequence
            // still marks its state as reached
            let outcome = if !outcome.is_pruned() && actions.len() > self.config.max_actions {
                SequenceOutcome::Pruned(PruneReason::TooLong)
            } else {
                outcome
            };

            match outcome {
                SequenceOutcome::Pruned(reason) => stats.record_prune(reason),
                SequenceOutcome::Landed(score) => {
                    stats.landed += 1;
                    if best.as_ref().map_or(true, |b| score > b.score) {
                        best = Some(Placement { actions, score });
                    }
                }
                SequenceOutcome::InProgress => {
                    stats.expanded += 1;
                    self.expand(&mut frontier, &actions);
                }
            }
        }

        self.reached.clear();

        match &best {
            Some(placement) => debug!(
                "{:?}: best {} ({} evaluated, {} landed, {} pruned) {}",
                piece.kind,
                placement.score,
                stats.evaluated,
                stats.landed,
                stats.pruned(),
                format_sequence(&placement.actions)
            ),
            None => debug!("{:?}: no landing after {} sequences", piece.kind, stats.evaluated),
        }

        SearchReport { best, stats }
    }

    /// Best action sequence, empty if nothing landed.
    pub fn compute_best_sequence(&mut self, grid: &Grid, piece: &Piece) -> Vec<Action> {
        self.search(grid, piece)
            .best
            .map(|placement| placement.actions)
            .unwrap_or_default()
    }

    fn expand(&self, frontier: &mut VecDeque<Vec<Action>>, actions: &[Action]) {
        let left_seeded = actions.first() == Some(&Action::LeftDouble);
        let next: &[Action] = if actions.len() < self.config.short_sequence_len {
            if left_seeded {
                &LEFT_SEEDED
            } else {
                &RIGHT_SEEDED
            }
        } else {
            &REFINE
        };

        for &action in next.iter().rev() {
            let mut child = Vec::with_capacity(actions.len() + 1);
            child.extend_from_slice(actions);
            child.push(action);
            if left_seeded {
                frontier.push_back(child);
            } else {
                frontier.push_front(child);
            }
        }
    }
}
