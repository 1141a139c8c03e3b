//! Where a game's moves come from.
//!
//! A game asks its controller for one action per gravity tick and for any
//! commands between ticks. The search-backed controller plans a whole
//! placement at once and replays it; the manual controller forwards whatever
//! an input layer queued.

use std::collections::VecDeque;

use rand::Rng;

use cascade_core::{Action, Grid, Piece};
use cascade_search::PlacementSearch;

/// Input applied between gravity ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    /// One gravity step right away.
    SoftDrop,
    /// Step until the piece locks.
    HardDrop,
}

pub trait Controller {
    /// The board or piece changed in a way that invalidates any plan.
    fn replan(&mut self, grid: &Grid, piece: &Piece);

    /// Action to apply before this tick's fall.
    fn tick_action(&mut self) -> Action;

    /// Commands to apply on a frame between ticks.
    fn frame_commands(&mut self) -> Vec<Command>;
}

/// Commands fed in from outside. Applied on the next non-tick frame.
#[derive(Debug, Default)]
pub struct ManualController {
    pending: VecDeque<Command>,
}

impl ManualController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Controller for ManualController {
    fn replan(&mut self, _grid: &Grid, _piece: &Piece) {}

    fn tick_action(&mut self) -> Action {
        Action::None
    }

    fn frame_commands(&mut self) -> Vec<Command> {
        self.pending.drain(..).collect()
    }
}

/// Plays the best sequence the placement search finds, one action per tick.
pub struct SearchController<R> {
    search: PlacementSearch<R>,
    plan: VecDeque<Action>,
}

impl<R: Rng> SearchController<R> {
    pub fn new(search: PlacementSearch<R>) -> Self {
        Self {
            search,
            plan: VecDeque::new(),
        }
    }

    /// Actions still queued from the last plan.
    pub fn plan(&self) -> &VecDeque<Action> {
        &self.plan
    }
}

impl<R: Rng> Controller for SearchController<R> {
    fn replan(&mut self, grid: &Grid, piece: &Piece) {
        self.plan = self.search.compute_best_sequence(grid, piece).into();
    }

    fn tick_action(&mut self) -> Action {
        // an empty plan means nothing landed; keep falling
        self.plan.pop_front().unwrap_or_default()
    }

    fn frame_commands(&mut self) -> Vec<Command> {
        Vec::new()
    }
}
