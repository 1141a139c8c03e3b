use log::info;
use serde::Serialize;

use cascade_engine::GravityConfig;

use crate::config::MatchConfig;
use crate::controller::Controller;
use crate::game::{Game, GameStats, StepReport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MatchResult {
    Winner(Side),
    /// Both topped out on the same frame, or time ran out.
    Draw,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub seed: u64,
    pub result: MatchResult,
    pub frames: u64,
    pub left: GameStats,
    pub right: GameStats,
}

/// Two games on a shared frame clock. Gravity frames step both sides, the
/// frames in between let each side apply its queued commands. Rows cleared
/// by one side arrive as garbage on the other.
pub struct Match<L, R> {
    left: Game<L>,
    right: Game<R>,
    gravity: GravityConfig,
    max_frames: u64,
    frame: u64,
    seed: u64,
}

impl<L: Controller, R: Controller> Match<L, R> {
    /// Both games share the config's attack rules and replan row. Each side's
    /// RNG is derived from `seed`.
    pub fn new(config: &MatchConfig, left: L, right: R, seed: u64) -> Self {
        let left_seed = seed.wrapping_mul(2);
        Self {
            left: game_with(config, left, left_seed),
            right: game_with(config, right, left_seed.wrapping_add(1)),
            gravity: config.gravity.clone(),
            max_frames: config.max_frames,
            frame: 0,
            seed,
        }
    }

    pub fn left(&self) -> &Game<L> {
        &self.left
    }

    pub fn right(&self) -> &Game<R> {
        &self.right
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance one frame. Returns the result once the match is decided.
    pub fn tick(&mut self) -> Option<MatchResult> {
        let (left, right) = if self.gravity.is_step_frame(self.frame) {
            (self.left.step(), self.right.step())
        } else {
            (self.left.update(), self.right.update())
        };
        self.exchange(left, right);
        self.frame += 1;

        match (self.left.is_lost(), self.right.is_lost()) {
            (true, true) => Some(MatchResult::Draw),
            (true, false) => Some(MatchResult::Winner(Side::Right)),
            (false, true) => Some(MatchResult::Winner(Side::Left)),
            (false, false) if self.frame >= self.max_frames => Some(MatchResult::Draw),
            (false, false) => None,
        }
    }

    /// Play until decided.
    pub fn run(mut self) -> MatchOutcome {
        let result = loop {
            if let Some(result) = self.tick() {
                break result;
            }
        };

        let outcome = MatchOutcome {
            seed: self.seed,
            result,
            frames: self.frame,
            left: *self.left.stats(),
            right: *self.right.stats(),
        };
        info!(
            "match {}: {:?} after {} frames (lines {} vs {})",
            outcome.seed, outcome.result, outcome.frames, outcome.left.lines, outcome.right.lines
        );
        outcome
    }

    fn exchange(&mut self, left: StepReport, right: StepReport) {
        self.right.receive_garbage(left.garbage_out);
        self.left.receive_garbage(right.garbage_out);
    }
}

fn game_with<C: Controller>(config: &MatchConfig, controller: C, seed: u64) -> Game<C> {
    Game::new(controller, seed)
        .with_attack(config.attack.clone())
        .with_replan_row(config.replan_row)
}
