//! Headless batches of matches, one per seed, run on the rayon pool.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

use cascade_search::PlacementSearch;

use crate::config::MatchConfig;
use crate::controller::{ManualController, SearchController};
use crate::game::GameStats;
use crate::matchup::{Match, MatchOutcome, MatchResult, Side};

/// Who plays the left side. The right side is always the agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum LeftPlayer {
    #[default]
    Search,
    /// Never moves; pieces drop where they spawn.
    Idle,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub matches: usize,
    pub left_wins: usize,
    pub right_wins: usize,
    pub draws: usize,
    pub mean_frames: f64,
    pub left: GameStats,
    pub right: GameStats,
    pub outcomes: Vec<MatchOutcome>,
}

impl SimulationSummary {
    pub fn from_outcomes(outcomes: Vec<MatchOutcome>) -> Self {
        let mut summary = SimulationSummary {
            matches: outcomes.len(),
            ..SimulationSummary::default()
        };
        let mut frames = 0u64;
        for outcome in &outcomes {
            match outcome.result {
                MatchResult::Winner(Side::Left) => summary.left_wins += 1,
                MatchResult::Winner(Side::Right) => summary.right_wins += 1,
                MatchResult::Draw => summary.draws += 1,
            }
            frames += outcome.frames;
            summary.left.absorb(&outcome.left);
            summary.right.absorb(&outcome.right);
        }
        if !outcomes.is_empty() {
            summary.mean_frames = frames as f64 / outcomes.len() as f64;
        }
        summary.outcomes = outcomes;
        summary
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} matches: left {} / right {} / draw {}, {:.1} frames on average",
            self.matches, self.left_wins, self.right_wins, self.draws, self.mean_frames
        )?;
        for (name, stats) in [("left", &self.left), ("right", &self.right)] {
            writeln!(
                f,
                "  {name:>5}: {} pieces, {} lines, {} rows sent, {} rows received",
                stats.pieces, stats.lines, stats.garbage_sent, stats.garbage_received
            )?;
        }
        Ok(())
    }
}

/// Agent against agent, one match per seed.
pub fn simulate(config: &MatchConfig, seeds: &[u64]) -> SimulationSummary {
    simulate_with(config, seeds, LeftPlayer::Search)
}

pub fn simulate_with(config: &MatchConfig, seeds: &[u64], left: LeftPlayer) -> SimulationSummary {
    let outcomes: Vec<MatchOutcome> = seeds
        .par_iter()
        .map(|&seed| play(config, seed, left))
        .collect();
    SimulationSummary::from_outcomes(outcomes)
}

/// One match. Every RNG involved is derived from `seed`.
pub fn play(config: &MatchConfig, seed: u64, left: LeftPlayer) -> MatchOutcome {
    let right = agent(config, seed.wrapping_mul(2).wrapping_add(1));
    match left {
        LeftPlayer::Search => {
            let left = agent(config, seed.wrapping_mul(2));
            Match::new(config, left, right, seed).run()
        }
        LeftPlayer::Idle => Match::new(config, ManualController::new(), right, seed).run(),
    }
}

fn agent(config: &MatchConfig, seed: u64) -> SearchController<StdRng> {
    SearchController::new(PlacementSearch::with_config(
        StdRng::seed_from_u64(seed),
        config.search,
        config.eval.clone(),
    ))
}
