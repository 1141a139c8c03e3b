//! cascade versus crate - headless two-player game shell.
//!
//! One `Game` type per side, driven by a `Controller`: either a manual
//! command queue or the placement-search agent. `Match` runs two games on a
//! shared frame clock and routes attacks between them; `simulate` runs many
//! matches in parallel.

mod config;
mod controller;
mod game;
mod matchup;
mod sim;

pub use config::{ConfigError, MatchConfig};
pub use controller::{Command, Controller, ManualController, SearchController};
pub use game::{Game, GameStats, StepReport};
pub use matchup::{Match, MatchOutcome, MatchResult, Side};
pub use sim::{play, simulate, simulate_with, LeftPlayer, SimulationSummary};
