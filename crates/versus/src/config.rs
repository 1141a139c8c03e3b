use serde::{Deserialize, Serialize};
use thiserror::Error;

use cascade_core::Grid;
use cascade_engine::{AttackConfig, GravityConfig};
use cascade_eval::EvalWeights;
use cascade_search::SearchConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed match config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("frames_per_step must be at least 1")]
    ZeroGravity,
    #[error("max_frames must be at least 1")]
    ZeroFrames,
    #[error("max_actions must be at least 1")]
    ZeroActions,
    #[error("replan row {0} is outside rows 1..=20")]
    ReplanRow(i8),
}

/// Everything one match needs. Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub gravity: GravityConfig,
    pub attack: AttackConfig,
    pub search: SearchConfig,
    pub eval: EvalWeights,
    /// Frames before a match is called a draw.
    pub max_frames: u64,
    /// The agent replans whenever its piece sits on this row.
    pub replan_row: i8,
}

impl MatchConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity.frames_per_step == 0 {
            return Err(ConfigError::ZeroGravity);
        }
        if self.max_frames == 0 {
            return Err(ConfigError::ZeroFrames);
        }
        if self.search.max_actions == 0 {
            return Err(ConfigError::ZeroActions);
        }
        let rows = Grid::FIRST_ROW as i8..=Grid::TOP_ROW as i8;
        if !rows.contains(&self.replan_row) {
            return Err(ConfigError::ReplanRow(self.replan_row));
        }
        Ok(())
    }

    /// One gravity tick per frame, for headless runs.
    pub fn headless() -> Self {
        Self {
            gravity: GravityConfig::instant(),
            ..Self::default()
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            gravity: GravityConfig::default(),
            attack: AttackConfig::default(),
            search: SearchConfig::default(),
            eval: EvalWeights::default(),
            max_frames: 200_000,
            replan_row: cascade_core::Piece::SPAWN_ROW,
        }
    }
}
