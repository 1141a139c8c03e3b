//! Gravity configuration for the tick loop.
//!
//! The game loop runs in frames; every `frames_per_step` frames the piece
//! falls one row (a gravity tick), the frames in between poll input.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravityConfig {
    /// Frames between gravity ticks (must be non-zero)
    pub frames_per_step: u32,
}

impl GravityConfig {
    /// One row every 20 frames.
    pub fn classic() -> Self {
        Self { frames_per_step: 20 }
    }

    /// Every frame is a gravity tick. Handy for headless simulation.
    pub fn instant() -> Self {
        Self { frames_per_step: 1 }
    }

    pub fn is_step_frame(&self, frame: u64) -> bool {
        self.frames_per_step != 0 && frame % self.frames_per_step as u64 == 0
    }
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_steps_every_twenty() {
        let config = GravityConfig::classic();
        assert!(config.is_step_frame(20));
        assert!(config.is_step_frame(40));
        assert!(!config.is_step_frame(21));
    }

    #[test]
    fn test_instant_steps_every_frame() {
        let config = GravityConfig::instant();
        assert!((1..10).all(|frame| config.is_step_frame(frame)));
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(GravityConfig::default(), GravityConfig::classic());
    }
}
