use serde::{Deserialize, Serialize};

/// Limits on the sequences the placement search explores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Longer sequences are dropped after evaluation.
    pub max_actions: usize,
    /// Below this length, children follow the seed's direction only.
    pub short_sequence_len: usize,
}

impl SearchConfig {
    pub fn classic() -> Self {
        Self {
            max_actions: 20,
            short_sequence_len: 4,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::classic()
    }
}
