use serde::{Deserialize, Serialize};

/// How cleared rows turn into garbage for the opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackConfig {
    /// Fewest rows cleared at once that send anything
    pub min_lines: u8,
    /// Subtracted from the cleared rows to get the rows sent
    pub offset: u8,
}

impl AttackConfig {
    /// Doubles and up send one row fewer than they clear.
    pub fn classic() -> Self {
        Self {
            min_lines: 2,
            offset: 1,
        }
    }

    /// Every clear is sent back in full.
    pub fn mirror() -> Self {
        Self {
            min_lines: 1,
            offset: 0,
        }
    }

    pub fn rows_sent(&self, lines: u8) -> u8 {
        if lines >= self.min_lines.max(1) {
            lines.saturating_sub(self.offset)
        } else {
            0
        }
    }
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self::classic()
    }
}
