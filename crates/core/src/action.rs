//! Discrete agent/player actions.

use serde::{Deserialize, Serialize};

/// One tick's worth of input. Doubles are two shifts in one tick, which a
/// player can also do by tapping twice.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    None,
    Left,
    Right,
    LeftDouble,
    RightDouble,
    RotateCw,
}

impl Action {
    /// Column delta of a single shift step, 0 for non-shifts.
    pub fn shift(self) -> i8 {
        match self {
            Action::Left | Action::LeftDouble => -1,
            Action::Right | Action::RightDouble => 1,
            Action::None | Action::RotateCw => 0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Action::None => "-",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
            Action::LeftDouble => "LL",
            Action::RightDouble => "RR",
            Action::RotateCw => "ROT",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Space-separated symbols, e.g. `LL ROT - -`.
pub fn format_sequence(actions: &[Action]) -> String {
    actions
        .iter()
        .map(|a| a.symbol())
        .collect::<Vec<_>>()
        .join(" ")
}
