//! cascade-engine - game rules for the walled grid.
//!
//! Provides the move executor (shifts, rotation nudges, doubles), collision
//! and landing tests, freezing with line clears, garbage, the piece bag and
//! the reached-state table used by the search.

pub mod bag;
pub mod collision;
pub mod config;
pub mod freeze;
pub mod garbage;
pub mod gravity;
pub mod kicks;
pub mod movement;
pub mod tt;

pub use bag::PieceBag;
pub use collision::{can_place, hard_drop_row, overlaps};
pub use config::AttackConfig;
pub use freeze::{freeze, freeze_snapshot};
pub use garbage::inject_garbage;
pub use gravity::GravityConfig;
pub use kicks::get_nudges;
pub use movement::{apply_action, try_drop, try_rotate, try_shift, MoveBlocked};
pub use tt::{fingerprint, ReachedTable};
