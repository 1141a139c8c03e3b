//! cascade search crate - placement search over primitive action sequences.

mod config;
mod outcome;
mod placement;
mod sequence;

pub use config::SearchConfig;
pub use outcome::{PruneReason, SequenceOutcome};
pub use placement::{Placement, PlacementSearch, SearchReport, SearchStats};
pub use sequence::{landing, replay, resolve};
