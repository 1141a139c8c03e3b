//! cascade eval crate - board-quality heuristic for frozen grids.

use log::trace;
use serde::{Deserialize, Serialize};

use cascade_core::{Grid, Surface};

/// How surface height feeds into the penalties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeightScaling {
    /// step = |prev - h| * step, top = h * top
    #[default]
    Linear,
    /// step = |prev - h| * h * step, top = h * h * top
    Quadratic,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    pub baseline: i32,
    pub hole: i32,
    pub top: i32,
    pub step: i32,
    pub scaling: HeightScaling,
}

impl EvalWeights {
    /// Same weights with height penalties growing with the square of the height.
    pub fn quadratic() -> Self {
        Self {
            scaling: HeightScaling::Quadratic,
            ..Self::default()
        }
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            baseline: 50_000,
            hole: 30,
            top: 7,
            step: 1,
            scaling: HeightScaling::Linear,
        }
    }
}

/// Per-term view of one evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub heights: [u8; Grid::PLAYABLE_WIDTH],
    pub step_penalty: i32,
    pub top_penalty: i32,
    pub holes: u32,
    pub hole_penalty: i32,
    pub score: i32,
}

pub fn evaluate(grid: &Grid, weights: &EvalWeights) -> i32 {
    breakdown(grid, weights).score
}

pub fn breakdown(grid: &Grid, weights: &EvalWeights) -> EvalBreakdown {
    let surface = Surface::new(grid);
    let heights = *surface.heights();

    // columns left to right, each against its left neighbour; the leftmost
    // compares against height 0
    let mut step_penalty = 0i32;
    let mut top_penalty = 0i32;
    let mut neighbour = 0i32;
    for &h in &heights {
        let h = h as i32;
        let diff = (neighbour - h).abs();
        match weights.scaling {
            HeightScaling::Linear => {
                step_penalty += diff * weights.step;
                top_penalty += h * weights.top;
            }
            HeightScaling::Quadratic => {
                step_penalty += diff * h * weights.step;
                top_penalty += h * h * weights.top;
            }
        }
        neighbour = h;
    }

    let holes = holes_below(grid, &surface);
    trace!("{holes} holes, heights {heights:?}");
    let hole_penalty = holes as i32 * weights.hole;

    EvalBreakdown {
        heights,
        step_penalty,
        top_penalty,
        holes,
        hole_penalty,
        score: weights.baseline - step_penalty - top_penalty - hole_penalty,
    }
}

/// Empty cells strictly below their column's surface height.
pub fn count_holes(grid: &Grid) -> u32 {
    holes_below(grid, &Surface::new(grid))
}

fn holes_below(grid: &Grid, surface: &Surface) -> u32 {
    let mut holes = 0u32;
    for col in Grid::FIRST_COL..=Grid::LAST_COL {
        let top = surface.height(col) as usize;
        for row in Grid::FIRST_ROW..top {
            if grid.get(col, row).is_empty() {
                holes += 1;
            }
        }
    }
    holes
}

/// Surface heights of the ten playable columns, left to right.
pub fn surface_heights(grid: &Grid) -> [u8; Grid::PLAYABLE_WIDTH] {
    *Surface::new(grid).heights()
}
