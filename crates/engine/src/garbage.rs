//! Incoming garbage: the stack rises and the bottom fills with holed rows.

use rand::Rng;

use cascade_core::Grid;

/// Raise the stack by `rows` and fill the new bottom rows with garbage, each
/// with one empty column chosen at random.
pub fn inject_garbage<R: Rng + ?Sized>(grid: &mut Grid, rows: u8, rng: &mut R) {
    let rows = (rows as usize).min(Grid::PLAYABLE_HEIGHT);
    grid.raise(rows);
    for row in Grid::FIRST_ROW..Grid::FIRST_ROW + rows {
        let hole = rng.gen_range(Grid::FIRST_COL..=Grid::LAST_COL);
        grid.fill_garbage_row(row, hole);
    }
}
