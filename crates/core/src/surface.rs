//! Grid with precomputed surface heights for fast evaluation

use crate::Grid;

/// Surface heights of the ten playable columns.
/// Height is the highest occupied row (rows start at 1), 0 for an empty column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    heights: [u8; Grid::PLAYABLE_WIDTH],
}

impl Surface {
    pub fn new(grid: &Grid) -> Self {
        let mut heights = [0u8; Grid::PLAYABLE_WIDTH];
        for (i, height) in heights.iter_mut().enumerate() {
            *height = Self::compute_height(grid, Grid::FIRST_COL + i);
        }
        Self { heights }
    }

    fn compute_height(grid: &Grid, col: usize) -> u8 {
        for row in (Grid::FIRST_ROW..=Grid::TOP_ROW).rev() {
            if grid.get(col, row).is_occupied() {
                return row as u8;
            }
        }
        0
    }

    /// Height of a grid column (1..=10).
    #[inline(always)]
    pub fn height(&self, col: usize) -> u8 {
        self.heights[col - Grid::FIRST_COL]
    }

    #[inline(always)]
    pub fn heights(&self) -> &[u8; Grid::PLAYABLE_WIDTH] {
        &self.heights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_empty_grid_heights() {
        let surface = Surface::new(&Grid::new());
        for col in 1..=10 {
            assert_eq!(surface.height(col), 0);
        }
    }

    #[test]
    fn test_height_is_row_index() {
        let mut grid = Grid::new();
        grid.set(5, 3, Cell::Garbage).unwrap();
        let surface = Surface::new(&grid);
        assert_eq!(surface.height(5), 3);
        assert_eq!(surface.height(6), 0);
    }

    #[test]
    fn test_alternating_columns() {
        let grid = Grid::from_rows(&[
            ".#.#.#.#.#",
            ".#.#.#.#.#",
            "##########",
        ])
        .unwrap();
        let surface = Surface::new(&grid);
        assert_eq!(surface.heights(), &[1, 3, 1, 3, 1, 3, 1, 3, 1, 3]);
    }
}
