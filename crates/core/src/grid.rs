//! board representation - walled 12x21 cell grid, y grows upward
//! columns 0 and 11 plus row 0 are wall sentinels, the rest is playable

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::PieceKind;

/// Contents of one grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Block(PieceKind),
    Garbage,
}

impl Cell {
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline(always)]
    pub fn is_occupied(self) -> bool {
        !self.is_empty()
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => '|',
            Cell::Garbage => '#',
            Cell::Block(kind) => kind.symbol(),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | ' ' => Some(Cell::Empty),
            '#' | 'G' | 'g' => Some(Cell::Garbage),
            other => PieceKind::from_symbol(other).map(Cell::Block),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({col}, {row}) is outside the grid")]
    OutOfBounds { col: i8, row: i8 },
    #[error("cell ({col}, {row}) is a wall and cannot change")]
    WallCell { col: i8, row: i8 },
    #[error("walls cannot be placed inside the playfield at ({col}, {row})")]
    InteriorWall { col: i8, row: i8 },
    #[error("board text has {got} rows, at most {max} fit")]
    TooManyRows { got: usize, max: usize },
    #[error("board text row {line} has {got} columns, expected {expected}")]
    RowWidth {
        line: usize,
        got: usize,
        expected: usize,
    },
    #[error("unknown cell symbol {symbol:?} on board text row {line}")]
    UnknownSymbol { line: usize, symbol: char },
}

/// The playfield. Column-major storage, `cells[col][row]`.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Grid {
    cells: [[Cell; Grid::HEIGHT]; Grid::WIDTH],
}

impl Grid {
    pub const WIDTH: usize = 12;
    pub const HEIGHT: usize = 21;
    pub const FIRST_COL: usize = 1;
    pub const LAST_COL: usize = 10;
    pub const FLOOR_ROW: usize = 0;
    pub const FIRST_ROW: usize = 1;
    pub const TOP_ROW: usize = 20;
    pub const PLAYABLE_WIDTH: usize = 10;
    pub const PLAYABLE_HEIGHT: usize = 20;

    /// Empty playfield surrounded by walls.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; Self::HEIGHT]; Self::WIDTH];
        for (col, column) in cells.iter_mut().enumerate() {
            for (row, cell) in column.iter_mut().enumerate() {
                if Self::is_wall(col, row) {
                    *cell = Cell::Wall;
                }
            }
        }
        Self { cells }
    }

    #[inline(always)]
    pub fn is_wall(col: usize, row: usize) -> bool {
        col == 0 || col == Self::WIDTH - 1 || row == Self::FLOOR_ROW
    }

    #[inline(always)]
    fn in_bounds(col: i8, row: i8) -> bool {
        col >= 0 && row >= 0 && (col as usize) < Self::WIDTH && (row as usize) < Self::HEIGHT
    }

    /// Cell at (col, row). Panics outside the grid.
    #[inline(always)]
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[col][row]
    }

    pub fn try_get(&self, col: i8, row: i8) -> Option<Cell> {
        if Self::in_bounds(col, row) {
            Some(self.cells[col as usize][row as usize])
        } else {
            None
        }
    }

    /// Write an interior cell. Walls are immutable.
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> Result<(), GridError> {
        if !Self::in_bounds(col, row) {
            return Err(GridError::OutOfBounds { col, row });
        }
        if Self::is_wall(col as usize, row as usize) {
            return Err(GridError::WallCell { col, row });
        }
        if cell == Cell::Wall {
            return Err(GridError::InteriorWall { col, row });
        }
        self.cells[col as usize][row as usize] = cell;
        Ok(())
    }

    /// Anything outside the grid counts as blocked, including above the top row.
    #[inline(always)]
    pub fn is_blocked(&self, col: i8, row: i8) -> bool {
        match self.try_get(col, row) {
            Some(cell) => cell.is_occupied(),
            None => true,
        }
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        (Self::FIRST_COL..=Self::LAST_COL).all(|col| self.cells[col][row].is_occupied())
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        (Self::FIRST_COL..=Self::LAST_COL).all(|col| self.cells[col][row].is_empty())
    }

    /// Remove full rows, shifting everything above down. Returns rows cleared.
    pub fn clear_lines(&mut self) -> u8 {
        let mut cleared = 0u8;
        let mut row = Self::FIRST_ROW;
        while row <= Self::TOP_ROW {
            if self.is_row_full(row) {
                for col in Self::FIRST_COL..=Self::LAST_COL {
                    let column = &mut self.cells[col];
                    column.copy_within(row + 1..=Self::TOP_ROW, row);
                    column[Self::TOP_ROW] = Cell::Empty;
                }
                cleared += 1;
            } else {
                row += 1;
            }
        }
        cleared
    }

    /// Push the whole stack up by `rows`; whatever leaves the top is lost and
    /// the vacated bottom rows are left empty.
    pub fn raise(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        for col in Self::FIRST_COL..=Self::LAST_COL {
            let column = &mut self.cells[col];
            if rows < Self::PLAYABLE_HEIGHT {
                column.copy_within(Self::FIRST_ROW..=Self::TOP_ROW - rows, Self::FIRST_ROW + rows);
            }
            let fill_to = (Self::FIRST_ROW + rows).min(Self::TOP_ROW + 1);
            for cell in &mut column[Self::FIRST_ROW..fill_to] {
                *cell = Cell::Empty;
            }
        }
    }

    /// Fill an interior row with garbage, leaving column `hole` empty.
    pub fn fill_garbage_row(&mut self, row: usize, hole: usize) {
        debug_assert!((Self::FIRST_ROW..=Self::TOP_ROW).contains(&row), "row {row} is not interior");
        for col in Self::FIRST_COL..=Self::LAST_COL {
            self.cells[col][row] = if col == hole { Cell::Empty } else { Cell::Garbage };
        }
    }

    /// Copy of the current contents, for trial mutations.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    pub fn restore(&mut self, snapshot: &Grid) {
        self.cells = snapshot.cells;
    }

    /// Count of occupied interior cells.
    pub fn occupied(&self) -> usize {
        (Self::FIRST_COL..=Self::LAST_COL)
            .map(|col| {
                (Self::FIRST_ROW..=Self::TOP_ROW)
                    .filter(|&row| self.cells[col][row].is_occupied())
                    .count()
            })
            .sum()
    }

    /// Build a grid from interior rows written top-first; the last line is row 1.
    /// `.` is empty, `#` garbage, piece letters are blocks.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        if rows.len() > Self::PLAYABLE_HEIGHT {
            return Err(GridError::TooManyRows {
                got: rows.len(),
                max: Self::PLAYABLE_HEIGHT,
            });
        }
        let mut grid = Self::new();
        for (line, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().collect();
            if symbols.len() != Self::PLAYABLE_WIDTH {
                return Err(GridError::RowWidth {
                    line,
                    got: symbols.len(),
                    expected: Self::PLAYABLE_WIDTH,
                });
            }
            let row = rows.len() - line;
            for (i, &symbol) in symbols.iter().enumerate() {
                let cell =
                    Cell::from_symbol(symbol).ok_or(GridError::UnknownSymbol { line, symbol })?;
                grid.cells[Self::FIRST_COL + i][row] = cell;
            }
        }
        Ok(grid)
    }

    /// Interior rows top-first, in the `from_rows` text format.
    pub fn to_rows(&self) -> Vec<String> {
        (Self::FIRST_ROW..=Self::TOP_ROW)
            .rev()
            .map(|row| {
                (Self::FIRST_COL..=Self::LAST_COL)
                    .map(|col| self.cells[col][row].symbol())
                    .collect()
            })
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<String> = Vec::deserialize(deserializer)?;
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        Grid::from_rows(&refs).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..Self::HEIGHT).rev() {
            for col in 0..Self::WIDTH {
                write!(f, "{}", self.cells[col][row].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
