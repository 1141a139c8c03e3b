//! Piece kinds, rotation states and the falling piece itself.

use serde::{Deserialize, Serialize};

/// The seven shapes. Discriminants are the stable shape indices 0-6.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    T = 0,
    I = 1,
    S = 2,
    Z = 3,
    L = 4,
    J = 5,
    O = 6,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    pub fn cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Number of clockwise quarter turns from spawn orientation (0-3).
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }
}

/// Spawn-orientation offsets, indexed by shape.
const BASE_OFFSETS: [[(i8, i8); 4]; 7] = [
    [(0, 0), (0, 1), (-1, 0), (1, 0)],  // T
    [(0, 0), (-1, 0), (1, 0), (2, 0)],  // I
    [(0, 0), (0, 1), (1, 0), (1, -1)],  // S
    [(0, 0), (0, -1), (1, 0), (1, 1)],  // Z
    [(0, 0), (0, 1), (0, -1), (-1, 1)], // L
    [(0, 0), (0, 1), (0, -1), (1, 1)],  // J
    [(0, 0), (0, 1), (1, 0), (1, 1)],   // O
];

/// OFFSETS[kind][rotation]: base offsets turned by (dx, dy) -> (dy, -dx)
/// once per quarter turn. Built at compile time.
const OFFSETS: [[[(i8, i8); 4]; 4]; 7] = {
    let mut table = [[[(0i8, 0i8); 4]; 4]; 7];
    let mut kind = 0;
    while kind < 7 {
        let mut rot = 0;
        while rot < 4 {
            let mut cell = 0;
            while cell < 4 {
                let (mut dx, mut dy) = BASE_OFFSETS[kind][cell];
                let mut turn = 0;
                while turn < rot {
                    let tmp = dx;
                    dx = dy;
                    dy = -tmp;
                    turn += 1;
                }
                table[kind][rot][cell] = (dx, dy);
                cell += 1;
            }
            rot += 1;
        }
        kind += 1;
    }
    table
};

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Cell offsets relative to the piece position at the given rotation.
    #[inline(always)]
    pub fn offsets(self, rotation: Rotation) -> [(i8, i8); 4] {
        OFFSETS[self.index()][rotation.index()]
    }

    pub fn symbol(self) -> char {
        match self {
            PieceKind::T => 'T',
            PieceKind::I => 'I',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::O => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.symbol() == symbol.to_ascii_uppercase())
    }
}

/// The falling piece: shape plus discrete position and rotation.
///
/// A plain value; the search works on copies and never needs to rewind.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub col: i8,
    pub row: i8,
    pub rotation: Rotation,
}

impl Piece {
    pub const SPAWN_COL: i8 = 6;
    pub const SPAWN_ROW: i8 = 19;

    pub fn new(kind: PieceKind, col: i8, row: i8, rotation: Rotation) -> Self {
        Self {
            kind,
            col,
            row,
            rotation,
        }
    }

    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, Self::SPAWN_COL, Self::SPAWN_ROW, Rotation::North)
    }

    /// Absolute grid coordinates of the four cells.
    #[inline]
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = self.kind.offsets(self.rotation);
        for cell in &mut cells {
            cell.0 += self.col;
            cell.1 += self.row;
        }
        cells
    }

    pub fn shifted(self, dcol: i8, drow: i8) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
            ..self
        }
    }
}
