//! cascade core crate - grid, pieces and actions shared by every other crate.

mod action;
mod grid;
mod piece;
mod surface;

pub use action::{format_sequence, Action};
pub use grid::{Cell, Grid, GridError};
pub use piece::{Piece, PieceKind, Rotation};
pub use surface::Surface;
