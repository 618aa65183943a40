//! Winning lines: rows, columns and diagonals.
//!
//! A [`Line`] always carries its three coordinates in natural order
//! (left-to-right for rows and diagonals, top-to-bottom for columns).

use super::types::{Coord, Diagonal, SIZE};
use serde::{Deserialize, Serialize};

/// Which family a line belongs to, with its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row `0..3`.
    Row(usize),
    /// Column `0..3`.
    Column(usize),
    /// One of the diagonals.
    Diagonal(Diagonal),
}

/// A row, column or diagonal of exactly three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    coords: [Coord; SIZE],
}

impl Line {
    /// Row `index`, or `None` if off the board.
    pub fn row(index: usize) -> Option<Self> {
        (index < SIZE).then(|| Self {
            kind: LineKind::Row(index),
            coords: std::array::from_fn(|col| Coord::at(index, col)),
        })
    }

    /// Column `index`, or `None` if off the board.
    pub fn column(index: usize) -> Option<Self> {
        (index < SIZE).then(|| Self {
            kind: LineKind::Column(index),
            coords: std::array::from_fn(|row| Coord::at(row, index)),
        })
    }

    /// The given diagonal.
    pub fn diagonal(which: Diagonal) -> Self {
        let coords = match which {
            Diagonal::Main => std::array::from_fn(|i| Coord::at(i, i)),
            Diagonal::Anti => std::array::from_fn(|i| Coord::at(i, SIZE - 1 - i)),
        };
        Self {
            kind: LineKind::Diagonal(which),
            coords,
        }
    }

    /// All 8 lines: rows, then columns, then main and anti diagonals.
    pub fn all() -> impl Iterator<Item = Line> {
        let rows = (0..SIZE).filter_map(Line::row);
        let columns = (0..SIZE).filter_map(Line::column);
        let diagonals = [Diagonal::Main, Diagonal::Anti].map(Line::diagonal);
        rows.chain(columns).chain(diagonals)
    }

    /// Lines passing through `coord`, in the order win detection checks them:
    /// row, column, main diagonal (if on it), anti-diagonal (if on it).
    pub fn through(coord: Coord) -> impl Iterator<Item = Line> {
        let row = Line::row(coord.row());
        let column = Line::column(coord.col());
        let main = coord
            .on_main_diagonal()
            .then(|| Line::diagonal(Diagonal::Main));
        let anti = coord
            .on_anti_diagonal()
            .then(|| Line::diagonal(Diagonal::Anti));
        [row, column, main, anti].into_iter().flatten()
    }

    /// The family and index of this line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three coordinates in natural order.
    pub fn coords(&self) -> [Coord; SIZE] {
        self.coords
    }

    /// Checks if `coord` lies on this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }
}
