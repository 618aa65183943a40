//! The 3x3 grid.

use super::line::Line;
use super::types::{Cell, Coord, Diagonal, Mark, SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// Plain storage with derived views. The board does not know whose turn it
/// is and does not refuse to overwrite a cell; [`GameEngine`](crate::GameEngine)
/// is the only writer during play and checks emptiness before calling
/// [`Board::set`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets every cell back to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Gets the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Marks the cell at `coord`.
    #[instrument(skip(self))]
    pub fn set(&mut self, coord: Coord, mark: Mark) {
        self.cells[coord.row()][coord.col()] = Cell::Marked(mark);
    }

    /// Checks if the cell at `coord` is empty.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Row `index`, left to right.
    pub fn row(&self, index: usize) -> Option<[Cell; SIZE]> {
        Line::row(index).map(|line| self.line(&line))
    }

    /// Column `index`, top to bottom.
    pub fn column(&self, index: usize) -> Option<[Cell; SIZE]> {
        Line::column(index).map(|line| self.line(&line))
    }

    /// The given diagonal, left to right.
    pub fn diagonal(&self, which: Diagonal) -> [Cell; SIZE] {
        self.line(&Line::diagonal(which))
    }

    /// Cells along any line.
    pub fn line(&self, line: &Line) -> [Cell; SIZE] {
        line.coords().map(|coord| self.get(coord))
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Marked(mark))
            .count()
    }

    /// All cells with their coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::ALL.into_iter().map(|coord| (coord, self.get(coord)))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let glyphs: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                })
                .collect();
            write!(f, "{}", glyphs.join(" "))?;
            if row + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_new_board_empty() {
        let board = Board::new();
        assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(at(2, 1), Mark::O);
        assert_eq!(board.get(at(2, 1)), Cell::Marked(Mark::O));
        assert!(board.is_empty_at(at(1, 2)));
    }

    #[test]
    fn test_row_and_column_views() {
        let mut board = Board::new();
        board.set(at(0, 0), Mark::X);
        board.set(at(0, 2), Mark::O);
        board.set(at(1, 0), Mark::O);

        assert_eq!(
            board.row(0),
            Some([Cell::Marked(Mark::X), Cell::Empty, Cell::Marked(Mark::O)])
        );
        assert_eq!(
            board.column(0),
            Some([Cell::Marked(Mark::X), Cell::Marked(Mark::O), Cell::Empty])
        );
        assert_eq!(board.row(3), None);
        assert_eq!(board.column(5), None);
    }

    #[test]
    fn test_diagonal_views() {
        let mut board = Board::new();
        board.set(at(0, 0), Mark::X);
        board.set(at(1, 1), Mark::O);
        board.set(at(2, 0), Mark::X);

        assert_eq!(
            board.diagonal(Diagonal::Main),
            [Cell::Marked(Mark::X), Cell::Marked(Mark::O), Cell::Empty]
        );
        assert_eq!(
            board.diagonal(Diagonal::Anti),
            [Cell::Empty, Cell::Marked(Mark::O), Cell::Marked(Mark::X)]
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for (i, coord) in Coord::ALL.into_iter().enumerate() {
            assert!(!board.is_full());
            board.set(coord, if i % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert!(board.is_full());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
    }

    #[test]
    fn test_reset_clears_cells() {
        let mut board = Board::new();
        board.set(at(1, 1), Mark::X);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(at(0, 0), Mark::X);
        board.set(at(1, 1), Mark::O);
        assert_eq!(board.to_string(), "X . .\n. O .\n. . .");
    }
}
