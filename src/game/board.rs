use std::fmt;

use super::Player;
use crate::error::BoardError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

/// A 6x7 Connect Four grid.
///
/// Row 0 is the bottom row. Pieces stack upward from row 0, so every column
/// is a contiguous run of occupied cells followed by empty ones. The board is
/// `Copy`: search branches take their own copy instead of undoing moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a position by dropping pieces into `moves` in order, alternating
    /// players starting with `first`.
    pub fn from_moves(moves: &[usize], first: Player) -> Result<Self, BoardError> {
        let mut board = Board::new();
        let mut player = first;
        for &col in moves {
            board.drop_piece(col, player.to_cell())?;
            player = player.other();
        }
        Ok(board)
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Read-only view of all rows, bottom row first.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Whether `col` still accepts a piece.
    pub fn is_valid_column(&self, col: usize) -> Result<bool, BoardError> {
        check_column(col)?;
        Ok(self.column_open(col))
    }

    /// Lowest empty row in `col`, or `None` when the column is full.
    pub fn next_open_row(&self, col: usize) -> Result<Option<usize>, BoardError> {
        check_column(col)?;
        Ok((0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty))
    }

    /// Place `cell` at (`row`, `col`) without validation.
    ///
    /// The caller must have obtained `row` from [`Board::next_open_row`].
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(
            row == 0 || self.cells[row - 1][col] != Cell::Empty,
            "piece at ({row}, {col}) would float"
        );
        self.cells[row][col] = cell;
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, BoardError> {
        let row = self
            .next_open_row(col)?
            .ok_or(BoardError::ColumnFull { column: col })?;
        self.place(row, col, cell);
        Ok(row)
    }

    /// Columns that accept a piece, in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.column_open(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.column_open(col))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    fn column_open(&self, col: usize) -> bool {
        self.cells[ROWS - 1][col] == Cell::Empty
    }
}

fn check_column(col: usize) -> Result<(), BoardError> {
    if col >= COLS {
        return Err(BoardError::ColumnOutOfRange { column: col });
    }
    Ok(())
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        write!(f, "0123456")
    }
}
