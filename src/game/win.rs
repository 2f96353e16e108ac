//! Four-in-a-row detection over a whole board.

use super::board::{Board, Cell, COLS, ROWS};
use super::Player;

/// Four (row, column) coordinates of a winning line, in scan direction.
pub type WinLine = [(usize, usize); 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player, WinLine),
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player, _) => Some(*player),
            _ => None,
        }
    }
}

/// Scan directions as (row step, column step), in reporting priority.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // ascending diagonal
    (-1, 1), // descending diagonal
];

/// Find the first four-in-a-row of `cell`.
///
/// Directions are tried in the order horizontal, vertical, ascending
/// diagonal, descending diagonal. Within a direction, start cells are
/// visited column by column from the left, bottom row first.
pub fn find_win(board: &Board, cell: Cell) -> Option<WinLine> {
    if cell == Cell::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let (row_start, row_end) = match dr {
            1 => (0, ROWS - 3),
            -1 => (3, ROWS),
            _ => (0, ROWS),
        };
        let col_end = if dc == 1 { COLS - 3 } else { COLS };

        for col in 0..col_end {
            for row in row_start..row_end {
                let line = line_from(row, col, dr, dc);
                if line.iter().all(|&(r, c)| board.get(r, c) == cell) {
                    return Some(line);
                }
            }
        }
    }

    None
}

fn line_from(row: usize, col: usize, dr: isize, dc: isize) -> WinLine {
    let mut line = [(0, 0); 4];
    for (i, slot) in line.iter_mut().enumerate() {
        let step = i as isize;
        *slot = (
            (row as isize + dr * step) as usize,
            (col as isize + dc * step) as usize,
        );
    }
    line
}

/// A board is terminal when either player has four in a row or no column is
/// open.
pub fn is_terminal(board: &Board) -> bool {
    find_win(board, Cell::PlayerOne).is_some()
        || find_win(board, Cell::PlayerTwo).is_some()
        || board.is_full()
}

/// Classify a board. Player one is checked first when both have a line.
pub fn outcome(board: &Board) -> GameOutcome {
    for player in [Player::One, Player::Two] {
        if let Some(line) = find_win(board, player.to_cell()) {
            return GameOutcome::Win(player, line);
        }
    }
    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
