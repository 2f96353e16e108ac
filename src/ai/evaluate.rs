use crate::game::{Board, Cell, Player, COLS, ROWS};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

const CENTER_COL: usize = COLS / 2;
const CENTER_WEIGHT: i32 = 3;

/// Score a single window of four cells for `player`.
///
/// The opponent's open three is penalised on top of whatever the player's
/// own pieces earn.
pub fn score_window(window: [Cell; 4], player: Player) -> i32 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();

    let own = window.iter().filter(|&&c| c == own_cell).count();
    let opp = window.iter().filter(|&&c| c == opp_cell).count();
    let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

    let mut score = match (own, empty) {
        (4, _) => 100,
        (3, 1) => 5,
        (2, 2) => 2,
        _ => 0,
    };
    if opp == 3 && empty == 1 {
        score -= 4;
    }
    score
}

/// Heuristic value of `board` for `player`: every window of four in all four
/// directions, plus a bonus per piece in the centre column.
pub fn score_position(board: &Board, player: Player) -> i32 {
    let own_cell = player.to_cell();
    let mut score = 0;

    // Center column bonus (these cells are counted again in the windows)
    let center_count = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == own_cell)
        .count() as i32;
    score += center_count * CENTER_WEIGHT;

    // Horizontal
    for row in 0..ROWS {
        for col in 0..COLS - 3 {
            let window = std::array::from_fn(|i| board.get(row, col + i));
            score += score_window(window, player);
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..ROWS - 3 {
            let window = std::array::from_fn(|i| board.get(row + i, col));
            score += score_window(window, player);
        }
    }

    // Diagonal (bottom-left to top-right)
    for row in 0..ROWS - 3 {
        for col in 0..COLS - 3 {
            let window = std::array::from_fn(|i| board.get(row + i, col + i));
            score += score_window(window, player);
        }
    }

    // Diagonal (top-left to bottom-right)
    for row in 0..ROWS - 3 {
        for col in 0..COLS - 3 {
            let window = std::array::from_fn(|i| board.get(row + 3 - i, col + i));
            score += score_window(window, player);
        }
    }

    score
}

/// Default heuristic: window scoring with a centre-column bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        i64::from(score_position(board, player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Cell = Cell::PlayerTwo;
    const O: Cell = Cell::PlayerOne;
    const E: Cell = Cell::Empty;

    #[test]
    fn window_scores() {
        assert_eq!(score_window([P, P, P, P], Player::Two), 100);
        assert_eq!(score_window([P, P, P, E], Player::Two), 5);
        assert_eq!(score_window([E, P, P, P], Player::Two), 5);
        assert_eq!(score_window([P, P, E, E], Player::Two), 2);
        assert_eq!(score_window([P, E, P, E], Player::Two), 2);
        assert_eq!(score_window([O, O, O, E], Player::Two), -4);
        assert_eq!(score_window([E, E, E, E], Player::Two), 0);
    }

    #[test]
    fn mixed_windows_score_zero() {
        assert_eq!(score_window([P, P, O, E], Player::Two), 0);
        assert_eq!(score_window([O, O, O, P], Player::Two), 0);
        assert_eq!(score_window([P, E, E, E], Player::Two), 0);
        assert_eq!(score_window([O, O, E, E], Player::Two), 0);
    }

    #[test]
    fn window_score_is_relative_to_player() {
        assert_eq!(score_window([O, O, O, E], Player::One), 5);
        assert_eq!(score_window([P, P, P, E], Player::One), -4);
    }

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(score_position(&board, Player::One), 0);
        assert_eq!(score_position(&board, Player::Two), 0);
    }

    #[test]
    fn centre_piece_scores_bonus_only() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::PlayerTwo).unwrap();
        // A lone piece fills no scoring window.
        assert_eq!(score_position(&board, Player::Two), 3);
        assert_eq!(score_position(&board, Player::One), 0);
    }

    #[test]
    fn centre_pieces_count_in_windows_and_bonus() {
        let mut board = Board::new();
        board.drop_piece(2, Cell::PlayerOne).unwrap();
        board.drop_piece(3, Cell::PlayerOne).unwrap();
        // Three bottom-row windows hold both pieces (3 * 2), plus 3 for (0,3).
        assert_eq!(score_position(&board, Player::One), 9);

        let mut stacked = Board::new();
        stacked.drop_piece(3, Cell::PlayerOne).unwrap();
        stacked.drop_piece(3, Cell::PlayerOne).unwrap();
        // One vertical pair window, plus 3 for each centre piece.
        assert_eq!(score_position(&stacked, Player::One), 8);
    }

    #[test]
    fn centre_preference() {
        let mut center = Board::new();
        center.drop_piece(3, Cell::PlayerOne).unwrap();
        let mut edge = Board::new();
        edge.drop_piece(0, Cell::PlayerOne).unwrap();
        assert!(score_position(&center, Player::One) > score_position(&edge, Player::One));
    }

    #[test]
    fn bottom_row_pair() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::PlayerOne).unwrap();
        board.drop_piece(1, Cell::PlayerOne).unwrap();
        // Only the window starting at column 0 holds both pieces with two gaps.
        assert_eq!(score_position(&board, Player::One), 2);
    }

    #[test]
    fn three_in_a_row_scores_and_penalises() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::PlayerOne).unwrap();
        }
        // windows [0..4): 3 own + empty => 5; [1..5): 2 own + 2 empty => 2
        assert_eq!(score_position(&board, Player::One), 7);
        assert_eq!(score_position(&board, Player::Two), -4);
    }

    #[test]
    fn heuristic_trait_matches_free_function() {
        let board = Board::from_moves(&[3, 3, 2, 4, 3], Player::One).unwrap();
        let h = WindowHeuristic;
        for player in [Player::One, Player::Two] {
            assert_eq!(
                h.evaluate(&board, player),
                i64::from(score_position(&board, player))
            );
        }
    }
}
